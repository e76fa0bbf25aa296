use axum::http::HeaderMap;

use backend_domain::RuntimeConfig;

/// Bearer-token check against the configured API token. With no token
/// configured the deployment is open (private-network setups).
pub fn authorize(config: &RuntimeConfig, headers: &HeaderMap) -> bool {
    if let Some(api_token) = &config.api_token {
        return extract_bearer(headers)
            .map(|v| v == *api_token)
            .unwrap_or(false);
    }
    true
}

fn extract_bearer(headers: &HeaderMap) -> Option<String> {
    let value = headers.get("Authorization")?.to_str().ok()?.trim();
    let prefix = "Bearer ";
    if !value.starts_with(prefix) {
        return None;
    }
    let token = value[prefix.len()..].trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}
