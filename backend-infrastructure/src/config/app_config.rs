use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use backend_domain::RuntimeConfig;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub api_token: Option<String>,
    pub events_path: String,
    pub data_dir: String,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
    pub log_page_size_default: usize,
    pub log_page_size_max: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3240".to_string(),
            api_token: None,
            events_path: "./events.json".to_string(),
            data_dir: "./data".to_string(),
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 15,
            log_page_size_default: 10,
            log_page_size_max: 100,
        }
    }
}

impl AppConfig {
    /// Loads configuration from `path_override` if given, otherwise from
    /// `ATTEND_CONFIG`, otherwise `./config.toml`. A missing file falls back
    /// to defaults; env overrides apply in every case.
    pub async fn load(path_override: Option<&str>) -> Result<Self> {
        let path = match path_override {
            Some(path) => path.to_string(),
            None => env::var("ATTEND_CONFIG").unwrap_or_else(|_| "./config.toml".to_string()),
        };
        let file_path = Path::new(&path);
        let base_dir = file_path.parent();
        if !file_path.exists() {
            warn!("config.toml not found, using defaults");
            let mut config = AppConfig::default();
            config.apply_env_overrides();
            config.resolve_paths(base_dir);
            config.normalize();
            config.validate()?;
            return Ok(config);
        }
        let content = fs::read_to_string(file_path).await?;
        let mut config: AppConfig = toml::from_str(&content)?;
        config.apply_env_overrides();
        config.resolve_paths(base_dir);
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn normalize(&mut self) {
        if let Some(api_token) = &self.api_token {
            if api_token.trim().is_empty() {
                self.api_token = None;
            }
        }
    }

    fn resolve_paths(&mut self, base_dir: Option<&Path>) {
        let Some(base) = base_dir else {
            return;
        };
        self.events_path = resolve_path(base, &self.events_path);
        self.data_dir = resolve_path(base, &self.data_dir);
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        if self.events_path.trim().is_empty() {
            return Err(anyhow!("events_path must not be empty"));
        }
        if self.data_dir.trim().is_empty() {
            return Err(anyhow!("data_dir must not be empty"));
        }
        if self.max_body_bytes == 0 {
            return Err(anyhow!("max_body_bytes must be greater than 0"));
        }
        if self.log_page_size_default == 0 || self.log_page_size_max == 0 {
            return Err(anyhow!("log page sizes must be greater than 0"));
        }
        if self.log_page_size_default > self.log_page_size_max {
            return Err(anyhow!(
                "log_page_size_default must not exceed log_page_size_max"
            ));
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            api_token: self.api_token.clone(),
            events_path: self.events_path.clone(),
            data_dir: self.data_dir.clone(),
            max_body_bytes: self.max_body_bytes,
            request_timeout_seconds: self.request_timeout_seconds,
            log_page_size_default: self.log_page_size_default,
            log_page_size_max: self.log_page_size_max,
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("ATTEND_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Ok(value) = env::var("ATTEND_API_TOKEN") {
            self.api_token = Some(value);
        }
        if let Ok(value) = env::var("ATTEND_EVENTS_PATH") {
            self.events_path = value;
        }
        if let Ok(value) = env::var("ATTEND_DATA_DIR") {
            self.data_dir = value;
        }
        if let Ok(value) = env::var("ATTEND_MAX_BODY_BYTES") {
            self.max_body_bytes = value.parse().unwrap_or(self.max_body_bytes);
        }
        if let Ok(value) = env::var("ATTEND_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().unwrap_or(self.request_timeout_seconds);
        }
        if let Ok(value) = env::var("ATTEND_LOG_PAGE_SIZE_DEFAULT") {
            self.log_page_size_default = value.parse().unwrap_or(self.log_page_size_default);
        }
        if let Ok(value) = env::var("ATTEND_LOG_PAGE_SIZE_MAX") {
            self.log_page_size_max = value.parse().unwrap_or(self.log_page_size_max);
        }
    }
}

fn resolve_path(base: &Path, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return trimmed.to_string();
    }
    let path = Path::new(trimmed);
    if path.is_absolute() {
        trimmed.to_string()
    } else {
        base.join(path).to_string_lossy().to_string()
    }
}
