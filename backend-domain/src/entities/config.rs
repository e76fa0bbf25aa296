/// Runtime configuration assembled by the infrastructure layer and passed
/// explicitly into `AppState`; no component reads ambient globals.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub api_token: Option<String>,
    pub events_path: String,
    pub data_dir: String,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
    pub log_page_size_default: usize,
    pub log_page_size_max: usize,
}
