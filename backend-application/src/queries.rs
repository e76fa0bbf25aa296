pub mod claim_log_queries;
pub mod progress_queries;
