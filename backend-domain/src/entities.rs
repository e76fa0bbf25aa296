pub mod claim_log;
pub mod config;
pub mod event_definition;
pub mod reward;
pub mod user_progress;

pub use claim_log::*;
pub use config::*;
pub use event_definition::*;
pub use reward::*;
pub use user_progress::*;
