pub mod condition_service;
pub mod system_clock;

pub use condition_service::*;
pub use system_clock::*;
