// Backend Application Layer

pub mod commands;
pub mod dtos;
pub mod error;
pub mod metrics;
pub mod queries;
pub mod state;
pub mod sync;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::AppError;
pub use metrics::Metrics;
pub use state::AppState;
pub use sync::ProgressLocks;
