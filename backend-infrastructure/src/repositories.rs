pub mod event_files;
pub mod state_files;

pub use event_files::*;
pub use state_files::*;
