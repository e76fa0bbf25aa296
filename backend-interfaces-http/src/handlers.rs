pub mod checkin_handlers;
pub mod log_handlers;
pub mod ops_handlers;
pub mod progress_handlers;
pub mod reward_admin_handlers;

pub use checkin_handlers::*;
pub use log_handlers::*;
pub use ops_handlers::*;
pub use progress_handlers::*;
pub use reward_admin_handlers::*;
