pub mod reward_selector;
pub mod week_window;

pub use reward_selector::*;
pub use week_window::*;
