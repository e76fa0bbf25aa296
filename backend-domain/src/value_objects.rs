pub mod claim_kind;
pub mod event_status;
pub mod identifiers;

pub use claim_kind::*;
pub use event_status::*;
pub use identifiers::*;
