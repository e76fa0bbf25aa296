use serde::{Deserialize, Serialize};

/// Lifecycle state of an event definition. Check-ins and claims are only
/// accepted while the event is ACTIVE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    Scheduled,
    Active,
    Ended,
    Inactive,
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            EventStatus::Scheduled => "SCHEDULED",
            EventStatus::Active => "ACTIVE",
            EventStatus::Ended => "ENDED",
            EventStatus::Inactive => "INACTIVE",
        };
        f.write_str(label)
    }
}
