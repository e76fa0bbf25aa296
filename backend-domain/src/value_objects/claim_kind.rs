use serde::{Deserialize, Serialize};

/// What kind of grant a claim-ledger entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimKind {
    /// Fixed reward for a daily check-in day.
    Daily,
    /// Weighted-random reward for a gauge slot.
    Slot,
    /// Failed attempt; entry carries the no-reward sentinel.
    Fail,
}

impl std::fmt::Display for ClaimKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ClaimKind::Daily => "DAILY",
            ClaimKind::Slot => "SLOT",
            ClaimKind::Fail => "FAIL",
        };
        f.write_str(label)
    }
}
