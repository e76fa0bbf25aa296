use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{ClaimKind, EventId, UserId};

/// Sentinel reward id recorded on failed claim attempts so the ledger stays
/// append-only and complete.
pub const NO_REWARD_ID: &str = "FAIL_TO_GET_REWARD";

/// One row of the append-only claim ledger. Immutable once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardClaimLogEntry {
    pub user_id: UserId,
    pub event_id: EventId,
    pub reward_id: String,
    pub quantity: u32,
    pub claim_kind: ClaimKind,
    pub succeeded: bool,
    pub created_at: DateTime<Utc>,
}

impl RewardClaimLogEntry {
    pub fn daily(
        user_id: UserId,
        event_id: EventId,
        reward_id: &str,
        quantity: u32,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id,
            event_id,
            reward_id: reward_id.to_string(),
            quantity,
            claim_kind: ClaimKind::Daily,
            succeeded: true,
            created_at,
        }
    }

    pub fn slot(
        user_id: UserId,
        event_id: EventId,
        reward_id: &str,
        quantity: u32,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id,
            event_id,
            reward_id: reward_id.to_string(),
            quantity,
            claim_kind: ClaimKind::Slot,
            succeeded: true,
            created_at,
        }
    }

    pub fn failure(user_id: UserId, event_id: EventId, created_at: DateTime<Utc>) -> Self {
        Self {
            user_id,
            event_id,
            reward_id: NO_REWARD_ID.to_string(),
            quantity: 0,
            claim_kind: ClaimKind::Fail,
            succeeded: false,
            created_at,
        }
    }
}

/// Filter for audit queries over the ledger.
#[derive(Debug, Clone, Default)]
pub struct ClaimLogFilter {
    pub user_id: Option<UserId>,
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
}

impl ClaimLogFilter {
    pub fn matches(&self, entry: &RewardClaimLogEntry) -> bool {
        if let Some(user_id) = self.user_id {
            if entry.user_id != user_id {
                return false;
            }
        }
        if let Some(from) = self.date_from {
            if entry.created_at < from {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if entry.created_at > to {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn failure_entry_uses_no_reward_sentinel() {
        let at = Utc.with_ymd_and_hms(2025, 7, 4, 12, 0, 0).unwrap();
        let entry = RewardClaimLogEntry::failure(UserId(1), EventId(2), at);
        assert_eq!(entry.reward_id, NO_REWARD_ID);
        assert_eq!(entry.quantity, 0);
        assert_eq!(entry.claim_kind, ClaimKind::Fail);
        assert!(!entry.succeeded);
    }

    #[test]
    fn filter_applies_user_and_date_bounds() {
        let at = Utc.with_ymd_and_hms(2025, 7, 4, 12, 0, 0).unwrap();
        let entry = RewardClaimLogEntry::daily(UserId(1), EventId(2), "MESO_1000000", 1, at);

        let mut filter = ClaimLogFilter::default();
        assert!(filter.matches(&entry));

        filter.user_id = Some(UserId(9));
        assert!(!filter.matches(&entry));

        filter.user_id = Some(UserId(1));
        filter.date_from = Some(at + chrono::Duration::hours(1));
        assert!(!filter.matches(&entry));

        filter.date_from = Some(at - chrono::Duration::hours(1));
        filter.date_to = Some(at + chrono::Duration::hours(1));
        assert!(filter.matches(&entry));
    }
}
