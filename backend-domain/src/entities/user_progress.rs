use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::services::week_window::{same_utc_day, start_of_reward_week};
use crate::value_objects::{EventId, UserId};

/// Streak length at which the gauge is full; daily check-ins past this point
/// refresh the check-in date but do not grow the streak.
pub const MAX_STREAK: u32 = 7;

/// Per-(user, event) attendance state for the current reward week. Created
/// lazily on first check-in, mutated only by the claim commands, never
/// deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    pub user_id: UserId,
    pub event_id: EventId,
    pub current_streak: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_checkin_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub claimed_slots: Vec<u32>,
    #[serde(default)]
    pub weekly_reward_claimed: bool,
    pub week_start_date: DateTime<Utc>,
}

impl UserProgress {
    pub fn new(user_id: UserId, event_id: EventId, week_start: DateTime<Utc>) -> Self {
        Self {
            user_id,
            event_id,
            current_streak: 0,
            last_checkin_date: None,
            claimed_slots: Vec::new(),
            weekly_reward_claimed: false,
            week_start_date: week_start,
        }
    }

    /// True when the stored window predates the current one and the record
    /// must be reset (daily path) or rejected (weekly path).
    pub fn is_stale(&self, current_week_start: DateTime<Utc>) -> bool {
        start_of_reward_week(self.week_start_date) < current_week_start
    }

    /// In-place reset for a new reward week. The window start never moves
    /// backward: callers pass the current window, which is later than the
    /// stored one whenever this runs.
    pub fn reset_for_week(&mut self, week_start: DateTime<Utc>) {
        self.current_streak = 0;
        self.claimed_slots.clear();
        self.weekly_reward_claimed = false;
        self.last_checkin_date = None;
        self.week_start_date = week_start;
    }

    pub fn already_checked_in(&self, now: DateTime<Utc>) -> bool {
        self.last_checkin_date
            .map(|last| same_utc_day(last, now))
            .unwrap_or(false)
    }

    /// 1-based day number the next successful check-in counts as.
    pub fn next_day(&self) -> u32 {
        self.current_streak + 1
    }

    pub fn record_checkin(&mut self, now: DateTime<Utc>) {
        if self.current_streak < MAX_STREAK {
            self.current_streak += 1;
        }
        self.last_checkin_date = Some(now);
    }

    /// Marks the weekly reward as taken for the given slot. Kept sorted and
    /// deduped; the `weekly_reward_claimed` flag is the enforced guard.
    pub fn record_weekly_claim(&mut self, slot: u32) {
        self.weekly_reward_claimed = true;
        if !self.claimed_slots.contains(&slot) {
            self.claimed_slots.push(slot);
            self.claimed_slots.sort_unstable();
        }
    }
}
