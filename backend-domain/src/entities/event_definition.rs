use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{DailyRewardRule, RewardOption, SlotRewardRule};
use crate::value_objects::{EventId, EventStatus};

/// Kind of unlock requirement attached to a streak day. Measurement lives in
/// an external telemetry system; the core only forwards the condition to the
/// evaluator port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConditionType {
    LoginStreak,
    DailyLoginCount,
    PlaytimeTotal,
    PlaytimeSession,
    LevelAchievement,
    MonsterKillAny,
    MonsterKillSpecific,
    BossKillSpecific,
    ItemCollect,
    QuestCompleteSpecific,
    CustomCondition,
}

/// Per-day unlock condition. Index in `EventDefinition::conditions` is the
/// day number minus one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCondition {
    #[serde(rename = "type")]
    pub condition_type: ConditionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Event metadata plus its reward configuration. Owned by the external
/// event-management service; the core only reads it and updates the two
/// reward tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDefinition {
    pub id: EventId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: EventStatus,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub created_by: String,
    #[serde(default)]
    pub daily_rewards: Vec<DailyRewardRule>,
    #[serde(default)]
    pub conditions: Vec<DayCondition>,
    #[serde(default)]
    pub slot_rewards: Vec<SlotRewardRule>,
}

impl EventDefinition {
    pub fn is_active(&self) -> bool {
        self.status == EventStatus::Active
    }

    /// Unlock condition for a 1-based streak day, if the event defines one.
    pub fn condition_for_day(&self, day: u32) -> Option<&DayCondition> {
        if day == 0 {
            return None;
        }
        self.conditions.get(day as usize - 1)
    }

    /// Fixed daily reward configured for a 1-based streak day.
    pub fn daily_reward_for_day(&self, day: u32) -> Option<&DailyRewardRule> {
        self.daily_rewards.iter().find(|rule| rule.day == day)
    }

    /// Weighted reward table for a gauge slot (streak level).
    pub fn slot_rewards_for(&self, slot: u32) -> Option<&[RewardOption]> {
        self.slot_rewards
            .iter()
            .find(|rule| rule.slot == slot)
            .map(|rule| rule.rewards.as_slice())
    }
}
