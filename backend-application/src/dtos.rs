use backend_domain::{EventId, RewardClaimLogEntry, UserId};
use serde::{Deserialize, Serialize};

/// Request body shared by both claim operations.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimRequest {
    pub user_id: UserId,
    pub event_id: EventId,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardGrant {
    pub reward_id: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CheckInStatus {
    #[serde(rename = "checked_in")]
    CheckedIn,
    #[serde(rename = "condition_not_met")]
    ConditionNotMet,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyCheckInResponse {
    pub status: CheckInStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_reward: Option<RewardGrant>,
    pub condition_met: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WeeklyClaimStatus {
    #[serde(rename = "gauge_reward_claimed")]
    GaugeRewardClaimed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyClaimResponse {
    pub status: WeeklyClaimStatus,
    pub gauge_reward: RewardGrant,
}

/// Audit-log query as received on the wire. Dates are `YYYY-MM-DD`;
/// `date_to` is inclusive through end of day UTC.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimLogQuery {
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub date_from: Option<String>,
    #[serde(default)]
    pub date_to: Option<String>,
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimLogPage {
    pub logs: Vec<RewardClaimLogEntry>,
    pub total: usize,
    pub current_page: usize,
    pub per_page: usize,
    pub total_pages: usize,
}
