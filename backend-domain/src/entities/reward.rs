use serde::{Deserialize, Serialize};

/// One candidate in a slot's weighted reward table. Probabilities within a
/// slot do not have to sum to 1; the selector normalizes against the
/// observed total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardOption {
    pub reward_id: String,
    pub quantity: u32,
    pub probability: f64,
}

impl RewardOption {
    pub fn validate(&self) -> Result<(), String> {
        if self.reward_id.trim().is_empty() {
            return Err("rewardId must not be empty".to_string());
        }
        if self.quantity < 1 {
            return Err("quantity must be at least 1".to_string());
        }
        if !(0.0..=1.0).contains(&self.probability) {
            return Err(format!(
                "probability {} must be within 0.0..=1.0",
                self.probability
            ));
        }
        Ok(())
    }
}

/// Fixed reward granted for checking in on a given day of the streak.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRewardRule {
    pub day: u32,
    pub reward_id: String,
    pub quantity: u32,
}

impl DailyRewardRule {
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=31).contains(&self.day) {
            return Err(format!("day {} must be within 1..=31", self.day));
        }
        if self.reward_id.trim().is_empty() {
            return Err("rewardId must not be empty".to_string());
        }
        if self.quantity < 1 {
            return Err("quantity must be at least 1".to_string());
        }
        Ok(())
    }
}

/// Weighted reward table for one gauge slot (streak level 1..=7).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotRewardRule {
    pub slot: u32,
    pub rewards: Vec<RewardOption>,
}

impl SlotRewardRule {
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=7).contains(&self.slot) {
            return Err(format!("slot {} must be within 1..=7", self.slot));
        }
        if self.rewards.is_empty() {
            return Err(format!("slot {} must define at least one reward", self.slot));
        }
        for reward in &self.rewards {
            reward.validate()?;
        }
        Ok(())
    }
}
