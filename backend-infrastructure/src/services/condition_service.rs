use async_trait::async_trait;
use tracing::debug;

use backend_domain::ports::ConditionEvaluator;
use backend_domain::{DayCondition, EventId, UserId};

/// Placeholder evaluator used until the telemetry integration lands. It
/// acknowledges every condition as satisfied; the command layer still fails
/// closed on evaluator errors, so swapping in a real implementation changes
/// no call sites.
pub struct StaticConditionEvaluator;

impl StaticConditionEvaluator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StaticConditionEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConditionEvaluator for StaticConditionEvaluator {
    async fn satisfied(
        &self,
        user_id: UserId,
        event_id: EventId,
        day: u32,
        condition: &DayCondition,
    ) -> anyhow::Result<bool> {
        debug!(
            %user_id,
            %event_id,
            day,
            condition = ?condition.condition_type,
            "condition acknowledged by stub evaluator"
        );
        Ok(true)
    }
}
