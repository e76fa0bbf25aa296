use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::DayCondition;
use crate::value_objects::{EventId, UserId};

/// External capability judging whether a day's unlock requirement is met.
/// Condition semantics (kill counts, playtime, quests) live in a telemetry
/// system behind this port; an evaluator error fails the check-in attempt
/// rather than defaulting either way.
#[async_trait]
pub trait ConditionEvaluator: Send + Sync {
    async fn satisfied(
        &self,
        user_id: UserId,
        event_id: EventId,
        day: u32,
        condition: &DayCondition,
    ) -> anyhow::Result<bool>;
}

/// Injectable time source so command logic is deterministic under test.
pub trait Clock: Send + Sync {
    fn now_utc(&self) -> DateTime<Utc>;
}
