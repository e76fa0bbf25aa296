use async_trait::async_trait;

use crate::entities::{ClaimLogFilter, EventDefinition, RewardClaimLogEntry, UserProgress};
use crate::value_objects::{EventId, UserId};

/// Read/update access to event definitions. The event lifecycle itself is
/// owned by an external event-management service; only the reward tables are
/// written through this port.
#[async_trait]
pub trait EventDefinitionRepository: Send + Sync {
    async fn find_event(&self, event_id: EventId) -> anyhow::Result<Option<EventDefinition>>;
    async fn save_event(&self, event: &EventDefinition) -> anyhow::Result<()>;
    async fn ping(&self) -> anyhow::Result<()>;
}

/// Durable per-(user, event) attendance state.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    async fn find_progress(
        &self,
        user_id: UserId,
        event_id: EventId,
    ) -> anyhow::Result<Option<UserProgress>>;
    async fn upsert_progress(&self, progress: &UserProgress) -> anyhow::Result<()>;
}

/// Append-only claim ledger. Safe under concurrent writers by construction;
/// it records failed attempts as well as grants.
#[async_trait]
pub trait ClaimLogRepository: Send + Sync {
    async fn append_entry(&self, entry: &RewardClaimLogEntry) -> anyhow::Result<()>;

    /// Entries matching `filter`, newest first, plus the unpaged total.
    async fn query_entries(
        &self,
        filter: &ClaimLogFilter,
        offset: usize,
        limit: usize,
    ) -> anyhow::Result<(Vec<RewardClaimLogEntry>, usize)>;
}
