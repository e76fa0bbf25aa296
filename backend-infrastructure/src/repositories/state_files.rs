use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::info;

use backend_domain::ports::{ClaimLogRepository, ProgressRepository};
use backend_domain::{ClaimLogFilter, EventId, RewardClaimLogEntry, UserId, UserProgress};

const PROGRESS_FILE: &str = "progress.json";
const CLAIM_LOG_FILE: &str = "claim_log.json";

/// Progress records and the claim ledger, backed by two JSON files under the
/// data directory. State is held in memory and each mutation rewrites the
/// owning file in full; claim entries are append-only and never rewritten
/// individually.
pub struct FileStateRepository {
    data_dir: PathBuf,
    progress: RwLock<HashMap<(UserId, EventId), UserProgress>>,
    entries: RwLock<Vec<RewardClaimLogEntry>>,
}

impl FileStateRepository {
    pub async fn open(data_dir: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir).await?;

        let progress_records: Vec<UserProgress> =
            read_json_or_default(&data_dir.join(PROGRESS_FILE)).await?;
        let progress = progress_records
            .into_iter()
            .map(|record| ((record.user_id, record.event_id), record))
            .collect::<HashMap<_, _>>();
        let entries: Vec<RewardClaimLogEntry> =
            read_json_or_default(&data_dir.join(CLAIM_LOG_FILE)).await?;

        info!(
            data_dir = %data_dir.display(),
            progress_records = progress.len(),
            ledger_entries = entries.len(),
            "attendance state loaded"
        );
        Ok(Self {
            data_dir,
            progress: RwLock::new(progress),
            entries: RwLock::new(entries),
        })
    }

    async fn persist_progress(
        &self,
        progress: &HashMap<(UserId, EventId), UserProgress>,
    ) -> anyhow::Result<()> {
        let mut records: Vec<&UserProgress> = progress.values().collect();
        records.sort_by_key(|record| (record.user_id.0, record.event_id.0));
        let content = serde_json::to_string_pretty(&records)?;
        fs::write(self.data_dir.join(PROGRESS_FILE), content).await?;
        Ok(())
    }

    async fn persist_entries(&self, entries: &[RewardClaimLogEntry]) -> anyhow::Result<()> {
        let content = serde_json::to_string(entries)?;
        fs::write(self.data_dir.join(CLAIM_LOG_FILE), content).await?;
        Ok(())
    }
}

async fn read_json_or_default<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&content)?)
}

#[async_trait]
impl ProgressRepository for FileStateRepository {
    async fn find_progress(
        &self,
        user_id: UserId,
        event_id: EventId,
    ) -> anyhow::Result<Option<UserProgress>> {
        Ok(self.progress.read().await.get(&(user_id, event_id)).cloned())
    }

    async fn upsert_progress(&self, record: &UserProgress) -> anyhow::Result<()> {
        let mut progress = self.progress.write().await;
        progress.insert((record.user_id, record.event_id), record.clone());
        self.persist_progress(&progress).await
    }
}

#[async_trait]
impl ClaimLogRepository for FileStateRepository {
    async fn append_entry(&self, entry: &RewardClaimLogEntry) -> anyhow::Result<()> {
        let mut entries = self.entries.write().await;
        entries.push(entry.clone());
        self.persist_entries(&entries).await
    }

    async fn query_entries(
        &self,
        filter: &ClaimLogFilter,
        offset: usize,
        limit: usize,
    ) -> anyhow::Result<(Vec<RewardClaimLogEntry>, usize)> {
        let entries = self.entries.read().await;
        let mut matched: Vec<RewardClaimLogEntry> = entries
            .iter()
            .filter(|entry| filter.matches(entry))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let total = matched.len();
        let page = matched.into_iter().skip(offset).take(limit).collect();
        Ok((page, total))
    }
}
