use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::info;

use backend_domain::ports::EventDefinitionRepository;
use backend_domain::{EventDefinition, EventId};

/// Event definitions backed by a single JSON file. The file is read once at
/// startup and rewritten in full on every save; lookups are served from the
/// in-memory cache.
pub struct EventFileRepository {
    path: PathBuf,
    cache: RwLock<HashMap<EventId, EventDefinition>>,
}

impl EventFileRepository {
    pub async fn open(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        let mut cache = HashMap::new();
        if path.exists() {
            let content = fs::read_to_string(&path).await?;
            let events: Vec<EventDefinition> = serde_json::from_str(&content)?;
            for event in events {
                cache.insert(event.id, event);
            }
        }
        info!(path = %path.display(), events = cache.len(), "event definitions loaded");
        Ok(Self {
            path,
            cache: RwLock::new(cache),
        })
    }

    async fn persist(&self, cache: &HashMap<EventId, EventDefinition>) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        // Stable ordering keeps the file diffable across rewrites.
        let mut events: Vec<&EventDefinition> = cache.values().collect();
        events.sort_by_key(|event| event.id.0);
        let content = serde_json::to_string_pretty(&events)?;
        fs::write(&self.path, content).await?;
        Ok(())
    }
}

#[async_trait]
impl EventDefinitionRepository for EventFileRepository {
    async fn find_event(&self, event_id: EventId) -> anyhow::Result<Option<EventDefinition>> {
        Ok(self.cache.read().await.get(&event_id).cloned())
    }

    async fn save_event(&self, event: &EventDefinition) -> anyhow::Result<()> {
        let mut cache = self.cache.write().await;
        cache.insert(event.id, event.clone());
        self.persist(&cache).await
    }

    async fn ping(&self) -> anyhow::Result<()> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::metadata(parent).await?;
            }
            _ => {
                fs::metadata(Path::new(".")).await?;
            }
        }
        Ok(())
    }
}
