use std::collections::HashMap;
use std::sync::Arc;

use backend_domain::{EventId, UserId};
use tokio::sync::Mutex;

/// Per-(user, event) mutual exclusion for the read-check-mutate-write
/// sections of the claim commands. Without it, two concurrent check-ins for
/// the same key could both pass the duplicate guard before either writes.
/// Guard cells are created on demand and retained for the process lifetime,
/// like the progress records they protect.
#[derive(Default)]
pub struct ProgressLocks {
    cells: Mutex<HashMap<(UserId, EventId), Arc<Mutex<()>>>>,
}

impl ProgressLocks {
    pub async fn cell(&self, user_id: UserId, event_id: EventId) -> Arc<Mutex<()>> {
        let mut cells = self.cells.lock().await;
        cells.entry((user_id, event_id)).or_default().clone()
    }
}
