use tracing::{error, info};

use backend_domain::services::week_window;
use backend_domain::{EventId, UserId, UserProgress};

use crate::{AppError, AppState};

/// Current-week progress for one (user, event) pair. A record left over from
/// a previous reward week is reset and persisted before it is returned, so
/// readers never see a stale streak. Returns `None` when the user has never
/// checked in.
pub async fn get_event_progress(
    state: &AppState,
    user_id: UserId,
    event_id: EventId,
) -> Result<Option<UserProgress>, AppError> {
    let cell = state.progress_locks.cell(user_id, event_id).await;
    let _guard = cell.lock().await;

    let Some(mut progress) = state
        .progress_repo
        .find_progress(user_id, event_id)
        .await
        .map_err(|err| {
            error!(%user_id, %event_id, "progress lookup failed: {err:#}");
            AppError::Internal(err.context(format!(
                "load progress for user {} event {}",
                user_id, event_id
            )))
        })?
    else {
        return Ok(None);
    };

    let week_start = week_window::start_of_reward_week(state.clock.now_utc());
    if progress.is_stale(week_start) {
        info!(%user_id, %event_id, "resetting stale progress on read");
        progress.reset_for_week(week_start);
        state
            .progress_repo
            .upsert_progress(&progress)
            .await
            .map_err(|err| {
                error!(%user_id, %event_id, "progress reset write failed: {err:#}");
                AppError::Internal(err.context(format!(
                    "persist reset progress for user {} event {}",
                    user_id, event_id
                )))
            })?;
    }

    Ok(Some(progress))
}
