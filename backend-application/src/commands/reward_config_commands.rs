use std::collections::HashSet;

use tracing::{error, info};

use backend_domain::{DailyRewardRule, EventDefinition, EventId, SlotRewardRule};

use crate::{AppError, AppState};

/// Replaces an event's daily reward table wholesale. Partial updates are not
/// supported; callers send the full table every time.
pub async fn set_daily_rewards(
    state: &AppState,
    event_id: EventId,
    rules: Vec<DailyRewardRule>,
) -> Result<EventDefinition, AppError> {
    for rule in &rules {
        rule.validate().map_err(AppError::BadRequest)?;
    }
    let mut seen = HashSet::new();
    for rule in &rules {
        if !seen.insert(rule.day) {
            return Err(AppError::BadRequest(format!(
                "duplicate daily reward for day {}",
                rule.day
            )));
        }
    }

    let mut event = find_event(state, event_id).await?;
    event.daily_rewards = rules;
    save_event(state, &event).await?;
    info!(%event_id, rules = event.daily_rewards.len(), "daily reward table replaced");
    Ok(event)
}

/// Replaces an event's weekly slot reward tables wholesale.
pub async fn set_slot_rewards(
    state: &AppState,
    event_id: EventId,
    rules: Vec<SlotRewardRule>,
) -> Result<EventDefinition, AppError> {
    for rule in &rules {
        rule.validate().map_err(AppError::BadRequest)?;
    }
    let mut seen = HashSet::new();
    for rule in &rules {
        if !seen.insert(rule.slot) {
            return Err(AppError::BadRequest(format!(
                "duplicate reward table for slot {}",
                rule.slot
            )));
        }
    }

    let mut event = find_event(state, event_id).await?;
    event.slot_rewards = rules;
    save_event(state, &event).await?;
    info!(%event_id, slots = event.slot_rewards.len(), "slot reward tables replaced");
    Ok(event)
}

async fn find_event(state: &AppState, event_id: EventId) -> Result<EventDefinition, AppError> {
    state
        .event_repo
        .find_event(event_id)
        .await
        .map_err(|err| {
            error!(%event_id, "event lookup failed: {err:#}");
            AppError::Internal(err.context(format!("load event {}", event_id)))
        })?
        .ok_or_else(|| AppError::NotFound(format!("event {} does not exist", event_id)))
}

async fn save_event(state: &AppState, event: &EventDefinition) -> Result<(), AppError> {
    state.event_repo.save_event(event).await.map_err(|err| {
        error!(event_id = %event.id, "event save failed: {err:#}");
        AppError::Internal(err.context(format!("save event {}", event.id)))
    })
}
