use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;

use backend_application::commands::reward_config_commands;
use backend_application::AppState;
use backend_domain::{DailyRewardRule, EventDefinition, EventId, SlotRewardRule};

use crate::error::HttpError;
use crate::middleware::authorize;

pub async fn set_daily_rewards(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(event_id): Path<i64>,
    Json(payload): Json<Vec<DailyRewardRule>>,
) -> Result<Json<EventDefinition>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let event =
        reward_config_commands::set_daily_rewards(&state, EventId(event_id), payload).await?;
    Ok(Json(event))
}

pub async fn set_slot_rewards(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(event_id): Path<i64>,
    Json(payload): Json<Vec<SlotRewardRule>>,
) -> Result<Json<EventDefinition>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let event =
        reward_config_commands::set_slot_rewards(&state, EventId(event_id), payload).await?;
    Ok(Json(event))
}
