use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;

use backend_application::commands::checkin_commands;
use backend_application::dtos::{ClaimRequest, DailyCheckInResponse, WeeklyClaimResponse};
use backend_application::AppState;

use crate::error::HttpError;
use crate::middleware::authorize;

pub async fn daily_check_in(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ClaimRequest>,
) -> Result<Json<DailyCheckInResponse>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let response = checkin_commands::daily_check_in(&state, payload).await?;
    Ok(Json(response))
}

pub async fn weekly_claim(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ClaimRequest>,
) -> Result<Json<WeeklyClaimResponse>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let response = checkin_commands::weekly_claim(&state, payload).await?;
    Ok(Json(response))
}
