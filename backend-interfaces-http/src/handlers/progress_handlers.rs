use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;

use backend_application::queries::progress_queries;
use backend_application::AppState;
use backend_domain::{EventId, UserId, UserProgress};

use crate::error::HttpError;
use crate::middleware::authorize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressQuery {
    pub user_id: UserId,
    pub event_id: EventId,
}

/// A user with no progress record is a normal outcome, carried as a JSON
/// `null` body rather than an error status.
pub async fn get_event_progress(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ProgressQuery>,
) -> Result<Json<Option<UserProgress>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let progress =
        progress_queries::get_event_progress(&state, query.user_id, query.event_id).await?;
    Ok(Json(progress))
}
