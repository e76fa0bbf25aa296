use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::Json;

use backend_application::dtos::{ClaimLogPage, ClaimLogQuery};
use backend_application::queries::claim_log_queries;
use backend_application::AppState;

use crate::error::HttpError;
use crate::middleware::authorize;

pub async fn list_claim_logs(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ClaimLogQuery>,
) -> Result<Json<ClaimLogPage>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let page = claim_log_queries::list_claim_logs(&state, query).await?;
    Ok(Json(page))
}
