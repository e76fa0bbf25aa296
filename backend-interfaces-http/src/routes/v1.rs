use axum::Router;

use backend_application::AppState;

use crate::handlers::{
    checkin_handlers, log_handlers, ops_handlers, progress_handlers, reward_admin_handlers,
};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/v1/rewards/daily-check",
            axum::routing::post(checkin_handlers::daily_check_in),
        )
        .route(
            "/v1/rewards/weekly-check",
            axum::routing::post(checkin_handlers::weekly_claim),
        )
        .route(
            "/v1/rewards/progress",
            axum::routing::get(progress_handlers::get_event_progress),
        )
        .route(
            "/v1/rewards/claim-logs",
            axum::routing::get(log_handlers::list_claim_logs),
        )
        .route(
            "/v1/events/:event_id/rewards/daily",
            axum::routing::put(reward_admin_handlers::set_daily_rewards),
        )
        .route(
            "/v1/events/:event_id/rewards/weekly",
            axum::routing::put(reward_admin_handlers::set_slot_rewards),
        )
        .route(
            "/v1/ops/health/live",
            axum::routing::get(ops_handlers::health_live),
        )
        .route(
            "/v1/ops/health/ready",
            axum::routing::get(ops_handlers::health_ready),
        )
        .route(
            "/v1/ops/metrics/prometheus",
            axum::routing::get(ops_handlers::metrics_prometheus),
        )
        .with_state(state)
}
