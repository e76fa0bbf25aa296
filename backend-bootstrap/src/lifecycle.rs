use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use backend_application::AppState;
use backend_interfaces_http::build_router;

use crate::context::AppContext;

fn build_router_with_layers(state: AppState) -> Router {
    build_router(state.clone())
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(
            usize::try_from(state.config.max_body_bytes).unwrap_or(usize::MAX),
        ))
        .layer(TimeoutLayer::new(std::time::Duration::from_secs(
            state.config.request_timeout_seconds,
        )))
        .layer(TraceLayer::new_for_http())
}

pub async fn run_standalone(config_path: Option<String>) -> Result<()> {
    let context = AppContext::new(config_path.as_deref()).await?;
    let state = context.state;

    let app = build_router_with_layers(state.clone());
    let addr: std::net::SocketAddr = state.config.bind_addr.parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!("listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate()).expect("sigterm handler");
        sigterm.recv().await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
