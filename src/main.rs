// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc, time::Duration};

use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::application::store::DashboardStore;
use crate::application::telemetry_source::TelemetrySource;
use crate::infrastructure::config::{load_config, SourceKind};
use crate::infrastructure::mock_source::MockSource;
use crate::infrastructure::sheet_source::SheetSource;
use crate::infrastructure::{fixtures, poller};
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    acknowledge_alert, get_battery, get_overview, get_reports, get_robot, get_settings,
    health_check, list_alerts, list_insights, list_shelves, list_warehouses, move_robot,
    put_settings, set_camera, start_scan, stop_scan, stream_snapshots,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "astra_dashboard=info,tower_http=info".into()),
        )
        .init();

    // Load configuration
    let config = load_config()?;
    let poll_period = Duration::from_secs(config.source.poll_interval_secs);

    // Seed the store with the demo dataset (application layer state)
    let mut initial = fixtures::demo_state();
    initial.settings = config.defaults.clone().into();
    let store = Arc::new(DashboardStore::new(initial));

    // Create the telemetry source (infrastructure layer)
    let source: Arc<dyn TelemetrySource> = match config.source.kind {
        SourceKind::Mock => Arc::new(MockSource::new()),
        SourceKind::Sheet => {
            let endpoint = config
                .source
                .endpoint
                .clone()
                .context("source.kind = \"sheet\" requires source.endpoint")?;
            Arc::new(SheetSource::new(endpoint))
        }
    };

    // Start the background poll loop
    poller::spawn(store.clone(), source, poll_period);

    // Create application state
    let state = Arc::new(AppState::new(store, poll_period));

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/api/overview", get(get_overview))
        .route("/api/shelves", get(list_shelves))
        .route("/api/alerts", get(list_alerts))
        .route("/api/alerts/:id/acknowledge", post(acknowledge_alert))
        .route("/api/robot", get(get_robot))
        .route("/api/battery", get(get_battery))
        .route("/api/reports", get(get_reports))
        .route("/api/insights", get(list_insights))
        .route("/api/warehouses", get(list_warehouses))
        .route("/api/settings", get(get_settings).put(put_settings))
        .route("/api/control/scan/start", post(start_scan))
        .route("/api/control/scan/stop", post(stop_scan))
        .route("/api/control/move", post(move_robot))
        .route("/api/control/camera", post(set_camera))
        .route("/api/stream", get(stream_snapshots))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = config.server.bind_addr.parse()?;
    tracing::info!(%addr, "starting astra-dashboard service");

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
