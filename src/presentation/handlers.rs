// HTTP request handlers - one per dashboard section
use crate::application::alert_service::{AlertFilter, AlertsPayload};
use crate::application::control_service::RobotView;
use crate::application::overview_service::OverviewPayload;
use crate::application::report_service::{BatteryPayload, ReportsPayload};
use crate::application::shelf_service::{ShelfFilter, ShelvesPayload};
use crate::application::store::CommandError;
use crate::domain::alert::AlertSeverity;
use crate::domain::insight::AiInsight;
use crate::domain::robot::{CameraArmStatus, MoveDirection, Robot};
use crate::domain::settings::Settings;
use crate::domain::shelf::ShelfStatus;
use crate::domain::warehouse::Warehouse;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::sse::{Event, KeepAlive, Sse},
    response::IntoResponse,
    Json,
};
use futures::stream::Stream;
use futures::StreamExt;
use serde::Deserialize;
use serde_json::json;
use std::convert::Infallible;
use std::sync::Arc;
use tokio_stream::wrappers::IntervalStream;

pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl From<CommandError> for ApiError {
    fn from(err: CommandError) -> Self {
        let status = match err {
            CommandError::UnknownAlert(_) => StatusCode::NOT_FOUND,
            CommandError::UnknownWarehouse(_) => StatusCode::UNPROCESSABLE_ENTITY,
            CommandError::RobotUnavailable(_) => StatusCode::CONFLICT,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

#[derive(Deserialize)]
pub struct ShelfQuery {
    pub zone: Option<String>,
    pub status: Option<ShelfStatus>,
}

#[derive(Deserialize)]
pub struct AlertQuery {
    pub severity: Option<AlertSeverity>,
    #[serde(default)]
    pub include_acknowledged: bool,
}

#[derive(Deserialize)]
pub struct InsightQuery {
    pub resolved: Option<bool>,
}

#[derive(Deserialize)]
pub struct MoveCommand {
    pub direction: MoveDirection,
}

#[derive(Deserialize)]
pub struct CameraCommand {
    pub position: CameraArmStatus,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

pub async fn get_overview(State(state): State<Arc<AppState>>) -> Json<OverviewPayload> {
    Json(state.overview_service.overview().await)
}

pub async fn list_shelves(
    Query(query): Query<ShelfQuery>,
    State(state): State<Arc<AppState>>,
) -> Json<ShelvesPayload> {
    let filter = ShelfFilter {
        zone: query.zone,
        status: query.status,
    };
    Json(state.shelf_service.list(filter).await)
}

pub async fn list_alerts(
    Query(query): Query<AlertQuery>,
    State(state): State<Arc<AppState>>,
) -> Json<AlertsPayload> {
    let filter = AlertFilter {
        severity: query.severity,
        include_acknowledged: query.include_acknowledged,
    };
    Json(state.alert_service.list(filter).await)
}

pub async fn acknowledge_alert(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<StatusCode, ApiError> {
    state.alert_service.acknowledge(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_robot(State(state): State<Arc<AppState>>) -> Json<RobotView> {
    Json(state.control_service.robot().await)
}

pub async fn get_battery(State(state): State<Arc<AppState>>) -> Json<BatteryPayload> {
    Json(state.report_service.battery().await)
}

pub async fn get_reports(State(state): State<Arc<AppState>>) -> Json<ReportsPayload> {
    Json(state.report_service.reports().await)
}

pub async fn list_insights(
    Query(query): Query<InsightQuery>,
    State(state): State<Arc<AppState>>,
) -> Json<Vec<AiInsight>> {
    Json(state.report_service.insights(query.resolved).await)
}

pub async fn list_warehouses(State(state): State<Arc<AppState>>) -> Json<Vec<Warehouse>> {
    Json(state.store.snapshot().await.warehouses)
}

pub async fn get_settings(State(state): State<Arc<AppState>>) -> Json<Settings> {
    Json(state.store.snapshot().await.settings)
}

pub async fn put_settings(
    State(state): State<Arc<AppState>>,
    Json(settings): Json<Settings>,
) -> Result<Json<Settings>, ApiError> {
    let saved = state.store.update_settings(settings).await?;
    Ok(Json(saved))
}

pub async fn start_scan(State(state): State<Arc<AppState>>) -> Result<Json<Robot>, ApiError> {
    Ok(Json(state.control_service.start_scan().await?))
}

pub async fn stop_scan(State(state): State<Arc<AppState>>) -> Result<Json<Robot>, ApiError> {
    Ok(Json(state.control_service.stop_scan().await?))
}

pub async fn move_robot(
    State(state): State<Arc<AppState>>,
    Json(command): Json<MoveCommand>,
) -> Result<Json<Robot>, ApiError> {
    Ok(Json(state.control_service.move_robot(command.direction).await?))
}

pub async fn set_camera(
    State(state): State<Arc<AppState>>,
    Json(command): Json<CameraCommand>,
) -> Result<Json<Robot>, ApiError> {
    Ok(Json(state.control_service.set_camera(command.position).await?))
}

fn snapshot_stream(
    store: Arc<crate::application::store::DashboardStore>,
    period: std::time::Duration,
) -> impl Stream<Item = Result<Event, Infallible>> {
    let ticker = tokio::time::interval(period);

    IntervalStream::new(ticker).then(move |_| {
        let store = store.clone();
        async move {
            let snapshot = store.snapshot().await;
            match Event::default().event("snapshot").json_data(&snapshot) {
                Ok(event) => Ok::<_, Infallible>(event),
                Err(e) => {
                    tracing::warn!(error = %e, "failed to encode snapshot event");
                    Ok(Event::default().event("snapshot").data("{}"))
                }
            }
        }
    })
}

/// Full-state snapshots on the poll cadence, for clients that prefer a
/// push feed over polling the section endpoints.
pub async fn stream_snapshots(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    Sse::new(snapshot_stream(state.store.clone(), state.stream_period))
        .keep_alive(KeepAlive::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::store::DashboardStore;
    use crate::domain::robot::RobotStatus;
    use crate::infrastructure::fixtures;
    use std::time::Duration;

    #[test]
    fn test_command_error_status_mapping() {
        let err = ApiError::from(CommandError::UnknownAlert("al-999".to_string()));
        assert_eq!(err.status, StatusCode::NOT_FOUND);

        let err = ApiError::from(CommandError::UnknownWarehouse("wh-404".to_string()));
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);

        let err = ApiError::from(CommandError::RobotUnavailable(RobotStatus::Offline));
        assert_eq!(err.status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_error_response_body_shape() {
        let response =
            ApiError::from(CommandError::UnknownAlert("al-999".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "unknown alert: al-999");
    }

    #[tokio::test]
    async fn test_snapshot_stream_emits_on_cadence() {
        let store = Arc::new(DashboardStore::new(fixtures::demo_state()));
        let mut stream = Box::pin(snapshot_stream(store, Duration::from_millis(10)));

        let event = stream.next().await.expect("stream stays open").unwrap();
        assert!(format!("{event:?}").contains("snapshot"));
        assert!(stream.next().await.is_some_and(|e| e.is_ok()));
    }
}
