// In-memory dashboard state and row ingestion
use crate::domain::alert::{Alert, AlertType};
use crate::domain::insight::AiInsight;
use crate::domain::report::{BatteryDataPoint, ScanReport, StockTrendPoint};
use crate::domain::robot::{CameraArmStatus, MoveDirection, Robot, RobotAction, RobotStatus};
use crate::domain::settings::Settings;
use crate::domain::shelf::{Shelf, ShelfStatus};
use crate::domain::telemetry::TelemetryRow;
use crate::domain::warehouse::Warehouse;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tokio::sync::RwLock;

/// Battery history cap: 24h at the 5-minute mock cadence.
const BATTERY_HISTORY_CAP: usize = 288;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unknown alert: {0}")]
    UnknownAlert(String),
    #[error("unknown warehouse: {0}")]
    UnknownWarehouse(String),
    #[error("robot is {0} and cannot accept commands")]
    RobotUnavailable(RobotStatus),
}

/// The whole warehouse picture as one value. Snapshots of this are
/// what every section endpoint derives from.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseState {
    pub robot: Robot,
    pub warehouses: Vec<Warehouse>,
    pub shelves: Vec<Shelf>,
    pub alerts: Vec<Alert>,
    pub battery_history: Vec<BatteryDataPoint>,
    pub scan_reports: Vec<ScanReport>,
    pub stock_trend: Vec<StockTrendPoint>,
    pub insights: Vec<AiInsight>,
    pub settings: Settings,
    pub last_sync: Option<DateTime<Utc>>,
    #[serde(skip)]
    pub alert_seq: u64,
}

impl WarehouseState {
    fn apply_row(&mut self, row: TelemetryRow) {
        let Some(shelf) = self.shelves.iter_mut().find(|s| s.id == row.shelf_id) else {
            // A row carries no zone/aisle, so a fabricated shelf would be
            // unplaceable on the floor plan.
            tracing::warn!(shelf_id = %row.shelf_id, "telemetry row for unknown shelf, dropped");
            return;
        };

        match ShelfStatus::parse_sheet(&row.shelf_status) {
            Some(status) => shelf.status = status,
            None => {
                tracing::warn!(
                    shelf_id = %row.shelf_id,
                    raw = %row.shelf_status,
                    "unrecognized shelf status, keeping previous"
                );
            }
        }
        shelf.stock_level = row.stock_level();
        shelf.last_updated = row.timestamp;

        let location = crate::domain::robot::Location {
            zone: shelf.zone.clone(),
            aisle: shelf.aisle.clone(),
        };
        let shelf_id = shelf.id.clone();

        self.robot.battery_percentage = row.battery_level();
        self.robot.last_scan_time = row.timestamp;
        self.robot.current_location = location;

        self.battery_history
            .push(BatteryDataPoint::at(row.timestamp, row.battery_level()));
        if self.battery_history.len() > BATTERY_HISTORY_CAP {
            let overflow = self.battery_history.len() - BATTERY_HISTORY_CAP;
            self.battery_history.drain(..overflow);
        }

        if let Some(kind) = AlertType::classify(&row.alert) {
            self.alert_seq += 1;
            self.alerts.push(Alert {
                id: format!("al-{:03}", self.alert_seq),
                timestamp: row.timestamp,
                kind,
                severity: kind.default_severity(),
                message: row.alert.trim().to_string(),
                shelf_id: Some(shelf_id),
                acknowledged: false,
            });
        }
    }
}

pub struct DashboardStore {
    state: RwLock<WarehouseState>,
}

impl DashboardStore {
    pub fn new(state: WarehouseState) -> Self {
        Self {
            state: RwLock::new(state),
        }
    }

    /// One guard per read keeps each snapshot internally consistent.
    pub async fn snapshot(&self) -> WarehouseState {
        self.state.read().await.clone()
    }

    /// Fold a polled batch into the state, in sheet append order.
    /// A bad row never aborts the batch; `last_sync` advances only here,
    /// so a failed poll leaves the previous state visible untouched. An
    /// empty batch is still a successful sync.
    pub async fn apply_rows(&self, rows: Vec<TelemetryRow>) {
        let mut state = self.state.write().await;
        for row in rows {
            state.apply_row(row);
        }
        state.last_sync = Some(Utc::now());
    }

    /// One-way flip; acknowledging twice is a no-op success.
    pub async fn acknowledge_alert(&self, id: &str) -> Result<(), CommandError> {
        let mut state = self.state.write().await;
        let alert = state
            .alerts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| CommandError::UnknownAlert(id.to_string()))?;
        alert.acknowledge();
        Ok(())
    }

    pub async fn update_settings(&self, settings: Settings) -> Result<Settings, CommandError> {
        let mut state = self.state.write().await;
        if !state
            .warehouses
            .iter()
            .any(|w| w.id == settings.selected_warehouse_id)
        {
            return Err(CommandError::UnknownWarehouse(
                settings.selected_warehouse_id,
            ));
        }
        state.settings = settings;
        Ok(state.settings.clone())
    }

    pub async fn start_scan(&self) -> Result<Robot, CommandError> {
        let mut state = self.state.write().await;
        if !state.robot.accepts_commands() {
            return Err(CommandError::RobotUnavailable(state.robot.status));
        }
        if state.robot.current_action != RobotAction::Scanning {
            state.robot.current_action = RobotAction::Scanning;
            state.robot.scan_progress = 0;
        }
        Ok(state.robot.clone())
    }

    /// Stopping while not scanning is a no-op success.
    pub async fn stop_scan(&self) -> Result<Robot, CommandError> {
        let mut state = self.state.write().await;
        if state.robot.current_action == RobotAction::Scanning {
            state.robot.current_action = RobotAction::Idle;
        }
        Ok(state.robot.clone())
    }

    pub async fn move_robot(&self, direction: MoveDirection) -> Result<Robot, CommandError> {
        let mut state = self.state.write().await;
        if !state.robot.accepts_commands() {
            return Err(CommandError::RobotUnavailable(state.robot.status));
        }
        tracing::info!(?direction, "manual move command");
        state.robot.current_action = RobotAction::Moving;
        Ok(state.robot.clone())
    }

    pub async fn set_camera(&self, position: CameraArmStatus) -> Result<Robot, CommandError> {
        let mut state = self.state.write().await;
        state.robot.camera_arm_status = position;
        Ok(state.robot.clone())
    }
}
