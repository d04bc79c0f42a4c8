// Control service - Use cases for the robot status panel and manual controls
use crate::application::store::{CommandError, DashboardStore};
use crate::domain::display::{battery_text_class, format_time_ago};
use crate::domain::robot::{CameraArmStatus, MoveDirection, Robot, RobotStatus};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

/// The robot snapshot plus the display strings the status panel renders with.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotView {
    #[serde(flatten)]
    pub robot: Robot,
    pub status_label: &'static str,
    pub status_tone: &'static str,
    pub battery_text_class: &'static str,
    pub last_scan_ago: String,
}

impl RobotView {
    pub fn derive(robot: Robot, now: DateTime<Utc>) -> Self {
        Self {
            status_label: robot.status.label(),
            status_tone: if robot.status == RobotStatus::Online {
                "emerald"
            } else {
                "red"
            },
            battery_text_class: battery_text_class(robot.battery_percentage),
            last_scan_ago: format_time_ago(robot.last_scan_time, now),
            robot,
        }
    }
}

#[derive(Clone)]
pub struct ControlService {
    store: Arc<DashboardStore>,
}

impl ControlService {
    pub fn new(store: Arc<DashboardStore>) -> Self {
        Self { store }
    }

    pub async fn robot(&self) -> RobotView {
        let state = self.store.snapshot().await;
        RobotView::derive(state.robot, Utc::now())
    }

    pub async fn start_scan(&self) -> Result<Robot, CommandError> {
        self.store.start_scan().await
    }

    pub async fn stop_scan(&self) -> Result<Robot, CommandError> {
        self.store.stop_scan().await
    }

    pub async fn move_robot(&self, direction: MoveDirection) -> Result<Robot, CommandError> {
        self.store.move_robot(direction).await
    }

    pub async fn set_camera(&self, position: CameraArmStatus) -> Result<Robot, CommandError> {
        self.store.set_camera(position).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::robot::RobotAction;
    use crate::infrastructure::fixtures;

    #[tokio::test]
    async fn test_control_round() {
        let store = Arc::new(DashboardStore::new(fixtures::demo_state()));
        let service = ControlService::new(store);

        let robot = service.start_scan().await.unwrap();
        assert_eq!(robot.current_action, RobotAction::Scanning);

        let robot = service.move_robot(MoveDirection::Left).await.unwrap();
        assert_eq!(robot.current_action, RobotAction::Moving);

        let robot = service.set_camera(CameraArmStatus::Down).await.unwrap();
        assert_eq!(robot.camera_arm_status, CameraArmStatus::Down);

        let robot = service.stop_scan().await.unwrap();
        assert_eq!(robot.current_action, RobotAction::Moving);
    }

    #[tokio::test]
    async fn test_robot_view_carries_display_fields() {
        let store = Arc::new(DashboardStore::new(fixtures::demo_state()));
        let view = ControlService::new(store).robot().await;

        // fixture robot: online, 73% battery, last scan 12 minutes back
        assert_eq!(view.status_label, "Online");
        assert_eq!(view.status_tone, "emerald");
        assert_eq!(view.battery_text_class, "text-emerald-500");
        assert_eq!(view.last_scan_ago, "12m ago");

        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value["batteryPercentage"], 73);
        assert_eq!(value["statusLabel"], "Online");
        assert_eq!(value["lastScanAgo"], "12m ago");
    }
}
