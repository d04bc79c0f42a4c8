// Robot domain model - singleton snapshot per store
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RobotStatus {
    Online,
    Offline,
    Maintenance,
}

impl RobotStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RobotStatus::Online => "Online",
            RobotStatus::Offline => "Offline",
            RobotStatus::Maintenance => "Maintenance",
        }
    }
}

impl fmt::Display for RobotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RobotStatus::Online => "online",
            RobotStatus::Offline => "offline",
            RobotStatus::Maintenance => "maintenance",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RobotAction {
    Scanning,
    Moving,
    Idle,
    Charging,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CameraArmStatus {
    Up,
    Down,
    Rotating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChargingStatus {
    Charging,
    Discharging,
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoveDirection {
    Forward,
    Backward,
    Left,
    Right,
    Rotate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub zone: String,
    pub aisle: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Robot {
    pub id: String,
    pub name: String,
    pub status: RobotStatus,
    pub battery_percentage: u8,
    pub wifi_connected: bool,
    pub last_scan_time: DateTime<Utc>,
    pub current_location: Location,
    pub current_action: RobotAction,
    pub camera_arm_status: CameraArmStatus,
    pub scan_progress: u8,
    pub charging_status: ChargingStatus,
}

impl Robot {
    /// Only an online robot accepts manual commands.
    pub fn accepts_commands(&self) -> bool {
        self.status == RobotStatus::Online
    }
}
