// Alert domain model
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AlertSeverity {
    pub fn badge_class(&self) -> &'static str {
        match self {
            AlertSeverity::Critical => "text-red-700 bg-red-100 border-red-300",
            AlertSeverity::High => "text-orange-700 bg-orange-100 border-orange-300",
            AlertSeverity::Medium => "text-amber-700 bg-amber-100 border-amber-300",
            AlertSeverity::Low => "text-blue-700 bg-blue-100 border-blue-300",
        }
    }

    pub fn tone(&self) -> &'static str {
        match self {
            AlertSeverity::Critical => "red",
            AlertSeverity::High => "orange",
            AlertSeverity::Medium => "amber",
            AlertSeverity::Low => "blue",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlertType {
    LowStock,
    EmptyShelf,
    LowBattery,
    RobotError,
    CameraError,
    MisplacedItems,
}

impl AlertType {
    pub fn icon(&self) -> &'static str {
        match self {
            AlertType::LowStock => "📦",
            AlertType::EmptyShelf => "🚨",
            AlertType::LowBattery => "🔋",
            AlertType::RobotError => "🤖",
            AlertType::CameraError => "📷",
            AlertType::MisplacedItems => "🔀",
        }
    }

    pub fn default_severity(&self) -> AlertSeverity {
        match self {
            AlertType::EmptyShelf => AlertSeverity::Critical,
            AlertType::LowStock | AlertType::RobotError => AlertSeverity::High,
            AlertType::LowBattery | AlertType::MisplacedItems => AlertSeverity::Medium,
            AlertType::CameraError => AlertSeverity::Low,
        }
    }

    /// Classify the free-text alert column of a telemetry row.
    pub fn classify(raw: &str) -> Option<Self> {
        let text = raw.trim().to_lowercase();
        if text.is_empty() {
            return None;
        }
        if text.contains("empty") {
            Some(AlertType::EmptyShelf)
        } else if text.contains("stock") {
            Some(AlertType::LowStock)
        } else if text.contains("battery") {
            Some(AlertType::LowBattery)
        } else if text.contains("camera") {
            Some(AlertType::CameraError)
        } else if text.contains("misplaced") {
            Some(AlertType::MisplacedItems)
        } else {
            // An unparsed alert is still an alert; surface it as a robot fault
            Some(AlertType::RobotError)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: AlertType,
    pub severity: AlertSeverity,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shelf_id: Option<String>,
    pub acknowledged: bool,
}

impl Alert {
    /// One-way flip; there is no undo path.
    pub fn acknowledge(&mut self) {
        self.acknowledged = true;
    }
}
