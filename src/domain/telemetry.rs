// Wire shape of one spreadsheet telemetry row
//
// The sheet endpoint returns a JSON array of objects keyed by the
// sheet's column headers, so the renames below are the contract.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryRow {
    #[serde(rename = "Timestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "Robot ID")]
    pub robot_id: String,
    #[serde(rename = "Shelf ID")]
    pub shelf_id: String,
    #[serde(rename = "Shelf Status")]
    pub shelf_status: String,
    #[serde(rename = "Stock %")]
    pub stock_pct: f64,
    #[serde(rename = "Battery %")]
    pub battery_pct: f64,
    #[serde(rename = "Alert T", default)]
    pub alert: String,
}

impl TelemetryRow {
    pub fn stock_level(&self) -> u8 {
        self.stock_pct.clamp(0.0, 100.0).round() as u8
    }

    pub fn battery_level(&self) -> u8 {
        self.battery_pct.clamp(0.0, 100.0).round() as u8
    }
}
