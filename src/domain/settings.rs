// Operator settings - in-memory only, never persisted
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub low_stock_threshold: u8,
    pub critical_battery_threshold: u8,
    pub scan_interval_minutes: u32,
    pub dark_mode: bool,
    pub selected_warehouse_id: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            low_stock_threshold: 30,
            critical_battery_threshold: 20,
            scan_interval_minutes: 15,
            dark_mode: false,
            selected_warehouse_id: "wh-001".to_string(),
        }
    }
}
