// Scan report and history data points
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    pub date: String,
    pub total_scans: u32,
    pub issues_found: u32,
    pub avg_stock_level: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatteryDataPoint {
    pub time: String,
    pub percentage: u8,
}

impl BatteryDataPoint {
    /// Charts key points by a wall-clock "HH:MM" label.
    pub fn at(time: DateTime<Utc>, percentage: u8) -> Self {
        Self {
            time: time.format("%H:%M").to_string(),
            percentage,
        }
    }
}

/// Average stock level per zone over one week, for the trend chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockTrendPoint {
    pub date: String,
    pub zone_a: u8,
    pub zone_b: u8,
    pub zone_c: u8,
    pub zone_d: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_battery_point_label() {
        let time = Utc.with_ymd_and_hms(2026, 8, 29, 14, 5, 0).unwrap();
        let point = BatteryDataPoint::at(time, 73);
        assert_eq!(point.time, "14:05");
        assert_eq!(point.percentage, 73);
    }
}
