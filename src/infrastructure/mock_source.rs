// Mock telemetry source - keeps the poll path exercised offline
use crate::application::telemetry_source::TelemetrySource;
use crate::domain::telemetry::TelemetryRow;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicUsize, Ordering};

const SHELF_ROTATION: [(&str, &str, f64); 4] = [
    ("SH-A001", "fully-stocked", 95.0),
    ("SH-A002", "low-stock", 32.0),
    ("SH-B001", "fully-stocked", 88.0),
    ("SH-C001", "low-stock", 18.0),
];

/// Emits one synthetic row per poll, walking the shelf rotation and
/// slowly draining the battery, the way the real sheet fills up.
#[derive(Default)]
pub struct MockSource {
    tick: AtomicUsize,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TelemetrySource for MockSource {
    async fn fetch_rows(&self) -> anyhow::Result<Vec<TelemetryRow>> {
        let tick = self.tick.fetch_add(1, Ordering::Relaxed);
        let (shelf_id, status, stock) = SHELF_ROTATION[tick % SHELF_ROTATION.len()];

        // drain from 73% down to 34%, then "recharge"
        let battery = 73.0 - (tick % 40) as f64;
        let alert = if tick % 7 == 6 {
            format!("Low stock detected on {shelf_id}")
        } else {
            String::new()
        };

        Ok(vec![TelemetryRow {
            timestamp: Utc::now(),
            robot_id: "ASTRA-001".to_string(),
            shelf_id: shelf_id.to_string(),
            shelf_status: status.to_string(),
            stock_pct: stock,
            battery_pct: battery,
            alert,
        }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_rotation_and_occasional_alert() {
        let source = MockSource::new();
        let mut alerts = 0;
        for i in 0..8 {
            let rows = source.fetch_rows().await.unwrap();
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].shelf_id, SHELF_ROTATION[i % 4].0);
            if !rows[0].alert.is_empty() {
                alerts += 1;
            }
        }
        assert_eq!(alerts, 1);
    }
}
