// Demo dataset seeding the store when no live sheet is wired up
use crate::application::store::WarehouseState;
use crate::domain::alert::{Alert, AlertSeverity, AlertType};
use crate::domain::insight::AiInsight;
use crate::domain::report::{BatteryDataPoint, ScanReport, StockTrendPoint};
use crate::domain::robot::{
    CameraArmStatus, ChargingStatus, Location, Robot, RobotAction, RobotStatus,
};
use crate::domain::settings::Settings;
use crate::domain::shelf::{Shelf, ShelfStatus};
use crate::domain::warehouse::Warehouse;
use chrono::{Duration, Utc};

const SHELF_IMAGE_A: &str =
    "https://images.unsplash.com/photo-1586528116311-ad8dd3c8310d?w=400&h=300&fit=crop";
const SHELF_IMAGE_B: &str =
    "https://images.unsplash.com/photo-1553413077-190dd305871c?w=400&h=300&fit=crop";
const SHELF_IMAGE_C: &str =
    "https://images.unsplash.com/photo-1600585152220-90363fe7e115?w=400&h=300&fit=crop";

pub fn demo_state() -> WarehouseState {
    let now = Utc::now();

    let warehouses = vec![
        Warehouse {
            id: "wh-001".to_string(),
            name: "Central Distribution Hub".to_string(),
            location: "Building A, Floor 1".to_string(),
            total_shelves: 248,
            system_health: 94,
        },
        Warehouse {
            id: "wh-002".to_string(),
            name: "East Wing Storage".to_string(),
            location: "Building B, Floor 2".to_string(),
            total_shelves: 156,
            system_health: 88,
        },
        Warehouse {
            id: "wh-003".to_string(),
            name: "Cold Storage Facility".to_string(),
            location: "Building C, Basement".to_string(),
            total_shelves: 92,
            system_health: 97,
        },
    ];

    let robot = Robot {
        id: "ASTRA-001".to_string(),
        name: "ASTRA Prime".to_string(),
        status: RobotStatus::Online,
        battery_percentage: 73,
        wifi_connected: true,
        last_scan_time: now - Duration::minutes(12),
        current_location: Location {
            zone: "Zone A".to_string(),
            aisle: "Aisle 3".to_string(),
        },
        current_action: RobotAction::Scanning,
        camera_arm_status: CameraArmStatus::Rotating,
        scan_progress: 67,
        charging_status: ChargingStatus::Discharging,
    };

    let shelf = |id: &str, zone: &str, aisle: &str, status, stock, mins_ago: i64, image: &str| {
        Shelf {
            id: id.to_string(),
            zone: zone.to_string(),
            aisle: aisle.to_string(),
            status,
            stock_level: stock,
            last_updated: now - Duration::minutes(mins_ago),
            image_url: image.to_string(),
        }
    };

    let shelves = vec![
        shelf("SH-A001", "Zone A", "Aisle 1", ShelfStatus::FullyStocked, 95, 5, SHELF_IMAGE_A),
        shelf("SH-A002", "Zone A", "Aisle 1", ShelfStatus::LowStock, 32, 8, SHELF_IMAGE_B),
        shelf("SH-A003", "Zone A", "Aisle 2", ShelfStatus::Empty, 0, 15, SHELF_IMAGE_C),
        shelf("SH-B001", "Zone B", "Aisle 1", ShelfStatus::FullyStocked, 88, 20, SHELF_IMAGE_A),
        shelf("SH-B002", "Zone B", "Aisle 2", ShelfStatus::Misplaced, 65, 25, SHELF_IMAGE_B),
        shelf("SH-C001", "Zone C", "Aisle 1", ShelfStatus::LowStock, 18, 30, SHELF_IMAGE_C),
        shelf("SH-C002", "Zone C", "Aisle 2", ShelfStatus::FullyStocked, 100, 35, SHELF_IMAGE_A),
        shelf("SH-D001", "Zone D", "Aisle 1", ShelfStatus::Empty, 0, 40, SHELF_IMAGE_B),
    ];

    let alert = |id: &str,
                 mins_ago: i64,
                 kind: AlertType,
                 severity: AlertSeverity,
                 message: &str,
                 shelf_id: Option<&str>,
                 acknowledged: bool| {
        Alert {
            id: id.to_string(),
            timestamp: now - Duration::minutes(mins_ago),
            kind,
            severity,
            message: message.to_string(),
            shelf_id: shelf_id.map(str::to_string),
            acknowledged,
        }
    };

    let alerts = vec![
        alert("al-001", 2, AlertType::EmptyShelf, AlertSeverity::Critical,
              "Shelf SH-A003 is completely empty", Some("SH-A003"), false),
        alert("al-002", 10, AlertType::LowStock, AlertSeverity::High,
              "Low stock detected on Shelf SH-A002 (32%)", Some("SH-A002"), false),
        alert("al-003", 25, AlertType::MisplacedItems, AlertSeverity::Medium,
              "Misplaced items detected on Shelf SH-B002", Some("SH-B002"), true),
        alert("al-004", 45, AlertType::LowBattery, AlertSeverity::Medium,
              "Robot battery at 25% - charging recommended", None, true),
        alert("al-005", 60, AlertType::CameraError, AlertSeverity::Low,
              "Camera calibration needed - minor focus issue detected", None, true),
        alert("al-006", 120, AlertType::EmptyShelf, AlertSeverity::Critical,
              "Shelf SH-D001 is completely empty", Some("SH-D001"), true),
        alert("al-007", 180, AlertType::LowStock, AlertSeverity::High,
              "Critical low stock on Shelf SH-C001 (18%)", Some("SH-C001"), false),
    ];

    let battery_history = [
        ("08:00", 100),
        ("09:00", 95),
        ("10:00", 88),
        ("11:00", 82),
        ("12:00", 75),
        ("13:00", 68),
        ("14:00", 73),
        ("15:00", 85),
        ("16:00", 78),
        ("17:00", 73),
    ]
    .into_iter()
    .map(|(time, percentage)| BatteryDataPoint {
        time: time.to_string(),
        percentage,
    })
    .collect();

    let report = |date: &str, total_scans, issues_found, avg_stock_level| ScanReport {
        date: date.to_string(),
        total_scans,
        issues_found,
        avg_stock_level,
    };

    let scan_reports = vec![
        report("Mon", 145, 12, 78),
        report("Tue", 162, 8, 82),
        report("Wed", 138, 15, 75),
        report("Thu", 171, 6, 85),
        report("Fri", 156, 11, 79),
        report("Sat", 89, 4, 88),
        report("Sun", 52, 2, 91),
    ];

    let trend = |date: &str, zone_a, zone_b, zone_c, zone_d| StockTrendPoint {
        date: date.to_string(),
        zone_a,
        zone_b,
        zone_c,
        zone_d,
    };

    let stock_trend = vec![
        trend("Week 1", 85, 78, 92, 70),
        trend("Week 2", 82, 81, 88, 75),
        trend("Week 3", 78, 76, 85, 72),
        trend("Week 4", 88, 82, 90, 68),
    ];

    let insight = |id: &str, mins_ago: i64, issue: &str, confidence, shelf_id: &str,
                   before: &str, after: &str, resolved| {
        AiInsight {
            id: id.to_string(),
            timestamp: now - Duration::minutes(mins_ago),
            issue: issue.to_string(),
            confidence,
            shelf_id: shelf_id.to_string(),
            before_image_url: before.to_string(),
            after_image_url: after.to_string(),
            resolved,
        }
    };

    let insights = vec![
        insight("ai-001", 15, "Product misalignment detected - bottles facing wrong direction",
                94.5, "SH-B002", SHELF_IMAGE_B, SHELF_IMAGE_A, false),
        insight("ai-002", 45, "Empty space pattern suggests restocking needed soon",
                87.2, "SH-A002", SHELF_IMAGE_C, SHELF_IMAGE_A, false),
        insight("ai-003", 90, "Price tag obscured by product placement",
                78.8, "SH-C002", SHELF_IMAGE_B, SHELF_IMAGE_A, true),
        insight("ai-004", 150, "Product category mixing detected in Zone A",
                91.3, "SH-A001", SHELF_IMAGE_C, SHELF_IMAGE_B, true),
    ];

    WarehouseState {
        robot,
        warehouses,
        shelves,
        alerts,
        battery_history,
        scan_reports,
        stock_trend,
        insights,
        settings: Settings::default(),
        last_sync: None,
        alert_seq: 7,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_state_is_internally_consistent() {
        let state = demo_state();
        assert_eq!(state.shelves.len(), 8);
        assert_eq!(state.alerts.len(), 7);
        assert_eq!(state.warehouses.len(), 3);

        // every shelf-scoped alert and insight points at a real shelf
        for alert in &state.alerts {
            if let Some(shelf_id) = &alert.shelf_id {
                assert!(state.shelves.iter().any(|s| &s.id == shelf_id), "{shelf_id}");
            }
        }
        for insight in &state.insights {
            assert!(state.shelves.iter().any(|s| s.id == insight.shelf_id));
        }

        // the default warehouse selection resolves
        assert!(state
            .warehouses
            .iter()
            .any(|w| w.id == state.settings.selected_warehouse_id));

        // seq continues after the seeded alert ids
        assert_eq!(state.alert_seq, state.alerts.len() as u64);
    }
}
