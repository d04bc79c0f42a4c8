// Overview service - Use case for the landing section
use crate::application::store::DashboardStore;
use crate::domain::alert::Alert;
use crate::domain::display::{battery_tone, format_time_ago};
use crate::domain::robot::{ChargingStatus, Robot, RobotStatus};
use crate::domain::shelf::ShelfStatus;
use crate::domain::warehouse::Warehouse;
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
    pub tone: &'static str,
    pub subtext: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelfStatusCount {
    pub status: ShelfStatus,
    pub label: &'static str,
    pub tone: &'static str,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewPayload {
    pub warehouse: Warehouse,
    pub stat_cards: Vec<StatCard>,
    pub shelf_breakdown: Vec<ShelfStatusCount>,
    pub active_alert_count: usize,
    pub recent_alerts: Vec<Alert>,
    pub robot: Robot,
}

#[derive(Clone)]
pub struct OverviewService {
    store: Arc<DashboardStore>,
}

impl OverviewService {
    pub fn new(store: Arc<DashboardStore>) -> Self {
        Self { store }
    }

    pub async fn overview(&self) -> OverviewPayload {
        let state = self.store.snapshot().await;
        let now = Utc::now();

        let warehouse = state
            .warehouses
            .iter()
            .find(|w| w.id == state.settings.selected_warehouse_id)
            .or_else(|| state.warehouses.first())
            .cloned()
            .unwrap_or_else(|| Warehouse {
                id: String::new(),
                name: "No warehouse configured".to_string(),
                location: String::new(),
                total_shelves: 0,
                system_health: 0,
            });

        let robot = &state.robot;
        let stat_cards = vec![
            StatCard {
                label: "Robot Status",
                value: robot.status.label().to_string(),
                tone: if robot.status == RobotStatus::Online {
                    "emerald"
                } else {
                    "red"
                },
                subtext: format!("Last scan: {}", format_time_ago(robot.last_scan_time, now)),
            },
            StatCard {
                label: "Battery Level",
                value: format!("{}%", robot.battery_percentage),
                tone: battery_tone(robot.battery_percentage),
                subtext: if robot.charging_status == ChargingStatus::Charging {
                    "Charging...".to_string()
                } else {
                    "Discharging".to_string()
                },
            },
            StatCard {
                label: "WiFi Status",
                value: if robot.wifi_connected {
                    "Connected".to_string()
                } else {
                    "Disconnected".to_string()
                },
                tone: if robot.wifi_connected { "emerald" } else { "red" },
                subtext: "IoT Network".to_string(),
            },
            StatCard {
                label: "System Health",
                value: format!("{}%", warehouse.system_health),
                tone: warehouse.health_tone(),
                subtext: "All systems nominal".to_string(),
            },
        ];

        let shelf_breakdown = [
            ShelfStatus::FullyStocked,
            ShelfStatus::LowStock,
            ShelfStatus::Empty,
            ShelfStatus::Misplaced,
        ]
        .into_iter()
        .map(|status| {
            let count = state.shelves.iter().filter(|s| s.status == status).count();
            let percentage = if state.shelves.is_empty() {
                0.0
            } else {
                count as f64 / state.shelves.len() as f64 * 100.0
            };
            ShelfStatusCount {
                status,
                label: status.label(),
                tone: status.tone(),
                count,
                percentage,
            }
        })
        .collect();

        let active_alert_count = state.alerts.iter().filter(|a| !a.acknowledged).count();
        let mut recent_alerts: Vec<Alert> = state
            .alerts
            .iter()
            .filter(|a| !a.acknowledged)
            .cloned()
            .collect();
        recent_alerts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        recent_alerts.truncate(4);

        OverviewPayload {
            warehouse,
            stat_cards,
            shelf_breakdown,
            active_alert_count,
            recent_alerts,
            robot: state.robot.clone(),
        }
    }
}
