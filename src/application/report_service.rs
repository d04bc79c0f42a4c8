// Report service - Use cases for analytics, battery and insight sections
use crate::application::store::DashboardStore;
use crate::domain::display::{battery_bar_class, battery_text_class};
use crate::domain::insight::AiInsight;
use crate::domain::report::{BatteryDataPoint, ScanReport, StockTrendPoint};
use crate::domain::robot::ChargingStatus;
use crate::domain::shelf::{Shelf, ShelfStatus};
use serde::Serialize;
use std::sync::Arc;

/// Observed average drain under a normal scan workload, in % per hour.
const AVG_DRAIN_RATE: f64 = 5.2;

const PROBLEM_SHELF_LIMIT: usize = 5;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportTotals {
    pub total_scans: u32,
    pub issues_found: u32,
    pub avg_stock_level: u8,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportsPayload {
    pub scan_reports: Vec<ScanReport>,
    pub totals: ReportTotals,
    pub stock_trend: Vec<StockTrendPoint>,
    pub problem_shelves: Vec<Shelf>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatteryPayload {
    pub battery_percentage: u8,
    pub charging_status: ChargingStatus,
    pub estimated_runtime_hours: u32,
    pub text_class: &'static str,
    pub bar_class: &'static str,
    pub history: Vec<BatteryDataPoint>,
}

#[derive(Clone)]
pub struct ReportService {
    store: Arc<DashboardStore>,
}

impl ReportService {
    pub fn new(store: Arc<DashboardStore>) -> Self {
        Self { store }
    }

    pub async fn reports(&self) -> ReportsPayload {
        let state = self.store.snapshot().await;

        let total_scans = state.scan_reports.iter().map(|r| r.total_scans).sum();
        let issues_found = state.scan_reports.iter().map(|r| r.issues_found).sum();
        let avg_stock_level = if state.scan_reports.is_empty() {
            0
        } else {
            let sum: u32 = state
                .scan_reports
                .iter()
                .map(|r| u32::from(r.avg_stock_level))
                .sum();
            (f64::from(sum) / state.scan_reports.len() as f64).round() as u8
        };

        let mut problem_shelves: Vec<Shelf> = state
            .shelves
            .into_iter()
            .filter(|s| matches!(s.status, ShelfStatus::Empty | ShelfStatus::LowStock))
            .collect();
        problem_shelves.sort_by_key(|s| s.stock_level);
        problem_shelves.truncate(PROBLEM_SHELF_LIMIT);

        ReportsPayload {
            scan_reports: state.scan_reports,
            totals: ReportTotals {
                total_scans,
                issues_found,
                avg_stock_level,
            },
            stock_trend: state.stock_trend,
            problem_shelves,
        }
    }

    pub async fn battery(&self) -> BatteryPayload {
        let state = self.store.snapshot().await;
        let pct = state.robot.battery_percentage;
        BatteryPayload {
            battery_percentage: pct,
            charging_status: state.robot.charging_status,
            estimated_runtime_hours: (f64::from(pct) / AVG_DRAIN_RATE).round() as u32,
            text_class: battery_text_class(pct),
            bar_class: battery_bar_class(pct),
            history: state.battery_history,
        }
    }

    pub async fn insights(&self, resolved: Option<bool>) -> Vec<AiInsight> {
        let state = self.store.snapshot().await;
        let mut insights: Vec<AiInsight> = state
            .insights
            .into_iter()
            .filter(|i| resolved.is_none_or(|r| i.resolved == r))
            .collect();
        insights.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        insights
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::fixtures;

    fn service() -> ReportService {
        ReportService::new(Arc::new(DashboardStore::new(fixtures::demo_state())))
    }

    #[tokio::test]
    async fn test_weekly_totals() {
        let payload = service().reports().await;
        assert_eq!(payload.scan_reports.len(), 7);
        assert_eq!(payload.totals.total_scans, 913);
        assert_eq!(payload.totals.issues_found, 58);
        // (78+82+75+85+79+88+91)/7 = 82.57 -> 83
        assert_eq!(payload.totals.avg_stock_level, 83);
        assert_eq!(payload.stock_trend.len(), 4);
    }

    #[tokio::test]
    async fn test_problem_shelves_sorted_by_stock() {
        let payload = service().reports().await;
        assert_eq!(payload.problem_shelves.len(), 4);
        assert!(payload
            .problem_shelves
            .windows(2)
            .all(|w| w[0].stock_level <= w[1].stock_level));
        assert!(payload
            .problem_shelves
            .iter()
            .all(|s| matches!(s.status, ShelfStatus::Empty | ShelfStatus::LowStock)));
    }

    #[tokio::test]
    async fn test_battery_runtime_estimate() {
        let payload = service().battery().await;
        assert_eq!(payload.battery_percentage, 73);
        // 73 / 5.2 = 14.04 -> 14
        assert_eq!(payload.estimated_runtime_hours, 14);
        assert_eq!(payload.text_class, "text-emerald-500");
        assert_eq!(payload.bar_class, "bg-emerald-500");
        assert_eq!(payload.history.len(), 10);
    }

    #[tokio::test]
    async fn test_insights_filter_and_order() {
        let svc = service();
        let all = svc.insights(None).await;
        assert_eq!(all.len(), 4);
        assert!(all.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));

        let open = svc.insights(Some(false)).await;
        assert_eq!(open.len(), 2);
        assert!(open.iter().all(|i| !i.resolved));
    }
}
