// Alert service - Use cases for listing and acknowledging alerts
use crate::application::store::{CommandError, DashboardStore};
use crate::domain::alert::{Alert, AlertSeverity};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct AlertFilter {
    pub severity: Option<AlertSeverity>,
    pub include_acknowledged: bool,
}

/// Unacknowledged counts per severity bucket, filter-independent.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertStats {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// An alert plus the display strings the list row renders with.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertView {
    #[serde(flatten)]
    pub alert: Alert,
    pub icon: &'static str,
    pub badge_class: &'static str,
    pub severity_tone: &'static str,
}

impl From<Alert> for AlertView {
    fn from(alert: Alert) -> Self {
        Self {
            icon: alert.kind.icon(),
            badge_class: alert.severity.badge_class(),
            severity_tone: alert.severity.tone(),
            alert,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertsPayload {
    pub alerts: Vec<AlertView>,
    pub stats: AlertStats,
}

#[derive(Clone)]
pub struct AlertService {
    store: Arc<DashboardStore>,
}

impl AlertService {
    pub fn new(store: Arc<DashboardStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self, filter: AlertFilter) -> AlertsPayload {
        let state = self.store.snapshot().await;

        let stats = AlertStats {
            critical: count_active(&state.alerts, AlertSeverity::Critical),
            high: count_active(&state.alerts, AlertSeverity::High),
            medium: count_active(&state.alerts, AlertSeverity::Medium),
            low: count_active(&state.alerts, AlertSeverity::Low),
        };

        let mut alerts: Vec<Alert> = state
            .alerts
            .into_iter()
            .filter(|a| filter.include_acknowledged || !a.acknowledged)
            .filter(|a| filter.severity.is_none_or(|s| a.severity == s))
            .collect();
        alerts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        AlertsPayload {
            alerts: alerts.into_iter().map(AlertView::from).collect(),
            stats,
        }
    }

    pub async fn acknowledge(&self, id: &str) -> Result<(), CommandError> {
        self.store.acknowledge_alert(id).await
    }
}

fn count_active(alerts: &[Alert], severity: AlertSeverity) -> usize {
    alerts
        .iter()
        .filter(|a| a.severity == severity && !a.acknowledged)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::fixtures;

    #[tokio::test]
    async fn test_default_listing_hides_acknowledged() {
        let store = Arc::new(DashboardStore::new(fixtures::demo_state()));
        let payload = AlertService::new(store).list(AlertFilter::default()).await;

        assert_eq!(payload.alerts.len(), 3);
        assert!(payload.alerts.iter().all(|v| !v.alert.acknowledged));
        assert!(payload
            .alerts
            .windows(2)
            .all(|w| w[0].alert.timestamp >= w[1].alert.timestamp));

        assert_eq!(payload.stats.critical, 1);
        assert_eq!(payload.stats.high, 2);
        assert_eq!(payload.stats.medium, 0);
        assert_eq!(payload.stats.low, 0);
    }

    #[tokio::test]
    async fn test_severity_filter_and_include_acknowledged() {
        let store = Arc::new(DashboardStore::new(fixtures::demo_state()));
        let service = AlertService::new(store);

        let all = service
            .list(AlertFilter {
                severity: None,
                include_acknowledged: true,
            })
            .await;
        assert_eq!(all.alerts.len(), 7);

        let critical = service
            .list(AlertFilter {
                severity: Some(AlertSeverity::Critical),
                include_acknowledged: true,
            })
            .await;
        assert_eq!(critical.alerts.len(), 2);
        assert!(critical
            .alerts
            .iter()
            .all(|v| v.alert.severity == AlertSeverity::Critical));
    }

    #[tokio::test]
    async fn test_acknowledge_drops_from_default_view() {
        let store = Arc::new(DashboardStore::new(fixtures::demo_state()));
        let service = AlertService::new(store);

        service.acknowledge("al-001").await.unwrap();
        let payload = service.list(AlertFilter::default()).await;
        assert!(payload.alerts.iter().all(|v| v.alert.id != "al-001"));
        assert_eq!(payload.stats.critical, 0);
    }
}
