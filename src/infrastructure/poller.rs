// Background poll task folding telemetry rows into the store
use crate::application::store::DashboardStore;
use crate::application::telemetry_source::TelemetrySource;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Poll the source on a fixed cadence. A failed fetch is logged and the
/// previous state stays visible; there is no retry beyond the next tick.
pub fn spawn(
    store: Arc<DashboardStore>,
    source: Arc<dyn TelemetrySource>,
    period: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            match source.fetch_rows().await {
                Ok(rows) => {
                    let count = rows.len();
                    store.apply_rows(rows).await;
                    tracing::debug!(rows = count, "telemetry sync complete");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "telemetry poll failed, keeping stale state");
                }
            }
        }
    })
}
