// Source trait for telemetry row retrieval
use crate::domain::telemetry::TelemetryRow;
use async_trait::async_trait;

#[async_trait]
pub trait TelemetrySource: Send + Sync {
    /// Fetch the current row set from the backing endpoint.
    async fn fetch_rows(&self) -> anyhow::Result<Vec<TelemetryRow>>;
}
