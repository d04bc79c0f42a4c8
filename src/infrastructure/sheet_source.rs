// Spreadsheet-backed telemetry source
//
// The endpoint is an Apps Script web app returning the whole sheet as
// a JSON array of header-keyed rows.
use crate::application::telemetry_source::TelemetrySource;
use crate::domain::telemetry::TelemetryRow;
use async_trait::async_trait;

pub struct SheetSource {
    client: reqwest::Client,
    endpoint: String,
}

impl SheetSource {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl TelemetrySource for SheetSource {
    async fn fetch_rows(&self) -> anyhow::Result<Vec<TelemetryRow>> {
        let rows = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<TelemetryRow>>()
            .await?;
        Ok(rows)
    }
}
