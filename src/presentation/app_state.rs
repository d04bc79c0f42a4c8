// Application state for HTTP handlers
use crate::application::alert_service::AlertService;
use crate::application::control_service::ControlService;
use crate::application::overview_service::OverviewService;
use crate::application::report_service::ReportService;
use crate::application::shelf_service::ShelfService;
use crate::application::store::DashboardStore;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub overview_service: OverviewService,
    pub shelf_service: ShelfService,
    pub alert_service: AlertService,
    pub report_service: ReportService,
    pub control_service: ControlService,
    pub store: Arc<DashboardStore>,
    pub stream_period: Duration,
}

impl AppState {
    pub fn new(store: Arc<DashboardStore>, stream_period: Duration) -> Self {
        Self {
            overview_service: OverviewService::new(store.clone()),
            shelf_service: ShelfService::new(store.clone()),
            alert_service: AlertService::new(store.clone()),
            report_service: ReportService::new(store.clone()),
            control_service: ControlService::new(store.clone()),
            store,
            stream_period,
        }
    }
}
