// Application layer - Use-case services over the in-memory store
pub mod alert_service;
pub mod control_service;
pub mod overview_service;
pub mod report_service;
pub mod shelf_service;
pub mod store;
pub mod telemetry_source;
