// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod fixtures;
pub mod mock_source;
pub mod poller;
pub mod sheet_source;
