// Domain layer - Typed records and display derivation
pub mod alert;
pub mod display;
pub mod insight;
pub mod report;
pub mod robot;
pub mod settings;
pub mod shelf;
pub mod telemetry;
pub mod warehouse;
