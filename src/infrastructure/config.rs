use crate::domain::settings::Settings;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub defaults: DefaultSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    Mock,
    Sheet,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SourceConfig {
    #[serde(default = "default_source_kind")]
    pub kind: SourceKind,
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
}

fn default_source_kind() -> SourceKind {
    SourceKind::Mock
}

fn default_poll_interval() -> u64 {
    5
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::Mock,
            endpoint: None,
            poll_interval_secs: 5,
        }
    }
}

/// Initial operator settings; the running copy lives in the store and
/// is replaced via PUT /api/settings, never written back here.
#[derive(Debug, Deserialize, Clone)]
pub struct DefaultSettings {
    pub low_stock_threshold: u8,
    pub critical_battery_threshold: u8,
    pub scan_interval_minutes: u32,
    pub dark_mode: bool,
    pub selected_warehouse_id: String,
}

impl Default for DefaultSettings {
    fn default() -> Self {
        let settings = Settings::default();
        Self {
            low_stock_threshold: settings.low_stock_threshold,
            critical_battery_threshold: settings.critical_battery_threshold,
            scan_interval_minutes: settings.scan_interval_minutes,
            dark_mode: settings.dark_mode,
            selected_warehouse_id: settings.selected_warehouse_id,
        }
    }
}

impl From<DefaultSettings> for Settings {
    fn from(d: DefaultSettings) -> Self {
        Settings {
            low_stock_threshold: d.low_stock_threshold,
            critical_battery_threshold: d.critical_battery_threshold,
            scan_interval_minutes: d.scan_interval_minutes,
            dark_mode: d.dark_mode,
            selected_warehouse_id: d.selected_warehouse_id,
        }
    }
}

/// A missing config file is fine: everything has a built-in default
/// and the mock source needs no endpoint.
pub fn load_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard").required(false))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.server.bind_addr, "0.0.0.0:8080");
        assert_eq!(cfg.source.kind, SourceKind::Mock);
        assert_eq!(cfg.source.poll_interval_secs, 5);
        assert!(cfg.source.endpoint.is_none());
    }

    #[test]
    fn test_parse_sheet_source_config() {
        let cfg: AppConfig = config::Config::builder()
            .add_source(config::File::from_str(
                r#"
                [server]
                bind_addr = "127.0.0.1:9090"

                [source]
                kind = "sheet"
                endpoint = "https://example.com/exec"
                poll_interval_secs = 10

                [defaults]
                low_stock_threshold = 25
                critical_battery_threshold = 15
                scan_interval_minutes = 30
                dark_mode = true
                selected_warehouse_id = "wh-002"
                "#,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(cfg.server.bind_addr, "127.0.0.1:9090");
        assert_eq!(cfg.source.kind, SourceKind::Sheet);
        assert_eq!(cfg.source.endpoint.as_deref(), Some("https://example.com/exec"));
        assert_eq!(cfg.source.poll_interval_secs, 10);

        let settings: Settings = cfg.defaults.into();
        assert!(settings.dark_mode);
        assert_eq!(settings.selected_warehouse_id, "wh-002");
    }
}
