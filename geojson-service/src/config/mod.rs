use serde::Deserialize;
use service_core::config::{self as core_config, ServerSettings, TelemetrySettings};
use service_core::error::AppError;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub cors: CorsSettings,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataSettings {
    /// GeoJSON file served by `/geojsondata`. Relative paths resolve against
    /// the working directory of the process.
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            path: default_data_path(),
        }
    }
}

fn default_data_path() -> PathBuf {
    PathBuf::from("data.geojson")
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorsSettings {
    /// `*` anywhere in the list allows every origin.
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

fn default_allowed_origins() -> Vec<String> {
    vec!["*".to_string()]
}

/// Keys whose `APP_*` value is a comma-separated list.
pub const LIST_KEYS: &[&str] = &["cors.allowed_origins"];

impl Settings {
    pub fn load() -> Result<Self, AppError> {
        core_config::load(LIST_KEYS)
    }
}
