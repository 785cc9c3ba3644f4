use crate::error::AppError;
use config::{Config as Cfg, Environment, File, Map};
use serde::{Deserialize, de::DeserializeOwned};

/// Base name of the optional configuration file looked up in the working
/// directory (`configuration.yaml`, `configuration.toml`, ...).
pub const CONFIGURATION_FILE: &str = "configuration";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct TelemetrySettings {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// gRPC OTLP collector, e.g. `http://tempo:4317`. Spans are not exported when unset.
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            otlp_endpoint: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Loads `.env`, then the optional configuration file, then `APP_*`
/// environment variables (`APP_SERVER__PORT=9000`), later sources winning.
///
/// `list_keys` names the keys whose env value is a comma-separated list,
/// e.g. `cors.allowed_origins`.
pub fn load<T: DeserializeOwned>(list_keys: &[&str]) -> Result<T, AppError> {
    dotenvy::dotenv().ok();

    load_from(CONFIGURATION_FILE, None, list_keys)
}

/// Same layering as [`load`], with an explicit file base name and, when
/// `env` is `Some`, that map in place of the process environment.
pub fn load_from<T: DeserializeOwned>(
    file_name: &str,
    env: Option<Map<String, String>>,
    list_keys: &[&str],
) -> Result<T, AppError> {
    let mut environment = Environment::with_prefix("APP")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .source(env);

    if !list_keys.is_empty() {
        environment = environment.list_separator(",");
        for key in list_keys {
            environment = environment.with_list_parse_key(key);
        }
    }

    let config = Cfg::builder()
        .add_source(File::with_name(file_name).required(false))
        .add_source(environment)
        .build()?;

    Ok(config.try_deserialize()?)
}
