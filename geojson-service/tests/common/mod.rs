#![allow(dead_code)]

use geojson_service::config::{CorsSettings, DataSettings, Settings};
use geojson_service::startup::Application;
use service_core::config::{ServerSettings, TelemetrySettings};
use std::path::PathBuf;
use tempfile::TempDir;

pub const FEATURE_COLLECTION: &str = r#"{"type":"FeatureCollection","features":[]}"#;

pub fn test_settings(data_path: PathBuf) -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0, // Random port
        },
        data: DataSettings { path: data_path },
        cors: CorsSettings::default(),
        telemetry: TelemetrySettings::default(),
    }
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub data_path: PathBuf,
    // Dropping the directory removes the data file
    _dir: TempDir,
}

impl TestApp {
    /// Spawn the service against an empty temp directory; the data file does
    /// not exist until `write_data` is called.
    pub async fn spawn() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_path = dir.path().join("data.geojson");

        let app = Application::build(test_settings(data_path.clone()))
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            data_path,
            _dir: dir,
        }
    }

    pub fn write_data(&self, contents: &str) {
        std::fs::write(&self.data_path, contents).expect("Failed to write data file");
    }

    pub async fn get_geojson(&self) -> reqwest::Response {
        reqwest::Client::new()
            .get(format!("{}/geojsondata", self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }
}
