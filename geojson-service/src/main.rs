use anyhow::Context;
use geojson_service::{config::Settings, startup::Application};
use service_core::observability::{init_metrics, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("Failed to load settings")?;

    init_tracing("geojson-service", &settings.telemetry)?;

    // Recorder must be installed before the first request records anything
    init_metrics()?;

    let application = Application::build(settings).await?;
    application.run_until_stopped().await?;

    tracing::info!("geojson-service stopped");
    Ok(())
}
