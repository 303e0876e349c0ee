use std::sync::Arc;

use anyhow::Result;
use nimbus::{NimbusConfig, OpenMeteoClient, WeatherWidget, telemetry, web};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = NimbusConfig::load();
    let config_error = config.as_ref().err().map(|e| format!("{e:#}"));
    let config = config.unwrap_or_default();

    telemetry::init(&config.logging)?;
    if let Some(err) = config_error {
        tracing::warn!("Failed to load config, using defaults: {}", err);
    }

    info!("Nimbus v{} starting...", nimbus::VERSION);

    let provider = Arc::new(OpenMeteoClient::new(config.weather.clone())?);
    let widget = WeatherWidget::new(provider, &config.defaults.location);

    // First load searches the default location in the background
    let initial = widget.clone();
    let default_location = config.defaults.location.clone();
    tokio::spawn(async move {
        initial.submit(&default_location).await;
    });

    web::run(&config, widget).await
}
