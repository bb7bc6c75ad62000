use anyhow::Result;
use time_progression::config::Settings;
use time_progression::infrastructure::{log_messages, telemetry};
use time_progression::Application;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::new()?;
    telemetry::init_tracing(&settings.logging).map_err(|e| anyhow::anyhow!(e))?;

    info!("{}", log_messages::application::STARTING);
    info!(
        environment = %settings.application.environment,
        "{}",
        log_messages::configuration::CONFIG_LOADED
    );

    let app = Application::with_settings(settings);
    app.run().await?;

    Ok(())
}
