use crate::application::ProgressionService;
use crate::config::Settings;
use crate::domain::TimezoneResolver;
use crate::infrastructure::log_messages::application;
use crate::server;
use crate::Result;
use axum::Router;
use tokio::net::TcpListener;
use tracing::{info, instrument, warn};

/// Main application struct that coordinates all components
pub struct Application {
    settings: Settings,
    service: ProgressionService,
}

impl Application {
    #[instrument]
    pub fn new() -> Result<Self> {
        Ok(Self::with_settings(Settings::new()?))
    }

    pub fn with_settings(settings: Settings) -> Self {
        let service = ProgressionService::new(TimezoneResolver::default(), &settings.progression);
        Self { settings, service }
    }

    /// The HTTP router with middleware applied
    pub fn router(&self) -> Router {
        server::build_router(self.service.clone())
    }

    #[instrument(skip(self))]
    pub async fn run(self) -> Result<()> {
        let address = self.settings.bind_address();
        info!(
            address = %address,
            environment = %self.settings.application.environment,
            "{}",
            application::STARTING_SERVER
        );

        let listener = TcpListener::bind(&address).await?;
        info!(
            default_timezone = self.service.default_timezone(),
            timezones = self.service.resolver().database().len(),
            "{}",
            application::STARTED_SUCCESSFULLY
        );

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("{}", application::STOPPED);
        Ok(())
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn service(&self) -> &ProgressionService {
        &self.service
    }
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!(error = %error, "{}", application::SIGNAL_HANDLER_FAILED);
        std::future::pending::<()>().await;
    }
    info!("{}", application::SHUTTING_DOWN);
}
