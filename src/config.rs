use crate::domain::config_types::{FormatMethod, Host, LogFormat, Port};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub progression: ProgressionSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: Host,
    pub port: Port,
    pub environment: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProgressionSettings {
    /// Timezone used when a request does not name one
    pub default_timezone: String,
    /// Format names the HTTP layer accepts
    pub format_methods: Vec<FormatMethod>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
    pub format: LogFormat,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            // Start with default values
            .set_default("application.host", "0.0.0.0")?
            .set_default("application.port", 8080)?
            .set_default("application.environment", environment.clone())?
            .set_default("progression.default_timezone", "UTC")?
            .set_default("progression.format_methods", vec!["round", "ceil", "floor"])?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "compact")?
            // Add configuration file if it exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{environment}")).required(false))
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables with prefix
            .add_source(
                Environment::with_prefix("TIME_PROGRESSION")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("progression.format_methods"),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Address the HTTP server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.application.host, self.application.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_can_be_loaded() {
        let settings = Settings::new();
        assert!(settings.is_ok());
    }

    #[test]
    fn test_default_format_methods() {
        let settings = Settings::new().unwrap();
        let methods: Vec<String> = settings
            .progression
            .format_methods
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(methods, ["round", "ceil", "floor"]);
    }

    #[test]
    fn test_bind_address_format() {
        let settings = Settings::new().unwrap();
        let address = settings.bind_address();
        assert!(address.ends_with(&format!(":{}", settings.application.port)));
        assert!(address.starts_with(&settings.application.host.to_string()));
    }
}
