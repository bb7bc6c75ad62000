//! Boundary between the HTTP layer and the progression core
//!
//! Identifiers are validated strictly here before a calculator is built, so
//! callers see `InvalidTimezone` / `InvalidFormat` instead of the calculator's
//! silent fallback to UTC.

use crate::config::ProgressionSettings;
use crate::domain::config_types::FormatMethod;
use crate::domain::{Instant, ProgressionCalculator, ProgressionResult, TimezoneResolver};
use crate::error::{Error, Result};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Shared, cheaply cloneable entry point used by request handlers
#[derive(Debug, Clone)]
pub struct ProgressionService {
    resolver: Arc<TimezoneResolver>,
    default_timezone: Arc<str>,
    format_methods: Arc<[String]>,
}

impl ProgressionService {
    pub fn new(resolver: TimezoneResolver, settings: &ProgressionSettings) -> Self {
        Self {
            resolver: Arc::new(resolver),
            default_timezone: Arc::from(settings.default_timezone.as_str()),
            format_methods: settings
                .format_methods
                .iter()
                .cloned()
                .map(FormatMethod::into_inner)
                .collect(),
        }
    }

    pub fn default_timezone(&self) -> &str {
        &self.default_timezone
    }

    pub fn format_methods(&self) -> &[String] {
        &self.format_methods
    }

    pub fn resolver(&self) -> &TimezoneResolver {
        &self.resolver
    }

    /// Compute a progression record
    ///
    /// A missing `timezone` means the configured default. A missing `format`
    /// yields precise percentages; otherwise the format must be one of the
    /// configured names.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidTimezone`] for unknown identifiers, checked first, then
    /// [`Error::InvalidFormat`] for unrecognized format names.
    #[instrument(skip(self, instant))]
    pub fn compute_progression(
        &self,
        timezone: Option<&str>,
        instant: Option<Instant>,
        format: Option<&str>,
    ) -> Result<ProgressionResult> {
        let calculator = self.calculator(timezone, instant)?;

        match format {
            Some(format) if !self.is_known_format(format) => {
                Err(Error::InvalidFormat(format.to_string()))
            }
            Some(format) => Ok(calculator.simplify(format)),
            None => Ok(calculator.precise()),
        }
    }

    /// Elapsed seconds of every period rather than percentages
    ///
    /// # Errors
    ///
    /// [`Error::InvalidTimezone`] for unknown identifiers.
    #[instrument(skip(self, instant))]
    pub fn elapsed_seconds(
        &self,
        timezone: Option<&str>,
        instant: Option<Instant>,
    ) -> Result<ProgressionResult> {
        Ok(self.calculator(timezone, instant)?.elapsed())
    }

    /// Public vocabulary of timezone identifiers
    pub fn list_timezones(&self) -> Vec<String> {
        self.resolver.list_all()
    }

    fn is_known_format(&self, format: &str) -> bool {
        self.format_methods.iter().any(|known| known == format)
    }

    fn calculator(
        &self,
        timezone: Option<&str>,
        instant: Option<Instant>,
    ) -> Result<ProgressionCalculator> {
        let requested = timezone.unwrap_or(self.default_timezone());
        let resolved = self.resolver.resolve(requested)?;
        debug!(
            requested,
            resolved = resolved.database_name(),
            "Timezone resolved"
        );

        Ok(ProgressionCalculator::new(
            self.resolver.database(),
            resolved.database_name(),
            instant,
        ))
    }
}
