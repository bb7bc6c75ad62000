//! Timezone identifiers and the read-only zone database
//!
//! Zone names are stored the way the IANA database spells them
//! (`Europe/Berlin`). The public vocabulary swaps the region separator for a
//! dash (`Europe-Berlin`) so identifiers survive as a single path or query
//! segment. The swap is cosmetic and lives in [`to_display`] / [`to_internal`].

use crate::error::{Error, Result};
use chrono_tz::Tz;
use derive_more::Display;
use std::collections::HashMap;
use std::sync::Arc;

/// The zero-offset zone, valid whether or not the database lists it
pub const UNIVERSAL_ZONE: &str = "UTC";

pub const INTERNAL_DELIMITER: char = '/';
pub const DISPLAY_DELIMITER: char = '-';

/// Convert a database zone name into its public form
pub fn to_display(name: &str) -> String {
    name.replace(INTERNAL_DELIMITER, &DISPLAY_DELIMITER.to_string())
}

/// Convert a public identifier back into a database zone name
pub fn to_internal(name: &str) -> String {
    name.replace(DISPLAY_DELIMITER, &INTERNAL_DELIMITER.to_string())
}

/// Immutable table of known zones, in the database's native order
#[derive(Debug, Clone)]
pub struct TimezoneDatabase {
    zones: Vec<Tz>,
    by_name: HashMap<&'static str, Tz>,
}

impl TimezoneDatabase {
    /// The full IANA database compiled into `chrono-tz`
    pub fn iana() -> Self {
        Self::from_zones(chrono_tz::TZ_VARIANTS.iter().copied())
    }

    /// Build a database from an explicit set of zones
    pub fn from_zones(zones: impl IntoIterator<Item = Tz>) -> Self {
        let zones: Vec<Tz> = zones.into_iter().collect();
        let by_name = zones.iter().map(|zone| (zone.name(), *zone)).collect();
        Self { zones, by_name }
    }

    /// Look up a zone by its database name
    pub fn lookup(&self, name: &str) -> Option<Tz> {
        self.by_name.get(name).copied()
    }

    /// Database names in native order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.zones.iter().map(|zone| zone.name())
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Permissive lookup: the universal zone or a database member, otherwise
    /// `None`
    pub fn zone_for(&self, name: &str) -> Option<Tz> {
        if name == UNIVERSAL_ZONE {
            Some(Tz::UTC)
        } else {
            self.lookup(name)
        }
    }
}

/// A timezone that passed validation
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{display}")]
pub struct TimezoneId {
    display: String,
    zone: Tz,
}

impl TimezoneId {
    fn from_zone(zone: Tz) -> Self {
        Self {
            display: to_display(zone.name()),
            zone,
        }
    }

    /// The universal zero-offset zone
    pub fn universal() -> Self {
        Self {
            display: UNIVERSAL_ZONE.to_string(),
            zone: Tz::UTC,
        }
    }

    /// Public (dash-delimited) form
    pub fn as_str(&self) -> &str {
        &self.display
    }

    /// Database (slash-delimited) form
    pub fn database_name(&self) -> &'static str {
        self.zone.name()
    }

    pub fn zone(&self) -> Tz {
        self.zone
    }
}

/// Validates caller-supplied identifiers against a [`TimezoneDatabase`]
#[derive(Debug, Clone)]
pub struct TimezoneResolver {
    database: Arc<TimezoneDatabase>,
    // Zone names that already contain a dash (America/Port-au-Prince) cannot
    // be recovered by the plain delimiter swap.
    by_display: HashMap<String, Tz>,
}

impl TimezoneResolver {
    pub fn new(database: Arc<TimezoneDatabase>) -> Self {
        let by_display = database
            .zones
            .iter()
            .map(|zone| (to_display(zone.name()), *zone))
            .collect();
        Self {
            database,
            by_display,
        }
    }

    pub fn database(&self) -> &TimezoneDatabase {
        &self.database
    }

    /// Strictly validate an identifier
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTimezone`] when the candidate is neither the
    /// universal zone nor a database member.
    pub fn resolve(&self, candidate: &str) -> Result<TimezoneId> {
        if candidate == UNIVERSAL_ZONE {
            return Ok(TimezoneId::universal());
        }

        self.database
            .lookup(&to_internal(candidate))
            .or_else(|| self.by_display.get(candidate).copied())
            .map(TimezoneId::from_zone)
            .ok_or_else(|| Error::InvalidTimezone(candidate.to_string()))
    }

    /// Every database zone in public form, in database order
    pub fn list_all(&self) -> Vec<String> {
        self.database.names().map(to_display).collect()
    }
}

impl Default for TimezoneResolver {
    fn default() -> Self {
        Self::new(Arc::new(TimezoneDatabase::iana()))
    }
}
