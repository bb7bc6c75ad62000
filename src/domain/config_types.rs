//! Type-safe configuration types
//!
//! This module provides domain-specific types for configuration values,
//! ensuring validation at boundaries and preventing primitive obsession.

use nutype::nutype;
use serde::{Deserialize, Serialize};

/// Host address the HTTP server binds to
#[nutype(
    validate(not_empty, len_char_max = 255),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct Host(String);

impl Default for Host {
    fn default() -> Self {
        Self::try_new("0.0.0.0".to_string()).expect("Default host is valid")
    }
}

/// Port number for network services
#[nutype(
    validate(predicate = |port| (1..=65535).contains(port)),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct Port(u16);

impl Default for Port {
    fn default() -> Self {
        Self::try_new(8080).expect("Default port is valid")
    }
}

/// Name of an output format accepted on the `format` query parameter
///
/// Lowercase ASCII letters only, matching how simplify modes are spelled.
#[nutype(
    sanitize(trim),
    validate(
        not_empty,
        len_char_max = 32,
        predicate = |name: &str| name.chars().all(|c| c.is_ascii_lowercase())
    ),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct FormatMethod(String);

/// Output layout of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
    #[default]
    Compact,
}
