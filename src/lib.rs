//! Time Progression - how far along the current minute, hour, day, week,
//! month and year are in any timezone
//!
//! The core lives in [`domain`]; [`application::ProgressionService`] is the
//! boundary the HTTP layer in [`server`] talks to.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod server;

pub use application::{Application, ProgressionService};
pub use error::{Error, Result};
