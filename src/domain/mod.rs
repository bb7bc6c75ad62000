//! Domain types and business logic for time progression
//!
//! Everything in here is synchronous and free of I/O: the timezone database
//! is read-only and every calculation works on values owned by the caller.

pub mod calculator;
pub mod config_types;
pub mod period;
pub mod progression;
pub mod timezone;

pub use calculator::{Instant, ProgressionCalculator, SimplifyMode, TIMESTAMP_FORMAT};
pub use period::{Period, PeriodContext};
pub use progression::{PeriodValue, PeriodValues, ProgressionResult};
pub use timezone::{TimezoneDatabase, TimezoneId, TimezoneResolver, UNIVERSAL_ZONE};
