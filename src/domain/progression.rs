//! Result records produced by the progression calculator

use crate::domain::period::Period;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One value per period, iterated and serialized outermost period first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PeriodValues<T>(BTreeMap<Period, T>);

impl<T> PeriodValues<T> {
    /// Evaluate `f` for every period
    pub fn from_fn(mut f: impl FnMut(Period) -> T) -> Self {
        Self(Period::ALL.into_iter().map(|period| (period, f(period))).collect())
    }

    pub fn get(&self, period: Period) -> Option<&T> {
        self.0.get(&period)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Period, &T)> + '_ {
        self.0.iter().map(|(period, value)| (*period, value))
    }

    /// Apply `f` to every value, keeping the period keys
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> PeriodValues<U> {
        PeriodValues(
            self.0
                .into_iter()
                .map(|(period, value)| (period, f(value)))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A reported figure: either an exact fraction or a whole number
///
/// Simplified percentages and elapsed-second counts are whole; precise
/// percentages are not. Serialized as a bare JSON number either way.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PeriodValue {
    Whole(i64),
    Exact(f64),
}

impl PeriodValue {
    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Whole(value) => value as f64,
            Self::Exact(value) => value,
        }
    }
}

/// Immutable output of one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionResult {
    timezone: String,
    timestamp: String,
    data: PeriodValues<PeriodValue>,
}

impl ProgressionResult {
    pub fn new(
        timezone: impl Into<String>,
        timestamp: impl Into<String>,
        data: PeriodValues<PeriodValue>,
    ) -> Self {
        Self {
            timezone: timezone.into(),
            timestamp: timestamp.into(),
            data,
        }
    }

    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    /// `YYYY-MM-DD HH:MM:SS` in the result's timezone
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn data(&self) -> &PeriodValues<PeriodValue> {
        &self.data
    }

    /// Shorthand for a single period's value
    pub fn value(&self, period: Period) -> Option<PeriodValue> {
        self.data.get(period).copied()
    }
}
