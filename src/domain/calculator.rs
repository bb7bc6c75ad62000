//! Progression calculator
//!
//! Maps a single instant, seen from one timezone, to the fraction of the
//! enclosing year, month, week, day, hour and minute that has elapsed.
//!
//! ## Formulas
//!
//! Every period is measured at second granularity as
//! `elapsed_seconds / total_seconds * 100`. The year numerator counts whole
//! days as `day_of_year - 1`; the month numerator counts them as the raw,
//! 1-based `day_of_month`, so the month figure runs one day ahead and goes
//! past 100 during the last day of a month.

use crate::domain::period::{Period, PeriodContext, SECONDS_IN_DAY, SECONDS_IN_HOUR, SECONDS_IN_MINUTE};
use crate::domain::progression::{PeriodValue, PeriodValues, ProgressionResult};
use crate::domain::timezone::{TimezoneDatabase, UNIVERSAL_ZONE};
use chrono::{DateTime, Datelike, FixedOffset, NaiveDateTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use tracing::debug;

/// Layout of the human-readable timestamp in every result
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A point in time, with or without offset information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instant {
    /// Converted into the calculator's timezone
    Aware(DateTime<FixedOffset>),
    /// Taken to be local time in the calculator's timezone already
    Naive(NaiveDateTime),
}

impl Instant {
    /// The current moment in UTC
    pub fn now() -> Self {
        Self::Aware(Utc::now().fixed_offset())
    }
}

impl<Z: TimeZone> From<DateTime<Z>> for Instant {
    fn from(value: DateTime<Z>) -> Self {
        Self::Aware(value.fixed_offset())
    }
}

impl From<NaiveDateTime> for Instant {
    fn from(value: NaiveDateTime) -> Self {
        Self::Naive(value)
    }
}

/// Rounding rule applied by [`ProgressionCalculator::simplify`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimplifyMode {
    /// Nearest integer, halves to even
    #[default]
    Round,
    Ceil,
    Floor,
}

impl SimplifyMode {
    /// Case-insensitive parse; `None` for anything unrecognized
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "round" => Some(Self::Round),
            "ceil" => Some(Self::Ceil),
            "floor" => Some(Self::Floor),
            _ => None,
        }
    }

    pub fn apply(self, value: f64) -> i64 {
        let simplified = match self {
            Self::Round => value.round_ties_even(),
            Self::Ceil => value.ceil(),
            Self::Floor => value.floor(),
        };
        simplified as i64
    }
}

/// Computes progressions for one instant in one timezone
#[derive(Debug, Clone)]
pub struct ProgressionCalculator {
    timezone: Tz,
    local: NaiveDateTime,
    context: PeriodContext,
}

impl ProgressionCalculator {
    /// Build a calculator, falling back to UTC for unknown zone names
    ///
    /// `timezone` is a database name (`Europe/Berlin`) or the universal zone.
    /// Without an `instant` the current moment is used.
    pub fn new(database: &TimezoneDatabase, timezone: &str, instant: Option<Instant>) -> Self {
        let zone = database.zone_for(timezone).unwrap_or_else(|| {
            debug!(
                requested = timezone,
                fallback = UNIVERSAL_ZONE,
                "Unknown timezone, using the universal zone"
            );
            Tz::UTC
        });
        Self::in_zone(zone, instant.unwrap_or_else(Instant::now))
    }

    /// Build a calculator for an already resolved zone
    ///
    /// Year and month lengths come from the calendar date of `instant` as
    /// given, before conversion into `timezone`.
    pub fn in_zone(timezone: Tz, instant: Instant) -> Self {
        let (local, date) = match instant {
            Instant::Aware(moment) => (
                moment.with_timezone(&timezone).naive_local(),
                moment.date_naive(),
            ),
            Instant::Naive(local) => (local, local.date()),
        };

        Self {
            timezone,
            local,
            context: PeriodContext::for_date(date),
        }
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn period_context(&self) -> PeriodContext {
        self.context
    }

    /// Local wall-clock time the calculations are based on
    pub fn local_time(&self) -> NaiveDateTime {
        self.local
    }

    pub fn timestamp(&self) -> String {
        self.local.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Seconds counted towards `period`
    pub fn elapsed_seconds(&self, period: Period) -> u32 {
        let local = &self.local;
        let minute = local.second();
        let hour = local.minute() * SECONDS_IN_MINUTE + minute;
        let day = local.hour() * SECONDS_IN_HOUR + hour;

        match period {
            Period::Year => (local.ordinal() - 1) * SECONDS_IN_DAY + day,
            Period::Month => local.day() * SECONDS_IN_DAY + day,
            Period::Week => {
                (local.weekday().num_days_from_monday() * 24 + local.hour()) * SECONDS_IN_HOUR
                    + hour
            }
            Period::Day => day,
            Period::Hour => hour,
            Period::Minute => minute,
        }
    }

    pub fn percent(&self, period: Period) -> f64 {
        f64::from(self.elapsed_seconds(period)) / f64::from(self.context.total_seconds(period))
            * 100.0
    }

    pub fn year_percent(&self) -> f64 {
        self.percent(Period::Year)
    }

    pub fn month_percent(&self) -> f64 {
        self.percent(Period::Month)
    }

    pub fn week_percent(&self) -> f64 {
        self.percent(Period::Week)
    }

    pub fn day_percent(&self) -> f64 {
        self.percent(Period::Day)
    }

    pub fn hour_percent(&self) -> f64 {
        self.percent(Period::Hour)
    }

    pub fn minute_percent(&self) -> f64 {
        self.percent(Period::Minute)
    }

    /// Raw percentages for all six periods
    pub fn calculate(&self) -> PeriodValues<f64> {
        PeriodValues::from_fn(|period| self.percent(period))
    }

    pub fn precise(&self) -> ProgressionResult {
        self.result(self.calculate().map(PeriodValue::Exact))
    }

    /// Percentages rounded with the named mode
    ///
    /// The name is matched case-insensitively. Unknown names yield the same
    /// record as [`precise`](Self::precise).
    pub fn simplify(&self, mode: &str) -> ProgressionResult {
        match SimplifyMode::parse(mode) {
            Some(mode) => self.simplify_with(mode),
            None => self.precise(),
        }
    }

    pub fn simplify_with(&self, mode: SimplifyMode) -> ProgressionResult {
        self.result(
            self.calculate()
                .map(|percent| PeriodValue::Whole(mode.apply(percent))),
        )
    }

    /// Elapsed seconds instead of percentages
    pub fn elapsed(&self) -> ProgressionResult {
        self.result(PeriodValues::from_fn(|period| {
            PeriodValue::Whole(i64::from(self.elapsed_seconds(period)))
        }))
    }

    fn result(&self, data: PeriodValues<PeriodValue>) -> ProgressionResult {
        ProgressionResult::new(self.timezone.name(), self.timestamp(), data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn naive(year: i32, month: u32, day: u32, h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn utc_calculator(local: NaiveDateTime) -> ProgressionCalculator {
        ProgressionCalculator::new(&TimezoneDatabase::iana(), "UTC", Some(local.into()))
    }

    fn value(result: &ProgressionResult, period: Period) -> f64 {
        result.value(period).unwrap().as_f64()
    }

    #[test]
    fn test_midday_day_percent() {
        let calculator = utc_calculator(naive(2024, 3, 1, 12, 0, 0));
        assert_eq!(calculator.day_percent(), 50.0);
        assert_eq!(calculator.hour_percent(), 0.0);
        assert_eq!(calculator.minute_percent(), 0.0);
    }

    #[test]
    fn test_week_percent_on_thursday() {
        let calculator = utc_calculator(naive(2024, 7, 4, 0, 0, 0));
        let expected = f64::from(3 * 24 * 3600) / f64::from(7 * 24 * 3600) * 100.0;
        assert_eq!(calculator.week_percent(), expected);
        assert!((calculator.week_percent() - 42.857_142_857).abs() < 1e-6);
    }

    #[test]
    fn test_start_of_year() {
        let calculator = utc_calculator(naive(2023, 1, 1, 0, 0, 0));
        assert_eq!(calculator.year_percent(), 0.0);
        assert_eq!(calculator.day_percent(), 0.0);
        assert_eq!(calculator.hour_percent(), 0.0);
        assert_eq!(calculator.minute_percent(), 0.0);
        // 2023-01-01 is a Sunday
        assert_eq!(calculator.week_percent(), 6.0 / 7.0 * 100.0);
        // Month counts the current day as complete
        assert_eq!(calculator.month_percent(), 1.0 / 31.0 * 100.0);
    }

    #[test]
    fn test_start_of_week_is_zero() {
        // 2024-01-01 is a Monday
        let calculator = utc_calculator(naive(2024, 1, 1, 0, 0, 0));
        assert_eq!(calculator.week_percent(), 0.0);
        assert_eq!(calculator.year_percent(), 0.0);
    }

    #[test]
    fn test_year_and_month_count_days_differently() {
        let calculator = utc_calculator(naive(2023, 1, 11, 0, 0, 0));
        assert_eq!(calculator.elapsed_seconds(Period::Year), 10 * 86_400);
        assert_eq!(calculator.elapsed_seconds(Period::Month), 11 * 86_400);
    }

    #[test]
    fn test_month_exceeds_hundred_on_last_day() {
        let calculator = utc_calculator(naive(2023, 4, 30, 12, 0, 0));
        assert!(calculator.month_percent() > 100.0);
        assert!(calculator.year_percent() < 100.0);
    }

    #[rstest]
    #[case(naive(2024, 12, 31, 23, 59, 59), 366)]
    #[case(naive(2023, 12, 31, 23, 59, 59), 365)]
    fn test_year_uses_leap_rule(#[case] local: NaiveDateTime, #[case] days: u32) {
        let calculator = utc_calculator(local);
        assert_eq!(calculator.period_context().days_in_year(), days);
        let expected = f64::from(days * 86_400 - 1) / f64::from(days * 86_400) * 100.0;
        assert_eq!(calculator.year_percent(), expected);
        assert!(calculator.year_percent() < 100.0);
    }

    #[test]
    fn test_elapsed_seconds() {
        // Wednesday
        let calculator = utc_calculator(naive(2024, 2, 14, 6, 30, 15));
        assert_eq!(calculator.elapsed_seconds(Period::Minute), 15);
        assert_eq!(calculator.elapsed_seconds(Period::Hour), 30 * 60 + 15);
        assert_eq!(calculator.elapsed_seconds(Period::Day), 6 * 3600 + 30 * 60 + 15);
        assert_eq!(
            calculator.elapsed_seconds(Period::Week),
            (2 * 24 + 6) * 3600 + 30 * 60 + 15
        );
        assert_eq!(
            calculator.elapsed_seconds(Period::Year),
            44 * 86_400 + 6 * 3600 + 30 * 60 + 15
        );

        let elapsed = calculator.elapsed();
        assert_eq!(elapsed.value(Period::Minute), Some(PeriodValue::Whole(15)));
        assert_eq!(elapsed.timestamp(), "2024-02-14 06:30:15");
    }

    #[test]
    fn test_aware_instant_is_converted() {
        let moment = Utc.with_ymd_and_hms(2024, 7, 4, 12, 0, 0).unwrap();
        let calculator =
            ProgressionCalculator::new(&TimezoneDatabase::iana(), "Europe/Berlin", Some(moment.into()));

        assert_eq!(calculator.timezone(), chrono_tz::Europe::Berlin);
        assert_eq!(calculator.timestamp(), "2024-07-04 14:00:00");
        assert_eq!(calculator.precise().timezone(), "Europe/Berlin");
    }

    #[test]
    fn test_year_length_follows_instant_before_conversion() {
        let moment = Utc.with_ymd_and_hms(2023, 12, 31, 20, 0, 0).unwrap();
        let calculator =
            ProgressionCalculator::new(&TimezoneDatabase::iana(), "Asia/Tokyo", Some(moment.into()));

        assert_eq!(calculator.timestamp(), "2024-01-01 05:00:00");
        assert!(!calculator.period_context().is_leap_year());
        assert_eq!(calculator.period_context().days_in_year(), 365);
        assert_eq!(calculator.year_percent(), 5.0 * 3600.0 / (365.0 * 86_400.0) * 100.0);
    }

    #[test]
    fn test_month_length_follows_instant_before_conversion() {
        let moment = Utc.with_ymd_and_hms(2024, 1, 31, 20, 0, 0).unwrap();
        let calculator =
            ProgressionCalculator::new(&TimezoneDatabase::iana(), "Asia/Tokyo", Some(moment.into()));

        assert_eq!(calculator.timestamp(), "2024-02-01 05:00:00");
        assert!(calculator.period_context().is_leap_year());
        assert_eq!(calculator.period_context().days_in_month(), 31);
        assert_eq!(
            calculator.month_percent(),
            f64::from(86_400 + 5 * 3600) / f64::from(31 * 86_400) * 100.0
        );
    }

    #[test]
    fn test_naive_instant_is_used_as_is() {
        let calculator = ProgressionCalculator::new(
            &TimezoneDatabase::iana(),
            "America/New_York",
            Some(naive(2024, 3, 1, 12, 0, 0).into()),
        );
        assert_eq!(calculator.timestamp(), "2024-03-01 12:00:00");
        assert_eq!(calculator.day_percent(), 50.0);
    }

    #[rstest]
    #[case("Mars/Olympus_Mons")]
    #[case("Europe-Berlin")]
    #[case("")]
    fn test_unknown_timezone_falls_back_to_utc(#[case] timezone: &str) {
        let moment = Utc.with_ymd_and_hms(2024, 7, 4, 12, 0, 0).unwrap();
        let calculator =
            ProgressionCalculator::new(&TimezoneDatabase::iana(), timezone, Some(moment.into()));

        assert_eq!(calculator.timezone(), Tz::UTC);
        assert_eq!(calculator.timestamp(), "2024-07-04 12:00:00");
        assert_eq!(calculator.precise().timezone(), "UTC");
    }

    #[test]
    fn test_defaults_to_now() {
        let before = Utc::now().naive_utc();
        let calculator = ProgressionCalculator::new(&TimezoneDatabase::iana(), "UTC", None);
        let after = Utc::now().naive_utc();

        assert!(calculator.local_time() >= before && calculator.local_time() <= after);
    }

    #[rstest]
    #[case("round", 10.5, 10)]
    #[case("round", 11.5, 12)]
    #[case("round", 10.4, 10)]
    #[case("round", 10.6, 11)]
    #[case("ceil", 10.2, 11)]
    #[case("ceil", 10.0, 10)]
    #[case("floor", 10.8, 10)]
    #[case("FLOOR", 10.8, 10)]
    #[case("Ceil", 0.1, 1)]
    fn test_simplify_modes(#[case] name: &str, #[case] raw: f64, #[case] expected: i64) {
        let mode = SimplifyMode::parse(name).unwrap();
        assert_eq!(mode.apply(raw), expected);
    }

    #[test]
    fn test_unknown_simplify_mode() {
        assert_eq!(SimplifyMode::parse("bogus"), None);
        assert_eq!(SimplifyMode::parse(""), None);
        assert_eq!(SimplifyMode::default(), SimplifyMode::Round);
    }

    #[test]
    fn test_simplify_applies_to_every_period() {
        let calculator = utc_calculator(naive(2024, 5, 17, 15, 47, 23));
        let precise = calculator.precise();

        for (name, mode) in [
            ("round", SimplifyMode::Round),
            ("ceil", SimplifyMode::Ceil),
            ("floor", SimplifyMode::Floor),
        ] {
            let simplified = calculator.simplify(name);
            assert_eq!(simplified.timezone(), precise.timezone());
            assert_eq!(simplified.timestamp(), precise.timestamp());
            for period in Period::ALL {
                assert_eq!(
                    simplified.value(period),
                    Some(PeriodValue::Whole(mode.apply(value(&precise, period))))
                );
            }
        }
    }

    #[test]
    fn test_bogus_simplify_is_precise() {
        let calculator = utc_calculator(naive(2024, 5, 17, 15, 47, 23));
        assert_eq!(calculator.simplify("bogus"), calculator.precise());
    }

    #[test]
    fn test_calculate_covers_all_periods_in_order() {
        let calculator = utc_calculator(naive(2024, 5, 17, 15, 47, 23));
        let periods: Vec<Period> = calculator.calculate().iter().map(|(p, _)| p).collect();
        assert_eq!(periods, Period::ALL.to_vec());
    }
}
