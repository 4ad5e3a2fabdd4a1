//! Synthetic chart series.
//!
//! The backend keeps no history, so chart series are generated: a random
//! walk with a per-period baseline and upward trend. The RNG is passed in so
//! callers can seed it.

use std::fmt;
use std::str::FromStr;

use chrono::{Days, NaiveDate, Weekday};
use rand::Rng;
use serde::Serialize;

/// Noise amplitude applied at every step of [`synthetic_series`].
pub const VOLATILITY: f64 = 5.0;

/// Chart period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Period {
    Today,
    #[default]
    Week,
    Month,
    Year,
    AllTime,
}

impl Period {
    pub const ALL: [Self; 5] = [
        Self::Today,
        Self::Week,
        Self::Month,
        Self::Year,
        Self::AllTime,
    ];

    /// Days back from today covered by the series.
    #[must_use]
    pub const fn days(self) -> u64 {
        match self {
            Self::Today => 1,
            Self::Week => 7,
            Self::Month => 30,
            Self::Year => 365,
            Self::AllTime => 730,
        }
    }

    /// Starting value of the walk.
    #[must_use]
    pub const fn baseline(self) -> f64 {
        match self {
            Self::Today | Self::Month => 80.0,
            Self::Week => 100.0,
            Self::Year => 20.0,
            Self::AllTime => 10.0,
        }
    }

    /// Drift added at every step.
    #[must_use]
    pub const fn trend(self) -> f64 {
        match self {
            Self::Today => 0.5,
            Self::Week => 1.0,
            Self::Month => 1.5,
            Self::Year => 0.3,
            Self::AllTime => 0.2,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Week => "Week",
            Self::Month => "Month",
            Self::Year => "Year",
            Self::AllTime => "All Time",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error for an unrecognized period name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown period: {0}. Valid periods: today, week, month, year, all-time")]
pub struct PeriodError(pub String);

impl FromStr for Period {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "today" => Ok(Self::Today),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            "all time" | "all-time" | "alltime" | "all" => Ok(Self::AllTime),
            _ => Err(PeriodError(s.to_owned())),
        }
    }
}

/// One day of a chart series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: u32,
}

/// Random-walk series with one point per day from `today - days` through
/// `today`.
///
/// Each step adds the period's trend plus uniform noise in
/// `[-VOLATILITY, VOLATILITY)`; the walk never drops below zero.
pub fn synthetic_series<R: Rng>(
    period: Period,
    today: NaiveDate,
    rng: &mut R,
) -> Vec<SeriesPoint> {
    let days = period.days();
    let mut value = period.baseline();

    (0..=days)
        .rev()
        .filter_map(|back| today.checked_sub_days(Days::new(back)))
        .map(|date| {
            value = (value + period.trend() + rng.random_range(-VOLATILITY..VOLATILITY)).max(0.0);
            // value is non-negative and far below u32::MAX
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let rounded = value.round() as u32;
            SeriesPoint {
                date,
                value: rounded,
            }
        })
        .collect()
}

/// Synthetic activity for one weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekdayActivity {
    pub day: Weekday,
    pub customers: u32,
    pub staff: u32,
}

/// Monday through Sunday with customers in `10..60` and staff in `1..=10`.
pub fn weekday_activity<R: Rng>(rng: &mut R) -> Vec<WeekdayActivity> {
    let mut day = Weekday::Mon;
    let mut week = Vec::with_capacity(7);
    for _ in 0..7 {
        week.push(WeekdayActivity {
            day,
            customers: rng.random_range(10..60),
            staff: rng.random_range(1..=10),
        });
        day = day.succ();
    }
    week
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    /// Draws the lowest noise for the first `low` samples, zero noise after.
    struct ScriptedNoise {
        low: usize,
    }

    impl rand::RngCore for ScriptedNoise {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            if self.low > 0 {
                self.low -= 1;
                0
            } else {
                // mantissa 0.5 of the unit interval: the range midpoint
                1 << 63
            }
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(0);
        }
    }

    #[test]
    fn test_series_clamps_at_zero_and_recovers() {
        let mut rng = ScriptedNoise { low: 3 };
        let series = synthetic_series(Period::AllTime, today(), &mut rng);
        let values: Vec<u32> = series.iter().map(|p| p.value).collect();

        // 10 + 0.2 - 5 = 5.2, then 0.4, then -4.4 floored to 0
        assert_eq!(values[..3], [5, 0, 0]);
        // from 0 the walk climbs by the trend alone: 0.2, 0.4, 0.6, 0.8, 1.0
        assert_eq!(values[3..8], [0, 0, 1, 1, 1]);
        assert_eq!(values[12], 2);
    }

    #[test]
    fn test_period_parse() {
        assert_eq!("Week".parse::<Period>().unwrap(), Period::Week);
        assert_eq!("all time".parse::<Period>().unwrap(), Period::AllTime);
        assert!("fortnight".parse::<Period>().is_err());
        assert_eq!(Period::default(), Period::Week);
    }

    #[test]
    fn test_series_covers_period_inclusive() {
        let mut rng = StdRng::seed_from_u64(7);
        for period in Period::ALL {
            let series = synthetic_series(period, today(), &mut rng);
            let days = usize::try_from(period.days()).unwrap();
            assert_eq!(series.len(), days + 1, "{period}");
            assert_eq!(series.last().unwrap().date, today());
            assert_eq!(
                series[0].date,
                today().checked_sub_days(Days::new(period.days())).unwrap()
            );
        }
    }

    #[test]
    fn test_series_is_deterministic_for_a_seed() {
        let a = synthetic_series(Period::Month, today(), &mut StdRng::seed_from_u64(42));
        let b = synthetic_series(Period::Month, today(), &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_series_first_step_stays_near_baseline() {
        let mut rng = StdRng::seed_from_u64(1);
        let series = synthetic_series(Period::Week, today(), &mut rng);
        // baseline 100, trend 1, noise within 5
        assert!((96..=106).contains(&series[0].value));
    }

    #[test]
    fn test_weekday_activity_ranges() {
        let mut rng = StdRng::seed_from_u64(3);
        let week = weekday_activity(&mut rng);
        assert_eq!(week.len(), 7);
        assert_eq!(week[0].day, Weekday::Mon);
        assert_eq!(week[6].day, Weekday::Sun);
        for day in week {
            assert!((10..60).contains(&day.customers));
            assert!((1..=10).contains(&day.staff));
        }
    }
}
