//! The "now" source for current-period queries.
//!
//! Everything else in the crate is a pure function of its inputs. Reading
//! the wall clock happens only through a [`Clock`], so callers can pin
//! "now" with a [`FixedClock`] in tests.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use serde::Serialize;

/// Supplies the current instant.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the operating system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Pin "now" to a Unix timestamp. `None` if the timestamp is out of range.
    pub fn at_timestamp(seconds: i64) -> Option<Self> {
        DateTime::from_timestamp(seconds, 0).map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// The calendar position of "now" in a given zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurrentPeriod {
    /// Gregorian year.
    pub year: i32,
    /// 1-12.
    pub month: u32,
    /// ISO week number.
    pub week: u32,
    /// ISO week-numbering year. Differs from `year` for the days around
    /// January 1 that belong to a neighbouring year's week sequence.
    pub week_year: i32,
}

impl CurrentPeriod {
    pub fn at<Z: TimeZone>(now: DateTime<Utc>, zone: &Z) -> Self {
        let local = now.with_timezone(zone);
        let iso = local.iso_week();
        Self {
            year: local.year(),
            month: local.month(),
            week: iso.week(),
            week_year: iso.year(),
        }
    }
}
