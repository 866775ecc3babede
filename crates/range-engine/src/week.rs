//! ISO week numbering.
//!
//! The last ISO week of a year can contain days of the next Gregorian year
//! (2015-W53 ends on Sunday 2016-01-03). A clock read on 2016-01-01 reports
//! week 53 while the calendar year is already 2016, so a `(year, week)` pair
//! supplied by a caller is not always the ISO week-year pair. [`resolve_week`]
//! maps it back.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::debug;

use crate::navigation::{next_year, previous_year};

/// An ISO week of a specific year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct YearWeek {
    pub year: i32,
    /// 1-based ISO week number.
    pub week: u32,
}

impl YearWeek {
    pub fn new(year: i32, week: u32) -> Self {
        Self { year, week }
    }
}

/// Number of ISO weeks in `year` (52 or 53).
///
/// December 28 always falls in the last ISO week of its year, so its week
/// number is the year's week count. Returns 0 for an absent (zero) year.
///
/// ```
/// use range_engine::week::year_week_count;
///
/// assert_eq!(year_week_count(2015), 53);
/// assert_eq!(year_week_count(2016), 52);
/// ```
pub fn year_week_count(year: i32) -> u32 {
    if year == 0 {
        return 0;
    }
    NaiveDate::from_ymd_opt(year, 12, 28)
        .map(|date| date.iso_week().week())
        .unwrap_or(0)
}

/// The effective `(year, week)` pair used for boundary computation.
///
/// When `week` exceeds the week count of `year`, the week belongs to the
/// tail of the previous year's sequence; the year steps back (clamped) and
/// the week number is kept.
pub fn resolve_week(year: i32, week: u32) -> Option<YearWeek> {
    if year == 0 || week == 0 {
        return None;
    }
    let weeks = year_week_count(year);
    if week > weeks {
        let effective = previous_year(year)?;
        debug!(year, week, weeks, effective, "week exceeds year, using previous year");
        return Some(YearWeek::new(effective, week));
    }
    Some(YearWeek::new(year, week))
}

/// The week before `(year, week)`. Week 1 steps back to the last week of the
/// (clamped) previous year.
pub fn previous_week(year: i32, week: u32) -> Option<YearWeek> {
    if year == 0 || week == 0 {
        return None;
    }
    if week <= 1 {
        let year = previous_year(year)?;
        Some(YearWeek::new(year, year_week_count(year)))
    } else {
        Some(YearWeek::new(year, week - 1))
    }
}

/// The week after `(year, week)`. The last week of a year rolls over to
/// week 1 of the (clamped) next year.
pub fn next_week(year: i32, week: u32) -> Option<YearWeek> {
    if year == 0 || week == 0 {
        return None;
    }
    if week >= year_week_count(year) {
        Some(YearWeek::new(next_year(year)?, 1))
    } else {
        Some(YearWeek::new(year, week + 1))
    }
}
