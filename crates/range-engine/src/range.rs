//! Begin/end boundaries for calendar periods.
//!
//! A [`RangeResolver`] binds a calendar zone (the zone whose midnights
//! delimit days) and a [`Clock`]. Period lookups take plain year, month and
//! week numbers; "this period" lookups read the clock.
//!
//! Ranges are closed on both ends: `end` is the last second inside the
//! period (23:59:59 of its last day). Spans are fixed multiples of 86 400
//! seconds from the first midnight, so zones with daylight-saving shifts
//! get wall-clock drift inside a range.
//!
//! Absent input (a zero year, month, week or instant) yields `None`.

use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, TimeZone, Utc, Weekday};
use chrono_tz::Tz;
use serde::Serialize;
use tracing::debug;

use crate::clock::{Clock, CurrentPeriod, SystemClock};
use crate::error::{RangeError, Result};
use crate::input::parse_timezone;
use crate::navigation::{next_month, previous_month, MAX_YEAR};
use crate::week::resolve_week;

/// Seconds since the Unix epoch.
pub type Instant = i64;

pub const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Day cells in a 6-row month grid.
pub const GRID_DAYS: i64 = 6 * 7;

// ── TimeRange ───────────────────────────────────────────────────────────────

/// An inclusive span of instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TimeRange {
    pub begin: Instant,
    pub end: Instant,
}

impl TimeRange {
    /// A range from `begin` to `end` inclusive. `None` if `end < begin`.
    pub fn new(begin: Instant, end: Instant) -> Option<Self> {
        (end >= begin).then_some(Self { begin, end })
    }

    /// A range starting at `begin` lasting `seconds`.
    fn spanning(begin: Instant, seconds: i64) -> Self {
        Self {
            begin,
            end: begin + seconds - 1,
        }
    }

    /// Length in seconds, counting both ends.
    pub fn duration_seconds(&self) -> i64 {
        self.end - self.begin + 1
    }

    pub fn contains(&self, instant: Instant) -> bool {
        (self.begin..=self.end).contains(&instant)
    }

    pub fn contains_range(&self, other: &TimeRange) -> bool {
        self.begin <= other.begin && other.end <= self.end
    }
}

// ── DaySlot ─────────────────────────────────────────────────────────────────

/// One calendar day of a [`RangeResolver::days_in_range`] enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySlot {
    pub date: NaiveDate,
    /// `YYYY-MM-DD`.
    pub key: String,
    /// `MM-DD`.
    pub label: String,
    /// Last second of the day.
    pub end: Instant,
}

// ── ViewType ────────────────────────────────────────────────────────────────

/// Preset windows offered to reporting views, identified by a numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ViewType {
    /// Code 1: today and the six days before it.
    #[default]
    LastSevenDays,
    /// Code 2: today and the 29 days before it.
    LastThirtyDays,
    /// Code 3: the whole previous month.
    PreviousMonth,
    /// Code 4: the whole current month.
    ThisMonth,
}

impl ViewType {
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Self::LastSevenDays),
            2 => Some(Self::LastThirtyDays),
            3 => Some(Self::PreviousMonth),
            4 => Some(Self::ThisMonth),
            _ => None,
        }
    }

    pub fn code(self) -> u32 {
        match self {
            Self::LastSevenDays => 1,
            Self::LastThirtyDays => 2,
            Self::PreviousMonth => 3,
            Self::ThisMonth => 4,
        }
    }
}

impl FromStr for ViewType {
    type Err = RangeError;

    /// An empty or zero code selects the default view.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self::default());
        }
        let view = match s.parse::<u32>() {
            Ok(0) => Some(Self::default()),
            Ok(code) => Self::from_code(code),
            Err(_) => None,
        };
        view.ok_or_else(|| RangeError::UnknownViewType(format!("'{s}'")))
    }
}

// ── RangeResolver ───────────────────────────────────────────────────────────

/// Computes period boundaries in a calendar zone, reading "now" from a clock.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use range_engine::{FixedClock, RangeResolver};
///
/// let now = Utc.with_ymd_and_hms(2023, 6, 15, 10, 0, 0).unwrap();
/// let resolver = RangeResolver::new(Utc, FixedClock(now));
///
/// let week = resolver.last_seven_days_range().unwrap();
/// assert_eq!(week.begin, Utc.with_ymd_and_hms(2023, 6, 9, 0, 0, 0).unwrap().timestamp());
/// assert_eq!(week.end, Utc.with_ymd_and_hms(2023, 6, 15, 23, 59, 59).unwrap().timestamp());
/// ```
#[derive(Debug, Clone)]
pub struct RangeResolver<Z: TimeZone, C: Clock> {
    zone: Z,
    clock: C,
}

impl RangeResolver<Local, SystemClock> {
    /// The host's local zone and the system clock.
    pub fn local() -> Self {
        Self::new(Local, SystemClock)
    }
}

impl RangeResolver<Tz, SystemClock> {
    /// A named IANA zone and the system clock.
    pub fn in_timezone(name: &str) -> Result<Self> {
        Ok(Self::new(parse_timezone(name)?, SystemClock))
    }
}

impl<Z: TimeZone, C: Clock> RangeResolver<Z, C> {
    pub fn new(zone: Z, clock: C) -> Self {
        Self { zone, clock }
    }

    /// Replace the clock, keeping the zone.
    pub fn with_clock<C2: Clock>(self, clock: C2) -> RangeResolver<Z, C2> {
        RangeResolver {
            zone: self.zone,
            clock,
        }
    }

    pub fn zone(&self) -> &Z {
        &self.zone
    }

    // ── current period ──────────────────────────────────────────────────

    /// Year, month and ISO week of "now" in the calendar zone.
    pub fn current_period(&self) -> CurrentPeriod {
        CurrentPeriod::at(self.clock.now(), &self.zone)
    }

    fn today(&self) -> NaiveDate {
        self.clock.now().with_timezone(&self.zone).date_naive()
    }

    // ── explicit periods ────────────────────────────────────────────────

    /// Monday 00:00 through Sunday 23:59:59 of ISO week `week`.
    ///
    /// The pair goes through [`resolve_week`] first, so `(2016, 53)` yields
    /// 2015-W53. `None` if the resolved week does not exist.
    pub fn week_range(&self, year: i32, week: u32) -> Option<TimeRange> {
        let resolved = resolve_week(year, week)?;
        let Some(monday) = NaiveDate::from_isoywd_opt(resolved.year, resolved.week, Weekday::Mon)
        else {
            debug!(year, week, "no such ISO week");
            return None;
        };
        let begin = self.midnight(monday)?;
        Some(TimeRange::spanning(begin, 7 * SECONDS_PER_DAY))
    }

    /// First of the month 00:00 through the last second before the first
    /// of the following month.
    ///
    /// `None` when the following month cannot be reached because year
    /// navigation saturates (December of the last supported year).
    pub fn month_range(&self, year: i32, month: u32) -> Option<TimeRange> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let next = next_month(year, month)?;
        let begin = self.midnight(first)?;
        let next_begin = self.midnight(NaiveDate::from_ymd_opt(next.year, next.month, 1)?)?;
        let range = TimeRange::new(begin, next_begin - 1);
        if range.is_none() {
            debug!(year, month, "following month saturated, no month range");
        }
        range
    }

    /// The 42-day window of a 6-row calendar grid showing `month`.
    ///
    /// The grid starts on the Monday on or before the 1st. When the 1st is
    /// itself a Monday the grid starts a full week earlier, so the first
    /// row always carries days of the previous month.
    pub fn month_grid_range(&self, year: i32, month: u32) -> Option<TimeRange> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let first_begin = self.midnight(first)?;
        let lead_days = match first.weekday().number_from_monday() {
            1 => 7,
            n => i64::from(n) - 1,
        };
        let begin = first_begin - lead_days * SECONDS_PER_DAY;
        Some(TimeRange::spanning(begin, GRID_DAYS * SECONDS_PER_DAY))
    }

    /// Midnight through 23:59:59 of the calendar day containing `instant`.
    pub fn day_range(&self, instant: Instant) -> Option<TimeRange> {
        if instant == 0 {
            return None;
        }
        let begin = self.midnight(self.local_date(instant)?)?;
        Some(TimeRange::spanning(begin, SECONDS_PER_DAY))
    }

    // ── current periods ─────────────────────────────────────────────────

    pub fn today_range(&self) -> Option<TimeRange> {
        let begin = self.midnight(self.today())?;
        Some(TimeRange::spanning(begin, SECONDS_PER_DAY))
    }

    /// The ISO week containing today.
    ///
    /// Looked up by ISO week-year rather than Gregorian year, so the pair
    /// never exceeds its year's week count and [`resolve_week`] leaves it as is.
    pub fn this_week_range(&self) -> Option<TimeRange> {
        let now = self.current_period();
        self.week_range(now.week_year, now.week)
    }

    pub fn this_month_range(&self) -> Option<TimeRange> {
        let now = self.current_period();
        self.month_range(now.year, now.month)
    }

    /// The whole month before the current one.
    pub fn previous_month_range(&self) -> Option<TimeRange> {
        let now = self.current_period();
        let previous = previous_month(now.year, now.month)?;
        self.month_range(previous.year, previous.month)
    }

    /// Today and the `days - 1` days before it, ending 23:59:59 today.
    pub fn last_days_range(&self, days: u32) -> Option<TimeRange> {
        if days == 0 {
            return None;
        }
        let today = self.midnight(self.today())?;
        let begin = today - (i64::from(days) - 1) * SECONDS_PER_DAY;
        TimeRange::new(begin, today + SECONDS_PER_DAY - 1)
    }

    pub fn last_seven_days_range(&self) -> Option<TimeRange> {
        self.last_days_range(7)
    }

    pub fn last_thirty_days_range(&self) -> Option<TimeRange> {
        self.last_days_range(30)
    }

    // ── view types ──────────────────────────────────────────────────────

    pub fn range_by_view_type(&self, view: ViewType) -> Option<TimeRange> {
        match view {
            ViewType::LastSevenDays => self.last_seven_days_range(),
            ViewType::LastThirtyDays => self.last_thirty_days_range(),
            ViewType::PreviousMonth => self.previous_month_range(),
            ViewType::ThisMonth => self.this_month_range(),
        }
    }

    /// Dispatch on a raw view code. An empty or zero code selects
    /// [`ViewType::LastSevenDays`]; an unmapped code yields `None`.
    pub fn range_by_view_code(&self, code: &str) -> Option<TimeRange> {
        match code.parse::<ViewType>() {
            Ok(view) => self.range_by_view_type(view),
            Err(err) => {
                debug!(%err, "no range for view code");
                None
            }
        }
    }

    // ── day enumeration ─────────────────────────────────────────────────

    /// Every calendar day from the day containing `begin` through `end`,
    /// in chronological order.
    ///
    /// The first day is normalized to its midnight; later days follow in
    /// 24-hour steps while their midnight is not after `end`. Enumeration
    /// stops after the last day of [`MAX_YEAR`].
    pub fn days_in_range(&self, begin: Instant, end: Instant) -> Vec<DaySlot> {
        if begin == 0 || end == 0 {
            return Vec::new();
        }
        let Some(start) = self.local_date(begin).and_then(|date| self.midnight(date)) else {
            return Vec::new();
        };
        let last_day = NaiveDate::from_ymd_opt(MAX_YEAR, 12, 31);
        let Some(last_day) = last_day.and_then(|date| self.midnight(date)) else {
            return Vec::new();
        };
        let end = end.min(last_day + SECONDS_PER_DAY - 1);

        let mut days = Vec::new();
        let mut time = start;
        while time <= end {
            let Some(date) = self.local_date(time) else {
                break;
            };
            days.push(DaySlot {
                date,
                key: date.format("%Y-%m-%d").to_string(),
                label: date.format("%m-%d").to_string(),
                end: time + SECONDS_PER_DAY - 1,
            });
            time += SECONDS_PER_DAY;
        }
        days
    }

    // ── helpers ─────────────────────────────────────────────────────────

    /// First instant of `date` in the calendar zone.
    ///
    /// When a daylight-saving jump skips midnight, the day starts at the
    /// first wall-clock minute that exists.
    fn midnight(&self, date: NaiveDate) -> Option<Instant> {
        let midnight = date.and_hms_opt(0, 0, 0)?;
        (0..MINUTES_PER_DAY)
            .map(|minute| midnight + Duration::minutes(minute))
            .find_map(|naive| self.zone.from_local_datetime(&naive).earliest())
            .map(|dt| dt.timestamp())
    }

    /// Calendar date of `instant` in the calendar zone.
    fn local_date(&self, instant: Instant) -> Option<NaiveDate> {
        DateTime::<Utc>::from_timestamp(instant, 0)
            .map(|dt| dt.with_timezone(&self.zone).date_naive())
    }
}
