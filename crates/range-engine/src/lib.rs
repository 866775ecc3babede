//! # range-engine
//!
//! Calendar period boundaries for reporting and analytics.
//!
//! Turns "this week", "last 30 days" or "previous month" into concrete
//! begin/end Unix timestamps, and navigates between years, months and ISO
//! weeks with rollover handled. Years saturate at 1970 and 2038.
//!
//! ## Modules
//!
//! - [`range`] — [`RangeResolver`]: week, month, month-grid, day and rolling-window ranges
//! - [`week`] — ISO week counts, cross-year week resolution, week navigation
//! - [`navigation`] — Clamped year and month navigation
//! - [`clock`] — The injectable "now" source
//! - [`input`] — Parsing of string period identifiers
//! - [`error`] — Error types

pub mod clock;
pub mod error;
pub mod input;
pub mod navigation;
pub mod range;
pub mod week;

pub use clock::{Clock, CurrentPeriod, FixedClock, SystemClock};
pub use error::RangeError;
pub use input::{parse_month, parse_timezone, parse_week, parse_year};
pub use navigation::{
    next_month, next_year, previous_month, previous_year, YearMonth, MAX_YEAR, MIN_YEAR,
};
pub use range::{DaySlot, Instant, RangeResolver, TimeRange, ViewType, SECONDS_PER_DAY};
pub use week::{next_week, previous_week, resolve_week, year_week_count, YearWeek};
