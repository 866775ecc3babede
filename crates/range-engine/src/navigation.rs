//! Year and month navigation with clamped year arithmetic.
//!
//! Years saturate into [`MIN_YEAR`]..=[`MAX_YEAR`], the span representable by
//! a signed 32-bit Unix timestamp. A zero year or month is treated as absent
//! and yields `None`.

use serde::Serialize;

/// First year navigation may reach.
pub const MIN_YEAR: i32 = 1970;

/// Last year navigation may reach.
pub const MAX_YEAR: i32 = 2038;

/// A calendar month of a specific year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct YearMonth {
    pub year: i32,
    /// 1-12.
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }
}

/// The year before `year`, saturating at [`MIN_YEAR`].
///
/// ```
/// use range_engine::navigation::previous_year;
///
/// assert_eq!(previous_year(2024), Some(2023));
/// assert_eq!(previous_year(1970), Some(1970));
/// assert_eq!(previous_year(0), None);
/// ```
pub fn previous_year(year: i32) -> Option<i32> {
    if year == 0 {
        return None;
    }
    Some(if year <= MIN_YEAR { MIN_YEAR } else { year - 1 })
}

/// The year after `year`, saturating at [`MAX_YEAR`].
pub fn next_year(year: i32) -> Option<i32> {
    if year == 0 {
        return None;
    }
    Some(if year >= MAX_YEAR { MAX_YEAR } else { year + 1 })
}

/// The month before `(year, month)`. January rolls back to December of the
/// (clamped) previous year.
pub fn previous_month(year: i32, month: u32) -> Option<YearMonth> {
    if year == 0 || month == 0 {
        return None;
    }
    if month <= 1 {
        Some(YearMonth::new(previous_year(year)?, 12))
    } else {
        Some(YearMonth::new(year, month - 1))
    }
}

/// The month after `(year, month)`. December rolls over to January of the
/// (clamped) next year.
pub fn next_month(year: i32, month: u32) -> Option<YearMonth> {
    if year == 0 || month == 0 {
        return None;
    }
    if month >= 12 {
        Some(YearMonth::new(next_year(year)?, 1))
    } else {
        Some(YearMonth::new(year, month + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── year navigation ─────────────────────────────────────────────────

    #[test]
    fn test_previous_year_steps_back() {
        assert_eq!(previous_year(2024), Some(2023));
        assert_eq!(previous_year(1971), Some(1970));
    }

    #[test]
    fn test_previous_year_saturates_at_min() {
        assert_eq!(previous_year(1970), Some(1970));
        // Years already below the floor are pulled up to it
        assert_eq!(previous_year(1960), Some(1970));
    }

    #[test]
    fn test_next_year_saturates_at_max() {
        assert_eq!(next_year(2037), Some(2038));
        assert_eq!(next_year(2038), Some(2038));
        assert_eq!(next_year(2100), Some(2038));
    }

    #[test]
    fn test_absent_year_is_none() {
        assert_eq!(previous_year(0), None);
        assert_eq!(next_year(0), None);
    }

    // ── month navigation ────────────────────────────────────────────────

    #[test]
    fn test_previous_month_mid_year() {
        assert_eq!(previous_month(2023, 3), Some(YearMonth::new(2023, 2)));
    }

    #[test]
    fn test_previous_month_january_rolls_to_december() {
        assert_eq!(previous_month(2023, 1), Some(YearMonth::new(2022, 12)));
    }

    #[test]
    fn test_previous_month_january_1970_clamps_year() {
        assert_eq!(previous_month(1970, 1), Some(YearMonth::new(1970, 12)));
    }

    #[test]
    fn test_next_month_december_rolls_to_january() {
        assert_eq!(next_month(2023, 12), Some(YearMonth::new(2024, 1)));
    }

    #[test]
    fn test_next_month_december_2038_clamps_year() {
        assert_eq!(next_month(2038, 12), Some(YearMonth::new(2038, 1)));
    }

    #[test]
    fn test_month_navigation_absent_input() {
        assert_eq!(previous_month(0, 5), None);
        assert_eq!(previous_month(2023, 0), None);
        assert_eq!(next_month(0, 5), None);
        assert_eq!(next_month(2023, 0), None);
    }

    #[test]
    fn test_previous_of_next_month_round_trips() {
        for year in 1971..2038 {
            for month in 1..=12 {
                let next = next_month(year, month).unwrap();
                assert_eq!(
                    previous_month(next.year, next.month),
                    Some(YearMonth::new(year, month))
                );
            }
        }
    }
}
