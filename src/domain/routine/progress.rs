//! Progress and state derivation for routines.
//!
//! Pure functions of the date range and `today`; recomputed on every read.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Elapsed share of the routine's date range as a percentage.
///
/// - before `start` → 0
/// - after `end` → 100
/// - otherwise → `100 · (today − start) / (end − start)`, rounded to two
///   decimals; a zero-length range yields 0 to avoid division by zero.
pub fn progress_percent(start: NaiveDate, end: NaiveDate, today: NaiveDate) -> f64 {
    if today < start {
        return 0.0;
    }
    if today > end {
        return 100.0;
    }

    let total_days = (end - start).num_days();
    if total_days == 0 {
        return 0.0;
    }
    let elapsed_days = (today - start).num_days();

    let percent = (elapsed_days as f64 / total_days as f64) * 100.0;
    (percent * 100.0).round() / 100.0
}

/// Read-only routine state label; derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutineState {
    Inactive,
    NotStarted,
    InProgress,
    Finished,
}

impl RoutineState {
    /// Derives the state from the active flag and the date range.
    pub fn derive(active: bool, start: NaiveDate, end: NaiveDate, today: NaiveDate) -> Self {
        if !active {
            return RoutineState::Inactive;
        }
        if today < start {
            RoutineState::NotStarted
        } else if today > end {
            RoutineState::Finished
        } else {
            RoutineState::InProgress
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RoutineState::Inactive => "Inactive",
            RoutineState::NotStarted => "Not started",
            RoutineState::InProgress => "In progress",
            RoutineState::Finished => "Finished",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn halfway_through_a_four_week_routine_is_fifty_percent() {
        let start = date(2024, 1, 1);
        let end = date(2024, 1, 29);
        assert_eq!(progress_percent(start, end, date(2024, 1, 15)), 50.0);
    }

    #[test]
    fn clamps_outside_the_range() {
        let start = date(2024, 1, 1);
        let end = date(2024, 1, 29);
        assert_eq!(progress_percent(start, end, date(2023, 12, 31)), 0.0);
        assert_eq!(progress_percent(start, end, date(2024, 1, 1)), 0.0);
        assert_eq!(progress_percent(start, end, date(2024, 1, 29)), 100.0);
        assert_eq!(progress_percent(start, end, date(2024, 2, 10)), 100.0);
    }

    #[test]
    fn zero_length_range_yields_zero() {
        let day = date(2024, 1, 1);
        assert_eq!(progress_percent(day, day, day), 0.0);
    }

    #[test]
    fn rounds_to_two_decimals() {
        let start = date(2024, 1, 1);
        let end = date(2024, 1, 29); // 28 days
        // 5/28 = 17.857142…% → 17.86
        assert_eq!(progress_percent(start, end, date(2024, 1, 6)), 17.86);
    }

    #[test]
    fn state_labels() {
        let start = date(2024, 1, 1);
        let end = date(2024, 1, 29);
        assert_eq!(
            RoutineState::derive(false, start, end, date(2024, 1, 10)),
            RoutineState::Inactive
        );
        assert_eq!(
            RoutineState::derive(true, start, end, date(2023, 12, 1)),
            RoutineState::NotStarted
        );
        assert_eq!(
            RoutineState::derive(true, start, end, date(2024, 1, 10)),
            RoutineState::InProgress
        );
        assert_eq!(
            RoutineState::derive(true, start, end, date(2024, 2, 1)),
            RoutineState::Finished
        );
        assert_eq!(RoutineState::Finished.label(), "Finished");
    }

    mod properties {
        use super::*;
        use chrono::Days;
        use proptest::prelude::*;

        fn arb_date() -> impl Strategy<Value = NaiveDate> {
            (2000i32..2100, 1u32..=12, 1u32..=28)
                .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
        }

        proptest! {
            #[test]
            fn progress_is_clamped(start in arb_date(), len in 0u64..600, off in 0u64..900) {
                let end = start + Days::new(len);
                let today = start - Days::new(300) + Days::new(off);
                let p = progress_percent(start, end, today);
                prop_assert!((0.0..=100.0).contains(&p));
            }

            #[test]
            fn progress_is_monotonic_in_today(start in arb_date(), len in 0u64..600, off in 0u64..900) {
                let end = start + Days::new(len);
                let today = start - Days::new(300) + Days::new(off);
                let next = today + Days::new(1);
                prop_assert!(progress_percent(start, end, today)
                    <= progress_percent(start, end, next));
            }

            #[test]
            fn exactly_zero_at_start_and_full_after_end(start in arb_date(), len in 1u64..600) {
                let end = start + Days::new(len);
                prop_assert_eq!(progress_percent(start, end, start), 0.0);
                prop_assert_eq!(progress_percent(start, end, end + Days::new(1)), 100.0);
            }
        }
    }
}
