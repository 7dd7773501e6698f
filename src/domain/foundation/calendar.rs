//! Calendar arithmetic shared by the derived-view computations.
//!
//! Every function takes `today` as an explicit parameter; nothing in the
//! domain layer reads the wall clock.

use chrono::{Datelike, Days, NaiveDate};

/// Window used for "expiring soon" / "upcoming dues" listings, in days.
pub const DUE_SOON_WINDOW_DAYS: u64 = 7;

/// Calendar age in whole years at `today`.
///
/// Year difference, decremented by one when the birthday has not yet been
/// reached this year (lexicographic comparison on (month, day), so a Feb 29
/// birthday counts from Mar 1 in non-leap years).
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

/// Days from `today` until `end`, floored at zero.
pub fn days_remaining(end: NaiveDate, today: NaiveDate) -> i64 {
    (end - today).num_days().max(0)
}

/// Whether `date` falls within `[today, today + DUE_SOON_WINDOW_DAYS]`,
/// inclusive on both ends.
pub fn in_due_window(date: NaiveDate, today: NaiveDate) -> bool {
    let limit = today + Days::new(DUE_SOON_WINDOW_DAYS);
    date >= today && date <= limit
}

/// Whether two dates fall in the same calendar month of the same year.
pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Human label for a month, e.g. `August 2026`.
pub fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Whether a day-of-month due day falls within the next
/// [`DUE_SOON_WINDOW_DAYS`] calendar days, wrapping across month end.
pub fn due_day_soon(due_day: u32, today: NaiveDate) -> bool {
    let current_day = today.day();
    let limit_day = (today + Days::new(DUE_SOON_WINDOW_DAYS)).day();

    if limit_day < current_day {
        // Window wraps into next month.
        due_day >= current_day || due_day <= limit_day
    } else {
        due_day >= current_day && due_day <= limit_day
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn age_counts_birthday_reached_today() {
        let birth = date(1990, 6, 15);
        assert_eq!(age_on(birth, date(2024, 6, 15)), 34);
        assert_eq!(age_on(birth, date(2024, 6, 14)), 33);
        assert_eq!(age_on(birth, date(2024, 6, 16)), 34);
    }

    #[test]
    fn age_for_leap_day_birthdate() {
        let birth = date(2000, 2, 29);
        // Leap year: birthday exists.
        assert_eq!(age_on(birth, date(2024, 2, 29)), 24);
        assert_eq!(age_on(birth, date(2024, 2, 28)), 23);
        // Non-leap year: counted from March 1st.
        assert_eq!(age_on(birth, date(2023, 2, 28)), 22);
        assert_eq!(age_on(birth, date(2023, 3, 1)), 23);
    }

    #[test]
    fn days_remaining_floors_at_zero() {
        let end = date(2024, 3, 10);
        assert_eq!(days_remaining(end, date(2024, 3, 1)), 9);
        assert_eq!(days_remaining(end, date(2024, 3, 10)), 0);
        assert_eq!(days_remaining(end, date(2024, 3, 25)), 0);
    }

    #[test]
    fn due_window_is_inclusive_on_both_ends() {
        let today = date(2024, 5, 1);
        assert!(in_due_window(date(2024, 5, 1), today));
        assert!(in_due_window(date(2024, 5, 8), today));
        assert!(!in_due_window(date(2024, 5, 9), today));
        assert!(!in_due_window(date(2024, 4, 30), today));
    }

    #[test]
    fn due_day_window_wraps_across_month_end() {
        // Jan 28 + 7 days = Feb 4, so the window is {28..31} ∪ {1..4}.
        let today = date(2024, 1, 28);
        assert!(due_day_soon(30, today));
        assert!(due_day_soon(3, today));
        assert!(!due_day_soon(15, today));

        // Mid-month window does not wrap.
        let mid = date(2024, 1, 10);
        assert!(due_day_soon(12, mid));
        assert!(!due_day_soon(20, mid));
        assert!(!due_day_soon(3, mid));
    }

    #[test]
    fn month_label_formats_in_english() {
        assert_eq!(month_label(date(2024, 1, 15)), "January 2024");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_date() -> impl Strategy<Value = NaiveDate> {
            (1950i32..2100, 1u32..=12, 1u32..=28)
                .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
        }

        proptest! {
            #[test]
            fn age_is_monotonic_in_today(birth in arb_date(), today in arb_date()) {
                let next = today + Days::new(1);
                prop_assert!(age_on(birth, today) <= age_on(birth, next));
            }

            #[test]
            fn age_matches_anniversary_count(birth in arb_date(), today in arb_date()) {
                prop_assume!(today >= birth);
                let age = age_on(birth, today);
                // The age-th birthday has passed, the (age+1)-th has not.
                let reached = NaiveDate::from_ymd_opt(
                    birth.year() + age, birth.month(), birth.day()).unwrap();
                let next = NaiveDate::from_ymd_opt(
                    birth.year() + age + 1, birth.month(), birth.day()).unwrap();
                prop_assert!(reached <= today);
                prop_assert!(next > today);
            }

            #[test]
            fn days_remaining_is_never_negative(end in arb_date(), today in arb_date()) {
                prop_assert!(days_remaining(end, today) >= 0);
            }
        }
    }
}
