use chrono::NaiveDate;

use crate::models::{ContributionDay, StreakResult};

/// Walk the contribution calendar and measure the longest and current
/// runs of non-zero days.
///
/// The series is sorted by date first; upstream order is not guaranteed
/// and duplicate dates are tolerated. Days after `reference` keep feeding
/// the longest-streak bookkeeping but never move the current streak, so
/// placeholder days at the tail of a calendar cannot count as "current".
pub fn compute_streaks(series: &[ContributionDay], reference: NaiveDate) -> StreakResult {
    let mut days = series.to_vec();
    days.sort_by_key(|day| day.date);

    let mut run = 0u32;
    let mut longest = 0u32;
    let mut current = 0u32;

    for day in &days {
        if day.count > 0 {
            run += 1;
            longest = longest.max(run);
            if day.date <= reference {
                current = run;
            }
        } else {
            run = 0;
            if day.date <= reference {
                current = 0;
            }
        }
    }

    StreakResult {
        current_streak: current,
        longest_streak: longest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(ymd: (i32, u32, u32), count: u32) -> ContributionDay {
        ContributionDay {
            date: NaiveDate::from_ymd_opt(ymd.0, ymd.1, ymd.2).unwrap(),
            count,
        }
    }

    #[test]
    fn empty_series_yields_zero_streaks() {
        let reference = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(compute_streaks(&[], reference), StreakResult::default());
    }

    #[test]
    fn single_active_day_on_reference_counts_once() {
        let reference = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let result = compute_streaks(&[day((2024, 6, 1), 3)], reference);
        assert_eq!(result.current_streak, 1);
        assert_eq!(result.longest_streak, 1);
    }

    #[test]
    fn gap_resets_current_but_keeps_longest() {
        let series = [
            day((2024, 6, 1), 1),
            day((2024, 6, 2), 1),
            day((2024, 6, 3), 0),
            day((2024, 6, 4), 1),
        ];
        let reference = NaiveDate::from_ymd_opt(2024, 6, 4).unwrap();
        let result = compute_streaks(&series, reference);
        assert_eq!(result.current_streak, 1);
        assert_eq!(result.longest_streak, 2);
    }

    #[test]
    fn unbroken_run_up_to_reference_counts_fully() {
        let series = [day((2024, 6, 1), 2), day((2024, 6, 2), 5)];
        let reference = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
        let result = compute_streaks(&series, reference);
        assert_eq!(result.current_streak, 2);
        assert_eq!(result.longest_streak, 2);
    }

    #[test]
    fn zero_day_on_reference_resets_current() {
        let series = [day((2024, 6, 1), 1), day((2024, 6, 2), 0)];
        let reference = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
        let result = compute_streaks(&series, reference);
        assert_eq!(result.current_streak, 0);
        assert_eq!(result.longest_streak, 1);
    }

    #[test]
    fn days_after_reference_do_not_move_current() {
        let series = [
            day((2024, 6, 1), 1),
            day((2024, 6, 2), 1),
            day((2024, 6, 3), 1),
            day((2024, 6, 4), 1),
        ];
        let reference = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
        let result = compute_streaks(&series, reference);
        assert_eq!(result.current_streak, 2);
        // The placeholder tail still extends the longest run.
        assert_eq!(result.longest_streak, 4);
    }

    #[test]
    fn zero_day_after_reference_does_not_reset_current() {
        let series = [
            day((2024, 6, 1), 1),
            day((2024, 6, 2), 1),
            day((2024, 6, 3), 0),
        ];
        let reference = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
        let result = compute_streaks(&series, reference);
        assert_eq!(result.current_streak, 2);
        assert_eq!(result.longest_streak, 2);
    }

    #[test]
    fn unsorted_input_is_processed_in_date_order() {
        let series = [
            day((2024, 6, 4), 1),
            day((2024, 6, 1), 1),
            day((2024, 6, 3), 0),
            day((2024, 6, 2), 1),
        ];
        let reference = NaiveDate::from_ymd_opt(2024, 6, 4).unwrap();
        let result = compute_streaks(&series, reference);
        assert_eq!(result.current_streak, 1);
        assert_eq!(result.longest_streak, 2);
    }

    #[test]
    fn longest_never_smaller_than_current() {
        let series = [
            day((2024, 6, 1), 1),
            day((2024, 6, 2), 1),
            day((2024, 6, 3), 1),
        ];
        let reference = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        let result = compute_streaks(&series, reference);
        assert!(result.longest_streak >= result.current_streak);
        assert_eq!(result.current_streak, 3);
    }
}
