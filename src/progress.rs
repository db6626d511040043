//! Time-Based Progress
//!
//! Computes the completion percentage of a task from its date span.
//! Pure, total, and always in [0, 100] regardless of input.

use chrono::{DateTime, Duration, Utc};

use crate::models::Task;

/// Spans at least this long use the coarse near-deadline overrides below
/// instead of the exact elapsed ratio.
const LONG_SPAN_DAYS: i64 = 100;
/// Remaining time under which a long span reports 90%
const NEAR_DEADLINE_DAYS: i64 = 5;
/// Remaining time under which a long span reports 100%
const AT_DEADLINE_DAYS: i64 = 1;

/// Completion percentage of the span `[start, end]` as of `as_of`.
///
/// Long spans (>= 100 days) jump to 90% when fewer than 5 days remain and
/// to 100% when at most 1 day remains. Shorter spans report 100% on the
/// end date's calendar day. Everything else is elapsed/total with `as_of`
/// clamped into the span.
pub fn time_progress(start: DateTime<Utc>, end: DateTime<Utc>, as_of: DateTime<Utc>) -> f64 {
    let total = end - start;

    if total >= Duration::days(LONG_SPAN_DAYS) {
        let remaining = end - as_of;
        if remaining <= Duration::days(AT_DEADLINE_DAYS) {
            return 100.0;
        }
        if remaining < Duration::days(NEAR_DEADLINE_DAYS) {
            return 90.0;
        }
    } else if as_of.date_naive() == end.date_naive() {
        return 100.0;
    }

    let total_secs = total.num_seconds();
    if total_secs <= 0 {
        // Degenerate or inverted span; stay total instead of dividing by it
        return if as_of < start { 0.0 } else { 100.0 };
    }

    let clamped = as_of.clamp(start, end);
    let elapsed_secs = (clamped - start).num_seconds();
    (elapsed_secs as f64 / total_secs as f64 * 100.0).clamp(0.0, 100.0)
}

/// Progress of a task as of now
pub fn task_progress(task: &Task) -> f64 {
    time_progress(task.start_date, task.end_date, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    /// Midnight UTC, `n` days after an arbitrary fixed origin
    fn day(n: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap() + Duration::days(n)
    }

    #[test]
    fn test_midpoint_of_ten_days_is_half() {
        assert_eq!(time_progress(day(0), day(10), day(5)), 50.0);
    }

    #[test]
    fn test_zero_at_start_of_short_span() {
        assert_eq!(time_progress(day(0), day(10), day(0)), 0.0);
    }

    #[test]
    fn test_full_at_end_for_any_span() {
        // Short span: end-date calendar day reports 100
        assert_eq!(time_progress(day(0), day(10), day(10)), 100.0);
        // Long span: at-deadline override reports 100
        assert_eq!(time_progress(day(0), day(200), day(200)), 100.0);
    }

    #[test]
    fn test_long_span_near_deadline_override() {
        // 3 days remaining on a 200-day span
        assert_eq!(time_progress(day(0), day(200), day(197)), 90.0);
        // Exactly 1 day remaining
        assert_eq!(time_progress(day(0), day(200), day(199)), 100.0);
        // Exactly 5 days remaining falls through to the general formula
        assert_eq!(time_progress(day(0), day(200), day(195)), 97.5);
    }

    #[test]
    fn test_clamps_outside_the_span() {
        assert_eq!(time_progress(day(0), day(10), day(-5)), 0.0);
        assert_eq!(time_progress(day(0), day(10), day(15)), 100.0);
        assert_eq!(time_progress(day(0), day(200), day(-50)), 0.0);
        assert_eq!(time_progress(day(0), day(200), day(300)), 100.0);
    }

    #[test]
    fn test_monotonic_on_short_spans() {
        let (start, end) = (day(0), day(30));
        let mut last = -1.0;
        let mut as_of = start;
        while as_of <= end {
            let p = time_progress(start, end, as_of);
            assert!(p >= last, "progress regressed at {}", as_of);
            last = p;
            as_of += Duration::hours(6);
        }
    }

    #[test]
    fn test_degenerate_spans_stay_total() {
        // Zero-length span
        assert_eq!(time_progress(day(5), day(5), day(4)), 0.0);
        assert_eq!(time_progress(day(5), day(5), day(5)), 100.0);
        assert_eq!(time_progress(day(5), day(5), day(6)), 100.0);
        // Inverted span (backend invariant violated upstream)
        assert_eq!(time_progress(day(5), day(2), day(3)), 0.0);
        assert_eq!(time_progress(day(5), day(2), day(7)), 100.0);
    }

    #[test]
    fn test_always_within_bounds() {
        let spans = [(0, 1), (0, 10), (0, 99), (0, 100), (0, 365), (3, 3)];
        for (s, e) in spans {
            for a in (-10..=400).step_by(7) {
                let p = time_progress(day(s), day(e), day(a));
                assert!((0.0..=100.0).contains(&p), "out of range: {p}");
            }
        }
    }
}
