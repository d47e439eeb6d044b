//! age.rs
//!
//! Account age ("uptime" on the card) as whole elapsed days.
//!
//! Partial days are truncated, so an account created 36 hours ago is one day
//! old. A creation timestamp in the future (clock skew between the API and
//! this machine) yields zero rather than a negative age.

use chrono::{DateTime, Utc};

/// Returns the number of whole days between `created_at` and `now`.
pub fn account_age_days(created_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - created_at).num_days().max(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_same_instant_is_zero() {
        let t = at(2024, 5, 1, 12);
        assert_eq!(account_age_days(t, t), 0);
    }

    #[test]
    fn test_partial_day_truncates() {
        let created = at(2024, 5, 1, 12);
        assert_eq!(account_age_days(created, created + Duration::hours(36)), 1);
        assert_eq!(account_age_days(created, created + Duration::hours(23)), 0);
    }

    #[test]
    fn test_spans_leap_day() {
        assert_eq!(account_age_days(at(2024, 2, 28, 0), at(2024, 3, 1, 0)), 2);
        assert_eq!(account_age_days(at(2023, 2, 28, 0), at(2023, 3, 1, 0)), 1);
    }

    #[test]
    fn test_multi_year() {
        assert_eq!(account_age_days(at(2015, 1, 1, 0), at(2025, 1, 1, 0)), 3653);
    }

    #[test]
    fn test_future_creation_clamps_to_zero() {
        assert_eq!(account_age_days(at(2030, 1, 1, 0), at(2025, 1, 1, 0)), 0);
    }
}
