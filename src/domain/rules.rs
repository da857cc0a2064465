//! Pricing and validation rules.
//!
//! Stateless computation with no side effects, safe to call concurrently
//! without synchronization. Everything downstream (entity construction,
//! edits, attachment snapshots) is built on these three functions.

use chrono::{Duration, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::DAYS_PER_REGISTRATION_YEAR;

/// Syntactic domain-name pattern: one alphanumeric/hyphen label, a dot,
/// a top-level label of 2-63 letters, optionally one more such label.
/// The `www.` prefix rejection is a separate check because the `regex`
/// crate has no negative lookahead.
static DOMAIN_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9-]+\.[A-Za-z]{2,63}(\.[A-Za-z]{2,63})?$")
        .unwrap_or_else(|e| panic!("invalid domain name pattern: {}", e))
});

/// Look up the registration price for a period in years.
///
/// Periods outside the 1-9 table price at 0.0 rather than erroring; the
/// table miss is a defined fallback, and the period range itself is
/// enforced at registration time.
pub fn price_for_period(period: i32) -> f64 {
    match period {
        1 => 29.95,
        2 => 52.95,
        3 => 86.95,
        4 => 113.95,
        5 => 139.95,
        6 => 164.95,
        7 => 188.95,
        8 => 211.95,
        9 => 233.95,
        _ => 0.0,
    }
}

/// Check a domain name against the syntactic pattern.
///
/// Names starting with the literal `www.` are rejected (case-sensitive).
pub fn is_valid_domain_name(name: &str) -> bool {
    !name.starts_with("www.") && DOMAIN_NAME_RE.is_match(name)
}

/// Compute the expiry date for a registration.
///
/// A registration year is a flat 365 days; no leap-year correction.
pub fn expiry_date(registered: NaiveDate, period: i32) -> NaiveDate {
    registered + Duration::days(DAYS_PER_REGISTRATION_YEAR * i64::from(period))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_table_is_exact() {
        assert_eq!(price_for_period(1), 29.95);
        assert_eq!(price_for_period(2), 52.95);
        assert_eq!(price_for_period(3), 86.95);
        assert_eq!(price_for_period(4), 113.95);
        assert_eq!(price_for_period(5), 139.95);
        assert_eq!(price_for_period(6), 164.95);
        assert_eq!(price_for_period(7), 188.95);
        assert_eq!(price_for_period(8), 211.95);
        assert_eq!(price_for_period(9), 233.95);
    }

    #[test]
    fn price_outside_table_is_zero() {
        assert_eq!(price_for_period(0), 0.0);
        assert_eq!(price_for_period(10), 0.0);
        assert_eq!(price_for_period(-3), 0.0);
    }

    #[test]
    fn accepts_plain_and_two_level_tlds() {
        assert!(is_valid_domain_name("example.com"));
        assert!(is_valid_domain_name("sub.example.co"));
        assert!(is_valid_domain_name("my-site.org"));
        assert!(is_valid_domain_name("123.net"));
    }

    #[test]
    fn rejects_www_prefix_and_malformed_names() {
        assert!(!is_valid_domain_name("www.example.com"));
        assert!(!is_valid_domain_name("not a domain"));
        assert!(!is_valid_domain_name("example"));
        assert!(!is_valid_domain_name("example.c"));
        assert!(!is_valid_domain_name(".com"));
        assert!(!is_valid_domain_name("example.com2"));
    }

    #[test]
    fn www_rejection_is_case_sensitive() {
        // Only the literal lowercase prefix is excluded
        assert!(is_valid_domain_name("WWW.example.com"));
    }

    #[test]
    fn expiry_is_365_days_per_year() {
        let registered = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        assert_eq!(
            expiry_date(registered, 1),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
        );
        // 2024 is a leap year; three flat years land a day short of the
        // calendar anniversary
        assert_eq!(
            expiry_date(registered, 3),
            NaiveDate::from_ymd_opt(2026, 12, 31).unwrap()
        );
        assert_eq!(
            expiry_date(registered, 9),
            registered + Duration::days(9 * 365)
        );
    }
}
