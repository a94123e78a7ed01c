//! Sampling wall-clock time in an IANA timezone.
//!
//! Offsets and DST rules come from the `chrono-tz` database; nothing here
//! computes an offset by hand.

use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;

use super::{ClockError, TimeParts};
use crate::common::constants::FALLBACK_TIMEZONE;
use crate::time::source::TimeSource;

/// Resolve an IANA identifier such as "Europe/London".
pub fn resolve_timezone(time_zone: &str) -> Result<Tz, ClockError> {
    time_zone
        .parse::<Tz>()
        .map_err(|_| ClockError::InvalidTimeZone(time_zone.to_string()))
}

/// Resolve an identifier, substituting UTC (with a warning) when it is unknown.
pub fn resolve_timezone_or_utc(time_zone: &str) -> Tz {
    match resolve_timezone(time_zone) {
        Ok(tz) => tz,
        Err(e) => {
            log_warning!("{e}, using {FALLBACK_TIMEZONE}");
            Tz::UTC
        }
    }
}

/// Wall-clock parts of `instant` in an already resolved zone.
pub fn sample_tz(tz: Tz, instant: DateTime<Utc>) -> TimeParts {
    let local = instant.with_timezone(&tz);
    TimeParts {
        hours: local.hour(),
        minutes: local.minute(),
        // A leap second is second 59 with nanos >= 1e9; never exceed 59
        seconds: local.second().min(59),
    }
}

/// Wall-clock parts of `instant` in `time_zone`.
pub fn sample(time_zone: &str, instant: DateTime<Utc>) -> Result<TimeParts, ClockError> {
    Ok(sample_tz(resolve_timezone(time_zone)?, instant))
}

/// Sample the current time of `source` in `time_zone`.
pub fn sample_now(time_zone: &str, source: &dyn TimeSource) -> Result<TimeParts, ClockError> {
    let tz = resolve_timezone(time_zone)?;
    Ok(sample_tz(tz, source.checked_now()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::source::SimulatedTimeSource;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_sample_applies_zone_offset() {
        let instant = utc(2024, 1, 15, 12, 0, 0);

        assert_eq!(
            sample("UTC", instant).unwrap(),
            TimeParts::new(12, 0, 0).unwrap()
        );
        // +05:30, no DST
        assert_eq!(
            sample("Asia/Kolkata", instant).unwrap(),
            TimeParts::new(17, 30, 0).unwrap()
        );
        // EST in January
        assert_eq!(
            sample("America/New_York", instant).unwrap(),
            TimeParts::new(7, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_sample_follows_dst() {
        // London is on BST (+01:00) in July
        let summer = utc(2024, 7, 1, 23, 30, 15);
        assert_eq!(
            sample("Europe/London", summer).unwrap(),
            TimeParts::new(0, 30, 15).unwrap()
        );

        // Sydney is on AEDT (+11:00) in January
        let january = utc(2024, 1, 10, 13, 0, 0);
        assert_eq!(
            sample("Australia/Sydney", january).unwrap(),
            TimeParts::new(0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_sample_rejects_unknown_zone() {
        let err = sample("Mars/Olympus_Mons", utc(2024, 1, 1, 0, 0, 0)).unwrap_err();
        assert_eq!(
            err,
            ClockError::InvalidTimeZone("Mars/Olympus_Mons".to_string())
        );
        assert!(!err.is_transient());
    }

    #[test]
    fn test_resolve_timezone_or_utc_falls_back() {
        crate::common::logger::Log::set_enabled(false);
        assert_eq!(resolve_timezone_or_utc("Not/AZone"), Tz::UTC);
        assert_eq!(resolve_timezone_or_utc("Asia/Tokyo"), Tz::Asia__Tokyo);
    }

    #[test]
    fn test_sample_is_idempotent_for_fixed_instant() {
        let instant = utc(2025, 3, 30, 0, 59, 59);
        let first = sample("Europe/Berlin", instant).unwrap();
        let second = sample("Europe/Berlin", instant).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_sample_now_reads_time_source() {
        let source = SimulatedTimeSource::fast_forward(utc(2024, 6, 1, 8, 15, 42));
        assert_eq!(
            sample_now("Asia/Tokyo", &source).unwrap(),
            TimeParts::new(17, 15, 42).unwrap()
        );
    }

    #[test]
    fn test_sample_now_surfaces_clock_failure() {
        let mut source = crate::time::source::MockTimeSource::new();
        source.expect_checked_now().returning(|| {
            Err(ClockError::TransientSampleFailure(
                "clock unavailable".to_string(),
            ))
        });

        let err = sample_now("UTC", &source).unwrap_err();
        assert!(err.is_transient());
    }
}
