use chrono::{DateTime, Duration, TimeZone, Utc};
use clockly::clock::sampler::sample_tz;
use clockly::clock::{DisplayConfig, TimeParts, angles, format, sample};
use proptest::prelude::*;

/// Generate valid wall-clock parts
fn time_parts_strategy() -> impl Strategy<Value = TimeParts> {
    (0u32..24, 0u32..60, 0u32..60).prop_map(|(h, m, s)| TimeParts::new(h, m, s).unwrap())
}

/// Instants between 1970 and 2100
fn instant_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..4_102_444_800).prop_map(|secs| DateTime::from_timestamp(secs, 0).unwrap())
}

fn zone_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(clockly::clock::catalog::presets().to_vec())
}

#[cfg(test)]
mod angle_tests {
    use super::*;

    proptest! {
        /// Every hand stays on the dial for every valid time
        #[test]
        fn test_angles_stay_in_range(parts in time_parts_strategy()) {
            let hands = angles(parts);
            prop_assert!((0.0..360.0).contains(&hands.hour_deg), "hour {}", hands.hour_deg);
            prop_assert!((0.0..360.0).contains(&hands.minute_deg), "minute {}", hands.minute_deg);
            prop_assert!((0.0..360.0).contains(&hands.second_deg), "second {}", hands.second_deg);
        }

        /// Morning and evening readings put the hands in the same place
        #[test]
        fn test_angles_repeat_every_twelve_hours(parts in time_parts_strategy()) {
            let shifted = TimeParts::new((parts.hours + 12) % 24, parts.minutes, parts.seconds).unwrap();
            prop_assert_eq!(angles(parts), angles(shifted));
        }

        /// Within one half-day the hour and minute hands never move backwards
        #[test]
        fn test_hands_advance_with_time(a in 0u32..43_199) {
            let at = |secs: u32| TimeParts::new(secs / 3600, secs / 60 % 60, secs % 60).unwrap();
            let now = angles(at(a));
            let next = angles(at(a + 1));
            prop_assert!(next.hour_deg > now.hour_deg);
            if a % 3600 != 3599 {
                prop_assert!(next.minute_deg > now.minute_deg);
            }
        }

        /// The seconds field is inserted right after HH:MM and nothing else changes
        #[test]
        fn test_format_seconds_field_is_optional(parts in time_parts_strategy(), is_24_hour in any::<bool>()) {
            let with = format(parts, &DisplayConfig::new("UTC", is_24_hour, true));
            let without = format(parts, &DisplayConfig::new("UTC", is_24_hour, false));
            let (hours_minutes, suffix) = without.split_at(5);
            prop_assert_eq!(with, format!("{hours_minutes}:{:02}{suffix}", parts.seconds));
        }
    }
}

#[cfg(test)]
mod sampler_tests {
    use super::*;

    proptest! {
        /// Sampling never produces hour 24, minute 60 or second 60
        #[test]
        fn test_sample_range(instant in instant_strategy(), zone in zone_strategy()) {
            let parts = sample(zone, instant).unwrap();
            prop_assert!(parts.hours < 24);
            prop_assert!(parts.minutes < 60);
            prop_assert!(parts.seconds < 60);
        }

        /// Sampling is a pure function of zone and instant
        #[test]
        fn test_sample_idempotent(instant in instant_strategy(), zone in zone_strategy()) {
            prop_assert_eq!(sample(zone, instant).unwrap(), sample(zone, instant).unwrap());
        }

        /// Seconds follow the instant regardless of zone offset
        #[test]
        fn test_seconds_match_utc(instant in instant_strategy(), zone in zone_strategy()) {
            let utc = sample("UTC", instant).unwrap();
            prop_assert_eq!(sample(zone, instant).unwrap().seconds, utc.seconds);
        }
    }
}

/// Walk 24 hours from local midnight minute by minute and check the range
/// invariant. On a transition day this ends an hour off local midnight.
fn assert_day_in_range(zone: &str, day_start: DateTime<Utc>) -> Vec<TimeParts> {
    let tz = zone.parse::<chrono_tz::Tz>().unwrap();
    (0..24 * 60)
        .map(|minute| {
            let parts = sample_tz(tz, day_start + Duration::minutes(minute));
            assert!(parts.hours < 24 && parts.minutes < 60 && parts.seconds < 60);
            parts
        })
        .collect()
}

#[test]
fn test_spring_forward_day_skips_an_hour() {
    // 2024-03-10 05:00 UTC is midnight in New York; clocks jump 02:00 -> 03:00
    let start = Utc.with_ymd_and_hms(2024, 3, 10, 5, 0, 0).unwrap();
    let samples = assert_day_in_range("America/New_York", start);

    assert!(samples.iter().all(|p| p.hours != 2));
    assert!(samples.contains(&TimeParts::new(1, 59, 0).unwrap()));
    assert!(samples.contains(&TimeParts::new(3, 0, 0).unwrap()));
}

#[test]
fn test_fall_back_day_repeats_an_hour() {
    // 2024-10-27 in London: 02:00 BST -> 01:00 GMT
    let start = Utc.with_ymd_and_hms(2024, 10, 26, 23, 0, 0).unwrap();
    let samples = assert_day_in_range("Europe/London", start);

    let one_thirty = TimeParts::new(1, 30, 0).unwrap();
    assert_eq!(samples.iter().filter(|p| **p == one_thirty).count(), 2);
}

#[test]
fn test_documented_examples() {
    let three = angles(TimeParts::new(3, 0, 0).unwrap());
    assert_eq!((three.hour_deg, three.minute_deg, three.second_deg), (90.0, 0.0, 0.0));

    let half_past = angles(TimeParts::new(0, 30, 0).unwrap());
    assert_eq!(
        (half_past.hour_deg, half_past.minute_deg, half_past.second_deg),
        (15.0, 180.0, 0.0)
    );

    assert_eq!(
        format(
            TimeParts::new(13, 5, 9).unwrap(),
            &DisplayConfig::new("UTC", true, true)
        ),
        "13:05:09"
    );
    assert_eq!(
        format(
            TimeParts::new(0, 5, 9).unwrap(),
            &DisplayConfig::new("UTC", false, false)
        ),
        "12:05 AM"
    );
}
