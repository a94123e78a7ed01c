//! Time source abstraction for real and simulated time.
//!
//! Everything that needs "now" reads it through [`TimeSource`], so the clock
//! can run against the system clock or against a simulated clock that only
//! advances when it is slept on. Simulation makes whole-day runs (including
//! DST transitions) observable in a few milliseconds.

use chrono::{DateTime, Duration as ChronoDuration, TimeZone, Utc};
use once_cell::sync::OnceCell;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration as StdDuration, Instant, SystemTime};

use crate::clock::ClockError;

/// Global time source instance, defaults to RealTimeSource
static TIME_SOURCE: OnceCell<Arc<dyn TimeSource>> = OnceCell::new();

/// Trait for abstracting time operations
#[cfg_attr(test, mockall::automock)]
pub trait TimeSource: Send + Sync {
    /// Get the current instant
    fn now(&self) -> DateTime<Utc>;

    /// Get the current instant, reporting host clock failures instead of
    /// papering over them.
    fn checked_now(&self) -> Result<DateTime<Utc>, ClockError> {
        Ok(self.now())
    }

    /// Sleep for the specified duration (or simulate it)
    fn sleep(&self, duration: StdDuration);

    /// Check if this is a simulated time source
    fn is_simulated(&self) -> bool;

    /// Check if simulation has ended (always false for real time)
    fn is_ended(&self) -> bool {
        false
    }
}

/// Real-time implementation backed by the system clock
pub struct RealTimeSource;

impl TimeSource for RealTimeSource {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn checked_now(&self) -> Result<DateTime<Utc>, ClockError> {
        let since_epoch = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map_err(|e| ClockError::TransientSampleFailure(format!("system clock: {e}")))?;

        let secs = i64::try_from(since_epoch.as_secs()).map_err(|_| {
            ClockError::TransientSampleFailure("system clock out of range".to_string())
        })?;

        DateTime::from_timestamp(secs, since_epoch.subsec_nanos()).ok_or_else(|| {
            ClockError::TransientSampleFailure("system clock out of range".to_string())
        })
    }

    fn sleep(&self, duration: StdDuration) {
        std::thread::sleep(duration);
    }

    fn is_simulated(&self) -> bool {
        false
    }
}

/// Simulated time source for tests and accelerated runs.
///
/// Two modes:
/// - Linear acceleration: sleeping takes `duration / multiplier` real time
/// - Fast-forward (multiplier 0.0): sleeping advances time instantly
pub struct SimulatedTimeSource {
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    /// Special value 0.0 means fast-forward mode
    time_multiplier: f64,
    /// Simulated time elapsed through completed sleeps
    elapsed: Mutex<StdDuration>,
    /// In-progress sleep: (real start instant, simulated duration being slept)
    sleep_in_progress: Mutex<Option<(Instant, StdDuration)>>,
}

impl SimulatedTimeSource {
    /// Create a new simulated time source.
    ///
    /// # Arguments
    /// * `start_time` - Starting instant of the simulation
    /// * `end_time` - Instant at which the simulation ends
    /// * `multiplier` - Time acceleration (60.0 = 1 simulated minute per real second),
    ///   0.0 for fast-forward. Negative values fall back to 3600.0.
    pub fn new(start_time: DateTime<Utc>, end_time: DateTime<Utc>, multiplier: f64) -> Self {
        let time_multiplier = if multiplier == 0.0 {
            0.0
        } else if multiplier < 0.0 {
            3600.0
        } else {
            multiplier
        };

        Self {
            start_time,
            end_time,
            time_multiplier,
            elapsed: Mutex::new(StdDuration::ZERO),
            sleep_in_progress: Mutex::new(None),
        }
    }

    /// Fast-forward source starting at `start_time` that never ends on its own.
    pub fn fast_forward(start_time: DateTime<Utc>) -> Self {
        Self::new(start_time, DateTime::<Utc>::MAX_UTC, 0.0)
    }

    fn is_fast_forward(&self) -> bool {
        self.time_multiplier == 0.0
    }

    fn current_time(&self) -> DateTime<Utc> {
        let mut total = *self.elapsed.lock().unwrap_or_else(PoisonError::into_inner);

        // Smooth progress while a linear sleep is running
        if let Some((started, simulated)) = *self
            .sleep_in_progress
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
        {
            let progressed = started.elapsed().as_secs_f64() * self.time_multiplier;
            total += StdDuration::from_secs_f64(progressed.min(simulated.as_secs_f64()));
        }

        let simulated = ChronoDuration::from_std(total)
            .ok()
            .and_then(|offset| self.start_time.checked_add_signed(offset))
            .unwrap_or(self.end_time);

        simulated.min(self.end_time)
    }

    fn remaining(&self) -> StdDuration {
        (self.end_time - self.current_time())
            .to_std()
            .unwrap_or(StdDuration::ZERO)
    }
}

impl TimeSource for SimulatedTimeSource {
    fn now(&self) -> DateTime<Utc> {
        self.current_time()
    }

    fn sleep(&self, duration: StdDuration) {
        let step = duration.min(self.remaining());
        if step.is_zero() {
            return;
        }

        if self.is_fast_forward() {
            *self.elapsed.lock().unwrap_or_else(PoisonError::into_inner) += step;
            return;
        }

        *self
            .sleep_in_progress
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some((Instant::now(), step));

        std::thread::sleep(StdDuration::from_secs_f64(
            step.as_secs_f64() / self.time_multiplier,
        ));

        // Time only advances once the sleep has completed
        *self
            .sleep_in_progress
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = None;
        *self.elapsed.lock().unwrap_or_else(PoisonError::into_inner) += step;
    }

    fn is_simulated(&self) -> bool {
        true
    }

    fn is_ended(&self) -> bool {
        self.current_time() >= self.end_time
    }
}

/// Initialize the global time source (call once at startup)
pub fn init_time_source(source: Arc<dyn TimeSource>) {
    TIME_SOURCE.set(source).ok();
}

/// Check if the time source has been initialized
pub fn is_initialized() -> bool {
    TIME_SOURCE.get().is_some()
}

/// The global time source, installing the real clock on first use
pub fn global() -> Arc<dyn TimeSource> {
    Arc::clone(TIME_SOURCE.get_or_init(|| Arc::new(RealTimeSource)))
}

/// Get the current instant from the global time source
pub fn now() -> DateTime<Utc> {
    global().now()
}

/// Check if we're running in simulation mode
pub fn is_simulated() -> bool {
    global().is_simulated()
}

/// Parse a "YYYY-MM-DD HH:MM:SS" wall-clock time in a specific timezone
pub fn parse_datetime_in_tz(s: &str, tz: chrono_tz::Tz) -> Result<DateTime<Utc>, String> {
    use chrono::NaiveDateTime;

    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map_err(|e| format!("Invalid datetime format: {e}. Use YYYY-MM-DD HH:MM:SS"))?;

    tz.from_local_datetime(&naive)
        .single()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| format!("Ambiguous or invalid time in timezone {tz}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    #[test]
    fn test_fast_forward_advances_only_on_sleep() {
        let source = SimulatedTimeSource::fast_forward(at(1_000));
        assert_eq!(source.now(), at(1_000));
        assert_eq!(source.now(), at(1_000));

        source.sleep(StdDuration::from_secs(90));
        assert_eq!(source.now(), at(1_090));
        assert!(source.is_simulated());
        assert!(!source.is_ended());
    }

    #[test]
    fn test_simulation_caps_at_end_time() {
        let source = SimulatedTimeSource::new(at(0), at(10), 0.0);
        source.sleep(StdDuration::from_secs(4));
        assert!(!source.is_ended());

        source.sleep(StdDuration::from_secs(60));
        assert_eq!(source.now(), at(10));
        assert!(source.is_ended());

        // Further sleeps are no-ops
        source.sleep(StdDuration::from_secs(60));
        assert_eq!(source.now(), at(10));
    }

    #[test]
    fn test_linear_mode_scales_sleep() {
        // 1000x: one simulated second takes a millisecond
        let source = SimulatedTimeSource::new(at(0), at(3_600), 1000.0);
        source.sleep(StdDuration::from_secs(2));
        assert_eq!(source.now(), at(2));
    }

    #[test]
    fn test_real_time_source_checked_now_matches_now() {
        let source = RealTimeSource;
        let checked = source.checked_now().expect("system clock after epoch");
        let plain = source.now();
        assert!((plain - checked).num_seconds().abs() <= 1);
        assert!(!source.is_simulated());
    }

    #[test]
    fn test_parse_datetime_in_tz() {
        let parsed = parse_datetime_in_tz("2024-01-15 09:30:00", chrono_tz::Asia::Kolkata).unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-01-15T04:00:00+00:00");

        assert!(parse_datetime_in_tz("2024-01-15", chrono_tz::UTC).is_err());
        // 02:30 does not exist on the US spring-forward day
        assert!(
            parse_datetime_in_tz("2024-03-10 02:30:00", chrono_tz::America::New_York).is_err()
        );
    }
}
