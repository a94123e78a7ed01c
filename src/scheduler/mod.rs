//! Periodic refresh of clock displays.
//!
//! Displays subscribe with their [`DisplayConfig`] and a callback. The
//! scheduler keeps one schedule per timezone: every period it reads "now"
//! from the time source once, converts it to that zone and hands the same
//! [`TimeParts`] to each subscriber of the zone.
//!
//! ```text
//!            subscribe (first)              unsubscribe (last)
//!   Idle ───────────────────────▶ Active ───────────────────────▶ Idle
//! ```
//!
//! The loop is single-threaded and cooperative. The only wait is
//! [`TimeSource::sleep`] between ticks, and callbacks run on the caller's
//! thread, so a callback removed by [`RefreshScheduler::unsubscribe`] can
//! never fire afterwards.

pub mod subscription;

pub use subscription::{SubscriptionId, TeardownHook, TickCallback};

use chrono::{DateTime, TimeDelta, Utc};
use chrono_tz::Tz;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::clock::sampler::{resolve_timezone, sample_tz};
use crate::clock::{ClockError, DisplayConfig, TimeParts};
use crate::common::constants::REFRESH_PERIOD;
use crate::time::source::TimeSource;
use subscription::Subscriber;

/// Whether any display is being refreshed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// No subscribers, nothing scheduled
    Idle,
    /// At least one schedule is ticking
    Active,
}

/// Outcome of one [`RefreshScheduler::tick`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// Schedules that were due
    pub due: usize,
    /// Callbacks invoked
    pub delivered: usize,
    /// Due schedules skipped because the clock could not be read
    pub failures: usize,
}

/// The recurring sample of one timezone.
struct Schedule {
    tz: Tz,
    next_due: DateTime<Utc>,
    subscribers: Vec<SubscriptionId>,
}

pub struct RefreshScheduler {
    source: Arc<dyn TimeSource>,
    period: Duration,
    period_delta: TimeDelta,
    next_id: u64,
    subscribers: BTreeMap<SubscriptionId, Subscriber>,
    /// Keyed by canonical zone name
    schedules: BTreeMap<String, Schedule>,
    /// Set by a failed clock read, cleared by the next good one
    retry_pending: bool,
    debug_enabled: bool,
}

impl RefreshScheduler {
    pub fn new(source: Arc<dyn TimeSource>) -> Self {
        Self {
            source,
            period: REFRESH_PERIOD,
            period_delta: TimeDelta::seconds(1),
            next_id: 0,
            subscribers: BTreeMap::new(),
            schedules: BTreeMap::new(),
            retry_pending: false,
            debug_enabled: false,
        }
    }

    /// Override the refresh period. Only sub-second periods in tests need this.
    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self.period_delta = TimeDelta::from_std(period).unwrap_or(TimeDelta::seconds(1));
        self
    }

    /// Log subscription changes and sample failures in detail.
    pub fn with_debug(mut self, debug_enabled: bool) -> Self {
        self.debug_enabled = debug_enabled;
        self
    }

    pub fn state(&self) -> SchedulerState {
        if self.subscribers.is_empty() {
            SchedulerState::Idle
        } else {
            SchedulerState::Active
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn schedule_count(&self) -> usize {
        self.schedules.len()
    }

    /// Configuration a subscription was registered with.
    pub fn config(&self, id: SubscriptionId) -> Option<&DisplayConfig> {
        self.subscribers.get(&id).map(|s| &s.config)
    }

    /// Register a display.
    ///
    /// The timezone is resolved up front; an unknown zone is returned as
    /// [`ClockError::InvalidTimeZone`] and nothing is registered. The first
    /// sample arrives on the next [`tick`](Self::tick).
    pub fn subscribe(
        &mut self,
        config: DisplayConfig,
        on_tick: impl FnMut(TimeParts) + 'static,
        on_teardown: impl FnOnce() + 'static,
    ) -> Result<SubscriptionId, ClockError> {
        let tz = resolve_timezone(&config.time_zone)?;
        let zone = tz.name().to_string();

        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        let was_idle = self.state() == SchedulerState::Idle;
        // Without a reading the new zone is simply due on the next tick
        let now = self.source.checked_now().unwrap_or(DateTime::<Utc>::MIN_UTC);

        let schedule = self
            .schedules
            .entry(zone.clone())
            .or_insert_with(|| Schedule {
                tz,
                next_due: now,
                subscribers: Vec::new(),
            });
        schedule.subscribers.push(id);

        self.subscribers.insert(
            id,
            Subscriber::new(
                config,
                zone.clone(),
                Box::new(on_tick),
                Some(Box::new(on_teardown)),
            ),
        );

        if self.debug_enabled {
            if was_idle {
                log_debug!("Refresh scheduler active");
            }
            log_indented!("Subscribed {id} to {zone}");
        }

        Ok(id)
    }

    /// Remove a display. Its teardown hook runs before this returns and its
    /// callback is never invoked again. Returns false for unknown ids.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let Some(subscriber) = self.subscribers.remove(&id) else {
            return false;
        };

        if let Some(schedule) = self.schedules.get_mut(&subscriber.zone) {
            schedule.subscribers.retain(|s| *s != id);
            if schedule.subscribers.is_empty() {
                self.schedules.remove(&subscriber.zone);
            }
        }

        if self.debug_enabled {
            log_indented!("Unsubscribed {id} from {}", subscriber.zone);
            if self.state() == SchedulerState::Idle {
                log_debug!("Refresh scheduler idle");
            }
        }

        subscriber.tear_down();
        true
    }

    /// Remove every display, running all teardown hooks.
    pub fn unsubscribe_all(&mut self) {
        let ids: Vec<SubscriptionId> = self.subscribers.keys().copied().collect();
        for id in ids {
            self.unsubscribe(id);
        }
    }

    /// Sample every due schedule once and deliver the parts.
    ///
    /// A clock failure skips every schedule for this tick only. They stay
    /// registered and are sampled again after one period. Only
    /// [`TimeSource::checked_now`] is consulted, since the infallible
    /// [`TimeSource::now`] may panic on the same host fault.
    pub fn tick(&mut self) -> TickReport {
        let mut report = TickReport::default();

        let now = match self.source.checked_now() {
            Ok(now) => now,
            Err(e) => {
                report.due = self.schedules.len();
                report.failures = self.schedules.len();
                self.retry_pending = !self.schedules.is_empty();
                self.log_sample_failure(&e);
                return report;
            }
        };
        self.retry_pending = false;

        for schedule in self.schedules.values_mut() {
            if schedule.next_due > now {
                continue;
            }
            report.due += 1;

            let parts = sample_tz(schedule.tz, now);
            for id in &schedule.subscribers {
                if let Some(subscriber) = self.subscribers.get_mut(id) {
                    subscriber.deliver(parts);
                    report.delivered += 1;
                }
            }

            schedule.next_due += self.period_delta;
            // Fell behind (host suspended, slow callback): resync instead of bursting
            if schedule.next_due <= now {
                schedule.next_due = now + self.period_delta;
            }
        }

        report
    }

    /// Time until the earliest schedule is due, at most one period.
    ///
    /// After a failed clock read, or when the clock cannot be read now, this
    /// is one full period.
    pub fn time_until_next_tick(&self) -> Option<Duration> {
        if self.schedules.is_empty() {
            return None;
        }
        let now = match self.source.checked_now() {
            Ok(now) if !self.retry_pending => now,
            _ => return Some(self.period),
        };
        self.schedules
            .values()
            .map(|s| (s.next_due - now).to_std().unwrap_or(Duration::ZERO))
            .min()
            .map(|wait| wait.min(self.period))
    }

    /// Tick until `stop` is set, every subscriber has left, or a simulated
    /// time source runs out.
    pub fn run(&mut self, stop: &AtomicBool) -> TickReport {
        let mut total = TickReport::default();

        while !stop.load(Ordering::SeqCst)
            && self.state() == SchedulerState::Active
            && !self.source.is_ended()
        {
            let report = self.tick();
            total.due += report.due;
            total.delivered += report.delivered;
            total.failures += report.failures;

            if let Some(wait) = self.time_until_next_tick()
                && !wait.is_zero()
            {
                self.source.sleep(wait);
            }
        }

        total
    }

    fn log_sample_failure(&self, error: &ClockError) {
        log_warning!("{error}");
        if self.debug_enabled {
            log_indented!("Retrying in {}ms", self.period.as_millis());
        }
    }
}

impl Drop for RefreshScheduler {
    fn drop(&mut self) {
        self.unsubscribe_all();
    }
}
