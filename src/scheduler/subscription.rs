//! Subscriber bookkeeping for the refresh scheduler.

use crate::clock::{DisplayConfig, TimeParts};

/// Called with every fresh sample of the subscriber's timezone.
pub type TickCallback = Box<dyn FnMut(TimeParts)>;

/// Called exactly once when the subscription ends.
pub type TeardownHook = Box<dyn FnOnce()>;

/// Handle returned by `RefreshScheduler::subscribe`. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(pub(crate) u64);

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

pub(crate) struct Subscriber {
    pub(crate) config: DisplayConfig,
    /// Schedule key (canonical zone name) this subscriber is attached to
    pub(crate) zone: String,
    on_tick: TickCallback,
    on_teardown: Option<TeardownHook>,
}

impl Subscriber {
    pub(crate) fn new(
        config: DisplayConfig,
        zone: String,
        on_tick: TickCallback,
        on_teardown: Option<TeardownHook>,
    ) -> Self {
        Self {
            config,
            zone,
            on_tick,
            on_teardown,
        }
    }

    pub(crate) fn deliver(&mut self, parts: TimeParts) {
        (self.on_tick)(parts);
    }

    /// Consume the subscriber, running its teardown hook.
    pub(crate) fn tear_down(mut self) {
        if let Some(hook) = self.on_teardown.take() {
            hook();
        }
    }
}
