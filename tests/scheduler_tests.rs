use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use chrono::{TimeZone, Utc};
use clockly::clock::ClockError;
use clockly::time::source::SimulatedTimeSource;
use clockly::{DisplayConfig, RefreshScheduler, SchedulerState, TimeParts};
use proptest::prelude::*;

fn fast_forward_scheduler() -> RefreshScheduler {
    let start = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
    RefreshScheduler::new(Arc::new(SimulatedTimeSource::fast_forward(start)))
}

#[test]
fn test_two_zones_one_instant() {
    let mut scheduler = fast_forward_scheduler();
    let seen: Rc<RefCell<Vec<(&str, TimeParts)>>> = Rc::default();

    for zone in ["Asia/Kolkata", "America/New_York"] {
        let sink = Rc::clone(&seen);
        scheduler
            .subscribe(
                DisplayConfig::new(zone, true, true),
                move |parts| sink.borrow_mut().push((zone, parts)),
                || {},
            )
            .unwrap();
    }
    assert_eq!(scheduler.state(), SchedulerState::Active);
    assert_eq!(scheduler.schedule_count(), 2);

    scheduler.tick();

    let seen = seen.borrow();
    assert!(seen.contains(&("Asia/Kolkata", TimeParts::new(17, 30, 0).unwrap())));
    assert!(seen.contains(&("America/New_York", TimeParts::new(7, 0, 0).unwrap())));
}

#[test]
fn test_unknown_zone_is_rejected_without_registering() {
    let mut scheduler = fast_forward_scheduler();
    let result = scheduler.subscribe(DisplayConfig::new("Mars/Olympus", true, true), |_| {}, || {});

    assert!(matches!(result, Err(ClockError::InvalidTimeZone(_))));
    assert_eq!(scheduler.subscriber_count(), 0);
    assert_eq!(scheduler.state(), SchedulerState::Idle);
}

#[test]
fn test_run_until_last_subscriber_leaves() {
    let scheduler = Rc::new(RefCell::new(fast_forward_scheduler()));
    let delivered = Rc::new(RefCell::new(0u32));
    let torn_down = Rc::new(RefCell::new(false));

    let counter = Rc::clone(&delivered);
    let flag = Rc::clone(&torn_down);
    let id = scheduler
        .borrow_mut()
        .subscribe(
            DisplayConfig::new("UTC", true, true),
            move |_| *counter.borrow_mut() += 1,
            move || *flag.borrow_mut() = true,
        )
        .unwrap();
    assert_eq!(
        scheduler.borrow().config(id).map(|c| c.time_zone.clone()),
        Some("UTC".to_string())
    );

    for _ in 0..5 {
        scheduler.borrow_mut().tick();
    }
    assert_eq!(*delivered.borrow(), 1);
    assert!(scheduler.borrow_mut().unsubscribe(id));
    assert!(*torn_down.borrow());
    assert!(scheduler.borrow().config(id).is_none());

    let before = *delivered.borrow();
    let report = scheduler.borrow_mut().run(&AtomicBool::new(false));
    assert_eq!(report.delivered, 0);
    assert_eq!(*delivered.borrow(), before);
    assert_eq!(scheduler.borrow().state(), SchedulerState::Idle);
}

proptest! {
    /// Subscribing N displays then removing all N leaves nothing to deliver to
    #[test]
    fn test_subscribe_then_unsubscribe_all_is_silent(
        zones in prop::collection::vec(
            prop::sample::select(clockly::clock::catalog::presets().to_vec()),
            1..12,
        ),
        remove_reversed in any::<bool>(),
    ) {
        let mut scheduler = fast_forward_scheduler();
        let calls = Rc::new(RefCell::new(0u32));
        let teardowns = Rc::new(RefCell::new(0u32));

        let mut ids = Vec::new();
        for zone in &zones {
            let calls = Rc::clone(&calls);
            let teardowns = Rc::clone(&teardowns);
            ids.push(
                scheduler
                    .subscribe(
                        DisplayConfig::new(*zone, true, true),
                        move |_| *calls.borrow_mut() += 1,
                        move || *teardowns.borrow_mut() += 1,
                    )
                    .unwrap(),
            );
        }
        if remove_reversed {
            ids.reverse();
        }
        for id in ids {
            prop_assert!(scheduler.unsubscribe(id));
        }

        let report = scheduler.tick();
        prop_assert_eq!(report.delivered, 0);
        prop_assert_eq!(*calls.borrow(), 0);
        prop_assert_eq!(*teardowns.borrow() as usize, zones.len());
        prop_assert_eq!(scheduler.state(), SchedulerState::Idle);
        prop_assert_eq!(scheduler.schedule_count(), 0);
    }
}
