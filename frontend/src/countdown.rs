use std::fmt;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::Reducible;

use crate::config;

pub const TICK_MILLIS: u32 = 1_000;

/// Seconds left on the limited-time offer. Never goes below zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    pub fn new(initial_secs: u32) -> Self {
        Self { remaining: initial_secs }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    pub fn tick(self) -> Self {
        Self {
            remaining: self.remaining.saturating_sub(1),
        }
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(config::OFFER_DURATION_SECS)
    }
}

/// Renders as `MM:SS`.
impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.remaining / 60, self.remaining % 60)
    }
}

pub enum CountdownAction {
    Tick,
}

impl Reducible for Countdown {
    type Action = CountdownAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            // Same Rc back means yew skips the re-render.
            CountdownAction::Tick if self.is_expired() => self,
            CountdownAction::Tick => Rc::new(self.tick()),
        }
    }
}

/// Something that can run a callback on a fixed period until its handle is dropped.
pub trait Scheduler {
    type Handle;

    fn every(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Self::Handle;
}

pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Interval;

    fn every(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms, callback)
    }
}

/// Owns the running tick. Dropping it cancels the underlying interval.
#[must_use = "the countdown stops as soon as the subscription is dropped"]
pub struct Subscription<H> {
    _handle: H,
}

pub fn subscribe<S, F>(scheduler: &S, on_tick: F) -> Subscription<S::Handle>
where
    S: Scheduler,
    F: FnMut() + 'static,
{
    Subscription {
        _handle: scheduler.every(TICK_MILLIS, Box::new(on_tick)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    type Slots = Rc<RefCell<Vec<Option<Box<dyn FnMut()>>>>>;

    #[derive(Default)]
    struct ManualScheduler {
        slots: Slots,
        periods: RefCell<Vec<u32>>,
    }

    struct ManualHandle {
        slots: Slots,
        index: usize,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.slots.borrow_mut()[self.index] = None;
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn every(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> ManualHandle {
            self.periods.borrow_mut().push(period_ms);
            let mut slots = self.slots.borrow_mut();
            slots.push(Some(callback));
            ManualHandle {
                slots: self.slots.clone(),
                index: slots.len() - 1,
            }
        }
    }

    impl ManualScheduler {
        fn fire(&self) {
            for callback in self.slots.borrow_mut().iter_mut().flatten() {
                callback();
            }
        }
    }

    fn ticking(scheduler: &ManualScheduler, initial: u32) -> (Rc<Cell<Countdown>>, Subscription<ManualHandle>) {
        let state = Rc::new(Cell::new(Countdown::new(initial)));
        let subscription = {
            let state = state.clone();
            subscribe(scheduler, move || state.set(state.get().tick()))
        };
        (state, subscription)
    }

    #[test]
    fn test_display() {
        assert_eq!(Countdown::new(0).to_string(), "00:00");
        assert_eq!(Countdown::new(65).to_string(), "01:05");
        assert_eq!(Countdown::new(900).to_string(), "15:00");
        assert_eq!(Countdown::new(59).to_string(), "00:59");
        assert_eq!(Countdown::default().to_string(), "15:00");
    }

    #[test]
    fn test_remaining_follows_elapsed_time() {
        let mut countdown = Countdown::default();
        for elapsed in 0..=900u32 {
            assert_eq!(countdown.remaining(), 900u32.saturating_sub(elapsed));
            countdown = countdown.tick();
        }
        assert!(countdown.is_expired());
    }

    #[test]
    fn test_stays_at_zero() {
        let mut countdown = Countdown::new(2);
        for _ in 0..50 {
            countdown = countdown.tick();
        }
        assert_eq!(countdown.remaining(), 0);
        assert_eq!(countdown.to_string(), "00:00");
    }

    #[test]
    fn test_reduce() {
        let running = Rc::new(Countdown::new(3));
        let next = running.clone().reduce(CountdownAction::Tick);
        assert_eq!(next.remaining(), 2);

        let expired = Rc::new(Countdown::new(0));
        let next = expired.clone().reduce(CountdownAction::Tick);
        assert!(Rc::ptr_eq(&expired, &next));
    }

    #[test]
    fn test_subscription_ticks_every_second() {
        let scheduler = ManualScheduler::default();
        let (state, _subscription) = ticking(&scheduler, 900);

        assert_eq!(*scheduler.periods.borrow(), vec![TICK_MILLIS]);
        for _ in 0..65 {
            scheduler.fire();
        }
        assert_eq!(state.get().remaining(), 835);
        assert_eq!(state.get().to_string(), "13:55");
    }

    #[test]
    fn test_dropped_subscription_stops_ticking() {
        let scheduler = ManualScheduler::default();
        let (state, subscription) = ticking(&scheduler, 900);

        scheduler.fire();
        assert_eq!(state.get().remaining(), 899);

        drop(subscription);
        scheduler.fire();
        scheduler.fire();
        assert_eq!(state.get().remaining(), 899);
    }
}
