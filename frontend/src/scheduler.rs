use gloo_timers::callback::{Interval, Timeout};

/// Timer capability handed to anything that animates on a clock.
///
/// Dropping a returned handle cancels the timer.
pub trait Scheduler {
    type Handle;

    fn every(&self, millis: u32, tick: Box<dyn FnMut()>) -> Self::Handle;

    fn once(&self, millis: u32, fire: Box<dyn FnOnce()>) -> Self::Handle;
}

/// `setInterval` / `setTimeout` through gloo.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserScheduler;

pub struct BrowserTimer {
    _interval: Option<Interval>,
    _timeout: Option<Timeout>,
}

impl Scheduler for BrowserScheduler {
    type Handle = BrowserTimer;

    fn every(&self, millis: u32, tick: Box<dyn FnMut()>) -> BrowserTimer {
        BrowserTimer {
            _interval: Some(Interval::new(millis, tick)),
            _timeout: None,
        }
    }

    fn once(&self, millis: u32, fire: Box<dyn FnOnce()>) -> BrowserTimer {
        BrowserTimer {
            _interval: None,
            _timeout: Some(Timeout::new(millis, fire)),
        }
    }
}

#[cfg(test)]
pub use virtual_clock::VirtualClock;

#[cfg(test)]
mod virtual_clock {
    use super::Scheduler;
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::rc::{Rc, Weak};

    struct Entry {
        due: u64,
        period: Option<u64>,
        // None while the job is running
        job: Option<Box<dyn FnMut()>>,
    }

    #[derive(Default)]
    struct ClockState {
        now: u64,
        next_id: u64,
        entries: BTreeMap<u64, Entry>,
    }

    /// Deterministic scheduler: time only moves when `advance` is called.
    #[derive(Clone, Default)]
    pub struct VirtualClock {
        state: Rc<RefCell<ClockState>>,
    }

    pub struct VirtualTimer {
        id: u64,
        clock: Weak<RefCell<ClockState>>,
    }

    impl Drop for VirtualTimer {
        fn drop(&mut self) {
            if let Some(clock) = self.clock.upgrade() {
                clock.borrow_mut().entries.remove(&self.id);
            }
        }
    }

    impl VirtualClock {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn now(&self) -> u64 {
            self.state.borrow().now
        }

        pub fn pending(&self) -> usize {
            self.state.borrow().entries.len()
        }

        pub fn advance(&self, millis: u64) {
            let target = self.now() + millis;
            loop {
                let next = {
                    let mut state = self.state.borrow_mut();
                    let due = state
                        .entries
                        .iter()
                        .filter(|(_, e)| e.job.is_some() && e.due <= target)
                        .min_by_key(|(id, e)| (e.due, **id))
                        .map(|(id, e)| (*id, e.due));
                    match due {
                        Some((id, due)) => {
                            state.now = due;
                            state
                                .entries
                                .get_mut(&id)
                                .and_then(|e| e.job.take())
                                .map(|job| (id, job))
                        }
                        None => None,
                    }
                };

                let Some((id, mut job)) = next else { break };
                job();

                let mut state = self.state.borrow_mut();
                let finished = match state.entries.get_mut(&id) {
                    Some(entry) => match entry.period {
                        Some(period) => {
                            entry.due += period;
                            entry.job = Some(job);
                            false
                        }
                        None => true,
                    },
                    // cancelled from inside its own callback
                    None => false,
                };
                if finished {
                    state.entries.remove(&id);
                }
            }
            self.state.borrow_mut().now = target;
        }

        fn insert(&self, delay: u64, period: Option<u64>, job: Box<dyn FnMut()>) -> VirtualTimer {
            let mut state = self.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            let due = state.now + delay;
            state.entries.insert(
                id,
                Entry {
                    due,
                    period,
                    job: Some(job),
                },
            );
            VirtualTimer {
                id,
                clock: Rc::downgrade(&self.state),
            }
        }
    }

    impl Scheduler for VirtualClock {
        type Handle = VirtualTimer;

        fn every(&self, millis: u32, tick: Box<dyn FnMut()>) -> VirtualTimer {
            let period = u64::from(millis).max(1);
            self.insert(period, Some(period), tick)
        }

        fn once(&self, millis: u32, fire: Box<dyn FnOnce()>) -> VirtualTimer {
            let mut fire = Some(fire);
            self.insert(
                u64::from(millis),
                None,
                Box::new(move || {
                    if let Some(fire) = fire.take() {
                        fire();
                    }
                }),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn interval_fires_once_per_period() {
        let clock = VirtualClock::new();
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let _timer = clock.every(100, Box::new(move || counter.set(counter.get() + 1)));

        clock.advance(99);
        assert_eq!(hits.get(), 0);
        clock.advance(1);
        assert_eq!(hits.get(), 1);
        clock.advance(250);
        assert_eq!(hits.get(), 3);
        assert_eq!(clock.now(), 350);
    }

    #[test]
    fn dropping_the_handle_cancels() {
        let clock = VirtualClock::new();
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let timer = clock.once(50, Box::new(move || counter.set(counter.get() + 1)));
        drop(timer);

        clock.advance(1_000);
        assert_eq!(hits.get(), 0);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn one_shot_is_removed_after_firing() {
        let clock = VirtualClock::new();
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let _timer = clock.once(50, Box::new(move || counter.set(counter.get() + 1)));

        clock.advance(500);
        assert_eq!(hits.get(), 1);
        assert_eq!(clock.pending(), 0);
    }
}
