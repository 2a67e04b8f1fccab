use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::config::LandingConfig;
use crate::scheduler::Scheduler;

/// Share of the section that must be on screen for auto-advance to run.
pub const VISIBILITY_THRESHOLD: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselTiming {
    pub interval_ms: u32,
    pub cooldown_ms: u32,
}

impl From<&LandingConfig> for CarouselTiming {
    fn from(config: &LandingConfig) -> Self {
        Self {
            interval_ms: config.step_interval_ms,
            cooldown_ms: config.step_cooldown_ms,
        }
    }
}

/// Whether viewport visibility will be reported to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Observed,
    Unobserved,
}

pub fn section_visible(is_intersecting: bool, ratio: f64) -> bool {
    is_intersecting && ratio >= VISIBILITY_THRESHOLD
}

enum Pending<H> {
    Ticking(H),
    Cooldown(H),
}

struct Inner<S: Scheduler> {
    scheduler: S,
    timing: CarouselTiming,
    step_count: usize,
    active: Cell<usize>,
    in_view: Cell<bool>,
    hovered: Cell<bool>,
    timer: RefCell<Option<Pending<S::Handle>>>,
    on_change: Box<dyn Fn(usize)>,
}

/// Controller for the "how it works" step list.
///
/// Cheap to clone; every clone drives the same state. Timer callbacks only
/// hold weak references, so dropping the last clone stops everything.
pub struct Carousel<S: Scheduler + 'static> {
    inner: Rc<Inner<S>>,
}

impl<S: Scheduler + 'static> Clone for Carousel<S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<S: Scheduler + 'static> Carousel<S> {
    /// Returns `None` when there are no steps to cycle through.
    pub fn new(
        step_count: usize,
        scheduler: S,
        timing: CarouselTiming,
        visibility: Visibility,
        on_change: impl Fn(usize) + 'static,
    ) -> Option<Self> {
        if step_count == 0 {
            return None;
        }
        let carousel = Self {
            inner: Rc::new(Inner {
                scheduler,
                timing,
                step_count,
                active: Cell::new(0),
                in_view: Cell::new(visibility == Visibility::Unobserved),
                hovered: Cell::new(false),
                timer: RefCell::new(None),
                on_change: Box::new(on_change),
            }),
        };
        if visibility == Visibility::Unobserved {
            carousel.start();
        }
        Some(carousel)
    }

    pub fn active_index(&self) -> usize {
        self.inner.active.get()
    }

    pub fn step_count(&self) -> usize {
        self.inner.step_count
    }

    pub fn is_auto_advancing(&self) -> bool {
        matches!(&*self.inner.timer.borrow(), Some(Pending::Ticking(_)))
    }

    pub fn is_cooling_down(&self) -> bool {
        matches!(&*self.inner.timer.borrow(), Some(Pending::Cooldown(_)))
    }

    /// (Re)starts the recurring tick, replacing whatever timer was pending.
    pub fn start(&self) {
        self.stop();
        let weak = Rc::downgrade(&self.inner);
        let handle = self.inner.scheduler.every(
            self.inner.timing.interval_ms,
            Box::new(move || {
                if let Some(carousel) = Self::upgrade(&weak) {
                    carousel.advance();
                }
            }),
        );
        *self.inner.timer.borrow_mut() = Some(Pending::Ticking(handle));
    }

    pub fn stop(&self) {
        let previous = self.inner.timer.borrow_mut().take();
        drop(previous);
    }

    /// Moves the highlight without touching the timer.
    /// Returns `false` for an index outside the list.
    pub fn select(&self, index: usize) -> bool {
        if index >= self.inner.step_count {
            log::warn!(
                "step {} out of range, carousel has {} steps",
                index,
                self.inner.step_count
            );
            return false;
        }
        if self.inner.active.replace(index) != index {
            (self.inner.on_change)(index);
        }
        true
    }

    /// User picked a step: highlight it and hold auto-advance for the cool-down.
    pub fn activate(&self, index: usize) {
        if self.select(index) {
            self.pause_for_interaction();
        }
    }

    pub fn pause_for_interaction(&self) {
        self.stop();
        let weak = Rc::downgrade(&self.inner);
        let handle = self.inner.scheduler.once(
            self.inner.timing.cooldown_ms,
            Box::new(move || {
                if let Some(carousel) = Self::upgrade(&weak) {
                    carousel.resume();
                }
            }),
        );
        *self.inner.timer.borrow_mut() = Some(Pending::Cooldown(handle));
    }

    pub fn hover_enter(&self) {
        self.inner.hovered.set(true);
        self.stop();
    }

    pub fn hover_leave(&self) {
        self.inner.hovered.set(false);
        if self.inner.in_view.get() {
            self.start();
        }
    }

    pub fn visibility_changed(&self, visible: bool) {
        let was_visible = self.inner.in_view.replace(visible);
        if !visible {
            // A pending cool-down outlives the exit; `resume` rechecks visibility
            if self.is_auto_advancing() {
                self.stop();
            }
        } else if !was_visible && !self.inner.hovered.get() && !self.is_cooling_down() {
            self.start();
        }
    }

    fn advance(&self) {
        let next = (self.inner.active.get() + 1) % self.inner.step_count;
        self.select(next);
    }

    fn resume(&self) {
        if self.inner.in_view.get() && !self.inner.hovered.get() {
            self.start();
        } else {
            self.stop();
        }
    }

    fn upgrade(weak: &Weak<Inner<S>>) -> Option<Self> {
        weak.upgrade().map(|inner| Self { inner })
    }
}
