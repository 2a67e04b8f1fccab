use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::prefs::UserPreferences;

pub const SPOTLIGHT_SELECTOR: &str = ".spotlight";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Pointer position inside `bounds` as percentages, clamped to 0..=100.
/// `None` for a box with no area.
pub fn pointer_percent(x: f64, y: f64, bounds: &Bounds) -> Option<(f64, f64)> {
    if bounds.width <= 0.0 || bounds.height <= 0.0 {
        return None;
    }
    let px = ((x - bounds.left) / bounds.width * 100.0).clamp(0.0, 100.0);
    let py = ((y - bounds.top) / bounds.height * 100.0).clamp(0.0, 100.0);
    Some((px, py))
}

/// Allows at most one animation frame to be queued at a time and remembers
/// its request id so it can be cancelled.
#[derive(Debug, Default)]
pub struct FrameGate {
    pending: bool,
    request_id: Option<i32>,
}

impl FrameGate {
    /// `true` when the caller should request a frame.
    pub fn request(&mut self) -> bool {
        !std::mem::replace(&mut self.pending, true)
    }

    pub fn scheduled(&mut self, request_id: i32) {
        self.request_id = Some(request_id);
    }

    pub fn complete(&mut self) {
        self.pending = false;
        self.request_id = None;
    }

    /// Clears the gate, returning the id of a frame that is still queued.
    pub fn cancel(&mut self) -> Option<i32> {
        self.pending = false;
        self.request_id.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[derive(Default)]
struct Tracker {
    gate: FrameGate,
    latest: Option<(Element, f64, f64)>,
}

fn paint(element: &Element, x: f64, y: f64) {
    let rect = element.get_bounding_client_rect();
    let bounds = Bounds {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    };
    let Some((px, py)) = pointer_percent(x, y, &bounds) else {
        return;
    };
    let Some(html) = element.dyn_ref::<HtmlElement>() else {
        return;
    };
    let style = html.style();
    let _ = style.set_property("--spot-x", &format!("{:.2}%", px));
    let _ = style.set_property("--spot-y", &format!("{:.2}%", py));
}

/// Feeds the pointer position over `.spotlight` elements inside `root` to CSS.
#[hook]
pub fn use_spotlight(root: NodeRef, prefs: UserPreferences) {
    use_effect_with_deps(
        move |(root, prefs)| {
            let enabled = prefs.spotlight_enabled();
            let destructor: Box<dyn FnOnce()> = match (enabled, root.cast::<Element>(), window()) {
                (false, _, _) => {
                    log::info!("spotlight disabled by reduced motion preference");
                    Box::new(|| ())
                }
                (true, Some(root), Some(window)) => {
                    let tracker = Rc::new(RefCell::new(Tracker::default()));

                    let frame = {
                        let tracker = tracker.clone();
                        Closure::<dyn FnMut(f64)>::new(move |_timestamp: f64| {
                            let latest = {
                                let mut tracker = tracker.borrow_mut();
                                tracker.gate.complete();
                                tracker.latest.take()
                            };
                            if let Some((element, x, y)) = latest {
                                paint(&element, x, y);
                            }
                        })
                    };

                    let on_move = {
                        let window = window.clone();
                        let tracker = tracker.clone();
                        Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
                            let Some(element) = event
                                .target()
                                .and_then(|t| t.dyn_into::<Element>().ok())
                                .and_then(|t| t.closest(SPOTLIGHT_SELECTOR).ok().flatten())
                            else {
                                return;
                            };
                            let x = f64::from(event.client_x());
                            let y = f64::from(event.client_y());
                            let mut tracker = tracker.borrow_mut();
                            tracker.latest = Some((element, x, y));
                            if !tracker.gate.request() {
                                return;
                            }
                            match window.request_animation_frame(frame.as_ref().unchecked_ref()) {
                                Ok(id) => tracker.gate.scheduled(id),
                                Err(_) => tracker.gate.complete(),
                            }
                        })
                    };

                    let _ = root.add_event_listener_with_callback(
                        "pointermove",
                        on_move.as_ref().unchecked_ref(),
                    );
                    Box::new(move || {
                        let _ = root.remove_event_listener_with_callback(
                            "pointermove",
                            on_move.as_ref().unchecked_ref(),
                        );
                        // The frame closure is freed with `on_move`
                        if let Some(id) = tracker.borrow_mut().gate.cancel() {
                            let _ = window.cancel_animation_frame(id);
                        }
                        drop(on_move);
                    })
                }
                _ => {
                    log::warn!("spotlight root missing, effect disabled");
                    Box::new(|| ())
                }
            };
            destructor
        },
        (root, prefs),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: Bounds = Bounds {
        left: 100.0,
        top: 50.0,
        width: 200.0,
        height: 100.0,
    };

    #[test]
    fn center_is_fifty_percent() {
        assert_eq!(pointer_percent(200.0, 100.0, &CARD), Some((50.0, 50.0)));
    }

    #[test]
    fn outside_pointer_is_clamped() {
        assert_eq!(pointer_percent(0.0, 500.0, &CARD), Some((0.0, 100.0)));
    }

    #[test]
    fn empty_box_is_skipped() {
        let flat = Bounds { height: 0.0, ..CARD };
        assert_eq!(pointer_percent(150.0, 50.0, &flat), None);
    }

    #[test]
    fn gate_coalesces_to_one_pending_frame() {
        let mut gate = FrameGate::default();
        assert!(gate.request());
        assert!(!gate.request());
        assert!(!gate.request());
        assert!(gate.is_pending());

        gate.complete();
        assert!(!gate.is_pending());
        assert!(gate.request());
    }

    #[test]
    fn queued_frame_is_handed_back_for_cancelling() {
        let mut gate = FrameGate::default();
        assert!(gate.request());
        gate.scheduled(7);

        assert_eq!(gate.cancel(), Some(7));
        assert!(!gate.is_pending());
        assert_eq!(gate.cancel(), None);
    }

    #[test]
    fn painted_frame_leaves_nothing_to_cancel() {
        let mut gate = FrameGate::default();
        assert!(gate.request());
        gate.scheduled(3);
        gate.complete();

        assert_eq!(gate.cancel(), None);
        assert!(gate.request());
    }
}
