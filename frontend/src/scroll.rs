use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::config::LandingConfig;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
    pub scroll_y: f64,
}

impl ScrollMetrics {
    pub fn read() -> Option<Self> {
        let window = window()?;
        let root = window.document()?.document_element()?;
        Some(Self {
            scroll_top: f64::from(root.scroll_top()),
            scroll_height: f64::from(root.scroll_height()),
            client_height: f64::from(root.client_height()),
            scroll_y: window.scroll_y().unwrap_or(0.0),
        })
    }

    /// Fraction of the page scrolled, 0 when there is nothing to scroll.
    pub fn progress(&self) -> f64 {
        let range = self.scroll_height - self.client_height;
        if range.is_nan() || range <= 0.0 {
            return 0.0;
        }
        let ratio = self.scroll_top / range;
        if ratio.is_finite() {
            ratio.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollDecorations {
    pub progress: f64,
    pub back_to_top_visible: bool,
    pub nav_elevated: bool,
}

impl ScrollDecorations {
    pub fn new(metrics: &ScrollMetrics, config: &LandingConfig) -> Self {
        Self {
            progress: metrics.progress(),
            back_to_top_visible: metrics.scroll_top > config.back_to_top_threshold,
            nav_elevated: metrics.scroll_y > config.nav_elevation_threshold,
        }
    }

    pub fn progress_style(&self) -> String {
        format!("transform: scaleX({:.4});", self.progress)
    }
}

pub fn back_to_top_behavior(smooth: bool) -> ScrollBehavior {
    if smooth {
        ScrollBehavior::Smooth
    } else {
        ScrollBehavior::Instant
    }
}

pub fn scroll_to_top(smooth: bool) {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(back_to_top_behavior(smooth));
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Tracks document scroll position, refreshed on every scroll and resize.
#[hook]
pub fn use_scroll_metrics() -> ScrollMetrics {
    let metrics = use_state_eq(|| ScrollMetrics::read().unwrap_or_default());

    {
        let metrics = metrics.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = window() {
                    // Initial read, the page may load scrolled
                    if let Some(current) = ScrollMetrics::read() {
                        metrics.set(current);
                    }
                    let callback = Closure::<dyn Fn()>::new(move || {
                        if let Some(current) = ScrollMetrics::read() {
                            metrics.set(current);
                        }
                    });
                    for event in ["scroll", "resize"] {
                        let listener = callback.as_ref().unchecked_ref();
                        if window.add_event_listener_with_callback(event, listener).is_err() {
                            log::warn!("could not listen for {} events", event);
                        }
                    }

                    Box::new(move || {
                        for event in ["scroll", "resize"] {
                            let _ = window.remove_event_listener_with_callback(
                                event,
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                destructor
            },
            (),
        );
    }

    *metrics
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn at(scroll_top: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_top,
            scroll_height: 5_000.0,
            client_height: 1_000.0,
            scroll_y: scroll_top,
        }
    }

    #[test]
    fn progress_is_linear_inside_range() {
        assert_eq!(at(0.0).progress(), 0.0);
        assert_eq!(at(2_000.0).progress(), 0.5);
        assert_eq!(at(4_000.0).progress(), 1.0);
    }

    #[test]
    fn unscrollable_page_has_zero_progress() {
        let short = ScrollMetrics {
            scroll_top: 0.0,
            scroll_height: 800.0,
            client_height: 800.0,
            scroll_y: 0.0,
        };
        assert_eq!(short.progress(), 0.0);

        let shorter = ScrollMetrics {
            client_height: 900.0,
            ..short
        };
        assert_eq!(shorter.progress(), 0.0);
    }

    #[test]
    fn back_to_top_appears_strictly_above_600() {
        let config = LandingConfig::default();
        assert!(!ScrollDecorations::new(&at(599.0), &config).back_to_top_visible);
        assert!(!ScrollDecorations::new(&at(600.0), &config).back_to_top_visible);
        assert!(ScrollDecorations::new(&at(600.5), &config).back_to_top_visible);
        assert!(ScrollDecorations::new(&at(601.0), &config).back_to_top_visible);
    }

    #[test]
    fn nav_elevates_strictly_above_8() {
        let config = LandingConfig::default();
        assert!(!ScrollDecorations::new(&at(8.0), &config).nav_elevated);
        assert!(ScrollDecorations::new(&at(9.0), &config).nav_elevated);
    }

    #[test]
    fn page_restored_mid_scroll_decorates_on_first_read() {
        let deco = ScrollDecorations::new(&at(3_000.0), &LandingConfig::default());
        assert!(deco.back_to_top_visible);
        assert!(deco.nav_elevated);
        assert_eq!(deco.progress_style(), "transform: scaleX(0.7500);");
    }

    #[test]
    fn progress_style_is_a_horizontal_scale() {
        let deco = ScrollDecorations::new(&at(1_000.0), &LandingConfig::default());
        assert_eq!(deco.progress_style(), "transform: scaleX(0.2500);");
    }

    #[test]
    fn reduced_motion_jumps_instantly() {
        assert_eq!(back_to_top_behavior(true), ScrollBehavior::Smooth);
        assert_eq!(back_to_top_behavior(false), ScrollBehavior::Instant);
    }

    proptest! {
        #[test]
        fn progress_always_within_unit_range(
            scroll_top in -10_000.0f64..100_000.0,
            scroll_height in 0.0f64..100_000.0,
            client_height in 0.0f64..100_000.0,
        ) {
            let metrics = ScrollMetrics {
                scroll_top,
                scroll_height,
                client_height,
                scroll_y: scroll_top,
            };
            let ratio = metrics.progress();
            prop_assert!((0.0..=1.0).contains(&ratio));
            if scroll_height <= client_height {
                prop_assert_eq!(ratio, 0.0);
            }
        }
    }
}
