use std::rc::Rc;

use yew::prelude::*;

use crate::config::LandingConfig;
use crate::prefs::UserPreferences;
use crate::scroll::{scroll_to_top, use_scroll_metrics, ScrollDecorations};

#[derive(Properties, PartialEq)]
pub struct ScrollProgressProps {
    pub config: Rc<LandingConfig>,
    pub prefs: UserPreferences,
}

/// Reading progress bar plus the back-to-top button.
#[function_component(ScrollProgress)]
pub fn scroll_progress(props: &ScrollProgressProps) -> Html {
    let metrics = use_scroll_metrics();
    let decorations = ScrollDecorations::new(&metrics, &props.config);

    let on_back_to_top = {
        let smooth = props.prefs.smooth_scroll();
        Callback::from(move |_: MouseEvent| scroll_to_top(smooth))
    };

    html! {
        <>
            <div class="scroll-progress" style={decorations.progress_style()}></div>
            <button
                class={classes!("back-to-top", decorations.back_to_top_visible.then(|| "visible"))}
                onclick={on_back_to_top}
                aria-label="Наверх"
            >
                {"↑"}
            </button>
            <style>
                {r#"
                    .scroll-progress {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        height: 3px;
                        background: linear-gradient(90deg, #1E90FF, #7EB2FF);
                        transform-origin: 0 50%;
                        transform: scaleX(0);
                        z-index: 60;
                    }
                    .back-to-top {
                        position: fixed;
                        right: 1.5rem;
                        bottom: 1.5rem;
                        width: 48px;
                        height: 48px;
                        border-radius: 50%;
                        border: 1px solid rgba(30, 144, 255, 0.4);
                        background: rgba(26, 26, 26, 0.9);
                        color: #fff;
                        font-size: 1.3rem;
                        cursor: pointer;
                        opacity: 0;
                        pointer-events: none;
                        transform: translateY(12px);
                        transition: opacity 0.3s ease, transform 0.3s ease;
                        z-index: 40;
                    }
                    .back-to-top.visible {
                        opacity: 1;
                        pointer-events: auto;
                        transform: translateY(0);
                    }
                "#}
            </style>
        </>
    }
}
