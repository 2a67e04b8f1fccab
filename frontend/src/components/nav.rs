use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::LandingConfig;
use crate::scroll::{use_scroll_metrics, ScrollDecorations};
use crate::Route;

const SECTIONS: &[(&str, &str)] = &[
    ("#how-it-works", "Как мы работаем"),
    ("#benefits", "Преимущества"),
    ("#contact", "Контакты"),
];

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub config: Rc<LandingConfig>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let metrics = use_scroll_metrics();
    let elevated = ScrollDecorations::new(&metrics, &props.config).nav_elevated;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", elevated.then(|| "elevated"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Студия"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Меню">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for SECTIONS.iter().map(|(href, label)| html! {
                        <a href={*href} class="nav-link" onclick={close_menu.clone()}>{*label}</a>
                    }) }
                    <a href="#contact" class="nav-login-button" onclick={close_menu.clone()}>
                        {"Оставить заявку"}
                    </a>
                </div>
            </div>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        background: transparent;
                        transition: background 0.3s ease, box-shadow 0.3s ease;
                    }
                    .top-nav.elevated {
                        background: rgba(26, 26, 26, 0.92);
                        backdrop-filter: blur(10px);
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.35);
                    }
                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 1rem 2rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        color: #fff;
                        font-weight: 700;
                        font-size: 1.4rem;
                        text-decoration: none;
                    }
                    .nav-right {
                        display: flex;
                        gap: 1.5rem;
                        align-items: center;
                    }
                    .nav-link {
                        color: #ccc;
                        text-decoration: none;
                    }
                    .nav-login-button {
                        color: #fff;
                        background: #1E90FF;
                        padding: 0.6rem 1.2rem;
                        border-radius: 999px;
                        text-decoration: none;
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        flex-direction: column;
                        gap: 5px;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: #fff;
                    }
                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                        }
                        .nav-right {
                            display: none;
                        }
                        .nav-right.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            padding: 1.5rem;
                            background: rgba(26, 26, 26, 0.98);
                        }
                    }
                "#}
            </style>
        </nav>
    }
}
