use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod carousel;
pub mod config;
pub mod contact;
pub mod observe;
pub mod prefs;
pub mod reveal;
pub mod scheduler;
pub mod scroll;
pub mod spotlight;

pub mod components {
    pub mod contact_form;
    pub mod how_it_works;
    pub mod nav;
    pub mod scroll_progress;
}

pub mod pages {
    pub mod landing;
    pub mod not_found;
}

use components::nav::Nav;
use config::LandingConfig;
use pages::{landing::Landing, not_found::NotFound};
use prefs::UserPreferences;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component]
pub fn App() -> Html {
    let config = use_memo(|_| LandingConfig::load(), ());
    let prefs = *use_memo(|_| UserPreferences::detect(), ());

    let switch = {
        let config = config.clone();
        move |route: Route| match route {
            Route::Home => {
                info!("Rendering landing page");
                html! { <Landing config={config.clone()} {prefs} /> }
            }
            Route::NotFound => {
                info!("Rendering not found page");
                html! { <NotFound /> }
            }
        }
    };

    html! {
        <BrowserRouter>
            <Nav config={config.clone()} />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

/// Mounts the app on `<body>`.
pub fn run() {
    yew::Renderer::<App>::new().render();
}
