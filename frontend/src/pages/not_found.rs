use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"Такой страницы нет."}</p>
            <Link<Route> to={Route::Home} classes="forward-link">
                <button class="hero-cta">{"На главную"}</button>
            </Link<Route>>
            <style>
                {r#"
                    .not-found {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                        background: #1a1a1a;
                        color: #fff;
                    }
                "#}
            </style>
        </div>
    }
}
