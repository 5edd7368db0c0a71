use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="pp-not-found">
            <h1>{"404"}</h1>
            <p>{"This page could not be found."}</p>
            <Link<Route> to={Route::Home}>{"Back to Perfect Pose"}</Link<Route>>
            <style>
                {r#"
                .pp-not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    background: #000;
                    color: #fff;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
                }
                .pp-not-found h1 { font-size: 4rem; font-weight: 700; margin: 0; }
                .pp-not-found p { color: #9ca3af; }
                .pp-not-found a { color: #60a5fa; }
                "#}
            </style>
        </div>
    }
}
