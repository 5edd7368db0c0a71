use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod catalog;
mod clipboard;
mod config;
mod docs;
mod error;
mod nav;
mod parallax;
mod reveal;
mod scroll_lock;
mod signup;
mod components {
    pub mod footer;
    pub mod icon;
}
mod pages {
    pub mod classic;
    pub mod classic_docs;
    pub mod not_found;
    pub mod redesign;
    pub mod redesign_docs;
}

use pages::{
    classic::ClassicHome,
    classic_docs::ClassicApiDocs,
    not_found::NotFound,
    redesign::RedesignHome,
    redesign_docs::RedesignApiDocs,
};

#[derive(Clone, Copy, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/api-docs")]
    ApiDocs,
    #[at("/classic")]
    Classic,
    #[at("/classic/api-docs")]
    ClassicApiDocs,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <RedesignHome /> }
        }
        Route::ApiDocs => {
            info!("Rendering API Docs page");
            html! { <RedesignApiDocs /> }
        }
        Route::Classic => {
            info!("Rendering Classic page");
            html! { <ClassicHome /> }
        }
        Route::ClassicApiDocs => {
            info!("Rendering Classic API Docs page");
            html! { <ClassicApiDocs /> }
        }
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Only fails when a logger is already installed.
    let _ = console_log::init_with_level(config::log_level());

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_resolve_to_their_pages() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/api-docs"), Some(Route::ApiDocs));
        assert_eq!(Route::recognize("/classic"), Some(Route::Classic));
        assert_eq!(Route::recognize("/classic/api-docs"), Some(Route::ClassicApiDocs));
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        for path in ["/pricing", "/classic/blog", "/api-docs/extra"] {
            let route = Route::recognize(path).or_else(Route::not_found_route);
            assert_eq!(route, Some(Route::NotFound), "{}", path);
        }
    }
}
