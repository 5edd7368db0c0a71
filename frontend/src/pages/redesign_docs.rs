use yew::prelude::*;

use crate::catalog::{endpoints, EndpointDoc, HttpMethod};
use crate::components::footer::Footer;
use crate::components::icon::{Icon, IconKind};
use crate::config::SiteVariant;
use crate::docs::{EndpointSection, Sidebar, DOCS_CSS};
use crate::nav::Nav;

const VARIANT: SiteVariant = SiteVariant::Redesign;

struct Highlight {
    icon: IconKind,
    tint: &'static str,
    title: &'static str,
    body: &'static str,
}

const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: IconKind::Zap,
        tint: "pp-tint-blue",
        title: "Local First",
        body: "Incredibly fast and private. No cloud dependency.",
    },
    Highlight {
        icon: IconKind::Terminal,
        tint: "pp-tint-green",
        title: "RESTful",
        body: "Standard HTTP methods and status codes.",
    },
];

/// Separates the prose introduction from the endpoint reference. The
/// introduction gets its own header block, so only its summary is kept.
fn split_introduction(catalog: &'static [EndpointDoc]) -> (&'static str, Vec<&'static EndpointDoc>) {
    let (intro, reference): (Vec<&EndpointDoc>, Vec<&EndpointDoc>) = catalog
        .iter()
        .partition(|endpoint| endpoint.method == HttpMethod::Info);
    let summary: &'static str = intro.first().map(|endpoint| endpoint.summary).unwrap_or_default();
    (summary, reference)
}

#[function_component(RedesignApiDocs)]
pub fn redesign_api_docs() -> Html {
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let catalog = endpoints(VARIANT);
    let (summary, reference) = split_introduction(catalog);

    html! {
        <div class="pp-page pp-docs2">
            <Nav variant={VARIANT} />
            <main class="pp-docs2-layout">
                <div class="pp-docs2-side">
                    <Sidebar endpoints={catalog} />
                </div>
                <div class="pp-docs2-main">
                    <div id="introduction" class="pp-docs2-intro">
                        <h1>{"API Documentation"}</h1>
                        <p>{ summary }</p>
                        <div class="pp-docs2-highlights">
                            { for HIGHLIGHTS.iter().map(|highlight| html! {
                                <div key={highlight.title} class="pp-docs2-highlight">
                                    <div class={classes!("pp-docs2-icon", highlight.tint)}>
                                        <Icon kind={highlight.icon} />
                                    </div>
                                    <div>
                                        <h4>{ highlight.title }</h4>
                                        <p>{ highlight.body }</p>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>
                    { for reference.into_iter().map(|endpoint| html! {
                        <EndpointSection key={endpoint.id} endpoint={*endpoint} variant={VARIANT} />
                    }) }
                </div>
            </main>
            <Footer variant={VARIANT} />
            <style>{ DOCS_CSS }</style>
            <style>{ REDESIGN_DOCS_CSS }</style>
        </div>
    }
}

const REDESIGN_DOCS_CSS: &str = r#"
.pp-docs2 {
    background: #000;
    color: #d1d5db;
    min-height: 100vh;
    padding-top: 5rem;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
}
.pp-docs2-layout {
    max-width: 80rem;
    margin: 0 auto;
    padding: 3rem 1.5rem;
    display: grid;
    grid-template-columns: 3fr 9fr;
    gap: 3rem;
}
.pp-docs2-intro { scroll-margin-top: 6rem; }
.pp-docs2-intro h1 { font-size: 3rem; font-weight: 700; color: #fff; margin-bottom: 2rem; }
.pp-docs2-intro > p { font-size: 1.125rem; color: #9ca3af; max-width: 48rem; }
.pp-docs2-highlights { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; padding-top: 1rem; }
.pp-docs2-highlight {
    display: flex;
    gap: 1rem;
    align-items: center;
    padding: 1.5rem;
    border-radius: 0.75rem;
    background: rgba(17, 24, 39, 0.5);
    border: 1px solid rgba(255, 255, 255, 0.1);
}
.pp-docs2-highlight h4 { color: #fff; font-weight: 700; margin: 0; }
.pp-docs2-highlight p { font-size: 0.875rem; margin: 0; }
.pp-docs2-icon { width: 2rem; height: 2rem; flex-shrink: 0; }
.pp-tint-blue { color: #60a5fa; }
.pp-tint-green { color: #4ade80; }
@media (max-width: 1024px) {
    .pp-docs2-layout { grid-template-columns: 1fr; }
    .pp-docs2-side { display: none; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::REDESIGN_ENDPOINTS;

    #[test]
    fn introduction_is_split_from_the_reference() {
        let (summary, reference) = split_introduction(REDESIGN_ENDPOINTS);
        assert!(summary.starts_with("The official guide"));
        assert_eq!(reference.len(), REDESIGN_ENDPOINTS.len() - 1);
        assert!(reference.iter().all(|endpoint| endpoint.method != HttpMethod::Info));
        assert_eq!(reference[0].id, "index");
    }

    #[test]
    fn catalog_without_introduction_has_empty_summary() {
        let (summary, reference) = split_introduction(&REDESIGN_ENDPOINTS[1..]);
        assert_eq!(summary, "");
        assert_eq!(reference.len(), REDESIGN_ENDPOINTS.len() - 1);
    }
}
