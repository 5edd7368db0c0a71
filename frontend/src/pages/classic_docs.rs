use yew::prelude::*;

use crate::catalog::endpoints;
use crate::components::footer::Footer;
use crate::config::SiteVariant;
use crate::docs::{EndpointSection, DOCS_CSS};
use crate::nav::{Nav, SectionLink};
use crate::pages::classic::CLASSIC_CSS;
use crate::reveal::{use_reveal, RevealMotion, RevealOptions};

const VARIANT: SiteVariant = SiteVariant::Classic;

struct IntroTopic {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    href: &'static str,
}

const INTRO_TOPICS: &[IntroTopic] = &[
    IntroTopic {
        icon: "🚀",
        title: "Getting Started",
        description: "Your first steps to integrate with our API. Find out how to authenticate and make your first call.",
        href: "#run-complete-scan",
    },
    IntroTopic {
        icon: "📚",
        title: "API Reference",
        description: "A detailed reference for all available API endpoints, parameters, and responses.",
        href: "#status",
    },
    IntroTopic {
        icon: "⚙️",
        title: "Example Workflows",
        description: "See how to combine API calls to build complete features and workflows.",
        href: "#search-scans",
    },
];

#[function_component(ClassicApiDocs)]
pub fn classic_api_docs() -> Html {
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

    html! {
        <div class="pp-page">
            <Nav variant={VARIANT} />
            <main>
                <section class="pp-docs-hero" style="background-image: url('/header.png');">
                    <div class="pp-docs-hero-shade"></div>
                    <div class="pp-docs-hero-content">
                        <h1>{"API Documentation"}</h1>
                        <p>{"The official guide to integrating with the Perfect Pose biometric analysis system."}</p>
                        <SectionLink variant={VARIANT} section="sign-up" class={classes!("pp-btn", "pp-btn--solid")}>
                            {"Get API Key"}
                        </SectionLink>
                    </div>
                </section>

                <IntroSection />

                <div class="pp-docs-body">
                    <section id="overview" class="pp-endpoint pp-endpoint--card">
                        <h2>{"Overview"}</h2>
                        <p>
                            {"The Perfect Pose API provides a set of endpoints to initiate biometric scans, manage users, and retrieve results. The API is built with FastAPI and follows RESTful principles. All responses are in JSON format."}
                        </p>
                    </section>
                    { for endpoints(VARIANT).iter().map(|endpoint| html! {
                        <EndpointSection key={endpoint.id} endpoint={*endpoint} variant={VARIANT} />
                    }) }
                </div>
            </main>
            <Footer variant={VARIANT} />
            <style>{ CLASSIC_CSS }</style>
            <style>{ DOCS_CSS }</style>
            <style>{ CLASSIC_DOCS_CSS }</style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct IntroCardProps {
    index: usize,
}

#[function_component(IntroCard)]
fn intro_card(props: &IntroCardProps) -> Html {
    let topic = &INTRO_TOPICS[props.index];
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), RevealOptions::toggle(0.5));
    let motion = RevealMotion::fade(0.5).slide_y(50.0).rotate_from(-5.0).staggered(props.index);

    html! {
        <div ref={node} class="pp-card pp-card--lift pp-center" style={motion.style(visible)}>
            <div class="pp-card-icon">{ topic.icon }</div>
            <h3 class="pp-card-title">{ topic.title }</h3>
            <p class="pp-card-text">{ topic.description }</p>
            <a href={topic.href} class="pp-btn pp-btn--outline">{"Learn More"}</a>
        </div>
    }
}

#[function_component(IntroSection)]
fn intro_section() -> Html {
    html! {
        <section id="docs-intro" class="pp-section">
            <div class="pp-container">
                <h2 class="pp-section-title">{"Introduction to the Docs"}</h2>
                <div class="pp-grid-3">
                    { for (0..INTRO_TOPICS.len()).map(|index| html! { <IntroCard key={index} {index} /> }) }
                </div>
            </div>
        </section>
    }
}

const CLASSIC_DOCS_CSS: &str = r#"
.pp-docs-hero {
    position: relative;
    padding: 5rem 1.5rem;
    display: flex;
    align-items: center;
    justify-content: center;
    text-align: center;
    background-size: cover;
    background-position: center;
}
.pp-docs-hero-shade { position: absolute; inset: 0; background: rgba(0, 0, 0, 0.6); }
.pp-docs-hero-content { position: relative; z-index: 10; }
.pp-docs-hero-content h1 { font-size: 3rem; font-weight: 700; margin-bottom: 1rem; }
.pp-docs-hero-content p { font-size: 1.125rem; color: #d1d5db; max-width: 42rem; margin: 0 auto 2rem; }
.pp-center { text-align: center; }
.pp-docs-body { max-width: 56rem; margin: 0 auto; padding: 3rem 1.5rem; color: #e5e7eb; line-height: 1.6; }
"#;
