use yew::prelude::*;

use crate::config::SiteVariant;
use crate::reveal::{use_reveal, RevealMotion, RevealOptions};

const SOCIAL_ICONS: [&str; 4] = ["📧", "📱", "🐦", "📸"];

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub variant: SiteVariant,
}

/// Entrance motion for the footer. Only the redesign animates it in.
fn footer_motion(variant: SiteVariant) -> Option<RevealMotion> {
    match variant {
        SiteVariant::Redesign => Some(RevealMotion::fade(0.8).slide_y(20.0)),
        SiteVariant::Classic => None,
    }
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    match footer_motion(props.variant) {
        Some(motion) => html! { <RevealedFooter {motion} /> },
        None => html! { <FooterContent /> },
    }
}

#[derive(Properties, PartialEq)]
struct RevealedFooterProps {
    motion: RevealMotion,
}

#[function_component(RevealedFooter)]
fn revealed_footer(props: &RevealedFooterProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), RevealOptions::once(0.2));
    html! { <FooterContent {node} style={props.motion.style(visible)} /> }
}

#[derive(Properties, PartialEq)]
struct FooterContentProps {
    #[prop_or_default]
    node: NodeRef,
    #[prop_or_default]
    style: AttrValue,
}

#[function_component(FooterContent)]
fn footer_content(props: &FooterContentProps) -> Html {
    html! {
        <footer ref={props.node.clone()} class="pp-footer" style={props.style.clone()}>
            <div class="pp-footer-icons">
                { for SOCIAL_ICONS.iter().map(|icon| html! {
                    <a key={*icon} href="#">{ *icon }</a>
                }) }
            </div>
            <p class="pp-footer-copy">{"© 2025 Perfect Pose. All rights reserved."}</p>
            <p class="pp-footer-love">{"Made with ❤️ by the Perfect Pose Team"}</p>
            <style>
                {r#"
                .pp-footer {
                    padding: 3rem 1.5rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    text-align: center;
                    background: #000;
                }
                .pp-footer-icons {
                    display: flex;
                    justify-content: center;
                    gap: 2rem;
                    margin-bottom: 2rem;
                }
                .pp-footer-icons a {
                    font-size: 1.875rem;
                    text-decoration: none;
                    transition: transform 0.2s;
                }
                .pp-footer-icons a:hover { transform: scale(1.1); }
                .pp-footer-copy { color: #9ca3af; }
                .pp-footer-love { color: #6b7280; font-size: 0.875rem; margin-top: 1rem; }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_redesign_footer_animates() {
        assert_eq!(footer_motion(SiteVariant::Classic), None);
        let motion = footer_motion(SiteVariant::Redesign).map(|m| m.style(false));
        assert_eq!(
            motion.as_deref(),
            Some("transform: translateY(20px); opacity: 0; transition: all 0.8s ease-out;")
        );
    }
}
