use web_sys::{window, Element};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;

/// Vertical offset in px for a background layer moving at `speed`.
///
/// The layer starts `speed * 10` px off when the element's top enters the
/// bottom of the viewport and ends at `-speed * 10` px when its bottom leaves
/// the top, linearly in between.
pub fn parallax_offset(top: f64, height: f64, viewport_height: f64, speed: f64) -> f64 {
    let travel = viewport_height + height;
    if travel <= 0.0 {
        return 0.0;
    }
    let progress = ((viewport_height - top) / travel).clamp(0.0, 1.0);
    let start = speed * 10.0;
    let end = -speed * 10.0;
    start + (end - start) * progress
}

fn measure(node: &NodeRef, speed: f64) -> Option<f64> {
    let element = node.cast::<Element>()?;
    let viewport_height = window()?.inner_height().ok()?.as_f64()?;
    let rect = element.get_bounding_client_rect();
    Some(parallax_offset(rect.top(), rect.height(), viewport_height, speed))
}

#[derive(Properties, PartialEq)]
pub struct ParallaxBannerProps {
    pub image: AttrValue,
    #[prop_or(config::PARALLAX_SPEED)]
    pub speed: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ParallaxBanner)]
pub fn parallax_banner(props: &ParallaxBannerProps) -> Html {
    let node = use_node_ref();
    let offset = use_state(|| 0.0_f64);
    let (_, scroll_y) = use_window_scroll();

    {
        let node = node.clone();
        let offset = offset.clone();
        let speed = props.speed;
        use_effect_with_deps(
            move |_| {
                offset.set(measure(&node, speed).unwrap_or(0.0));
                || ()
            },
            scroll_y,
        );
    }

    let overscan = (props.speed * 10.0).abs();
    let layer_style = format!(
        "background-image: url('{}'); top: -{}px; bottom: -{}px; transform: translate3d(0, {}px, 0);",
        props.image, overscan, overscan, *offset
    );

    html! {
        <div ref={node} class={classes!("pp-parallax", props.class.clone())}>
            <div class="pp-parallax-layer" style={layer_style}></div>
            { for props.children.iter() }
            <style>
                {r#"
                .pp-parallax {
                    position: relative;
                    overflow: hidden;
                }
                .pp-parallax-layer {
                    position: absolute;
                    left: 0;
                    right: 0;
                    background-size: cover;
                    background-position: center;
                    will-change: transform;
                    z-index: 0;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_runs_from_start_to_end() {
        // 800px viewport, 400px tall banner at speed -15.
        assert_eq!(parallax_offset(800.0, 400.0, 800.0, -15.0), -150.0);
        assert_eq!(parallax_offset(200.0, 400.0, 800.0, -15.0), 0.0);
        assert_eq!(parallax_offset(-400.0, 400.0, 800.0, -15.0), 150.0);
    }

    #[test]
    fn offset_is_clamped_outside_viewport() {
        assert_eq!(parallax_offset(5_000.0, 400.0, 800.0, -15.0), -150.0);
        assert_eq!(parallax_offset(-5_000.0, 400.0, 800.0, -15.0), 150.0);
    }

    #[test]
    fn degenerate_geometry_has_no_offset() {
        assert_eq!(parallax_offset(0.0, 0.0, 0.0, -15.0), 0.0);
    }
}
