//! Scroll-triggered entrance animations.
//!
//! [`RevealController`] is the state machine fed by intersection observations,
//! [`use_reveal`] wires it to an `IntersectionObserver` for a mounted element,
//! and [`RevealMotion`] turns the resulting flag into inline CSS.

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::error::UiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealMode {
    /// Reveal on the first upward crossing and stay revealed.
    Once,
    /// Follow every crossing in both directions.
    Toggle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    threshold: f64,
    mode: RevealMode,
}

impl RevealOptions {
    /// `threshold` is the fraction of the element that has to be inside the
    /// viewport. Out-of-range values are clamped, NaN is treated as 0.
    pub fn new(threshold: f64, mode: RevealMode) -> Self {
        let threshold = if threshold.is_nan() {
            0.0
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self { threshold, mode }
    }

    pub fn once(threshold: f64) -> Self {
        Self::new(threshold, RevealMode::Once)
    }

    pub fn toggle(threshold: f64) -> Self {
        Self::new(threshold, RevealMode::Toggle)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    #[cfg(test)]
    pub fn mode(&self) -> RevealMode {
        self.mode
    }
}

#[derive(Debug)]
pub struct RevealController {
    options: RevealOptions,
    visible: bool,
}

impl RevealController {
    pub fn new(options: RevealOptions) -> Self {
        Self {
            options,
            visible: false,
        }
    }

    #[cfg(test)]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// True once nothing can change the state any more.
    pub fn is_settled(&self) -> bool {
        self.options.mode == RevealMode::Once && self.visible
    }

    /// Feeds one observation and returns the new state if it changed.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> Option<bool> {
        if self.is_settled() {
            return None;
        }

        // Exact comparison: a downward crossing may be reported just below the threshold.
        let above = is_intersecting && ratio >= self.options.threshold;

        let next = match self.options.mode {
            RevealMode::Once => self.visible || above,
            RevealMode::Toggle => above,
        };

        if next == self.visible {
            None
        } else {
            self.visible = next;
            Some(next)
        }
    }

    /// Used when the element can't be observed at all.
    pub fn force_visible(&mut self) -> Option<bool> {
        if self.visible {
            None
        } else {
            self.visible = true;
            Some(true)
        }
    }
}

/// A live observer for one element. Dropping it disconnects the observer.
struct Observation {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe(
    node: &NodeRef,
    options: RevealOptions,
    visible: UseStateSetter<bool>,
) -> Result<Observation, UiError> {
    let element = node.cast::<Element>().ok_or(UiError::NotMounted)?;
    let mut controller = RevealController::new(options);

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if let Some(now_visible) =
                    controller.observe(entry.is_intersecting(), entry.intersection_ratio())
                {
                    debug!(
                        "reveal: ratio {:.2} -> visible={}",
                        entry.intersection_ratio(),
                        now_visible
                    );
                    visible.set(now_visible);
                }
            }
            if controller.is_settled() {
                observer.disconnect();
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold()));

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(|e| UiError::ObserverUnavailable(UiError::describe(&e)))?;
    observer.observe(&element);

    Ok(Observation {
        observer,
        _callback: callback,
    })
}

/// Reveal state for the element behind `node`. Starts hidden; falls back to
/// visible when the element can't be observed so content never stays hidden.
#[hook]
pub fn use_reveal(node: NodeRef, options: RevealOptions) -> bool {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |(node, options)| {
                let observation = match observe(node, *options, visible.setter()) {
                    Ok(observation) => Some(observation),
                    Err(err) => {
                        warn!("reveal disabled, showing content: {}", err);
                        let mut fallback = RevealController::new(*options);
                        if let Some(now_visible) = fallback.force_visible() {
                            visible.set(now_visible);
                        }
                        None
                    }
                };
                move || drop(observation)
            },
            (node, options),
        );
    }

    *visible
}

/// Hidden-state offsets and timing for an element that animates in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealMotion {
    translate_x: f64,
    translate_y: f64,
    scale: Option<f64>,
    rotate: f64,
    duration: f64,
    delay: f64,
}

impl RevealMotion {
    pub const fn fade(duration: f64) -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            scale: None,
            rotate: 0.0,
            duration,
            delay: 0.0,
        }
    }

    pub const fn slide_x(mut self, px: f64) -> Self {
        self.translate_x = px;
        self
    }

    pub const fn slide_y(mut self, px: f64) -> Self {
        self.translate_y = px;
        self
    }

    pub const fn scale_from(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    pub const fn rotate_from(mut self, degrees: f64) -> Self {
        self.rotate = degrees;
        self
    }

    pub const fn delay(mut self, seconds: f64) -> Self {
        self.delay = seconds;
        self
    }

    /// Delay for the `index`-th card of a grid, a tenth of a second apart.
    pub fn staggered(self, index: usize) -> Self {
        self.delay(index as f64 / 10.0)
    }

    pub fn style(&self, visible: bool) -> String {
        let mut transforms = Vec::new();
        if self.translate_x != 0.0 {
            let x = if visible { 0.0 } else { self.translate_x };
            transforms.push(format!("translateX({}px)", num(x)));
        }
        if self.translate_y != 0.0 {
            let y = if visible { 0.0 } else { self.translate_y };
            transforms.push(format!("translateY({}px)", num(y)));
        }
        if let Some(scale) = self.scale {
            let s = if visible { 1.0 } else { scale };
            transforms.push(format!("scale({})", num(s)));
        }
        if self.rotate != 0.0 {
            let r = if visible { 0.0 } else { self.rotate };
            transforms.push(format!("rotate({}deg)", num(r)));
        }

        let mut style = String::new();
        if !transforms.is_empty() {
            style.push_str(&format!("transform: {}; ", transforms.join(" ")));
        }
        style.push_str(&format!(
            "opacity: {}; transition: all {}s ease-out",
            if visible { 1 } else { 0 },
            num(self.duration)
        ));
        if self.delay > 0.0 {
            style.push_str(&format!(" {}s", num(self.delay)));
        }
        style.push(';');
        style
    }
}

fn num(value: f64) -> String {
    let s = format!("{:.3}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let controller = RevealController::new(RevealOptions::once(0.3));
        assert!(!controller.is_visible());
        assert!(!controller.is_settled());
    }

    #[test]
    fn once_mode_stays_visible_after_scrolling_away() {
        let mut controller = RevealController::new(RevealOptions::once(0.5));
        assert_eq!(controller.observe(true, 0.2), None);
        assert_eq!(controller.observe(true, 0.6), Some(true));
        assert!(controller.is_settled());

        assert_eq!(controller.observe(true, 0.1), None);
        assert_eq!(controller.observe(false, 0.0), None);
        assert!(controller.is_visible());
    }

    #[test]
    fn toggle_mode_tracks_latest_crossing() {
        let mut controller = RevealController::new(RevealOptions::toggle(0.5));
        let steps = [
            (true, 0.7, true),
            (true, 0.3, false),
            (true, 0.9, true),
            (false, 0.0, false),
            (true, 0.55, true),
        ];
        for (intersecting, ratio, expected) in steps {
            controller.observe(intersecting, ratio);
            assert_eq!(controller.is_visible(), expected, "ratio {ratio}");
        }
        assert!(!controller.is_settled());
    }

    #[test]
    fn repeated_observations_on_same_side_report_no_change() {
        let mut controller = RevealController::new(RevealOptions::toggle(0.3));
        assert_eq!(controller.observe(true, 0.4), Some(true));
        assert_eq!(controller.observe(true, 0.8), None);
        assert_eq!(controller.observe(true, 0.1), Some(false));
        assert_eq!(controller.observe(false, 0.0), None);
    }

    #[test]
    fn toggle_hides_on_downward_crossing_just_below_threshold() {
        let mut controller = RevealController::new(RevealOptions::toggle(0.5));
        assert_eq!(controller.observe(true, 0.8), Some(true));
        assert_eq!(controller.observe(true, 0.4995), Some(false));
        assert!(!controller.is_visible());
        assert_eq!(controller.observe(true, 0.5), Some(true));
    }

    #[test]
    fn ratio_just_below_threshold_does_not_reveal() {
        let mut controller = RevealController::new(RevealOptions::once(0.5));
        assert_eq!(controller.observe(true, 0.4995), None);
        assert!(!controller.is_settled());
    }

    #[test]
    fn zero_threshold_reveals_on_any_intersection() {
        let mut controller = RevealController::new(RevealOptions::toggle(0.0));
        assert_eq!(controller.observe(true, 0.0), Some(true));
        assert_eq!(controller.observe(false, 0.0), Some(false));
    }

    #[test]
    fn not_intersecting_never_reveals_even_with_ratio() {
        let mut controller = RevealController::new(RevealOptions::once(0.2));
        assert_eq!(controller.observe(false, 0.5), None);
        assert!(!controller.is_visible());
    }

    #[test]
    fn thresholds_are_clamped() {
        assert_eq!(RevealOptions::once(1.7).threshold(), 1.0);
        assert_eq!(RevealOptions::once(-0.2).threshold(), 0.0);
        assert_eq!(RevealOptions::toggle(f64::NAN).threshold(), 0.0);
        assert_eq!(RevealOptions::toggle(0.3).mode(), RevealMode::Toggle);
    }

    #[test]
    fn force_visible_is_the_fallback() {
        let mut controller = RevealController::new(RevealOptions::toggle(0.5));
        assert_eq!(controller.force_visible(), Some(true));
        assert_eq!(controller.force_visible(), None);
        assert!(controller.is_visible());
    }

    #[test]
    fn card_motion_style() {
        let motion = RevealMotion::fade(0.6).slide_y(30.0).scale_from(0.9).staggered(2);
        assert_eq!(
            motion.style(false),
            "transform: translateY(30px) scale(0.9); opacity: 0; transition: all 0.6s ease-out 0.2s;"
        );
        assert_eq!(
            motion.style(true),
            "transform: translateY(0px) scale(1); opacity: 1; transition: all 0.6s ease-out 0.2s;"
        );
    }

    #[test]
    fn fade_only_motion_has_no_transform() {
        let motion = RevealMotion::fade(1.0);
        assert_eq!(motion.style(false), "opacity: 0; transition: all 1s ease-out;");
    }

    #[test]
    fn stagger_delay_is_formatted_cleanly() {
        let motion = RevealMotion::fade(0.6).rotate_from(-5.0).staggered(3);
        assert_eq!(
            motion.style(false),
            "transform: rotate(-5deg); opacity: 0; transition: all 0.6s ease-out 0.3s;"
        );
    }
}
