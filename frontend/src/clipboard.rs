use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::window;
use yew::prelude::*;

use crate::error::UiError;

/// The "Copied!" flag behind a copy button.
///
/// Reset timers are never cancelled. Every copy hands out a fresh ticket and
/// only the newest ticket may clear the flag, so copying again restarts the
/// delay instead of stacking resets.
#[derive(Debug, Default)]
pub struct CopyFeedback {
    copied: bool,
    generation: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CopyTicket(u64);

impl CopyFeedback {
    pub fn is_copied(&self) -> bool {
        self.copied
    }

    pub fn copy(&mut self) -> CopyTicket {
        self.generation += 1;
        self.copied = true;
        CopyTicket(self.generation)
    }

    /// Returns true if this ticket actually cleared the flag.
    pub fn expire(&mut self, ticket: CopyTicket) -> bool {
        if self.copied && ticket.0 == self.generation {
            self.copied = false;
            true
        } else {
            false
        }
    }
}

pub fn write_to_clipboard(text: &str) -> Result<(), UiError> {
    let window = window().ok_or(UiError::NoWindow)?;
    let promise = window.navigator().clipboard().write_text(text);
    spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            warn!("{}", UiError::Clipboard(UiError::describe(&e)));
        }
    });
    Ok(())
}

pub struct UseCopyFeedbackHandle {
    pub copied: bool,
    pub copy: Callback<String>,
}

#[hook]
pub fn use_copy_feedback(delay_ms: u32) -> UseCopyFeedbackHandle {
    let feedback = use_mut_ref(CopyFeedback::default);
    let update = use_force_update();

    let copy = {
        let feedback = feedback.clone();
        Callback::from(move |text: String| {
            if let Err(err) = write_to_clipboard(&text) {
                warn!("copy failed: {}", err);
            }
            let ticket = feedback.borrow_mut().copy();
            update.force_update();

            let feedback = feedback.clone();
            let update = update.clone();
            Timeout::new(delay_ms, move || {
                if feedback.borrow_mut().expire(ticket) {
                    update.force_update();
                }
            })
            .forget();
        })
    };

    let copied = feedback.borrow().is_copied();
    UseCopyFeedbackHandle { copied, copy }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_sets_flag_and_its_ticket_clears_it_once() {
        let mut feedback = CopyFeedback::default();
        let ticket = feedback.copy();
        assert!(feedback.is_copied());
        assert!(feedback.expire(ticket));
        assert!(!feedback.is_copied());
        assert!(!feedback.expire(ticket));
    }

    #[test]
    fn recopy_restarts_the_delay() {
        let mut feedback = CopyFeedback::default();
        let first = feedback.copy();
        let second = feedback.copy();

        assert!(!feedback.expire(first));
        assert!(feedback.is_copied());

        assert!(feedback.expire(second));
        assert!(!feedback.is_copied());
    }

    #[test]
    fn stale_ticket_after_reset_does_nothing() {
        let mut feedback = CopyFeedback::default();
        let first = feedback.copy();
        assert!(feedback.expire(first));
        let second = feedback.copy();
        assert!(!feedback.expire(first));
        assert!(feedback.is_copied());
        assert!(feedback.expire(second));
    }
}
