use log::{info, warn};
use serde::Serialize;
use web_sys::{window, HtmlInputElement, SubmitEvent};
use yew::prelude::*;

use crate::config::{self, SiteVariant};
use crate::error::UiError;
use crate::parallax::ParallaxBanner;
use crate::reveal::{use_reveal, RevealMotion, RevealOptions};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FormDraft {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
}

impl FormDraft {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = (!value.is_empty()).then_some(value),
        }
    }
}

/// The part of a submit event the form cares about.
pub trait PreventDefault {
    fn prevent_default(&self);
}

impl PreventDefault for SubmitEvent {
    fn prevent_default(&self) {
        web_sys::Event::prevent_default(self);
    }
}

/// Keeps the browser on the page and hands the draft over unchanged.
pub fn submit_draft<E: PreventDefault>(event: &E, draft: &FormDraft, handler: &Callback<FormDraft>) {
    event.prevent_default();
    handler.emit(draft.clone());
}

/// What the sites do with a sign-up today: log it and thank the visitor.
pub fn log_and_confirm() -> Callback<FormDraft> {
    Callback::from(|draft: FormDraft| {
        match serde_json::to_string(&draft) {
            Ok(json) => info!("Form submitted: {}", json),
            Err(err) => warn!("Form submitted, but could not serialize it: {}", err),
        }
        confirm_signup(|message| {
            window()
                .ok_or(UiError::NoWindow)?
                .alert_with_message(message)
                .map_err(|e| UiError::Alert(UiError::describe(&e)))
        });
    })
}

/// Thanks the visitor through `alert`. A failed alert is logged, never raised.
fn confirm_signup<F>(alert: F) -> bool
where
    F: FnOnce(&str) -> Result<(), UiError>,
{
    match alert(config::SIGNUP_CONFIRMATION) {
        Ok(()) => true,
        Err(err) => {
            warn!("could not confirm sign-up: {}", err);
            false
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SignUpFormProps {
    pub variant: SiteVariant,
    #[prop_or_else(log_and_confirm)]
    pub on_submit: Callback<FormDraft>,
}

#[function_component(SignUpForm)]
pub fn sign_up_form(props: &SignUpFormProps) -> Html {
    let draft = use_state(FormDraft::default);
    let section = use_node_ref();
    let with_phone = props.variant == SiteVariant::Classic;

    let reveal = match props.variant {
        SiteVariant::Classic => RevealOptions::toggle(0.3),
        SiteVariant::Redesign => RevealOptions::once(0.3),
    };
    let visible = use_reveal(section.clone(), reveal);

    let on_input = |field: Field| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.set(field, input.value());
            draft.set(next);
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let handler = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| submit_draft(&e, &draft, &handler))
    };

    let field = |id: &'static str, label: &'static str, kind: &'static str, value: String, placeholder: &'static str, f: Field| {
        html! {
            <div class="pp-field">
                <label for={id}>{ label }</label>
                <input
                    type={kind}
                    id={id}
                    name={id}
                    value={value}
                    placeholder={placeholder}
                    oninput={on_input(f)}
                />
            </div>
        }
    };

    let form = html! {
        <form class="pp-signup-form" {onsubmit}>
            { field("name", "Full Name", "text", draft.name.clone(),
                if with_phone { "" } else { "Ada Lovelace" }, Field::Name) }
            { field("email", "Email Address", "email", draft.email.clone(),
                if with_phone { "" } else { "ada.lovelace@example.com" }, Field::Email) }
            {
                if with_phone {
                    field("phone", "Phone Number", "tel", draft.phone.clone().unwrap_or_default(), "", Field::Phone)
                } else {
                    html! {}
                }
            }
            <button type="submit" class="pp-signup-submit">{"Join Waitlist"}</button>
            {
                if with_phone {
                    html! {}
                } else {
                    html! { <p class="pp-signup-note">{"We respect your privacy. No spam, ever."}</p> }
                }
            }
        </form>
    };

    let body = match props.variant {
        SiteVariant::Classic => html! {
            <ParallaxBanner image="/cta.png" class={classes!("pp-signup-banner")}>
                <div class="pp-signup-shade"></div>
                <div class="pp-signup-classic">
                    <h2>{"Get Early Access"}</h2>
                    <div style={RevealMotion::fade(0.8).scale_from(0.9).style(visible)}>
                        { form }
                    </div>
                </div>
            </ParallaxBanner>
        },
        SiteVariant::Redesign => html! {
            <div class="pp-signup-grid">
                <div class="pp-signup-pitch" style={RevealMotion::fade(0.8).slide_x(-30.0).delay(0.2).style(visible)}>
                    <h2>{"Get "}<span class="pp-accent-purple">{"Early Access"}</span></h2>
                    <p>{"Be the first to experience the future of fitness. Join our waitlist to get exclusive updates and be notified when we launch."}</p>
                    <img src="/cta.png" alt="Join the waitlist" />
                </div>
                <div style={RevealMotion::fade(0.8).scale_from(0.95).delay(0.4).style(visible)}>
                    { form }
                </div>
            </div>
        },
    };

    html! {
        <section id="sign-up" class={classes!("pp-signup", format!("pp-signup--{}", if with_phone { "classic" } else { "redesign" }))} ref={section}>
            { body }
            <style>
                {r#"
                .pp-signup {
                    position: relative;
                    padding: 5rem 1.5rem;
                }
                .pp-signup--redesign {
                    background: linear-gradient(to bottom, #000, rgba(88, 28, 135, 0.2), #000);
                }
                .pp-signup h2 {
                    font-size: 3rem;
                    font-weight: 700;
                    color: #fff;
                    margin-bottom: 2rem;
                }
                .pp-signup--classic { padding: 0; }
                .pp-signup-banner { padding: 5rem 1.5rem; }
                .pp-signup-shade {
                    position: absolute;
                    inset: 0;
                    z-index: 1;
                    background: linear-gradient(to top, #000, transparent, #000);
                }
                .pp-signup-classic {
                    position: relative;
                    z-index: 2;
                    max-width: 42rem;
                    margin: 0 auto;
                }
                .pp-signup-classic h2 { text-align: center; margin-bottom: 4rem; }
                .pp-signup-grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }
                .pp-signup-pitch p {
                    color: #d1d5db;
                    font-size: 1.125rem;
                    max-width: 28rem;
                    margin-bottom: 2rem;
                }
                .pp-signup-pitch img { width: 66%; }
                .pp-accent-purple { color: #c084fc; }
                .pp-signup-form {
                    background: rgba(255, 255, 255, 0.05);
                    backdrop-filter: blur(16px);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 1rem;
                    padding: 2rem;
                }
                .pp-field { margin-bottom: 1.5rem; }
                .pp-field label {
                    display: block;
                    color: #d1d5db;
                    font-weight: 600;
                    margin-bottom: 0.5rem;
                }
                .pp-field input {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.75rem 1rem;
                    background: rgba(255, 255, 255, 0.1);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 0.5rem;
                    color: #fff;
                    transition: border-color 0.3s;
                }
                .pp-field input:hover,
                .pp-field input:focus {
                    border-color: #3b82f6;
                    outline: none;
                }
                .pp-signup--redesign .pp-field input:focus { border-color: #a855f7; }
                .pp-signup-submit {
                    width: 100%;
                    padding: 1rem;
                    border: none;
                    border-radius: 0.5rem;
                    background: #2563eb;
                    color: #fff;
                    font-weight: 600;
                    cursor: pointer;
                    transition: transform 0.3s, background 0.3s;
                }
                .pp-signup-submit:hover { transform: scale(1.05); background: #1d4ed8; }
                .pp-signup--redesign .pp-signup-submit { background: #9333ea; }
                .pp-signup--redesign .pp-signup-submit:hover { background: #7e22ce; }
                .pp-signup-note {
                    font-size: 0.75rem;
                    color: #6b7280;
                    margin-top: 1rem;
                    text-align: center;
                }
                @media (max-width: 1024px) {
                    .pp-signup-grid { grid-template-columns: 1fr; text-align: center; }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Default)]
    struct FakeSubmit {
        prevented: Cell<u32>,
    }

    impl PreventDefault for FakeSubmit {
        fn prevent_default(&self) {
            self.prevented.set(self.prevented.get() + 1);
        }
    }

    fn recording_handler() -> (Callback<FormDraft>, Rc<RefCell<Vec<FormDraft>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (Callback::from(move |draft: FormDraft| sink.borrow_mut().push(draft)), seen)
    }

    #[test]
    fn submit_hands_over_exact_draft_once() {
        let (handler, seen) = recording_handler();
        let event = FakeSubmit::default();
        let mut draft = FormDraft::default();
        draft.set(Field::Name, "Ada Lovelace".into());
        draft.set(Field::Email, "ada@example.com".into());

        submit_draft(&event, &draft, &handler);

        assert_eq!(event.prevented.get(), 1);
        assert_eq!(
            *seen.borrow(),
            vec![FormDraft {
                name: "Ada Lovelace".into(),
                email: "ada@example.com".into(),
                phone: None,
            }]
        );
    }

    #[test]
    fn submit_does_not_clear_or_validate() {
        let (handler, seen) = recording_handler();
        let event = FakeSubmit::default();
        let mut draft = FormDraft::default();
        draft.set(Field::Email, "not-an-email".into());

        submit_draft(&event, &draft, &handler);
        submit_draft(&event, &draft, &handler);

        assert_eq!(draft.email, "not-an-email");
        assert_eq!(seen.borrow().len(), 2);
        assert_eq!(seen.borrow()[1].email, "not-an-email");
    }

    #[test]
    fn blank_phone_is_none() {
        let mut draft = FormDraft::default();
        draft.set(Field::Phone, "+1 555 0100".into());
        assert_eq!(draft.phone.as_deref(), Some("+1 555 0100"));
        draft.set(Field::Phone, String::new());
        assert_eq!(draft.phone, None);
    }

    #[test]
    fn confirmation_shows_the_thank_you_message() {
        let shown = RefCell::new(String::new());
        assert!(confirm_signup(|message| {
            shown.borrow_mut().push_str(message);
            Ok(())
        }));
        assert_eq!(*shown.borrow(), config::SIGNUP_CONFIRMATION);
    }

    #[test]
    fn failed_confirmation_is_swallowed() {
        assert!(!confirm_signup(|_| Err(UiError::NoWindow)));
        assert!(!confirm_signup(|_| Err(UiError::Alert("blocked".into()))));
    }

    #[test]
    fn draft_logs_as_json_without_missing_phone() {
        let draft = FormDraft {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            phone: None,
        };
        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            serde_json::json!({ "name": "Ada Lovelace", "email": "ada@example.com" })
        );
    }
}
