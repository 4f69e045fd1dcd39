use std::cell::Cell;
use std::rc::Rc;

use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::footer::CONTACT_EMAIL;
use crate::components::toast::{use_toasts, ToastKind};
use crate::relay::gateway::{use_gateway, SendLatch, SubmissionError};
use crate::relay::submission::{FieldKind, FieldSpec, FormDraft, FormKind};

#[derive(Properties, PartialEq)]
pub struct RelayFormProps {
    pub kind: FormKind,
    #[prop_or_default]
    pub on_sent: Callback<()>,
}

/// Mount flag for async work that may finish after the form is gone.
#[hook]
fn use_mounted() -> Rc<Cell<bool>> {
    let mounted = use_memo(|_| Rc::new(Cell::new(true)), ());
    {
        let mounted = (*mounted).clone();
        use_effect_with_deps(
            move |_| {
                mounted.set(true);
                move || mounted.set(false)
            },
            (),
        );
    }
    (*mounted).clone()
}

#[function_component]
pub fn RelayForm(props: &RelayFormProps) -> Html {
    let kind = props.kind;
    let draft = use_state(|| FormDraft::new(kind));
    let is_sending = use_state(|| false);
    let latch = use_memo(|_| SendLatch::default(), ());
    let mounted = use_mounted();
    let gateway = use_gateway();
    let toasts = use_toasts();

    let onsubmit = {
        let draft = draft.clone();
        let is_sending = is_sending.clone();
        let latch = latch.clone();
        let on_sent = props.on_sent.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let send = match gateway.submit_latched(&latch, draft.submission()) {
                Ok(send) => send,
                Err(err) => {
                    if let Some(message) = rejection_message(kind, &err) {
                        toasts.error(message);
                    }
                    return;
                }
            };

            is_sending.set(true);
            let draft = draft.clone();
            let is_sending = is_sending.clone();
            let mounted = mounted.clone();
            let toasts = toasts.clone();
            let on_sent = on_sent.clone();
            spawn_local(async move {
                let result = send.await;
                let mut next = (*draft).clone();
                let Some((level, message)) = settle(mounted.get(), &mut next, result) else {
                    info!("{:?} form closed before the relay answered", kind);
                    return;
                };
                is_sending.set(false);
                if level == ToastKind::Success {
                    draft.set(next);
                    on_sent.emit(());
                }
                toasts.show(level, message);
            });
        })
    };

    let sending = *is_sending;
    html! {
        <form class="relay-form" onsubmit={onsubmit} novalidate={true}>
            { for kind.fields().iter().map(|spec| field(spec, &draft)) }
            <button type="submit" class="relay-submit" disabled={sending}>
                { if sending { "Sending..." } else { kind.submit_label() } }
            </button>
            <style>
                {r#"
                .relay-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .relay-field {
                    display: flex;
                    flex-direction: column;
                    gap: 0.4rem;
                }
                .relay-field input, .relay-field textarea, .relay-field select {
                    border: 1px solid #d1d5db;
                    border-radius: 0.5rem;
                    padding: 0.7rem;
                    font: inherit;
                }
                .relay-submit:disabled {
                    opacity: 0.6;
                    cursor: wait;
                }
                "#}
            </style>
        </form>
    }
}

fn field(spec: &'static FieldSpec, draft: &UseStateHandle<FormDraft>) -> Html {
    let name = spec.name;
    let value = draft.value(name).to_string();
    let label = if spec.required {
        format!("{} *", spec.label)
    } else {
        spec.label.to_string()
    };
    let id = format!("{:?}-{}", draft.kind(), name).to_lowercase();

    let update = {
        let draft = draft.clone();
        move |value: String| {
            let mut next = (*draft).clone();
            next.set(name, value);
            draft.set(next);
        }
    };

    let control = match spec.kind {
        FieldKind::Text | FieldKind::Email => {
            let oninput = Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                update(input.value());
            });
            let input_type = if spec.kind == FieldKind::Email { "email" } else { "text" };
            html! {
                <input id={id.clone()} type={input_type} name={name} placeholder={spec.placeholder}
                    required={spec.required} value={value} oninput={oninput} />
            }
        }
        FieldKind::TextArea => {
            let oninput = Callback::from(move |e: InputEvent| {
                let input: HtmlTextAreaElement = e.target_unchecked_into();
                update(input.value());
            });
            html! {
                <textarea id={id.clone()} name={name} rows="4" placeholder={spec.placeholder}
                    required={spec.required} value={value} oninput={oninput} />
            }
        }
        FieldKind::Select(options) => {
            let onchange = Callback::from(move |e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                update(select.value());
            });
            html! {
                <select id={id.clone()} name={name} required={spec.required} onchange={onchange}>
                    <option value="" selected={value.is_empty()}>{ spec.placeholder }</option>
                    { for options.iter().map(|(tag, text)| html! {
                        <option value={*tag} selected={value == *tag}>{ *text }</option>
                    }) }
                </select>
            }
        }
    };

    html! {
        <div class="relay-field">
            <label for={id}>{ label }</label>
            { control }
        </div>
    }
}

/// Toast text for a submission the gateway refused before sending. A send
/// already in flight stays silent.
fn rejection_message(kind: FormKind, err: &SubmissionError) -> Option<String> {
    match err {
        SubmissionError::InFlight => None,
        SubmissionError::NotConfigured => {
            warn!("{:?} form: {}", kind, err);
            Some(format!(
                "Email service not configured. Please reach us at {}.",
                CONTACT_EMAIL
            ))
        }
        other => Some(capitalize(&other.to_string())),
    }
}

/// Applies the relay's answer to `draft`. `None` when the form unmounted
/// meanwhile, in which case `draft` is left as it was.
fn settle(
    mounted: bool,
    draft: &mut FormDraft,
    result: Result<(), SubmissionError>,
) -> Option<(ToastKind, &'static str)> {
    if !mounted {
        return None;
    }
    let kind = draft.kind();
    Some(match result {
        Ok(()) => {
            draft.clear();
            (ToastKind::Success, kind.success_message())
        }
        Err(_) => (ToastKind::Error, kind.failure_message()),
    })
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::submission::tests::{filled_contact, filled_pitch};

    #[test]
    fn successful_send_clears_the_form() {
        let mut draft = filled_contact();
        assert_eq!(
            settle(true, &mut draft, Ok(())),
            Some((ToastKind::Success, FormKind::Contact.success_message()))
        );
        assert_eq!(draft, FormDraft::new(FormKind::Contact));
    }

    #[test]
    fn failed_send_keeps_what_the_user_typed() {
        let mut draft = filled_pitch();
        let result = Err(SubmissionError::SubmissionFailed("503: unavailable".into()));
        assert_eq!(
            settle(true, &mut draft, result),
            Some((ToastKind::Error, FormKind::Pitch.failure_message()))
        );
        assert_eq!(draft, filled_pitch());
    }

    #[test]
    fn answer_after_unmount_changes_nothing() {
        for result in [Ok(()), Err(SubmissionError::SubmissionFailed("timeout".into()))] {
            let mut draft = filled_contact();
            assert_eq!(settle(false, &mut draft, result), None);
            assert_eq!(draft, filled_contact());
        }
    }

    #[test]
    fn in_flight_rejection_is_silent() {
        assert_eq!(rejection_message(FormKind::Contact, &SubmissionError::InFlight), None);
    }

    #[test]
    fn unconfigured_relay_points_to_the_contact_address() {
        let message = rejection_message(FormKind::Pitch, &SubmissionError::NotConfigured)
            .unwrap_or_default();
        assert!(message.starts_with("Email service not configured"));
        assert!(message.contains(CONTACT_EMAIL));
    }

    #[test]
    fn validation_rejection_names_the_field() {
        assert_eq!(
            rejection_message(FormKind::Contact, &SubmissionError::MissingField("Subject")).as_deref(),
            Some("Subject is required")
        );
    }

    #[test]
    fn validation_messages_read_as_sentences() {
        assert_eq!(capitalize(&SubmissionError::MissingField("Email").to_string()), "Email is required");
        assert_eq!(capitalize("\"x\" is not a valid email address"), "\"x\" is not a valid email address");
        assert_eq!(capitalize(""), "");
    }
}
