use yew::prelude::*;

use crate::components::relay_form::RelayForm;
use crate::relay::submission::FormKind;

#[derive(Properties, PartialEq)]
pub struct PitchModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn PitchModal(props: &PitchModalProps) -> Html {
    if !props.is_open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(());
        })
    };

    html! {
        <div class="pitch-overlay">
            <div class="pitch-modal" role="dialog" aria-modal="true">
                <button class="pitch-close" aria-label="Close" onclick={close}>{"×"}</button>
                <h2>{"Submit Your Pitch"}</h2>
                <p>{"Tell us about your startup idea and how you're shaping the future."}</p>
                <RelayForm kind={FormKind::Pitch} on_sent={props.on_close.clone()} />
            </div>
            <style>
                {r#"
                .pitch-overlay {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.6);
                    backdrop-filter: blur(4px);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    z-index: 50;
                }
                .pitch-modal {
                    position: relative;
                    background: #fff;
                    color: #1f2937;
                    border-radius: 1rem;
                    padding: 2rem;
                    width: 90%;
                    max-width: 28rem;
                }
                .pitch-modal h2 {
                    text-align: center;
                    margin-bottom: 0.5rem;
                }
                .pitch-modal p {
                    text-align: center;
                    color: #4b5563;
                    margin-bottom: 1.5rem;
                }
                .pitch-close {
                    position: absolute;
                    top: 0.75rem;
                    right: 0.75rem;
                    background: none;
                    border: none;
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                "#}
            </style>
        </div>
    }
}
