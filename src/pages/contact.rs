use yew::prelude::*;

use crate::components::footer::CONTACT_EMAIL;
use crate::components::pitch_modal::PitchModal;
use crate::components::relay_form::RelayForm;
use crate::navigation::use_navigation;
use crate::pages::registry::PageId;
use crate::relay::submission::FormKind;

/// Element id of the contact form section, target of "Get in Touch" style CTAs.
pub const MEETING_ANCHOR: &str = "form-meet";

const INQUIRY_TYPES: &[(&str, &str, &str)] = &[
    ("Fundraising", "Looking to raise capital for your startup", "Response within 2 business days"),
    ("Partnership", "Strategic partnerships and collaborations", "Response within 1 week"),
    ("Press & Media", "Media inquiries and speaking opportunities", "Response within 3 business days"),
];

const FOUNDER_CHECKLIST: &[&str] = &[
    "Brief company description and stage",
    "Funding amount and use of funds",
    "Key traction metrics",
    "Link to pitch deck (if available)",
];

const FAQS: &[(&str, &str)] = &[
    (
        "What stage companies do you invest in?",
        "We invest in seed and Series A companies with check sizes from $500K to $5M. Exceptional pre-seed founders are also considered.",
    ),
    (
        "How long is your investment process?",
        "Our process typically takes 4–6 weeks from initial meeting to term sheet, with quick feedback at each stage.",
    ),
    (
        "Do you lead rounds?",
        "Yes, we lead or co-lead seed and Series A rounds and participate in strong syndicates for strategic alignment.",
    ),
    (
        "How do I submit my pitch deck?",
        "Submit via the contact form, email, or schedule a call. We review all decks within 2 business days.",
    ),
];

fn mailto(subject: &str) -> String {
    format!("mailto:{}?subject={}", CONTACT_EMAIL, urlencoding::encode(subject))
}

#[function_component]
pub fn Contact() -> Html {
    let navigation = use_navigation();
    let show_pitch = use_state(|| false);

    let open_pitch = {
        let show_pitch = show_pitch.clone();
        Callback::from(move |_: MouseEvent| show_pitch.set(true))
    };
    let close_pitch = {
        let show_pitch = show_pitch.clone();
        Callback::from(move |_: ()| show_pitch.set(false))
    };
    let to_form = navigation.link_to_anchor(PageId::Contact, MEETING_ANCHOR);

    html! {
        <div class="contact-page">
            <section class="page-hero">
                <div class="hero-inner">
                    <h1>{"Get in Touch"}</h1>
                    <p class="hero-subtitle">
                        {"Whether you're a founder raising capital, a partner, or simply curious about our work, we'd love to connect."}
                    </p>
                </div>
            </section>

            <section class="section">
                <h2 class="section-title">{"Reach Out"}</h2>
                <div class="card-grid">
                    <div class="card">
                        <h3>{"Email"}</h3>
                        <p>{ CONTACT_EMAIL }</p>
                        <a class="cta-button small" href={mailto("Hello from the Lumara Ventures website")}>{"Send Email"}</a>
                    </div>
                    <div class="card">
                        <h3>{"Schedule a Meeting"}</h3>
                        <p>{"30-minute intro call"}</p>
                        <button class="cta-button small" onclick={to_form.clone()}>{"Book Meeting"}</button>
                    </div>
                    <div class="card">
                        <h3>{"LinkedIn"}</h3>
                        <p>{"Connect with Nikhil K S on LinkedIn"}</p>
                        <a class="cta-button small" href="https://www.linkedin.com/in/nikhil-k-s-b75302203/"
                            target="_blank" rel="noopener noreferrer">{"Connect"}</a>
                    </div>
                </div>
            </section>

            <section id={MEETING_ANCHOR} class="section contact-form-section">
                <div class="card form-card">
                    <h2>{"Send Us a Message"}</h2>
                    <p class="muted">{"Fill out the form below and we'll respond within 2 business days."}</p>
                    <RelayForm kind={FormKind::Contact} />
                </div>
                <div class="contact-aside">
                    <h3>{"Inquiry Types"}</h3>
                    { for INQUIRY_TYPES.iter().map(|(title, text, timeline)| html! {
                        <div class="card compact">
                            <h4>{ *title }</h4>
                            <p class="muted">{ *text }</p>
                            <span class="badge">{ *timeline }</span>
                        </div>
                    }) }
                    <h3>{"For Founders"}</h3>
                    <div class="card compact highlight">
                        <h4>{"Raising Capital?"}</h4>
                        <p class="muted">{"Include the following details in your message:"}</p>
                        <ul>
                            { for FOUNDER_CHECKLIST.iter().map(|item| html! { <li>{ *item }</li> }) }
                        </ul>
                    </div>
                </div>
            </section>

            <section class="section">
                <h2 class="section-title">{"Frequently Asked Questions"}</h2>
                <div class="card-grid two">
                    { for FAQS.iter().map(|(question, answer)| html! {
                        <div class="card">
                            <h3>{ *question }</h3>
                            <p class="muted">{ *answer }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="section">
                <div class="cta-panel">
                    <h2>{"Ready to Build Something Amazing?"}</h2>
                    <p>{"Whether you're just getting started or ready to scale, we're here to support ambitious founders building the future."}</p>
                    <div class="hero-actions">
                        <button class="cta-button" onclick={to_form}>{"Schedule a Meeting"}</button>
                        <button class="cta-button outline" onclick={open_pitch}>{"Send Your Pitch Deck"}</button>
                    </div>
                </div>
            </section>

            <PitchModal is_open={*show_pitch} on_close={close_pitch} />
            <style>
                {r#"
                .contact-form-section {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                    gap: 3rem;
                }
                .contact-aside h3 {
                    margin: 1.5rem 0 1rem;
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
    fn mailto_subject_is_percent_encoded() {
        assert_eq!(
            mailto("Pitch & deck"),
            "mailto:hello@lumaraventures.com?subject=Pitch%20%26%20deck"
        );
    }
}
