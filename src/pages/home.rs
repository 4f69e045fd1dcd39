use yew::prelude::*;

use crate::components::pitch_modal::PitchModal;
use crate::navigation::use_navigation;
use crate::pages::contact::MEETING_ANCHOR;
use crate::pages::registry::PageId;

struct Stat {
    value: &'static str,
    label: &'static str,
}

const STATS: &[Stat] = &[
    Stat { value: "50M+", label: "Assets Under Management" },
    Stat { value: "10+", label: "Portfolio Companies" },
    Stat { value: "100+", label: "Jobs Created" },
    Stat { value: "4", label: "Successful Exits" },
];

const FOCUS_AREAS: &[(&str, &str)] = &[
    ("Private Markets", "Early and growth stage companies led by founders with conviction and a clear path to scale."),
    ("Public Markets", "A long-horizon listed portfolio built around quality businesses and capital discipline."),
    ("Venture Studio", "Companies we co-create from the ground up with operators, capital and shared infrastructure."),
    ("Philanthropy", "Education and healthcare programmes for the communities that shaped us."),
];

#[function_component]
pub fn Home() -> Html {
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

    html! {
        <div class="home-page">
            <section class="page-hero hero-tall">
                <div class="hero-inner">
                    <span class="hero-badge">{"Backed by Innovation"}</span>
                    <h1>
                        {"Where bright ideas"}
                        <span class="hero-highlight">{"find their light"}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"Lumara Ventures is a family office partnering with exceptional entrepreneurs and managing diversified investments across private and public markets."}
                    </p>
                    <div class="hero-actions">
                        <button class="cta-button" onclick={navigation.link(PageId::Portfolio)}>
                            {"Our Portfolio →"}
                        </button>
                        <button class="cta-button outline" onclick={navigation.link(PageId::Investment)}>
                            {"Investment Thesis"}
                        </button>
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="stat-grid">
                    { for STATS.iter().map(|stat| html! {
                        <div class="stat">
                            <div class="stat-value">{ stat.value }</div>
                            <div class="stat-label">{ stat.label }</div>
                        </div>
                    }) }
                </div>
            </section>

            <section class="section">
                <h2 class="section-title">{"What We Do"}</h2>
                <div class="card-grid">
                    { for FOCUS_AREAS.iter().map(|(title, text)| html! {
                        <div class="card">
                            <h3>{ *title }</h3>
                            <p>{ *text }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="section">
                <div class="cta-panel">
                    <h2>{"Ready to Build the Future?"}</h2>
                    <p>{"If you're a founder with a bold vision and the drive to make it reality, we'd love to hear from you."}</p>
                    <div class="hero-actions">
                        <button class="cta-button" onclick={open_pitch}>{"Submit Your Pitch"}</button>
                        <button class="cta-button outline"
                            onclick={navigation.link_to_anchor(PageId::Contact, MEETING_ANCHOR)}>
                            {"Get in Touch"}
                        </button>
                    </div>
                </div>
            </section>

            <PitchModal is_open={*show_pitch} on_close={close_pitch} />
        </div>
    }
}
