use yew::prelude::*;

use crate::components::pitch_modal::PitchModal;

struct StudioProject {
    name: &'static str,
    description: &'static str,
    stage: &'static str,
    status: &'static str,
}

const PROJECTS: &[StudioProject] = &[
    StudioProject {
        name: "Alpha.ai",
        description: "AI-powered family office management platform",
        stage: "In Development",
        status: "Building MVP",
    },
    StudioProject {
        name: "Indulge",
        description: "Personal Premium Concierge - At One's Fingertips",
        stage: "Series A",
        status: "Market Testing",
    },
    StudioProject {
        name: "Das Steigen",
        description: "EV and OEM manufacturing ecosystem in India",
        stage: "Early Stage",
        status: "Market Testing",
    },
    StudioProject {
        name: "Tradomate",
        description: "AI-Powered Trading Platform for Smarter Trades",
        stage: "Pre-Series A",
        status: "Market Testing",
    },
];

const MODEL: &[(&str, &str)] = &[
    ("Ideation & Validation", "Research, validate, and test high-impact ideas."),
    ("Team Formation", "Recruit exceptional teams aligned with our mission."),
    ("Product Development", "Build MVPs and iterate fast towards product-market fit."),
    ("Growth & Scale", "Scale operations, secure funding, and expand reach."),
];

const BENEFITS: &[(&str, &str)] = &[
    ("Higher Success Rate", "De-risked through rigorous validation and experienced execution teams."),
    ("Greater Ownership", "Studios retain significant equity, ensuring full alignment of incentives."),
    ("Portfolio Synergies", "Shared tech, resources, and strategic network across ventures."),
];

#[function_component]
pub fn VentureStudio() -> Html {
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
        <div class="venture-studio-page">
            <section class="page-hero">
                <div class="hero-inner">
                    <h1>{"Venture Studio"}</h1>
                    <p class="hero-subtitle">
                        {"Building ventures from the ground up, combining capital and operating expertise to de-risk early-stage startups."}
                    </p>
                </div>
            </section>

            <section class="section">
                <h2 class="section-title">{"Active Studio Projects"}</h2>
                <div class="card-grid two">
                    { for PROJECTS.iter().map(|project| html! {
                        <div class="card">
                            <div class="studio-project-head">
                                <h3>{ project.name }</h3>
                                <span class="badge">{ project.stage }</span>
                            </div>
                            <p class="muted">{ project.description }</p>
                            <p class="studio-status">{ project.status }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="section tinted">
                <h2 class="section-title">{"Our Studio Model"}</h2>
                <ol class="process-steps">
                    { for MODEL.iter().enumerate().map(|(i, (title, text))| html! {
                        <li class="card compact">
                            <span class="step-number">{ (i + 1).to_string() }</span>
                            <h3>{ *title }</h3>
                            <p class="muted">{ *text }</p>
                        </li>
                    }) }
                </ol>
            </section>

            <section class="section">
                <h2 class="section-title">{"Why the Studio Model Works"}</h2>
                <div class="card-grid">
                    { for BENEFITS.iter().map(|(title, text)| html! {
                        <div class="card">
                            <h3>{ *title }</h3>
                            <p class="muted">{ *text }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="section">
                <div class="cta-panel">
                    <h2>{"Have an idea worth building?"}</h2>
                    <p>{"We partner with operators and domain experts to turn strong ideas into companies."}</p>
                    <div class="hero-actions">
                        <button class="cta-button" onclick={open_pitch}>{"Pitch Your Idea"}</button>
                    </div>
                </div>
            </section>

            <PitchModal is_open={*show_pitch} on_close={close_pitch} />
            <style>
                {r#"
                .studio-project-head {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .studio-status {
                    color: var(--primary);
                    font-weight: 600;
                }
                .step-number {
                    display: inline-flex;
                    width: 2rem;
                    height: 2rem;
                    border-radius: 50%;
                    align-items: center;
                    justify-content: center;
                    background: var(--primary);
                    color: white;
                    margin-bottom: 0.75rem;
                }
                "#}
            </style>
        </div>
    }
}
