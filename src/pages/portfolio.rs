use yew::prelude::*;

use crate::components::pitch_modal::PitchModal;
use crate::navigation::use_navigation;
use crate::pages::contact::MEETING_ANCHOR;
use crate::pages::investment::{allocation_card, PUBLIC_MARKET_FOCUS};
use crate::pages::registry::PageId;

struct Company {
    name: &'static str,
    tagline: &'static str,
    sector: &'static str,
    description: &'static str,
}

const COMPANIES: &[Company] = &[
    Company {
        name: "Tradomate",
        tagline: "Empowering smart trading decisions.",
        sector: "Trading Fintech",
        description: "Tradomate delivers next-gen AI-powered trading tools and analytics for retail and institutional investors.",
    },
    Company {
        name: "Indulge",
        tagline: "Luxury at your fingertips.",
        sector: "Luxury Concierge",
        description: "Indulge curates premium lifestyle experiences, offering personalized luxury concierge services globally.",
    },
    Company {
        name: "Das Steign",
        tagline: "Driving the EV revolution.",
        sector: "EV Components",
        description: "Das Steign specializes in high-performance EV drivetrain components, enhancing energy efficiency and reliability.",
    },
    Company {
        name: "Meta Man",
        tagline: "Redefining modern jewelry for men.",
        sector: "Jewelry",
        description: "Meta Man blends craftsmanship and innovation to create premium, tech-inspired jewelry for modern men.",
    },
    Company {
        name: "NSE",
        tagline: "India's leading stock exchange.",
        sector: "Stock Exchange",
        description: "The National Stock Exchange pioneers financial innovation, providing a transparent and efficient trading platform.",
    },
    Company {
        name: "Anand Rathi",
        tagline: "Trusted wealth management partner.",
        sector: "Wealth Management",
        description: "Anand Rathi offers comprehensive financial advisory, wealth creation, and portfolio management solutions.",
    },
    Company {
        name: "Spark Capital",
        tagline: "Igniting growth through strategy.",
        sector: "Asset Management",
        description: "Spark Capital partners with businesses to provide strategic capital solutions and advisory expertise.",
    },
    Company {
        name: "Settlin",
        tagline: "Simplifying real estate buying.",
        sector: "Real Estate Tech",
        description: "Settlin revolutionizes property transactions through verified listings, AI-driven recommendations, and transparency.",
    },
    Company {
        name: "Ati Motos",
        tagline: "Automating tomorrow's warehouses.",
        sector: "Warehouse Automation",
        description: "Ati Motos builds intelligent robots and automation systems for seamless warehouse operations and logistics.",
    },
    Company {
        name: "Fynn",
        tagline: "Delivering the last mile efficiently.",
        sector: "Last Mile Logistics",
        description: "Fynn optimizes last-mile delivery networks with smart routing, real-time tracking, and carbon efficiency.",
    },
    Company {
        name: "Oto Capital",
        tagline: "Making EV ownership effortless.",
        sector: "EV Financing",
        description: "Oto Capital offers flexible financing and subscription plans for EV two-wheelers, driving green adoption.",
    },
    Company {
        name: "T9L",
        tagline: "Building the next wave of startups.",
        sector: "Venture Builder",
        description: "T9L accelerates startup success with end-to-end venture building, from concept validation to market scaling.",
    },
];

const CRITERIA: &[(&str, &str)] = &[
    ("Exceptional Founders", "Visionary leaders with deep domain expertise and proven execution ability."),
    ("Large Market Opportunity", "Addressing markets with $1B+ potential and a clear path to leadership."),
    ("Differentiated Technology", "Proprietary tech or unique approach creating sustainable advantage."),
    ("Product-Market Fit", "Strong early traction and validated product-market fit signals."),
    ("Scalable Business Model", "Clear path to profitable growth with strong unit economics."),
    ("Strategic Timing", "Market timing aligned with emerging technology and user trends."),
];

#[function_component]
pub fn Portfolio() -> Html {
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
        <div class="portfolio-page">
            <section class="page-hero">
                <div class="hero-inner">
                    <h1>{"Our Portfolio"}</h1>
                    <p class="hero-subtitle">
                        {"Founders we back across fintech, mobility, consumer and real estate, alongside a disciplined public markets book."}
                    </p>
                </div>
            </section>

            <section class="section">
                <h2 class="section-title">{"Private Market Investments"}</h2>
                <div class="card-grid">
                    { for COMPANIES.iter().map(|company| html! {
                        <div class="card">
                            <span class="badge">{ company.sector }</span>
                            <h3>{ company.name }</h3>
                            <p class="tagline">{ company.tagline }</p>
                            <p class="muted">{ company.description }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="section tinted">
                <h2 class="section-title">{"Public Market Investments"}</h2>
                <div class="card-grid two">
                    { for PUBLIC_MARKET_FOCUS.iter().map(allocation_card) }
                </div>
            </section>

            <section class="section">
                <h2 class="section-title">{"Investment Criteria"}</h2>
                <div class="card-grid">
                    { for CRITERIA.iter().map(|(title, text)| html! {
                        <div class="card compact">
                            <h3>{ *title }</h3>
                            <p class="muted">{ *text }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="section">
                <div class="cta-panel">
                    <h2>{"Think you fit the criteria?"}</h2>
                    <p>{"We'd love to learn about what you're building."}</p>
                    <div class="hero-actions">
                        <button class="cta-button" onclick={open_pitch}>{"Submit Your Pitch"}</button>
                        <button class="cta-button outline"
                            onclick={navigation.link_to_anchor(PageId::Contact, MEETING_ANCHOR)}>
                            {"Schedule a Meeting"}
                        </button>
                    </div>
                </div>
            </section>

            <PitchModal is_open={*show_pitch} on_close={close_pitch} />
        </div>
    }
}
