use yew::prelude::*;

use crate::navigation::use_navigation;
use crate::pages::contact::MEETING_ANCHOR;
use crate::pages::registry::PageId;

pub struct Allocation {
    pub sector: &'static str,
    pub description: &'static str,
    pub percent: u8,
    pub note: &'static str,
}

const PRIVATE_MARKET_FOCUS: &[Allocation] = &[
    Allocation {
        sector: "Enterprise Software",
        description: "B2B platforms modernising how companies sell, operate and decide",
        percent: 35,
        note: "Seed to Series A",
    },
    Allocation {
        sector: "Fintech",
        description: "Infrastructure and products widening access to financial services",
        percent: 30,
        note: "Seed to Series A",
    },
    Allocation {
        sector: "EV & CleanTech",
        description: "Electric vehicle technology and sustainable energy solutions",
        percent: 20,
        note: "Seed to Series A",
    },
    Allocation {
        sector: "HealthTech",
        description: "Digital-first care delivery and diagnostics",
        percent: 15,
        note: "Seed to Series A",
    },
];

pub const PUBLIC_MARKET_FOCUS: &[Allocation] = &[
    Allocation {
        sector: "Technology Growth",
        description: "High-growth technology companies with proven business models",
        percent: 40,
        note: "Long-term growth with selective tactical trades",
    },
    Allocation {
        sector: "Healthcare Innovation",
        description: "Biotech and healthcare companies driving medical innovation",
        percent: 25,
        note: "Focus on FDA pipeline and breakthrough therapies",
    },
    Allocation {
        sector: "Sustainable Energy",
        description: "Clean energy and environmental technology leaders",
        percent: 20,
        note: "Riding the global transition to clean energy",
    },
    Allocation {
        sector: "Financial Services",
        description: "Established institutions and fintech leaders",
        percent: 15,
        note: "Quality names with strong moats and dividends",
    },
];

pub const PROCESS: &[(&str, &str)] = &[
    ("Initial Screening", "We review every deck and respond within 2 business days."),
    ("Founder Meeting", "A working session on the business, the market and the team."),
    ("Due Diligence", "Customer calls, financial review and a look under the hood of the product."),
    ("Investment Committee", "The partners decide together, usually within a week of diligence."),
    ("Term Sheet & Closing", "Clear terms, fast paperwork and support from day one."),
];

pub fn allocation_card(allocation: &Allocation) -> Html {
    html! {
        <div class="card">
            <div class="allocation-head">
                <h3>{ allocation.sector }</h3>
                <span class="badge">{ format!("{}%", allocation.percent) }</span>
            </div>
            <p class="muted">{ allocation.description }</p>
            <div class="allocation-bar">
                <div class="allocation-fill" style={format!("width: {}%;", allocation.percent)}></div>
            </div>
            <p class="allocation-note">{ allocation.note }</p>
        </div>
    }
}

#[function_component]
pub fn Investment() -> Html {
    let navigation = use_navigation();

    html! {
        <div class="investment-page">
            <section class="page-hero">
                <div class="hero-inner">
                    <h1>{"Investment Focus"}</h1>
                    <p class="hero-subtitle">
                        {"A balanced approach across private and public markets, backing transformative companies and building long-term wealth."}
                    </p>
                </div>
            </section>

            <section class="section">
                <h2 class="section-title">{"Private Market Investments"}</h2>
                <div class="card-grid two">
                    { for PRIVATE_MARKET_FOCUS.iter().map(allocation_card) }
                </div>
            </section>

            <section class="section tinted">
                <h2 class="section-title">{"Public Market Investments"}</h2>
                <div class="card-grid two">
                    { for PUBLIC_MARKET_FOCUS.iter().map(allocation_card) }
                </div>
            </section>

            <section class="section">
                <h2 class="section-title">{"Investment Process"}</h2>
                <ol class="process-steps">
                    { for PROCESS.iter().map(|(title, text)| html! {
                        <li class="card compact">
                            <h3>{ *title }</h3>
                            <p class="muted">{ *text }</p>
                        </li>
                    }) }
                </ol>
            </section>

            <section class="section">
                <div class="cta-panel">
                    <h2>{"Building something in our focus areas?"}</h2>
                    <p>{"Tell us about it. We read everything that comes in."}</p>
                    <div class="hero-actions">
                        <button class="cta-button" onclick={navigation.link_to_anchor(PageId::Contact, MEETING_ANCHOR)}>
                            {"Get in Touch"}
                        </button>
                        <button class="cta-button outline" onclick={navigation.link(PageId::Portfolio)}>
                            {"See the Portfolio"}
                        </button>
                    </div>
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocations_add_up_to_the_whole_book() {
        for book in [PRIVATE_MARKET_FOCUS, PUBLIC_MARKET_FOCUS] {
            assert_eq!(book.iter().map(|a| u32::from(a.percent)).sum::<u32>(), 100);
        }
    }
}
