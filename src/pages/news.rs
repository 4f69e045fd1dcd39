use yew::prelude::*;

#[derive(Debug, PartialEq)]
pub struct Insight {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub category: &'static str,
    pub kind: &'static str,
    pub author: &'static str,
    pub date: &'static str,
    pub read_time: &'static str,
}

pub const ALL_CATEGORIES: &str = "All";

const CATEGORIES: &[&str] = &[
    ALL_CATEGORIES,
    "AI & Technology",
    "Fintech",
    "Healthcare",
    "Portfolio Insights",
    "Market Analysis",
    "Founder Resources",
    "Startup Insights",
    "Climate Tech",
    "Founder Support",
    "Fundraising",
];

const FEATURED: &[Insight] = &[
    Insight {
        title: "The Future of Enterprise AI: Beyond the Hype",
        excerpt: "As AI becomes ubiquitous in enterprise software, we examine which applications will create lasting value and which are merely following trends.",
        category: "AI & Technology",
        kind: "Thought Leadership",
        author: "Nikhil K S",
        date: "2024-01-15",
        read_time: "8 min read",
    },
    Insight {
        title: "Fintech in 2024: The Infrastructure Play",
        excerpt: "Why the next wave of fintech innovation will be built on infrastructure rather than consumer-facing applications.",
        category: "Fintech",
        kind: "Market Analysis",
        author: "Nikhil K S",
        date: "2024-01-08",
        read_time: "6 min read",
    },
];

pub const RECENT: &[Insight] = &[
    Insight {
        title: "Why We Invested in CloudSync Pro: The Data Integration Revolution",
        excerpt: "Our investment thesis on the future of enterprise data integration and why CloudSync Pro is positioned to lead.",
        category: "Portfolio Insights",
        kind: "Investment",
        author: "Lumara Team",
        date: "2023-12-20",
        read_time: "5 min read",
    },
    Insight {
        title: "The Health Tech Opportunity: Digital-First Healthcare",
        excerpt: "Exploring the $4 trillion healthcare market and the role of technology in improving patient outcomes.",
        category: "Healthcare",
        kind: "Thought Leadership",
        author: "Nikhil K S",
        date: "2023-12-15",
        read_time: "7 min read",
    },
    Insight {
        title: "Building in Public: Lessons from Our Portfolio Companies",
        excerpt: "How transparency and community building are becoming competitive advantages for B2B startups.",
        category: "Startup Insights",
        kind: "Insights",
        author: "Lumara Team",
        date: "2023-12-10",
        read_time: "4 min read",
    },
    Insight {
        title: "The Climate Tech Investment Landscape in 2024",
        excerpt: "Analyzing the opportunities and challenges in climate technology investments for the year ahead.",
        category: "Climate Tech",
        kind: "Market Analysis",
        author: "Nikhil K S",
        date: "2023-12-05",
        read_time: "9 min read",
    },
    Insight {
        title: "Founder Mental Health: The Hidden Challenge of Scaling",
        excerpt: "Addressing the psychological challenges founders face during rapid growth phases and how investors can help.",
        category: "Founder Support",
        kind: "Thought Leadership",
        author: "Nikhil K S",
        date: "2023-11-28",
        read_time: "6 min read",
    },
    Insight {
        title: "Series A Fundraising in a Challenging Market",
        excerpt: "Practical advice for founders navigating Series A fundraising in the current economic environment.",
        category: "Fundraising",
        kind: "Founder Resources",
        author: "Lumara Team",
        date: "2023-11-20",
        read_time: "8 min read",
    },
];

const PRESS_RELEASES: &[(&str, &str, &str)] = &[
    (
        "2024-01-10",
        "Lumara Expands Investment Strategy with New Focus on Venture Studio",
        "Family office announces new venture studio initiative to build and incubate high-potential startups from the ground up.",
    ),
    (
        "2023-12-18",
        "Portfolio Company PayFlow Raises $15M Series A Led by Tier-1 VCs",
        "Payment processing startup PayFlow secures funding to accelerate product development and market expansion.",
    ),
    (
        "2023-11-15",
        "Lumara Portfolio Company DataVault Acquired by Microsoft for $240M",
        "Successful exit demonstrates strong returns and validates our enterprise software investment thesis.",
    ),
];

/// Insights shown under `category`. An item matches on either its category or its kind.
pub fn filter<'a>(insights: &'a [Insight], category: &str) -> Vec<&'a Insight> {
    insights
        .iter()
        .filter(|i| category == ALL_CATEGORIES || i.category == category || i.kind == category)
        .collect()
}

fn insight_card(insight: &Insight) -> Html {
    html! {
        <article class="card insight-card">
            <div class="insight-meta">
                <span class="badge">{ insight.category }</span>
                <span class="muted">{ insight.read_time }</span>
            </div>
            <h3>{ insight.title }</h3>
            <p class="muted">{ insight.excerpt }</p>
            <p class="insight-byline">{ format!("{} · {}", insight.author, insight.date) }</p>
        </article>
    }
}

#[function_component]
pub fn News() -> Html {
    let active = use_state(|| ALL_CATEGORIES);
    let shown = filter(RECENT, *active);

    html! {
        <div class="news-page">
            <section class="page-hero">
                <div class="hero-inner">
                    <h1>{"News & Insights"}</h1>
                    <p class="hero-subtitle">
                        {"Perspectives on technology, markets and company building from the Lumara Ventures team."}
                    </p>
                </div>
            </section>

            <section class="section">
                <h2 class="section-title">{"Featured Insights"}</h2>
                <div class="card-grid two">
                    { for FEATURED.iter().map(insight_card) }
                </div>
            </section>

            <section class="section tinted">
                <h2 class="section-title">{"Recent Insights"}</h2>
                <div class="category-filter">
                    { for CATEGORIES.iter().map(|category| {
                        let onclick = {
                            let active = active.clone();
                            let category: &'static str = *category;
                            Callback::from(move |_: MouseEvent| active.set(category))
                        };
                        html! {
                            <button
                                class={classes!("cta-button", "small", (*active != *category).then(|| "outline"))}
                                onclick={onclick}
                            >
                                { *category }
                            </button>
                        }
                    }) }
                </div>
                <div class="card-grid">
                    if shown.is_empty() {
                        <p class="muted">{"Nothing in this category yet."}</p>
                    } else {
                        { for shown.into_iter().map(insight_card) }
                    }
                </div>
            </section>

            <section class="section">
                <h2 class="section-title">{"Press Releases"}</h2>
                <div class="press-list">
                    { for PRESS_RELEASES.iter().map(|(date, title, excerpt)| html! {
                        <div class="card compact">
                            <span class="badge">{ *date }</span>
                            <h3>{ *title }</h3>
                            <p class="muted">{ *excerpt }</p>
                        </div>
                    }) }
                </div>
            </section>
            <style>
                {r#"
                .category-filter {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.75rem;
                    margin-bottom: 2.5rem;
                }
                .insight-meta {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 0.75rem;
                }
                .insight-byline {
                    font-size: 0.85rem;
                    color: var(--primary);
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
    fn all_returns_every_insight() {
        assert_eq!(filter(RECENT, ALL_CATEGORIES).len(), RECENT.len());
    }

    #[test]
    fn category_returns_only_matching_insights() {
        let shown = filter(RECENT, "Healthcare");
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].title, "The Health Tech Opportunity: Digital-First Healthcare");
    }

    #[test]
    fn kind_also_counts_as_a_match() {
        let shown = filter(RECENT, "Market Analysis");
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].category, "Climate Tech");
    }

    #[test]
    fn unknown_category_is_empty() {
        assert!(filter(RECENT, "Crypto").is_empty());
    }

    #[test]
    fn every_recent_insight_is_reachable_from_a_category() {
        for insight in RECENT {
            assert!(CATEGORIES.contains(&insight.category) || CATEGORIES.contains(&insight.kind));
        }
    }
}
