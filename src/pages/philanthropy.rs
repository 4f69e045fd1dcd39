use yew::prelude::*;

struct Programme {
    title: &'static str,
    description: &'static str,
    impact: &'static str,
    highlights: &'static [&'static str],
}

const EDUCATION: &[Programme] = &[
    Programme {
        title: "College Scholarship Program",
        description: "Merit-based scholarships covering full tuition, books, and living expenses for deserving students from underprivileged backgrounds.",
        impact: "50+ students supported annually",
        highlights: &["100% tuition coverage", "4-year commitment per scholar"],
    },
    Programme {
        title: "Government School Infrastructure",
        description: "Building and upgrading school infrastructure including classrooms, laboratories, computer labs, and sports facilities.",
        impact: "10+ schools transformed",
        highlights: &["Modern classrooms & labs", "Digital learning tools", "Sports & recreation facilities"],
    },
    Programme {
        title: "Library Development Program",
        description: "Establishing and maintaining well-stocked libraries with books, digital resources, and reading programs to foster learning.",
        impact: "10,000+ books distributed",
        highlights: &["Physical & digital libraries", "Reading programs & competitions", "Teacher training workshops"],
    },
];

const HEALTHCARE: &[Programme] = &[
    Programme {
        title: "Annual Health Camps",
        description: "Free comprehensive health screening camps conducted quarterly in underserved communities with specialist doctors.",
        impact: "4 camps annually, 1,000+ patients each",
        highlights: &["General health screening", "Specialist consultations", "Free medicines & referrals"],
    },
    Programme {
        title: "Preventive Healthcare Awareness",
        description: "Community health awareness programs focusing on nutrition, hygiene, maternal health, and disease prevention.",
        impact: "2,000+ families reached",
        highlights: &["Health education workshops", "Nutrition counseling", "Disease prevention programs"],
    },
    Programme {
        title: "Medical Equipment Donation",
        description: "Supporting government hospitals and primary health centers with essential medical equipment and diagnostic tools.",
        impact: "5+ healthcare facilities equipped",
        highlights: &["Diagnostic equipment", "Emergency care tools", "Patient monitoring devices"],
    },
];

const IMPACT: &[(&str, &str, &str)] = &[
    ("6,000+", "Individuals Impacted Annually", "Lives touched through our education and healthcare initiatives"),
    ("50+", "College Scholarships", "Supporting students to achieve their educational dreams"),
    ("4,000+", "Health Screenings", "Annual health camp screenings across communities"),
];

const PRINCIPLES: &[(&str, &str)] = &[
    ("Sustainable", "Long-term programs that create lasting impact beyond one-time interventions."),
    ("Measurable", "Data-driven approach with clear metrics to track and improve our impact."),
    ("Scalable", "Building models that can be replicated and expanded to reach more communities."),
];

fn programme_section(title: &str, intro: &str, programmes: &[Programme], tinted: bool) -> Html {
    html! {
        <section class={classes!("section", tinted.then(|| "tinted"))}>
            <h2 class="section-title">{ title.to_string() }</h2>
            <p class="section-intro muted">{ format!("{} · {} programmes", intro, programmes.len()) }</p>
            <div class="card-grid">
                { for programmes.iter().map(|p| html! {
                    <div class="card">
                        <h3>{ p.title }</h3>
                        <p class="muted">{ p.description }</p>
                        <ul>
                            { for p.highlights.iter().map(|h| html! { <li>{ *h }</li> }) }
                        </ul>
                        <span class="badge">{ p.impact }</span>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component]
pub fn Philanthropy() -> Html {
    html! {
        <div class="philanthropy-page">
            <section class="page-hero">
                <div class="hero-inner">
                    <h1>{"Philanthropy"}</h1>
                    <p class="hero-subtitle">
                        {"Giving back to the communities that shaped us through education and healthcare."}
                    </p>
                </div>
            </section>

            <section class="section">
                <div class="stat-grid">
                    { for IMPACT.iter().map(|(value, label, text)| html! {
                        <div class="stat">
                            <div class="stat-value">{ *value }</div>
                            <div class="stat-label">{ *label }</div>
                            <p class="muted">{ *text }</p>
                        </div>
                    }) }
                </div>
            </section>

            { programme_section(
                "Education",
                "Empowering the next generation through quality education, infrastructure, and scholarships",
                EDUCATION,
                false,
            ) }
            { programme_section(
                "Healthcare",
                "Improving community health through free medical camps, awareness programs, and infrastructure support",
                HEALTHCARE,
                true,
            ) }

            <section class="section">
                <h2 class="section-title">{"Our Approach"}</h2>
                <div class="card-grid">
                    { for PRINCIPLES.iter().map(|(title, text)| html! {
                        <div class="card compact">
                            <h3>{ *title }</h3>
                            <p class="muted">{ *text }</p>
                        </div>
                    }) }
                </div>
            </section>
        </div>
    }
}
