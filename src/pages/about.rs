use yew::prelude::*;

struct Role {
    period: &'static str,
    role: &'static str,
    company: &'static str,
    sector: &'static str,
}

const EXPERIENCE: &[Role] = &[
    Role { period: "2019 - Present", role: "Founder and Partner", company: "Lumara Ventures", sector: "Investment" },
    Role { period: "2020 - Present", role: "Partner and CIO", company: "Family Office", sector: "Wealth Management" },
    Role { period: "2015 - Present", role: "Strategy and Business Development", company: "VESCO", sector: "Mining" },
];

const BOARD_ACHIEVEMENTS: &[&str] = &[
    "Designed and led micro-lending program supporting 350+ women entrepreneurs with over Rs. 5cr disbursed, achieving 99% re-payment",
    "Led digital transformation during pandemic, launching mobile banking and UPI, scaling to Rs. 15cr+ monthly transaction and tripling the number of customers",
];

const EDUCATION: &[(&str, &str, &str)] = &[
    ("2012 - 2013", "Master's in Business, Finance", "Virginia Commonwealth University"),
    ("2008 - 2011", "Bachelor's in Commerce, Finance", "St. Joseph's College of Commerce (Bangalore University)"),
];

const PRINCIPLES: &[(&str, &str)] = &[
    ("Operational Value-Add", "Hands-on support in pricing, GTM strategy, hiring, and operational excellence to drive portfolio growth."),
    ("Patient Capital", "Long-term partnership approach with focus on sustainable growth and 18%+ CAGR returns."),
    ("Impact-Driven", "Combining financial returns with social impact through structured philanthropy and community development."),
];

#[function_component]
pub fn About() -> Html {
    html! {
        <div class="about-page">
            <section class="page-hero">
                <div class="hero-inner">
                    <h1>{"About Lumara Ventures"}</h1>
                    <p class="hero-subtitle">
                        {"A family office built on patient capital, operating experience and a commitment to the communities we come from."}
                    </p>
                </div>
            </section>

            <section class="section">
                <div class="card profile-card">
                    <h2>{"Nikhil K S"}</h2>
                    <p class="muted">{"Founder & Partner"}</p>
                    <p>
                        {"Nikhil leads investments across private and public markets and works alongside founders on pricing, go-to-market and hiring."}
                    </p>
                </div>
            </section>

            <section class="section">
                <h2 class="section-title">{"Experience"}</h2>
                <div class="timeline">
                    { for EXPERIENCE.iter().map(|role| html! {
                        <div class="card compact">
                            <span class="badge">{ role.period }</span>
                            <h3>{ role.role }</h3>
                            <p class="muted">{ format!("{} · {}", role.company, role.sector) }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="section">
                <h2 class="section-title">{"Board Experience"}</h2>
                <div class="card">
                    <span class="badge">{"2021 - Present"}</span>
                    <h3>{"Member of the Board, SPS Bank"}</h3>
                    <p class="muted">{"Co-operative, not for profit bank · Sandur, Karnataka"}</p>
                    <ul>
                        { for BOARD_ACHIEVEMENTS.iter().map(|a| html! { <li>{ *a }</li> }) }
                    </ul>
                </div>
            </section>

            <section class="section">
                <h2 class="section-title">{"Education"}</h2>
                <div class="card-grid two">
                    { for EDUCATION.iter().map(|(period, degree, school)| html! {
                        <div class="card">
                            <span class="badge">{ *period }</span>
                            <h3>{ *degree }</h3>
                            <p class="muted">{ *school }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="section tinted">
                <h2 class="section-title">{"Investment Philosophy"}</h2>
                <blockquote class="philosophy-quote">
                    {"\"True wealth is measured not by what we accumulate, but by the positive impact we create in society and the lasting value we build across generations.\""}
                </blockquote>
                <div class="card-grid">
                    { for PRINCIPLES.iter().map(|(title, text)| html! {
                        <div class="card">
                            <h3>{ *title }</h3>
                            <p class="muted">{ *text }</p>
                        </div>
                    }) }
                </div>
            </section>
        </div>
    }
}
