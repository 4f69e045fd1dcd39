use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::navigation::use_navigation;
use crate::pages::registry::NAV_PAGES;

pub const CONTACT_EMAIL: &str = "hello@lumaraventures.com";

const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("LinkedIn", "https://www.linkedin.com/in/nikhil-k-s-b75302203/"),
    ("Email", "mailto:hello@lumaraventures.com"),
];

#[function_component]
pub fn Footer() -> Html {
    let navigation = use_navigation();
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-col">
                    <div class="footer-brand">
                        <span class="nav-logo-mark">{"L"}</span>
                        <span>{"Lumara Ventures"}</span>
                    </div>
                    <p class="footer-muted">
                        {"A family office partnering with exceptional entrepreneurs and managing diversified investments across private and public markets."}
                    </p>
                    <p class="footer-muted">{"MG Road, Bengaluru"}</p>
                    <p class="footer-muted">{ CONTACT_EMAIL }</p>
                </div>

                <div class="footer-col">
                    <h3>{"Quick Links"}</h3>
                    <ul class="footer-links">
                        { for NAV_PAGES.iter().map(|page| html! {
                            <li>
                                <a href={format!("#{}", page.as_str())}
                                    class={classes!((navigation.current == *page).then(|| "active"))}
                                    onclick={navigation.link(*page)}>
                                    { page.label() }
                                </a>
                            </li>
                        }) }
                    </ul>
                </div>

                <div class="footer-col">
                    <h3>{"Connect With Us"}</h3>
                    <div class="footer-social">
                        { for SOCIAL_LINKS.iter().map(|(label, href)| html! {
                            <a href={*href} aria-label={*label} target="_blank" rel="noopener noreferrer">{ *label }</a>
                        }) }
                    </div>
                    <p class="footer-copyright">
                        { format!("© {} Lumara Ventures. All rights reserved.", year) }
                    </p>
                </div>
            </div>
            <style>
                {r#"
                .site-footer {
                    border-top: 1px solid #9ca3af;
                    margin-top: 2.5rem;
                    background: #fff;
                    color: #1f2937;
                }
                .footer-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 4rem 1rem;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 2rem;
                }
                .footer-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 1.25rem;
                    font-weight: 700;
                }
                .footer-muted {
                    color: #6b7280;
                    font-size: 0.875rem;
                }
                .footer-links {
                    list-style: none;
                    padding: 0;
                }
                .footer-links a, .footer-social a {
                    color: inherit;
                    text-decoration: none;
                    line-height: 2;
                }
                .footer-links a.active, .footer-links a:hover {
                    color: var(--primary);
                }
                .footer-social {
                    display: flex;
                    gap: 1rem;
                }
                .footer-copyright {
                    margin-top: 1rem;
                    font-size: 0.75rem;
                    color: #6b7280;
                }
                "#}
            </style>
        </footer>
    }
}
