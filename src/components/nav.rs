use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::navigation::use_navigation;
use crate::pages::registry::{PageId, NAV_PAGES};

const MOBILE_BREAKPOINT: f64 = 890.0;

fn link_classes(item_class: &'static str, page: PageId, current: PageId) -> Classes {
    classes!(item_class, (page == current).then(|| "active"))
}

#[function_component]
pub fn Nav() -> Html {
    let navigation = use_navigation();
    let menu_open = use_state_eq(|| false);
    let (width, _) = use_window_size();
    let is_mobile = width < MOBILE_BREAKPOINT;

    // growing back to desktop width closes the mobile menu
    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |is_mobile| {
                if !*is_mobile {
                    menu_open.set(false);
                }
                || ()
            },
            is_mobile,
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let go = {
        let navigation = navigation.clone();
        let menu_open = menu_open.clone();
        move |page: PageId| {
            let navigation = navigation.clone();
            let menu_open = menu_open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                menu_open.set(false);
                navigation.go(page);
            })
        }
    };

    let items = |item_class: &'static str| -> Html {
        NAV_PAGES
            .iter()
            .map(|page| {
                html! {
                    <a href={format!("#{}", page.as_str())}
                        class={link_classes(item_class, *page, navigation.current)}
                        aria-current={(navigation.current == *page).then(|| "page")}
                        onclick={go(*page)}>
                        { page.label() }
                    </a>
                }
            })
            .collect()
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <a href="#home" class="nav-logo" onclick={go(PageId::Home)}>
                    <span class="nav-logo-mark">{"L"}</span>
                    <span class="nav-logo-text">{"Lumara Ventures"}</span>
                </a>
                if is_mobile {
                    <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                } else {
                    <div class="nav-right">{ items("nav-link") }</div>
                }
            </div>
            if is_mobile && *menu_open {
                <div class="nav-mobile-menu">{ items("nav-mobile-link") }</div>
            }
            <style>
                {r#"
                .top-nav {
                    position: sticky;
                    top: 0;
                    z-index: 40;
                    background: rgba(255, 255, 255, 0.9);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid #f3f4f6;
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1rem;
                    height: 4rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    text-decoration: none;
                    color: inherit;
                    font-size: 1.25rem;
                    font-weight: 700;
                }
                .nav-logo-mark {
                    width: 2rem;
                    height: 2rem;
                    border-radius: 50%;
                    background: var(--primary);
                    color: #fff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1rem;
                }
                .nav-right {
                    display: flex;
                    gap: 0.25rem;
                }
                .nav-link, .nav-mobile-link {
                    padding: 0.5rem 1rem;
                    border-radius: 0.5rem;
                    color: #374151;
                    text-decoration: none;
                    font-weight: 500;
                }
                .nav-link.active, .nav-mobile-link.active {
                    background: var(--primary);
                    color: #fff;
                }
                .burger-menu {
                    background: none;
                    border: none;
                    display: flex;
                    flex-direction: column;
                    gap: 5px;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #374151;
                }
                .nav-mobile-menu {
                    display: flex;
                    flex-direction: column;
                    padding: 0.75rem 1rem;
                    border-top: 1px solid #f3f4f6;
                    background: #fff;
                }
                "#}
            </style>
        </nav>
    }
}
