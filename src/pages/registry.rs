use std::fmt;
use std::str::FromStr;

use log::info;
use thiserror::Error;
use yew::prelude::*;

use crate::pages::{
    about::About,
    contact::Contact,
    home::Home,
    investment::Investment,
    news::News,
    philanthropy::Philanthropy,
    portfolio::Portfolio,
    venture_studio::VentureStudio,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PageId {
    #[default]
    Home,
    About,
    Portfolio,
    Investment,
    VentureStudio,
    Philanthropy,
    News,
    Contact,
}

/// Pages listed in the navigation bar and the footer quick links.
pub const NAV_PAGES: [PageId; 6] = [
    PageId::Home,
    PageId::About,
    PageId::Portfolio,
    PageId::VentureStudio,
    PageId::Philanthropy,
    PageId::Contact,
];

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown page id: {0:?}")]
pub struct InvalidPageId(pub String);

impl PageId {
    pub const ALL: [PageId; 8] = [
        PageId::Home,
        PageId::About,
        PageId::Portfolio,
        PageId::Investment,
        PageId::VentureStudio,
        PageId::Philanthropy,
        PageId::News,
        PageId::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::About => "about",
            PageId::Portfolio => "portfolio",
            PageId::Investment => "investment",
            PageId::VentureStudio => "venturestudio",
            PageId::Philanthropy => "philanthropy",
            PageId::News => "news",
            PageId::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PageId::Home => "Home",
            PageId::About => "About",
            PageId::Portfolio => "Portfolio",
            PageId::Investment => "Investment Focus",
            PageId::VentureStudio => "Venture Studio",
            PageId::Philanthropy => "Philanthropy",
            PageId::News => "News",
            PageId::Contact => "Contact",
        }
    }

    /// The only place an untrusted id is turned into a page. Anything that
    /// does not name a page, including an empty or absent fragment, is home.
    pub fn from_fragment(fragment: Option<&str>) -> PageId {
        fragment
            .and_then(|f| f.parse().ok())
            .unwrap_or_default()
    }
}

impl FromStr for PageId {
    type Err = InvalidPageId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageId::ALL
            .into_iter()
            .find(|page| page.as_str() == s)
            .ok_or_else(|| InvalidPageId(s.to_string()))
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn is_valid(candidate: &str) -> bool {
    candidate.parse::<PageId>().is_ok()
}

pub type RenderPage = fn() -> Html;

fn render<C>() -> Html
where
    C: BaseComponent<Properties = ()>,
{
    html! { <C /> }
}

pub fn resolve(page: PageId) -> RenderPage {
    match page {
        PageId::Home => render::<Home>,
        PageId::About => render::<About>,
        PageId::Portfolio => render::<Portfolio>,
        PageId::Investment => render::<Investment>,
        PageId::VentureStudio => render::<VentureStudio>,
        PageId::Philanthropy => render::<Philanthropy>,
        PageId::News => render::<News>,
        PageId::Contact => render::<Contact>,
    }
}

#[derive(Properties, PartialEq)]
pub struct PageFrameProps {
    pub page: PageId,
    pub on_mounted: Callback<PageId>,
}

/// Hosts the active page. The shell keys it by page id, so every page change
/// mounts a fresh frame and `on_mounted` fires once the new view is in the
/// document.
#[function_component]
pub fn PageFrame(props: &PageFrameProps) -> Html {
    {
        let page = props.page;
        let on_mounted = props.on_mounted.clone();
        use_effect_with_deps(
            move |_| {
                on_mounted.emit(page);
                || ()
            },
            (),
        );
    }

    info!("Rendering {} page", props.page.label());
    resolve(props.page)()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_round_trips_through_its_fragment() {
        for page in PageId::ALL {
            assert_eq!(page.as_str().parse::<PageId>(), Ok(page));
            assert_eq!(PageId::from_fragment(Some(page.as_str())), page);
            assert!(is_valid(page.as_str()));
        }
    }

    #[test]
    fn unknown_ids_fall_back_to_home() {
        for candidate in ["", "Home", "CONTACT", "venture-studio", "portfolio ", "#about", "admin"] {
            assert!(!is_valid(candidate), "{candidate:?} should be rejected");
            assert_eq!(PageId::from_fragment(Some(candidate)), PageId::Home);
        }
        assert_eq!(PageId::from_fragment(None), PageId::Home);
    }

    #[test]
    fn parse_error_names_the_rejected_id() {
        let err = "pricing".parse::<PageId>().unwrap_err();
        assert_eq!(err, InvalidPageId("pricing".to_string()));
        assert_eq!(err.to_string(), "unknown page id: \"pricing\"");
    }

    #[test]
    fn nav_pages_are_a_subset_without_duplicates() {
        for (i, page) in NAV_PAGES.iter().enumerate() {
            assert!(PageId::ALL.contains(page));
            assert!(!NAV_PAGES[i + 1..].contains(page));
        }
        assert!(!NAV_PAGES.contains(&PageId::Investment));
        assert!(!NAV_PAGES.contains(&PageId::News));
    }
}
