use log::{debug, info, warn};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};
use yew::prelude::*;

use crate::pages::registry::{is_valid, PageId};

/// Everything the shell needs from the address bar and the viewport.
pub trait Location {
    /// Fragment without the leading `#`, `None` when there is none.
    fn fragment(&self) -> Option<String>;
    fn set_fragment(&self, fragment: &str);
    fn scroll_to_top(&self);
    fn scroll_to_anchor(&self, anchor: &str);
}

pub struct BrowserLocation;

impl Location for BrowserLocation {
    fn fragment(&self) -> Option<String> {
        let hash = web_sys::window()?.location().hash().ok()?;
        let fragment = hash.strip_prefix('#').unwrap_or(&hash);
        (!fragment.is_empty()).then(|| fragment.to_string())
    }

    fn set_fragment(&self, fragment: &str) {
        if let Some(window) = web_sys::window() {
            if window.location().set_hash(fragment).is_err() {
                warn!("Could not update location hash to #{}", fragment);
            }
        }
    }

    fn scroll_to_top(&self) {
        if let Some(window) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }

    fn scroll_to_anchor(&self, anchor: &str) {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(anchor));
        match element {
            Some(element) => {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                element.scroll_into_view_with_scroll_into_view_options(&options);
            }
            None => warn!("Anchor #{} not found after mount", anchor),
        }
    }
}

/// Reads the page the browser asked for. Invalid or missing fragments mean home.
pub fn initial_page(location: &impl Location) -> PageId {
    let fragment = location.fragment();
    if let Some(unknown) = fragment.as_deref().filter(|f| !is_valid(f)) {
        warn!("Unknown fragment #{}, showing home", unknown);
    }
    PageId::from_fragment(fragment.as_deref())
}

pub struct NavigationState<L> {
    location: L,
    current: PageId,
    pending_anchor: Option<(PageId, &'static str)>,
}

impl<L: Location> NavigationState<L> {
    pub fn init(location: L) -> Self {
        let current = initial_page(&location);
        info!("Starting on {} page", current.label());
        Self {
            location,
            current,
            pending_anchor: None,
        }
    }

    pub fn current(&self) -> PageId {
        self.current
    }

    #[cfg(test)]
    pub fn location(&self) -> &L {
        &self.location
    }

    /// Plain navigation: lands at the top of `target` and forgets any anchor
    /// still waiting for an earlier target to mount.
    pub fn transition(&mut self, target: PageId) {
        self.pending_anchor = None;
        if self.current != target {
            info!("Navigating {} -> {}", self.current, target);
            self.current = target;
        }
        if self.location.fragment().as_deref() != Some(target.as_str()) {
            self.location.set_fragment(target.as_str());
        }
        self.location.scroll_to_top();
    }

    /// Transition driven by an untrusted id. Unknown ids leave everything as is.
    #[cfg(test)]
    pub fn transition_str(&mut self, candidate: &str) -> bool {
        match candidate.parse::<PageId>() {
            Ok(target) => {
                self.transition(target);
                true
            }
            Err(err) => {
                warn!("Ignoring navigation: {}", err);
                false
            }
        }
    }

    /// Navigate, then bring `anchor` into view once the target view has mounted.
    pub fn transition_to_anchor(&mut self, target: PageId, anchor: &'static str) {
        let already_mounted = self.current == target;
        self.transition(target);
        if already_mounted {
            self.pending_anchor = None;
            self.location.scroll_to_anchor(anchor);
        } else {
            self.pending_anchor = Some((target, anchor));
        }
    }

    pub fn view_mounted(&mut self, page: PageId) {
        match self.pending_anchor {
            Some((pending, anchor)) if pending == page => {
                debug!("{} mounted, scrolling to #{}", page, anchor);
                self.pending_anchor = None;
                self.location.scroll_to_anchor(anchor);
            }
            _ => {}
        }
    }

    /// Follows a fragment change made outside the shell (back/forward, typed
    /// URL). Never writes the fragment back.
    pub fn sync_with_fragment(&mut self) -> bool {
        let page = initial_page(&self.location);
        if page == self.current {
            return false;
        }
        info!("Fragment changed {} -> {}", self.current, page);
        self.current = page;
        if matches!(self.pending_anchor, Some((pending, _)) if pending != page) {
            self.pending_anchor = None;
        }
        true
    }

    pub fn apply(&mut self, request: NavRequest) {
        match request.anchor {
            Some(anchor) => self.transition_to_anchor(request.page, anchor),
            None => self.transition(request.page),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavRequest {
    pub page: PageId,
    pub anchor: Option<&'static str>,
}

impl From<PageId> for NavRequest {
    fn from(page: PageId) -> Self {
        Self { page, anchor: None }
    }
}

/// Shared navigation capability handed to every component through context.
#[derive(Clone, PartialEq)]
pub struct Navigation {
    pub current: PageId,
    navigate: Callback<NavRequest>,
}

impl Navigation {
    pub fn new(current: PageId, navigate: Callback<NavRequest>) -> Self {
        Self { current, navigate }
    }

    pub fn go(&self, page: PageId) {
        self.navigate.emit(page.into());
    }

    pub fn link(&self, page: PageId) -> Callback<MouseEvent> {
        let navigate = self.navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigate.emit(page.into());
        })
    }

    pub fn link_to_anchor(&self, page: PageId, anchor: &'static str) -> Callback<MouseEvent> {
        let navigate = self.navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigate.emit(NavRequest {
                page,
                anchor: Some(anchor),
            });
        })
    }
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new(PageId::default(), Callback::noop())
    }
}

#[hook]
pub fn use_navigation() -> Navigation {
    use_context::<Navigation>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;

    #[derive(Default)]
    struct FakeLocation {
        fragment: RefCell<Option<String>>,
        fragment_writes: Cell<usize>,
        top_scrolls: Cell<usize>,
        anchor_scrolls: RefCell<Vec<String>>,
    }

    impl FakeLocation {
        fn at(fragment: &str) -> Self {
            let location = Self::default();
            *location.fragment.borrow_mut() = Some(fragment.to_string());
            location
        }

        fn anchors(&self) -> Vec<String> {
            self.anchor_scrolls.borrow().clone()
        }
    }

    impl Location for FakeLocation {
        fn fragment(&self) -> Option<String> {
            self.fragment.borrow().clone()
        }

        fn set_fragment(&self, fragment: &str) {
            *self.fragment.borrow_mut() = Some(fragment.to_string());
            self.fragment_writes.set(self.fragment_writes.get() + 1);
        }

        fn scroll_to_top(&self) {
            self.top_scrolls.set(self.top_scrolls.get() + 1);
        }

        fn scroll_to_anchor(&self, anchor: &str) {
            self.anchor_scrolls.borrow_mut().push(anchor.to_string());
        }
    }

    #[test]
    fn init_falls_back_to_home_for_unknown_fragments() {
        for fragment in ["", "pricing", "Portfolio", "contact/", "home#about"] {
            let state = NavigationState::init(FakeLocation::at(fragment));
            assert_eq!(state.current(), PageId::Home, "fragment {fragment:?}");
        }
        assert_eq!(NavigationState::init(FakeLocation::default()).current(), PageId::Home);
    }

    #[test]
    fn init_honours_every_valid_fragment() {
        for page in PageId::ALL {
            let state = NavigationState::init(FakeLocation::at(page.as_str()));
            assert_eq!(state.current(), page);
        }
    }

    #[test]
    fn init_does_not_touch_the_location() {
        let state = NavigationState::init(FakeLocation::at("garbage"));
        assert_eq!(state.location().fragment_writes.get(), 0);
        assert_eq!(state.location().top_scrolls.get(), 0);
        assert_eq!(state.location().fragment().as_deref(), Some("garbage"));
    }

    #[test]
    fn invalid_transition_is_a_no_op() {
        let mut state = NavigationState::init(FakeLocation::at("about"));
        assert!(!state.transition_str("careers"));
        assert!(!state.transition_str(""));
        assert_eq!(state.current(), PageId::About);
        assert_eq!(state.location().fragment().as_deref(), Some("about"));
        assert_eq!(state.location().fragment_writes.get(), 0);
        assert_eq!(state.location().top_scrolls.get(), 0);
    }

    #[test]
    fn repeated_transition_writes_the_fragment_once() {
        let mut state = NavigationState::init(FakeLocation::default());
        assert!(state.transition_str("news"));
        state.transition(PageId::News);
        assert_eq!(state.current(), PageId::News);
        assert_eq!(state.location().fragment().as_deref(), Some("news"));
        assert_eq!(state.location().fragment_writes.get(), 1);
    }

    #[test]
    fn fragment_survives_a_reload() {
        for page in PageId::ALL {
            let mut state = NavigationState::init(FakeLocation::default());
            state.transition(page);
            assert_eq!(initial_page(state.location()), page);
        }
    }

    #[test]
    fn footer_navigation_from_portfolio_resets_scroll() {
        let mut state = NavigationState::init(FakeLocation::at("portfolio"));
        assert_eq!(state.current(), PageId::Portfolio);

        state.apply(PageId::Contact.into());
        assert_eq!(state.current(), PageId::Contact);
        assert_eq!(state.location().fragment().as_deref(), Some("contact"));
        assert_eq!(state.location().top_scrolls.get(), 1);
        assert!(state.location().anchors().is_empty());
    }

    #[test]
    fn anchor_scroll_waits_for_the_target_view() {
        let mut state = NavigationState::init(FakeLocation::default());
        state.apply(NavRequest {
            page: PageId::Contact,
            anchor: Some("form-meet"),
        });
        assert_eq!(state.location().fragment().as_deref(), Some("contact"));
        assert!(state.location().anchors().is_empty());

        // the outgoing view finishing late must not consume the anchor
        state.view_mounted(PageId::Home);
        assert!(state.location().anchors().is_empty());

        state.view_mounted(PageId::Contact);
        assert_eq!(state.location().anchors(), vec!["form-meet".to_string()]);

        state.view_mounted(PageId::Contact);
        assert_eq!(state.location().anchors().len(), 1);
    }

    #[test]
    fn anchor_on_current_page_scrolls_immediately() {
        let mut state = NavigationState::init(FakeLocation::at("contact"));
        state.transition_to_anchor(PageId::Contact, "form-meet");
        assert_eq!(state.location().anchors(), vec!["form-meet".to_string()]);
        state.view_mounted(PageId::Contact);
        assert_eq!(state.location().anchors().len(), 1);
    }

    #[test]
    fn plain_transition_forgets_an_unconsumed_anchor() {
        let mut state = NavigationState::init(FakeLocation::default());
        state.apply(NavRequest {
            page: PageId::Contact,
            anchor: Some("form-meet"),
        });
        // user moves on before the contact view mounted
        state.transition(PageId::About);
        state.view_mounted(PageId::About);

        state.transition(PageId::Contact);
        state.view_mounted(PageId::Contact);
        assert!(state.location().anchors().is_empty());
        assert_eq!(state.location().top_scrolls.get(), 3);
    }

    #[test]
    fn anchor_request_survives_its_own_transition() {
        let mut state = NavigationState::init(FakeLocation::at("about"));
        state.transition_to_anchor(PageId::Contact, "form-meet");
        state.view_mounted(PageId::Contact);
        assert_eq!(state.location().anchors(), vec!["form-meet".to_string()]);
    }

    #[test]
    fn hashchange_follows_valid_fragments_without_writing() {
        let mut state = NavigationState::init(FakeLocation::at("about"));
        state.location().fragment.replace(Some("philanthropy".to_string()));
        assert!(state.sync_with_fragment());
        assert_eq!(state.current(), PageId::Philanthropy);
        assert!(!state.sync_with_fragment());
        assert_eq!(state.location().fragment_writes.get(), 0);
    }

    #[test]
    fn hashchange_to_invalid_fragment_goes_home() {
        let mut state = NavigationState::init(FakeLocation::at("news"));
        state.location().fragment.replace(Some("nope".to_string()));
        assert!(state.sync_with_fragment());
        assert_eq!(state.current(), PageId::Home);
        assert_eq!(state.location().fragment().as_deref(), Some("nope"));
        assert_eq!(state.location().fragment_writes.get(), 0);
    }

    #[test]
    fn hashchange_away_drops_a_pending_anchor() {
        let mut state = NavigationState::init(FakeLocation::default());
        state.transition_to_anchor(PageId::Contact, "form-meet");
        state.location().fragment.replace(Some("about".to_string()));
        assert!(state.sync_with_fragment());
        state.location().fragment.replace(Some("contact".to_string()));
        assert!(state.sync_with_fragment());
        state.view_mounted(PageId::Contact);
        assert!(state.location().anchors().is_empty());
    }

    #[test]
    fn own_fragment_write_does_not_echo() {
        let mut state = NavigationState::init(FakeLocation::default());
        state.transition(PageId::Investment);
        assert!(!state.sync_with_fragment());
        assert_eq!(state.current(), PageId::Investment);
    }
}
