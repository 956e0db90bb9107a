use std::rc::Rc;

use log::{info, warn};
use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Home,
    Services,
    Booking,
    About,
    Contact,
    WorkerSignup,
}

impl Page {
    pub fn id(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Services => "services",
            Page::Booking => "booking",
            Page::About => "about",
            Page::Contact => "contact",
            Page::WorkerSignup => "worker-signup",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Services => "Services",
            Page::Booking => "Booking",
            Page::About => "About",
            Page::Contact => "Contact",
            Page::WorkerSignup => "Join as Worker",
        }
    }
}

/// Pages listed in the navbar and the footer quick links.
pub const NAV_ITEMS: [Page; 5] = [
    Page::Home,
    Page::Services,
    Page::Booking,
    Page::About,
    Page::Contact,
];

/// In-memory page state. Nothing here touches the address bar or history.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavigationState {
    pub current: Page,
    /// Bumped on every navigation so the root can scroll to the top, even
    /// when the target is the page already shown.
    pub scroll_requests: u32,
}

impl Reducible for NavigationState {
    type Action = Page;

    fn reduce(self: Rc<Self>, current: Page) -> Rc<Self> {
        info!("Navigating to {}", current.id());
        Rc::new(Self {
            current,
            scroll_requests: self.scroll_requests.wrapping_add(1),
        })
    }
}

pub type NavigationContext = UseReducerHandle<NavigationState>;

#[hook]
pub fn use_navigate() -> Callback<Page> {
    let navigation = use_context::<NavigationContext>();
    Callback::from(move |page: Page| match &navigation {
        Some(navigation) => navigation.dispatch(page),
        None => warn!("Navigation to {} requested outside of the app root", page.id()),
    })
}

#[hook]
pub fn use_current_page() -> Page {
    let navigation = use_context::<NavigationContext>();
    navigation
        .map(|navigation| navigation.current)
        .unwrap_or_default()
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Page; 6] = [
        Page::Home,
        Page::Services,
        Page::Booking,
        Page::About,
        Page::Contact,
        Page::WorkerSignup,
    ];

    #[test]
    fn starts_on_home() {
        assert_eq!(NavigationState::default().current, Page::Home);
        assert_eq!(Page::default(), Page::Home);
    }

    #[test]
    fn every_page_is_reachable_and_requests_scroll() {
        for page in ALL {
            let before = Rc::new(NavigationState::default());
            let after = before.clone().reduce(page);
            assert_eq!(after.current, page);
            assert_eq!(after.scroll_requests, before.scroll_requests + 1);
        }
    }

    #[test]
    fn page_ids_are_distinct() {
        let mut ids: Vec<_> = ALL.iter().map(|page| page.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), ALL.len());
        assert_eq!(Page::WorkerSignup.id(), "worker-signup");
    }

    #[test]
    fn navigating_to_the_current_page_still_scrolls() {
        let state = Rc::new(NavigationState::default()).reduce(Page::About);
        let again = state.clone().reduce(Page::About);
        assert_eq!(again.current, Page::About);
        assert_eq!(again.scroll_requests, state.scroll_requests + 1);
    }

    #[test]
    fn nav_items_exclude_worker_signup() {
        assert!(!NAV_ITEMS.contains(&Page::WorkerSignup));
        assert_eq!(NAV_ITEMS.len() + 1, ALL.len());
    }
}
