//! Route table and navigation model

use tracing::debug;

/// The one router pattern the site registers. Every location lands here and
/// is mapped to a page by [`Page::resolve`].
pub const CATCH_ALL: &str = "/*any";

/// A view the site can render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Refer,
    Redeem,
    HowItWorks,
    NotFound,
}

impl Page {
    /// All pages reachable by a real path, in navigation order
    pub const ROUTED: [Page; 4] = [Page::Home, Page::Refer, Page::Redeem, Page::HowItWorks];

    /// Resolve a location to the page it renders. Every input resolves.
    pub fn resolve(location: &str) -> Page {
        let path = location
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let path = match path.strip_suffix('/') {
            Some(stripped) if !stripped.is_empty() && !stripped.ends_with('/') => stripped,
            _ => path,
        };

        let page = Self::ROUTED
            .into_iter()
            .find(|page| page.path() == path)
            .unwrap_or(Page::NotFound);
        debug!(location, ?page, "resolved route");
        page
    }

    /// Canonical path. `NotFound` has no path of its own and maps to the
    /// catch-all pattern.
    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Refer => "/refer",
            Page::Redeem => "/redeem",
            Page::HowItWorks => "/how-it-works",
            Page::NotFound => CATCH_ALL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub page: Page,
}

impl NavLink {
    pub fn href(&self) -> &'static str {
        self.page.path()
    }

    /// A link is active only on its own page; `/refer` does not light up
    /// Home. Compare against the resolved page so `/refer/` and
    /// `/refer?x=1` still highlight Refer Now.
    pub fn is_active(&self, current: Page) -> bool {
        self.page == current
    }
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "Home", page: Page::Home },
    NavLink { label: "Refer Now", page: Page::Refer },
    NavLink { label: "Redeem", page: Page::Redeem },
    NavLink { label: "How it Works", page: Page::HowItWorks },
];

/// Open/closed state of the collapsible mobile menu
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
        debug!(open = self.open, "mobile menu toggled");
    }

    /// Called when a link inside the menu is followed
    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_paths_resolve() {
        assert_eq!(Page::resolve("/"), Page::Home);
        assert_eq!(Page::resolve("/refer"), Page::Refer);
        assert_eq!(Page::resolve("/redeem"), Page::Redeem);
        assert_eq!(Page::resolve("/how-it-works"), Page::HowItWorks);
    }

    #[test]
    fn test_every_routed_page_round_trips() {
        for page in Page::ROUTED {
            assert_eq!(Page::resolve(page.path()), page);
        }
    }

    #[test]
    fn test_unknown_paths_fall_back() {
        for path in ["", "/admin", "/refer/extra", "/REFER", "/how_it_works", "//", "/*any"] {
            assert_eq!(Page::resolve(path), Page::NotFound, "path {path:?}");
        }
    }

    #[test]
    fn test_query_fragment_and_trailing_slash() {
        assert_eq!(Page::resolve("/refer/"), Page::Refer);
        assert_eq!(Page::resolve("/redeem?code=SOLAR123XYZ"), Page::Redeem);
        assert_eq!(Page::resolve("/how-it-works#faq"), Page::HowItWorks);
        assert_eq!(Page::resolve("/?utm=ad"), Page::Home);
    }

    fn active_labels(location: &str) -> Vec<&'static str> {
        let current = Page::resolve(location);
        NAV_LINKS
            .iter()
            .filter(|link| link.is_active(current))
            .map(|link| link.label)
            .collect()
    }

    #[test]
    fn test_active_is_exact_match() {
        assert_eq!(active_labels("/redeem"), vec!["Redeem"]);
        assert_eq!(active_labels("/refer"), vec!["Refer Now"]);
        assert_eq!(active_labels("/"), vec!["Home"]);
        assert!(active_labels("/refer/x").is_empty());
        assert!(active_labels("/admin").is_empty());
    }

    #[test]
    fn test_active_link_follows_resolved_page() {
        for location in ["/refer/", "/refer?from=sms", "/refer#form"] {
            assert_eq!(Page::resolve(location), Page::Refer);
            assert_eq!(active_labels(location), vec!["Refer Now"], "location {location:?}");
        }
        assert_eq!(active_labels("/how-it-works/"), vec!["How it Works"]);
    }

    #[test]
    fn test_not_found_maps_to_catch_all() {
        assert_eq!(Page::NotFound.path(), CATCH_ALL);
        assert!(!Page::ROUTED.contains(&Page::NotFound));
    }

    #[test]
    fn test_mobile_menu_toggles_and_closes() {
        let mut menu = MobileMenu::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
        menu.toggle();
        menu.close();
        assert!(!menu.is_open());
        menu.close();
        assert!(!menu.is_open());
    }
}
