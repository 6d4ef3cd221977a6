//! Browser-independent scroll behaviour: navigation anchors, the condensed
//! navigation threshold and the reveal-on-scroll latch.

/// Scroll offset (px) above which the navigation bar condenses.
pub const CONDENSE_OFFSET: f64 = 50.0;

/// Fraction of a section that must be in view before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.3;

/// In-page navigation targets.
///
/// `Home` has no element of its own; the hero is left without an id and a
/// missing `home` element means "top of the page".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Home,
    About,
    Portfolio,
    Contact,
}

impl Anchor {
    pub const ALL: [Anchor; 4] = [
        Anchor::Home,
        Anchor::About,
        Anchor::Portfolio,
        Anchor::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Anchor::Home => "home",
            Anchor::About => "about",
            Anchor::Portfolio => "portfolio",
            Anchor::Contact => "contact",
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            Anchor::Home => "#home",
            Anchor::About => "#about",
            Anchor::Portfolio => "#portfolio",
            Anchor::Contact => "#contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Anchor::Home => "Home",
            Anchor::About => "About",
            Anchor::Portfolio => "Portfolio",
            Anchor::Contact => "Contact",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAction {
    /// Smooth-scroll the matching element into view.
    IntoView,
    /// Smooth-scroll the window to the top.
    Top,
    Skip,
}

impl ScrollAction {
    pub fn plan(target: Anchor, element_found: bool) -> Self {
        match (element_found, target) {
            (true, _) => ScrollAction::IntoView,
            (false, Anchor::Home) => ScrollAction::Top,
            (false, _) => ScrollAction::Skip,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavStyle {
    Expanded,
    Condensed,
}

impl NavStyle {
    pub fn from_offset(offset: f64) -> Self {
        if offset > CONDENSE_OFFSET {
            NavStyle::Condensed
        } else {
            NavStyle::Expanded
        }
    }

    pub fn outer_class(self) -> &'static str {
        match self {
            NavStyle::Condensed => "py-2",
            NavStyle::Expanded => "py-4",
        }
    }

    pub fn bar_class(self) -> &'static str {
        match self {
            NavStyle::Condensed => "backdrop-blur-lg bg-background/80",
            NavStyle::Expanded => "bg-background/90",
        }
    }
}

/// Mobile navigation menu. Closed by default; every navigation through the
/// bar closes it, whether or not anything scrolled.
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
    }

    pub fn navigate(&mut self, target: Anchor, scroll: impl FnOnce(Anchor)) {
        scroll(target);
        self.open = false;
    }
}

/// Once-only visibility flag for a mounted section.
///
/// Starts hidden, flips to shown on the first intersecting observation and
/// stays there. After `release` (the section was cleaned up) observations are
/// ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLatch {
    shown: bool,
    released: bool,
}

impl RevealLatch {
    pub fn shown(&self) -> bool {
        self.shown
    }

    /// Returns true only for the observation that flips the latch.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.released || self.shown || !intersecting {
            return false;
        }
        self.shown = true;
        true
    }

    pub fn release(&mut self) {
        self.released = true;
    }
}

pub fn reveal_class(shown: bool) -> &'static str {
    if shown {
        "animate-slide-up opacity-100"
    } else {
        "opacity-0 translate-y-10"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condensed_boundary() {
        assert_eq!(NavStyle::from_offset(0.0), NavStyle::Expanded);
        assert_eq!(NavStyle::from_offset(50.0), NavStyle::Expanded);
        assert_eq!(NavStyle::from_offset(51.0), NavStyle::Condensed);
        assert_eq!(NavStyle::from_offset(50.5), NavStyle::Condensed);
        // scrolling back up reverts
        assert_eq!(NavStyle::from_offset(12.0), NavStyle::Expanded);
    }

    #[test]
    fn test_home_without_element_scrolls_to_top() {
        assert_eq!(ScrollAction::plan(Anchor::Home, false), ScrollAction::Top);
        assert_eq!(ScrollAction::plan(Anchor::Home, true), ScrollAction::IntoView);
    }

    #[test]
    fn test_missing_section_is_skipped() {
        for anchor in [Anchor::About, Anchor::Portfolio, Anchor::Contact] {
            assert_eq!(ScrollAction::plan(anchor, false), ScrollAction::Skip);
            assert_eq!(ScrollAction::plan(anchor, true), ScrollAction::IntoView);
        }
    }

    #[test]
    fn test_anchor_href_matches_id() {
        for anchor in Anchor::ALL {
            assert_eq!(anchor.href(), format!("#{}", anchor.id()));
        }
    }

    #[test]
    fn test_menu_defaults_closed_and_toggles() {
        let mut menu = MobileMenu::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_navigating_closes_menu() {
        let mut scrolled = Vec::new();

        let mut menu = MobileMenu::default();
        menu.toggle();
        menu.navigate(Anchor::Contact, |a| scrolled.push(a));
        assert!(!menu.is_open());

        // already closed stays closed
        menu.navigate(Anchor::Contact, |a| scrolled.push(a));
        assert!(!menu.is_open());

        // closes even when the scroll itself does nothing
        menu.toggle();
        menu.navigate(Anchor::About, |_| {});
        assert!(!menu.is_open());

        assert_eq!(scrolled, vec![Anchor::Contact, Anchor::Contact]);
    }

    #[test]
    fn test_latch_flips_once() {
        let mut latch = RevealLatch::default();
        assert!(!latch.shown());
        assert!(!latch.observe(false));
        assert!(!latch.shown());

        assert!(latch.observe(true));
        assert!(latch.shown());

        // leaving the viewport does not hide it again
        assert!(!latch.observe(false));
        assert!(latch.shown());
        assert!(!latch.observe(true));
        assert!(latch.shown());
    }

    #[test]
    fn test_latch_ignores_observations_after_release() {
        let mut latch = RevealLatch::default();
        latch.release();
        assert!(!latch.observe(true));
        assert!(!latch.shown());

        let mut latch = RevealLatch::default();
        latch.observe(true);
        latch.release();
        assert!(!latch.observe(false));
        assert!(latch.shown());
    }

    #[test]
    fn test_reveal_class() {
        assert_eq!(reveal_class(false), "opacity-0 translate-y-10");
        assert_eq!(reveal_class(true), "animate-slide-up opacity-100");
    }
}
