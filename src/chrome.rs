//! Page chrome: navigation toggle state, navbar styling on scroll, anchor
//! scroll targets and the fade-in of tiles and body. Browser wiring lives in
//! `browser`.

/// Scroll depth past which the navbar turns solid.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 100.0;

/// Height of the fixed header that anchor targets must clear.
pub const HEADER_OFFSET: f64 = 80.0;

/// Open/closed state of the mobile navigation menu. Owned by whoever wires
/// the menu's handlers; never global.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Hamburger click. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Menu link click.
    pub fn close(&mut self) {
        self.open = false;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavbarStyle {
    pub background: &'static str,
    pub box_shadow: &'static str,
}

pub fn navbar_style(scroll_y: f64) -> NavbarStyle {
    if scroll_y > NAVBAR_SCROLL_THRESHOLD {
        NavbarStyle {
            background: "rgba(255, 255, 255, 0.98)",
            box_shadow: "0 2px 10px rgba(0, 0, 0, 0.1)",
        }
    } else {
        NavbarStyle {
            background: "rgba(255, 255, 255, 0.95)",
            box_shadow: "none",
        }
    }
}

/// Where to scroll so an anchor target lands just below the header.
pub fn anchor_scroll_top(target_offset_top: f64) -> f64 {
    target_offset_top - HEADER_OFFSET
}

/// In-page anchor with an actual fragment ("#" alone has no target).
pub fn is_local_anchor(href: &str) -> bool {
    href.len() > 1 && href.starts_with('#')
}

/// Share of a tile that must be visible before it fades in.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Tiles start fading in 50px before the viewport bottom edge would.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Elements that fade in as they scroll into view.
pub const REVEAL_SELECTOR: &str = ".portfolio-item";

/// Inline style of a tile before and after it is revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealStyle {
    pub opacity: &'static str,
    pub transform: &'static str,
}

pub const REVEAL_HIDDEN: RevealStyle = RevealStyle { opacity: "0", transform: "translateY(30px)" };
pub const REVEAL_SHOWN: RevealStyle = RevealStyle { opacity: "1", transform: "translateY(0)" };

/// Transition for the tile at `index`; each tile starts a tenth of a second
/// after the one before it.
pub fn reveal_transition(index: usize) -> String {
    let delay = stagger_delay(index);
    format!("opacity 0.6s ease {delay}s, transform 0.6s ease {delay}s")
}

// Exact decimal, so tile 3 gets "0.3" rather than float noise.
fn stagger_delay(index: usize) -> String {
    match index % 10 {
        0 => format!("{}", index / 10),
        tenths => format!("{}.{}", index / 10, tenths),
    }
}

/// Body fade on load: hidden with this transition, shown after the delay.
pub const BODY_FADE_TRANSITION: &str = "opacity 0.5s ease";
pub const BODY_FADE_DELAY_MS: i32 = 100;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_menu_toggle_and_close() {
        let mut menu = NavMenu::default();
        assert!(!menu.is_open());
        assert!(menu.toggle());
        assert!(!menu.toggle());
        menu.toggle();
        menu.close();
        assert!(!menu.is_open());
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn navbar_turns_solid_past_threshold() {
        assert_eq!(navbar_style(0.0).box_shadow, "none");
        assert_eq!(navbar_style(100.0).box_shadow, "none");
        assert_eq!(navbar_style(101.0).background, "rgba(255, 255, 255, 0.98)");
    }

    #[test]
    fn anchor_offsets() {
        assert_eq!(anchor_scroll_top(500.0), 420.0);
        assert!(is_local_anchor("#about"));
        assert!(!is_local_anchor("#"));
        assert!(!is_local_anchor("about.html#top"));
    }

    #[test]
    fn reveal_staggers_by_tenths() {
        assert_eq!(reveal_transition(0), "opacity 0.6s ease 0s, transform 0.6s ease 0s");
        assert_eq!(reveal_transition(3), "opacity 0.6s ease 0.3s, transform 0.6s ease 0.3s");
        assert_eq!(reveal_transition(10), "opacity 0.6s ease 1s, transform 0.6s ease 1s");
        assert_eq!(reveal_transition(12), "opacity 0.6s ease 1.2s, transform 0.6s ease 1.2s");
    }

    #[test]
    fn reveal_styles() {
        assert_eq!(REVEAL_HIDDEN.opacity, "0");
        assert_eq!(REVEAL_HIDDEN.transform, "translateY(30px)");
        assert_eq!(REVEAL_SHOWN.transform, "translateY(0)");
        assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD < 1.0);
    }
}
