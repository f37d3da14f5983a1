//! Navbar behaviour: docking on scroll, in-page anchor scrolling and the
//! mobile menu.

mod dock;

pub use dock::{ DockChange, DockTracker, DOCKED_CLASS };

/// Space left above an anchor target after scrolling to it.
pub const ANCHOR_MARGIN: f64 = 40.0;

pub const MOBILE_NAV_ID: &str = "mobile-nav";

/// Scroll position that brings an element at `target_top` (document
/// coordinates) just under the docked navbar.
pub fn anchor_scroll_top(target_top: f64) -> f64 {
    target_top - ANCHOR_MARGIN
}

/// Element id an in-page link points at, if any.
pub fn anchor_target(href: &str) -> Option<&str> {
    let hash = href.rsplit_once('#').map(|(_, id)| id)?;
    if hash.is_empty() { None } else { Some(hash) }
}

/// Next `display` value of the mobile menu.
pub fn next_mobile_nav_display(current: &str) -> &'static str {
    if current == "block" { "none" } else { "block" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_scroll_top() {
        assert_eq!(anchor_scroll_top(540.0), 500.0);
        assert_eq!(anchor_scroll_top(10.0), -30.0);
    }

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#rules"), Some("rules"));
        assert_eq!(anchor_target("/scoreboard#summary"), Some("summary"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/scoreboard"), None);
    }

    #[test]
    fn test_mobile_nav_flips() {
        assert_eq!(next_mobile_nav_display("block"), "none");
        assert_eq!(next_mobile_nav_display("none"), "block");
        assert_eq!(next_mobile_nav_display(""), "block");
    }
}
