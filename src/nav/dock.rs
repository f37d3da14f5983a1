/// Body class present while the navbar is docked.
pub const DOCKED_CLASS: &str = "has-docked-nav";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DockChange {
    Dock,
    Undock,
}

/// Tracks whether the navbar should be docked for a given scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DockTracker {
    nav_offset_top: f64,
    docked: bool,
}

impl DockTracker {
    pub fn new(nav_offset_top: f64) -> Self {
        Self {
            nav_offset_top,
            docked: false,
        }
    }

    pub fn is_docked(&self) -> bool {
        self.docked
    }

    pub fn nav_offset_top(&self) -> f64 {
        self.nav_offset_top
    }

    /// Docks once scrolled past the navbar, undocks once back above it.
    /// Sitting exactly on the offset keeps the current state.
    pub fn on_scroll(&mut self, scroll_top: f64) -> Option<DockChange> {
        if self.nav_offset_top < scroll_top && !self.docked {
            self.docked = true;
            return Some(DockChange::Dock);
        }
        if self.nav_offset_top > scroll_top && self.docked {
            self.docked = false;
            return Some(DockChange::Undock);
        }
        None
    }

    /// The navbar must be measured undocked, so callers drop the docked
    /// class before passing the fresh offset. Returns the docked state after
    /// re-running the scroll rule.
    pub fn on_resize(&mut self, nav_offset_top: f64, scroll_top: f64) -> bool {
        self.docked = false;
        self.nav_offset_top = nav_offset_top;
        self.on_scroll(scroll_top);
        self.docked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_docks_past_the_navbar() {
        let mut tracker = DockTracker::new(120.0);
        assert_eq!(tracker.on_scroll(50.0), None);
        assert_eq!(tracker.on_scroll(121.0), Some(DockChange::Dock));
        assert_eq!(tracker.on_scroll(400.0), None);
        assert!(tracker.is_docked());
    }

    #[test]
    fn test_undocks_above_the_navbar() {
        let mut tracker = DockTracker::new(120.0);
        tracker.on_scroll(300.0);
        assert_eq!(tracker.on_scroll(119.0), Some(DockChange::Undock));
        assert!(!tracker.is_docked());
    }

    #[test]
    fn test_exact_offset_keeps_state() {
        let mut tracker = DockTracker::new(120.0);
        assert_eq!(tracker.on_scroll(120.0), None);
        tracker.on_scroll(200.0);
        assert_eq!(tracker.on_scroll(120.0), None);
        assert!(tracker.is_docked());
    }

    #[test]
    fn test_resize_remeasures() {
        let mut tracker = DockTracker::new(120.0);
        tracker.on_scroll(200.0);
        assert!(!tracker.on_resize(260.0, 200.0));
        assert_eq!(tracker.nav_offset_top(), 260.0);
        assert!(tracker.on_resize(80.0, 200.0));
    }
}
