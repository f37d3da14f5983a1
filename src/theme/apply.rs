use std::cell::Cell;
use std::rc::Rc;

use super::Theme;
use crate::error::ClientError;

/// Attribute on the document root the stylesheets key off.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Puts the effective theme on the document. Applying the theme already
/// shown changes nothing.
pub trait ThemeApplier {
    fn apply(&self, theme: Theme) -> Result<(), ClientError>;
}

/// Holds the attribute in memory for renderers without a browser document.
#[derive(Clone, Debug, Default)]
pub struct DetachedApplier {
    current: Rc<Cell<Option<Theme>>>,
    writes: Rc<Cell<usize>>,
}

impl DetachedApplier {
    pub fn current(&self) -> Option<Theme> {
        self.current.get()
    }

    /// Number of times the attribute value actually changed.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl ThemeApplier for DetachedApplier {
    fn apply(&self, theme: Theme) -> Result<(), ClientError> {
        if self.current.get() != Some(theme) {
            self.current.set(Some(theme));
            self.writes.set(self.writes.get() + 1);
        }
        Ok(())
    }
}
