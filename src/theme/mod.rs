//! Theme preference, detection, application and the toggle that ties them
//! together.

mod apply;
mod detect;
mod store;
mod toggle;

use std::fmt::{ Display, Formatter };

pub use apply::{ DetachedApplier, ThemeApplier, THEME_ATTRIBUTE };
pub use detect::{ FixedPreference, NoMediaSupport, SystemPreference, DARK_SCHEME_QUERY };
pub use store::{ FallbackStore, KeyValueStorage, MemoryStore, PreferenceStore };
pub use toggle::{ ToggleControl, ToggleController };

/// The theme actually shown on the page. Always resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Maps the checkbox state of the theme switch: checked means dark.
    pub fn from_checked(checked: bool) -> Self {
        if checked { Theme::Dark } else { Theme::Light }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the user explicitly chose, if anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    Unset,
}

impl ThemePreference {
    /// Interprets a raw stored value. Anything but `"light"`/`"dark"` counts
    /// as never written.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value.and_then(Theme::parse) {
            Some(theme) => theme.into(),
            None => {
                if let Some(other) = value {
                    log::debug!("Ignoring unrecognised stored theme {:?}", other);
                }
                ThemePreference::Unset
            }
        }
    }

    pub fn theme(self) -> Option<Theme> {
        match self {
            ThemePreference::Light => Some(Theme::Light),
            ThemePreference::Dark => Some(Theme::Dark),
            ThemePreference::Unset => None,
        }
    }
}

impl From<Theme> for ThemePreference {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => ThemePreference::Light,
            Theme::Dark => ThemePreference::Dark,
        }
    }
}

/// Explicit preference wins; otherwise ask the system.
pub fn resolve_effective_theme(preference: ThemePreference, system: &dyn SystemPreference) -> Theme {
    preference.theme().unwrap_or_else(|| system.detect())
}
