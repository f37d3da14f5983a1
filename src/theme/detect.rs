use super::Theme;

pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Reports the color scheme the OS or browser prefers.
///
/// Pure; the answer may change between calls if the user flips the system
/// setting.
pub trait SystemPreference {
    fn detect(&self) -> Theme;
}

/// Runtime without media queries.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoMediaSupport;

impl SystemPreference for NoMediaSupport {
    fn detect(&self) -> Theme {
        Theme::Light
    }
}

/// Always answers with the wrapped theme.
#[derive(Clone, Copy, Debug)]
pub struct FixedPreference(pub Theme);

impl SystemPreference for FixedPreference {
    fn detect(&self) -> Theme {
        self.0
    }
}
