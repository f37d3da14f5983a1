use super::{ resolve_effective_theme, PreferenceStore, SystemPreference, Theme, ThemeApplier, ThemePreference };
use crate::charts::{ ChartRefresh, ScoreboardContext };

/// Checkbox-style control bound to the theme. Checked means dark.
pub trait ToggleControl {
    fn set_checked(&self, checked: bool);
}

/// Two-state machine (light/dark) driven only by the user flipping the
/// switch.
///
/// Holds every collaborator explicitly. Pages without a theme switch pass no
/// control, pages without charts attach no scoreboard context.
pub struct ToggleController {
    store: Box<dyn PreferenceStore>,
    applier: Box<dyn ThemeApplier>,
    control: Option<Box<dyn ToggleControl>>,
    scoreboard: Option<ScoreboardContext>,
    theme: Theme,
}

impl ToggleController {
    /// Resolves the effective theme and applies it before any control is
    /// bound. A first visit persists whatever the system reported.
    pub fn init(
        store: Box<dyn PreferenceStore>,
        system: &dyn SystemPreference,
        applier: Box<dyn ThemeApplier>
    ) -> Self {
        let preference = store.get();
        let theme = resolve_effective_theme(preference, system);
        if preference == ThemePreference::Unset {
            log::info!("No stored theme, seeding \"{}\" from system preference", theme);
            store.set(theme);
        }
        if let Err(e) = applier.apply(theme) {
            log::debug!("Initial theme not applied: {}", e);
        }

        Self {
            store,
            applier,
            control: None,
            scoreboard: None,
            theme,
        }
    }

    pub fn with_control(mut self, control: Option<Box<dyn ToggleControl>>) -> Self {
        match &control {
            Some(control) => control.set_checked(self.theme.is_dark()),
            None => log::debug!("No theme switch on this page"),
        }
        self.control = control;
        self
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Always equal to `theme().is_dark()`.
    pub fn toggle_state(&self) -> bool {
        self.theme.is_dark()
    }

    pub fn has_scoreboard(&self) -> bool {
        self.scoreboard.is_some()
    }

    /// Handles a change event from the switch. Returns the chart refresh to
    /// run when a scoreboard is attached.
    pub fn on_change(&mut self, checked: bool) -> Option<ChartRefresh> {
        let theme = Theme::from_checked(checked);
        if let Err(e) = self.applier.apply(theme) {
            log::debug!("Theme not applied: {}", e);
        }
        self.store.set(theme);
        self.theme = theme;
        if let Some(control) = &self.control {
            control.set_checked(checked);
        }
        log::debug!("Theme switched to {}", theme);

        self.scoreboard.as_ref().map(|scoreboard| scoreboard.load(theme))
    }

    pub fn toggle(&mut self) -> Option<ChartRefresh> {
        self.on_change(!self.toggle_state())
    }

    /// Attaches chart refreshing and returns the initial chart load for the
    /// current theme.
    pub fn attach_scoreboard(&mut self, scoreboard: ScoreboardContext) -> ChartRefresh {
        let load = scoreboard.load(self.theme);
        self.scoreboard = Some(scoreboard);
        load
    }

    pub fn detach_scoreboard(&mut self) {
        self.scoreboard = None;
    }
}
