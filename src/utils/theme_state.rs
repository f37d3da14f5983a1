use dioxus::prelude::*;

use crate::charts::ScoreboardContext;
use crate::theme::{ Theme, ToggleController };

/// App-wide handle on the theme controller, shared through context.
#[derive(Clone, Copy)]
pub struct ThemeState {
    controller: Signal<ToggleController>,
}

impl ThemeState {
    pub fn new(controller: Signal<ToggleController>) -> Self {
        Self { controller }
    }

    pub fn theme(&self) -> Theme {
        self.controller.read().theme()
    }

    pub fn is_dark(&self) -> bool {
        self.controller.read().toggle_state()
    }

    pub fn switch(&mut self, checked: bool) {
        let refresh = self.controller.write().on_change(checked);
        if let Some(refresh) = refresh {
            spawn(refresh);
        }
    }

    pub fn attach_scoreboard(&mut self, scoreboard: ScoreboardContext) {
        log::debug!("Scoreboard charts attached for {}", scoreboard.route());
        let load = self.controller.write().attach_scoreboard(scoreboard);
        spawn(load);
    }

    pub fn detach_scoreboard(&mut self) {
        self.controller.write().detach_scoreboard();
    }
}
