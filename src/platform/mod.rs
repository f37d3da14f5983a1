//! Browser bindings for the core, with an in-memory stand-in for targets
//! that have no DOM.

#[cfg(target_arch = "wasm32")]
pub mod web;
#[cfg(target_arch = "wasm32")]
pub use web::{ chart_refresher, install_docking, preference_store, scroll_to_anchor, system_preference, theme_applier };

#[cfg(not(target_arch = "wasm32"))]
mod native;
#[cfg(not(target_arch = "wasm32"))]
pub use native::{ chart_refresher, install_docking, preference_store, scroll_to_anchor, system_preference, theme_applier };

use crate::configs::ClientConfig;
use crate::theme::ToggleController;

/// Resolves and applies the page theme. Call before rendering anything that
/// depends on it.
pub fn controller(config: &ClientConfig) -> ToggleController {
    let system = system_preference();
    ToggleController::init(preference_store(config), system.as_ref(), theme_applier())
}
