//! Entry points for server-rendered pages that load the client as a plain
//! wasm module instead of mounting the app.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{ Event, HtmlAnchorElement, HtmlInputElement };

use crate::charts::{ ChartRoute, ScoreboardContext };
use crate::configs::ClientConfig;
use crate::nav::anchor_target;
use crate::platform::{ self, web::CheckboxControl };
use crate::theme::ToggleControl;

fn bind(route: Option<ChartRoute>) {
    let config = ClientConfig::from_env();
    let control = CheckboxControl::find();
    let input = control.as_ref().map(|c| c.input().clone());

    let mut controller = platform::controller(&config)
        .with_control(control.map(|c| Box::new(c) as Box<dyn ToggleControl>));
    if let Some(route) = route {
        let scoreboard = ScoreboardContext::new(platform::chart_refresher(&config), route);
        wasm_bindgen_futures::spawn_local(controller.attach_scoreboard(scoreboard));
    }

    let Some(input) = input else {
        return;
    };
    let controller = Rc::new(RefCell::new(controller));
    let on_change = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let checked = event
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.checked())
            .unwrap_or(false);
        let refresh = controller.borrow_mut().on_change(checked);
        if let Some(refresh) = refresh {
            wasm_bindgen_futures::spawn_local(refresh);
        }
    });
    if let Err(e) = input.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref()) {
        log::debug!("Theme switch listener not attached: {:?}", e);
        return;
    }
    on_change.forget();
}

/// Applies the stored or system theme and wires the theme switch, if the
/// page has one.
#[wasm_bindgen]
pub fn bind_theme_switch() {
    bind(None);
}

/// Same as [`bind_theme_switch`], and reloads the scoreboard charts for the
/// given round and hour whenever the theme changes.
#[wasm_bindgen]
pub fn bind_scoreboard_theme_switch(round: u32, hour: u32) {
    bind(Some(ChartRoute::new(round, hour)));
}

fn bind_anchor(anchor: HtmlAnchorElement) {
    let hash = anchor.hash();
    let Some(id) = anchor_target(&hash).map(str::to_string) else {
        return;
    };
    let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();
        platform::scroll_to_anchor(&id);
    });
    if anchor.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()).is_ok() {
        on_click.forget();
    }
}

/// Navbar docking plus smooth scrolling for every in-page link.
#[wasm_bindgen]
pub fn bind_navbar() {
    platform::install_docking();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(links) = document.query_selector_all("a[href^=\"#\"]") else {
        return;
    };
    for index in 0..links.length() {
        let anchor = links
            .item(index)
            .and_then(|node| node.dyn_into::<HtmlAnchorElement>().ok());
        if let Some(anchor) = anchor {
            bind_anchor(anchor);
        }
    }
}

#[wasm_bindgen]
pub fn toggle_mobile_nav() {
    platform::web::toggle_mobile_nav();
}
