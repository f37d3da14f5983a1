use std::cell::RefCell;
use std::rc::Rc;
use futures::future::{ FutureExt, LocalBoxFuture };
use gloo_net::http::Request;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{ Document, Element, HtmlElement, HtmlInputElement, Storage, Window };

use crate::charts::{ ChartRefresher, ChartSource, ChartSpec, ChartSurface };
use crate::configs::ClientConfig;
use crate::error::ClientError;
use crate::nav::{ anchor_scroll_top, next_mobile_nav_display, DockChange, DockTracker, DOCKED_CLASS, MOBILE_NAV_ID };
use crate::theme::{
    FallbackStore,
    KeyValueStorage,
    NoMediaSupport,
    PreferenceStore,
    SystemPreference,
    Theme,
    ThemeApplier,
    ToggleControl,
    DARK_SCHEME_QUERY,
    THEME_ATTRIBUTE,
};

pub const THEME_SWITCH_SELECTOR: &str = ".theme-switch input[type=\"checkbox\"]";
const NAVBAR_SELECTOR: &str = ".navbar";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["Bokeh", "embed"], js_name = embed_item)]
    fn bokeh_embed_item(item: &JsValue, target_id: &str) -> Result<JsValue, JsValue>;
}

fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn window() -> Result<Window, ClientError> {
    web_sys::window().ok_or_else(|| ClientError::missing("window"))
}

fn document() -> Result<Document, ClientError> {
    window()?.document().ok_or_else(|| ClientError::missing("document"))
}

/// Vertical position of an element relative to the document, not the
/// viewport.
fn document_top(window: &Window, element: &Element) -> f64 {
    element.get_bounding_client_rect().top() + window.scroll_y().unwrap_or(0.0)
}

/// `localStorage` with an in-memory fallback for private modes, full quotas
/// and disabled storage.
pub type LocalStorageStore = FallbackStore<Storage>;

impl KeyValueStorage for Storage {
    fn get_item(&self, key: &str) -> Result<Option<String>, ClientError> {
        Storage::get_item(self, key).map_err(|e| ClientError::Dom(js_error(e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), ClientError> {
        Storage::set_item(self, key, value).map_err(|e| ClientError::Dom(js_error(e)))
    }
}

pub fn preference_store(config: &ClientConfig) -> Box<dyn PreferenceStore> {
    let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
    Box::new(LocalStorageStore::new(storage, config.storage_key.clone()))
}

pub struct MediaQueryDetector {
    window: Window,
}

impl SystemPreference for MediaQueryDetector {
    fn detect(&self) -> Theme {
        match self.window.match_media(DARK_SCHEME_QUERY) {
            Ok(Some(query)) if query.matches() => Theme::Dark,
            Ok(Some(_)) => Theme::Light,
            _ => NoMediaSupport.detect(),
        }
    }
}

pub fn system_preference() -> Box<dyn SystemPreference> {
    match web_sys::window() {
        Some(window) => Box::new(MediaQueryDetector { window }),
        None => Box::new(NoMediaSupport),
    }
}

/// Sets `data-theme` on `<html>`.
pub struct DocumentApplier;

impl ThemeApplier for DocumentApplier {
    fn apply(&self, theme: Theme) -> Result<(), ClientError> {
        let root = document()?.document_element().ok_or_else(|| ClientError::missing("html"))?;
        if root.get_attribute(THEME_ATTRIBUTE).as_deref() == Some(theme.as_str()) {
            return Ok(());
        }
        root.set_attribute(THEME_ATTRIBUTE, theme.as_str())
            .map_err(|e| ClientError::Dom(js_error(e)))
    }
}

pub fn theme_applier() -> Box<dyn ThemeApplier> {
    Box::new(DocumentApplier)
}

pub struct CheckboxControl {
    input: HtmlInputElement,
}

impl CheckboxControl {
    pub fn find() -> Option<Self> {
        let element = document().ok()?.query_selector(THEME_SWITCH_SELECTOR).ok().flatten()?;
        let input = element.dyn_into::<HtmlInputElement>().ok()?;
        Some(Self { input })
    }

    pub fn input(&self) -> &HtmlInputElement {
        &self.input
    }
}

impl ToggleControl for CheckboxControl {
    fn set_checked(&self, checked: bool) {
        if self.input.checked() != checked {
            self.input.set_checked(checked);
        }
    }
}

pub struct HttpChartSource {
    config: ClientConfig,
}

impl ChartSource for HttpChartSource {
    fn fetch(&self, path: String) -> LocalBoxFuture<'static, Result<ChartSpec, ClientError>> {
        let url = self.config.chart_url(&path);
        async move {
            let response = Request::get(&url).send().await?;
            if !response.ok() {
                return Err(ClientError::Fetch(format!("{} returned {}", url, response.status())));
            }
            Ok(response.json::<ChartSpec>().await?)
        }.boxed_local()
    }
}

pub struct BokehSurface;

impl BokehSurface {
    fn container(&self, id: &str) -> Result<Element, ClientError> {
        document()?.get_element_by_id(id).ok_or_else(|| ClientError::missing(format!("#{}", id)))
    }
}

impl ChartSurface for BokehSurface {
    fn clear(&self, container: &str) -> Result<(), ClientError> {
        self.container(container)?.set_inner_html("");
        Ok(())
    }

    fn embed(&self, container: &str, spec: ChartSpec) -> Result<(), ClientError> {
        self.container(container)?;
        let item = js_sys::JSON::parse(&serde_json::to_string(&spec)?)
            .map_err(|e| ClientError::Decode(js_error(e)))?;
        bokeh_embed_item(&item, container).map_err(|e| ClientError::Embed(js_error(e)))?;
        Ok(())
    }
}

pub fn chart_refresher(config: &ClientConfig) -> ChartRefresher {
    let source = HttpChartSource { config: config.clone() };
    ChartRefresher::new(Rc::new(source), Rc::new(BokehSurface))
}

fn set_docked(body: &HtmlElement, docked: bool) {
    let classes = body.class_list();
    let result = if docked { classes.add_1(DOCKED_CLASS) } else { classes.remove_1(DOCKED_CLASS) };
    if let Err(e) = result {
        log::debug!("Could not update {}: {}", DOCKED_CLASS, js_error(e));
    }
}

fn try_install_docking() -> Result<(), ClientError> {
    let window = window()?;
    let document = document()?;
    let body = document.body().ok_or_else(|| ClientError::missing("body"))?;
    let nav = document
        .query_selector(NAVBAR_SELECTOR)
        .ok()
        .flatten()
        .ok_or_else(|| ClientError::missing(NAVBAR_SELECTOR))?;

    let tracker = Rc::new(RefCell::new(DockTracker::new(document_top(&window, &nav))));

    let on_scroll = {
        let tracker = Rc::clone(&tracker);
        let window = window.clone();
        let body = body.clone();
        Closure::<dyn FnMut()>::new(move || {
            let scroll_top = window.scroll_y().unwrap_or(0.0);
            match tracker.borrow_mut().on_scroll(scroll_top) {
                Some(DockChange::Dock) => set_docked(&body, true),
                Some(DockChange::Undock) => set_docked(&body, false),
                None => {}
            }
        })
    };

    let on_resize = {
        let window = window.clone();
        Closure::<dyn FnMut()>::new(move || {
            set_docked(&body, false);
            let offset = document_top(&window, &nav);
            let scroll_top = window.scroll_y().unwrap_or(0.0);
            let docked = tracker.borrow_mut().on_resize(offset, scroll_top);
            set_docked(&body, docked);
        })
    };

    window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
        .map_err(|e| ClientError::Dom(js_error(e)))?;
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
        .map_err(|e| ClientError::Dom(js_error(e)))?;
    on_scroll.forget();
    on_resize.forget();
    Ok(())
}

/// Docks `.navbar` once the page scrolls past it.
pub fn install_docking() {
    if let Err(e) = try_install_docking() {
        log::debug!("Navbar docking not installed: {}", e);
    }
}

fn try_scroll_to_anchor(id: &str) -> Result<(), ClientError> {
    let window = window()?;
    let target = document()?
        .get_element_by_id(id)
        .ok_or_else(|| ClientError::missing(format!("#{}", id)))?;
    window.scroll_to_with_x_and_y(0.0, anchor_scroll_top(document_top(&window, &target)));
    window.location().set_hash(id).map_err(|e| ClientError::Dom(js_error(e)))
}

pub fn scroll_to_anchor(id: &str) {
    if let Err(e) = try_scroll_to_anchor(id) {
        log::debug!("Anchor scroll skipped: {}", e);
    }
}

pub fn toggle_mobile_nav() {
    let Some(menu) = document()
        .ok()
        .and_then(|d| d.get_element_by_id(MOBILE_NAV_ID))
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
    else {
        log::debug!("No #{} on this page", MOBILE_NAV_ID);
        return;
    };
    let style = menu.style();
    let current = style.get_property_value("display").unwrap_or_default();
    if let Err(e) = style.set_property("display", next_mobile_nav_display(&current)) {
        log::debug!("Could not toggle #{}: {}", MOBILE_NAV_ID, js_error(e));
    }
}
