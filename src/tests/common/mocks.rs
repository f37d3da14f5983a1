use std::cell::{ Cell, RefCell };
use std::collections::HashMap;
use std::rc::Rc;
use futures::future::{ FutureExt, LocalBoxFuture };
use serde_json::json;

use crate::charts::{ ChartRefresher, ChartRoute, ChartSource, ChartSpec, ChartSurface, ScoreboardContext };
use crate::error::ClientError;
use crate::theme::{
    DetachedApplier,
    FixedPreference,
    KeyValueStorage,
    MemoryStore,
    Theme,
    ToggleControl,
    ToggleController,
};

/// Key/value storage that can be told to refuse reads or writes.
#[derive(Clone, Default)]
pub struct MockStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
    pub fail_reads: Rc<Cell<bool>>,
    pub fail_writes: Rc<Cell<bool>>,
}

impl MockStorage {
    pub fn item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    pub fn insert(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

impl KeyValueStorage for MockStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, ClientError> {
        if self.fail_reads.get() {
            return Err(ClientError::Dom("SecurityError".to_string()));
        }
        Ok(self.item(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), ClientError> {
        if self.fail_writes.get() {
            return Err(ClientError::Dom("QuotaExceededError".to_string()));
        }
        self.insert(key, value);
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct MockControl {
    checked: Rc<Cell<Option<bool>>>,
}

impl MockControl {
    pub fn checked(&self) -> Option<bool> {
        self.checked.get()
    }
}

impl ToggleControl for MockControl {
    fn set_checked(&self, checked: bool) {
        self.checked.set(Some(checked));
    }
}

#[derive(Clone, Default)]
pub struct RecordingSource {
    requested: Rc<RefCell<Vec<String>>>,
    pub fail: bool,
}

impl RecordingSource {
    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

impl ChartSource for RecordingSource {
    fn fetch(&self, path: String) -> LocalBoxFuture<'static, Result<ChartSpec, ClientError>> {
        self.requested.borrow_mut().push(path.clone());
        let result = if self.fail {
            Err(ClientError::Fetch(format!("{} unreachable", path)))
        } else {
            Ok(ChartSpec(json!({ "doc": { "path": path } })))
        };
        futures::future::ready(result).boxed_local()
    }
}

#[derive(Clone, Default)]
pub struct RecordingSurface {
    cleared: Rc<RefCell<Vec<String>>>,
    embedded: Rc<RefCell<Vec<(String, ChartSpec)>>>,
    pub missing: bool,
}

impl RecordingSurface {
    pub fn without_containers() -> Self {
        Self { missing: true, ..Self::default() }
    }

    pub fn cleared(&self) -> Vec<String> {
        self.cleared.borrow().clone()
    }

    pub fn embedded(&self) -> Vec<(String, ChartSpec)> {
        self.embedded.borrow().clone()
    }
}

impl ChartSurface for RecordingSurface {
    fn clear(&self, container: &str) -> Result<(), ClientError> {
        if self.missing {
            return Err(ClientError::missing(format!("#{}", container)));
        }
        self.cleared.borrow_mut().push(container.to_string());
        Ok(())
    }

    fn embed(&self, container: &str, spec: ChartSpec) -> Result<(), ClientError> {
        self.embedded.borrow_mut().push((container.to_string(), spec));
        Ok(())
    }
}

/// Handles on everything a controller under test talks to.
pub struct Harness {
    pub store: MemoryStore,
    pub applier: DetachedApplier,
    pub control: MockControl,
    pub controller: ToggleController,
}

impl Harness {
    pub fn new(store: MemoryStore, system: Theme) -> Self {
        let applier = DetachedApplier::default();
        let control = MockControl::default();
        let controller = ToggleController::init(
            Box::new(store.clone()),
            &FixedPreference(system),
            Box::new(applier.clone())
        ).with_control(Some(Box::new(control.clone())));
        Self { store, applier, control, controller }
    }
}

pub fn scoreboard(
    route: ChartRoute,
    source: &RecordingSource,
    surface: &RecordingSurface
) -> ScoreboardContext {
    let refresher = ChartRefresher::new(Rc::new(source.clone()), Rc::new(surface.clone()));
    ScoreboardContext::new(refresher, route)
}
