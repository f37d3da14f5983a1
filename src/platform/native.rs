use std::rc::Rc;
use futures::future::{ FutureExt, LocalBoxFuture };

use crate::charts::{ ChartRefresher, ChartSource, ChartSpec, ChartSurface };
use crate::configs::ClientConfig;
use crate::error::ClientError;
use crate::theme::{ DetachedApplier, MemoryStore, NoMediaSupport, PreferenceStore, SystemPreference, ThemeApplier };

pub fn preference_store(config: &ClientConfig) -> Box<dyn PreferenceStore> {
    log::debug!("No local storage for {:?}, theme preference lasts for this session", config.storage_key);
    Box::new(MemoryStore::default())
}

pub fn system_preference() -> Box<dyn SystemPreference> {
    Box::new(NoMediaSupport)
}

pub fn theme_applier() -> Box<dyn ThemeApplier> {
    Box::new(DetachedApplier::default())
}

struct OfflineChartSource;

impl ChartSource for OfflineChartSource {
    fn fetch(&self, path: String) -> LocalBoxFuture<'static, Result<ChartSpec, ClientError>> {
        futures::future::ready(Err(ClientError::Fetch(format!("no network client for {}", path)))).boxed_local()
    }
}

/// Chart embedding needs the browser library, so there is never a container.
struct NoChartSurface;

impl ChartSurface for NoChartSurface {
    fn clear(&self, container: &str) -> Result<(), ClientError> {
        Err(ClientError::missing(format!("#{}", container)))
    }

    fn embed(&self, container: &str, _spec: ChartSpec) -> Result<(), ClientError> {
        Err(ClientError::missing(format!("#{}", container)))
    }
}

pub fn chart_refresher(_config: &ClientConfig) -> ChartRefresher {
    ChartRefresher::new(Rc::new(OfflineChartSource), Rc::new(NoChartSurface))
}

pub fn install_docking() {
    log::debug!("Navbar docking needs a browser window");
}

pub fn scroll_to_anchor(id: &str) {
    log::debug!("Cannot scroll to #{} without a browser window", id);
}
