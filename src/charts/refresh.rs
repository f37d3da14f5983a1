use std::future::Future;
use std::rc::Rc;
use futures::future::{ FutureExt, LocalBoxFuture };
use serde::{ Deserialize, Serialize };

use super::route::{ summary_path, ChartRoute, HOURLY_CHART_ID, SUMMARY_CHART_ID };
use crate::error::ClientError;
use crate::theme::Theme;

/// Chart description produced server-side; handed to the embedding library
/// untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChartSpec(pub serde_json::Value);

/// Requests a chart description from the endpoint at `path`.
pub trait ChartSource {
    fn fetch(&self, path: String) -> LocalBoxFuture<'static, Result<ChartSpec, ClientError>>;
}

/// The named containers charts are rendered into.
pub trait ChartSurface {
    fn clear(&self, container: &str) -> Result<(), ClientError>;
    fn embed(&self, container: &str, spec: ChartSpec) -> Result<(), ClientError>;
}

/// Pending chart reload. Both fetches run concurrently and finish in any
/// order; nothing cancels them.
pub type ChartRefresh = LocalBoxFuture<'static, ()>;

#[derive(Clone)]
pub struct ChartRefresher {
    source: Rc<dyn ChartSource>,
    surface: Rc<dyn ChartSurface>,
}

impl ChartRefresher {
    pub fn new(source: Rc<dyn ChartSource>, surface: Rc<dyn ChartSurface>) -> Self {
        Self { source, surface }
    }

    /// Clears both chart containers and requests both charts for `theme`.
    /// If a container is missing nothing is fetched.
    pub fn refresh(&self, theme: Theme, route: ChartRoute) -> ChartRefresh {
        for container in [HOURLY_CHART_ID, SUMMARY_CHART_ID] {
            if let Err(e) = self.surface.clear(container) {
                log::debug!("Skipping chart refresh: {}", e);
                return futures::future::ready(()).boxed_local();
            }
        }

        let hourly = self.load(HOURLY_CHART_ID, route.hourly_path(theme));
        let summary = self.load(SUMMARY_CHART_ID, summary_path(theme));
        async move {
            futures::join!(hourly, summary);
        }.boxed_local()
    }

    fn load(&self, container: &'static str, path: String) -> impl Future<Output = ()> + 'static {
        log::debug!("Requesting chart {}", path);
        let response = self.source.fetch(path.clone());
        let surface = Rc::clone(&self.surface);
        async move {
            match response.await {
                Ok(spec) => {
                    if let Err(e) = surface.embed(container, spec) {
                        log::error!("Failed to embed chart into #{}: {}", container, e);
                    }
                }
                Err(e) => log::error!("Chart request {} failed: {}", path, e),
            }
        }
    }
}

/// Present only on scoreboard pages. Carries the chart parameters explicitly.
#[derive(Clone)]
pub struct ScoreboardContext {
    refresher: ChartRefresher,
    route: ChartRoute,
}

impl ScoreboardContext {
    pub fn new(refresher: ChartRefresher, route: ChartRoute) -> Self {
        Self { refresher, route }
    }

    pub fn route(&self) -> ChartRoute {
        self.route
    }

    pub fn load(&self, theme: Theme) -> ChartRefresh {
        self.refresher.refresh(theme, self.route)
    }
}
