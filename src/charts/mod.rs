//! Theme-parameterised scoreboard charts.

mod refresh;
mod route;

pub use refresh::{ ChartRefresh, ChartRefresher, ChartSource, ChartSpec, ChartSurface, ScoreboardContext };
pub use route::{ summary_path, ChartRoute, FIRST_HOUR, HOURLY_CHART_ID, SUMMARY_CHART_ID };
