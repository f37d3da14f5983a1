/// Local storage key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub storage_key: String,
    /// Prefix for chart endpoints. Empty means same origin.
    pub chart_base: String,
    pub log_level: log::Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            storage_key: THEME_STORAGE_KEY.to_string(),
            chart_base: String::new(),
            log_level: log::Level::Info,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self {
            storage_key: THEME_STORAGE_KEY.to_string(),
            chart_base: get_chart_base(),
            log_level: get_log_level(),
        }
    }

    pub fn chart_url(&self, path: &str) -> String {
        format!("{}{}", self.chart_base, path)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

// Browsers have no process environment; values are baked in at build time.
#[cfg(target_arch = "wasm32")]
fn read_var(name: &str) -> Option<String> {
    match name {
        "CHART_BASE_URL" => option_env!("CHART_BASE_URL").map(str::to_string),
        "CLIENT_LOG" => option_env!("CLIENT_LOG").map(str::to_string),
        _ => None,
    }
}

pub fn get_chart_base() -> String {
    match read_var("CHART_BASE_URL") {
        Some(base) => normalize_base(&base),
        None => {
            log::debug!("CHART_BASE_URL not set, requesting charts from the page origin");
            String::new()
        }
    }
}

pub fn get_log_level() -> log::Level {
    read_var("CLIENT_LOG").map(|value| parse_log_level(&value)).unwrap_or(log::Level::Info)
}

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

fn parse_log_level(value: &str) -> log::Level {
    value.trim().parse().unwrap_or_else(|_| {
        log::warn!("CLIENT_LOG={:?} is not a log level, using info", value);
        log::Level::Info
    })
}
