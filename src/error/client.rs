use thiserror::Error;

/// Failures raised by the browser-facing parts of the client.
///
/// None of these ever reach the page: callers log them and carry on with
/// the theme already applied.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Storage Error: local storage is unavailable")]
    StorageUnavailable,
    #[error("DOM Error: missing element {0}")]
    ElementMissing(String),
    #[error("Fetch Error: {0}")]
    Fetch(String),
    #[error("Decode Error: {0}")]
    Decode(String),
    #[error("DOM Error: {0}")]
    Dom(String),
    #[error("Embed Error: {0}")]
    Embed(String),
    #[error("Route Error: {0}")]
    InvalidRoute(String),
}

impl ClientError {
    pub fn missing(selector: impl Into<String>) -> Self {
        ClientError::ElementMissing(selector.into())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(error: serde_json::Error) -> Self {
        ClientError::Decode(error.to_string())
    }
}

impl From<gloo_net::Error> for ClientError {
    fn from(error: gloo_net::Error) -> Self {
        match error {
            gloo_net::Error::SerdeError(e) => ClientError::Decode(e.to_string()),
            other => ClientError::Fetch(other.to_string()),
        }
    }
}
