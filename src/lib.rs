mod views;
mod utils;
mod routes;
mod configs;
mod error;
pub mod charts;
pub mod nav;
pub mod platform;
pub mod theme;
#[cfg(target_arch = "wasm32")]
pub mod bindings;
#[cfg(test)]
mod tests;

pub use crate::routes::*;
pub use crate::utils::*;
pub use crate::configs::ClientConfig;
pub use crate::error::ClientError;
