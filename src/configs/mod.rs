pub mod env_validate;

pub use env_validate::ClientConfig;
