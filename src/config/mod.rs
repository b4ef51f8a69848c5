//! Configuration: TOML file under the user config directory, CLI overrides on top.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, LoggingConfig, RosterConfig, UiConfig};
