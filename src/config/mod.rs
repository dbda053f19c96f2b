#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, DEFAULT_BASE_DIR};
pub use toml_config::PublishConfig;
