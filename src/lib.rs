pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::ShellRunner;
pub use config::PublishConfig;
pub use core::publisher::Publisher;
pub use domain::model::{CommandOutput, DirectoryOutcome, PublishReport, TransferCommand};
pub use utils::error::{PublishError, Result};
