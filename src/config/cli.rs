use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_BASE_DIR: &str = "./target/namespaces";

#[derive(Debug, Clone, Parser)]
#[command(name = "push-to-clojars")]
#[command(about = "Upload packaged namespaces from build output folders to clojars")]
pub struct CliConfig {
    /// Directory whose immediate subdirectories are scanned [default: ./target/namespaces]
    pub base_dir: Option<String>,

    /// Optional TOML file overriding descriptor, artifacts, destination or programs
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,

    /// Print the commands without running them
    #[arg(long)]
    pub dry_run: bool,

    /// Stop with an error when a transfer exits unsuccessfully
    #[arg(long)]
    pub strict: bool,
}

impl CliConfig {
    /// The base directory as given, or the default. Used literally, never validated.
    pub fn base_dir(&self) -> &str {
        self.base_dir.as_deref().unwrap_or(DEFAULT_BASE_DIR)
    }
}
