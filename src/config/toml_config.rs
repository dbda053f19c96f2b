use crate::domain::model::TransferCommand;
use crate::domain::ports::PublishSettings;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_name, validate_non_empty_list, validate_non_empty_string, Validate,
};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_DESCRIPTOR_FILE: &str = "project.clj";
pub const DEFAULT_DESTINATION: &str = "clojars@clojars.org:";
pub const DEFAULT_TRANSFER_PROGRAM: &str = "scp";
pub const DEFAULT_SHELL: &str = "sh";

fn default_artifacts() -> Vec<String> {
    vec!["pom.xml".to_string(), "*.jar".to_string()]
}

/// Publishing settings. Every key is optional in the file; omitted keys fall back
/// to uploading `pom.xml *.jar` to clojars over scp.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PublishConfig {
    pub descriptor_file: String,
    pub artifacts: Vec<String>,
    pub destination: String,
    pub transfer_program: String,
    pub shell: String,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            descriptor_file: DEFAULT_DESCRIPTOR_FILE.to_string(),
            artifacts: default_artifacts(),
            destination: DEFAULT_DESTINATION.to_string(),
            transfer_program: DEFAULT_TRANSFER_PROGRAM.to_string(),
            shell: DEFAULT_SHELL.to_string(),
        }
    }
}

impl PublishConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: PublishConfig = toml::from_str(content)?;
        Ok(config)
    }
}

impl PublishSettings for PublishConfig {
    fn descriptor_file(&self) -> &str {
        &self.descriptor_file
    }

    fn transfer_command(&self) -> TransferCommand {
        let mut args = self.artifacts.clone();
        args.push(self.destination.clone());
        TransferCommand::new(self.transfer_program.clone(), args)
    }
}

impl Validate for PublishConfig {
    fn validate(&self) -> Result<()> {
        validate_file_name("descriptor_file", &self.descriptor_file)?;
        validate_non_empty_list("artifacts", &self.artifacts)?;
        validate_non_empty_string("destination", &self.destination)?;
        validate_non_empty_string("transfer_program", &self.transfer_program)?;
        validate_non_empty_string("shell", &self.shell)?;

        tracing::debug!("✅ Publish configuration validation passed");
        Ok(())
    }
}
