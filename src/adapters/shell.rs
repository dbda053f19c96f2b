use crate::config::toml_config::DEFAULT_SHELL;
use crate::domain::model::{CommandOutput, TransferCommand};
use crate::domain::ports::CommandRunner;
use crate::utils::error::{PublishError, Result};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

/// Runs the command line through `<shell> -c`, so file patterns are expanded by
/// the shell in the current working directory.
#[derive(Debug, Clone)]
pub struct ShellRunner {
    shell: String,
}

impl ShellRunner {
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new(DEFAULT_SHELL)
    }
}

#[async_trait]
impl CommandRunner for ShellRunner {
    async fn run(&self, command: &TransferCommand) -> Result<CommandOutput> {
        let line = command.command_line();
        tracing::debug!("Spawning {} -c {:?}", self.shell, line);

        // stdin stays attached so the transfer tool can prompt for credentials
        let output = Command::new(&self.shell)
            .arg("-c")
            .arg(&line)
            .stdin(Stdio::inherit())
            .output()
            .await
            .map_err(|source| PublishError::CommandSpawnError {
                command: format!("{} -c {}", self.shell, line),
                source,
            })?;

        let result = CommandOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        if !result.stdout.trim().is_empty() {
            tracing::debug!("{}: {}", command.program, result.stdout.trim_end());
        }
        if !result.stderr.trim().is_empty() {
            tracing::warn!("{}: {}", command.program, result.stderr.trim_end());
        }

        Ok(result)
    }
}
