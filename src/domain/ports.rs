use crate::domain::model::{CommandOutput, TransferCommand};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Process invocation capability. Runs in the caller's current working directory.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, command: &TransferCommand) -> Result<CommandOutput>;
}

pub trait PublishSettings: Send + Sync {
    fn descriptor_file(&self) -> &str;
    fn transfer_command(&self) -> TransferCommand;
}
