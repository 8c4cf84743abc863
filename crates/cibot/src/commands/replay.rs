use std::path::PathBuf;

use anyhow::Context;
use async_trait::async_trait;
use clap::Parser;
use serde_json::Value;

use super::{Command, CommandContext};
use crate::{handlers::HandlerKind, Result};

/// Handle one event read from a JSON file
#[derive(Parser)]
pub(crate) struct ReplayCommand {
    /// Handler to run
    #[arg(value_enum)]
    handler: HandlerKind,

    /// Path to an EventBridge event, as JSON
    event_path: PathBuf,
}

#[async_trait]
impl Command for ReplayCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let body = tokio::fs::read_to_string(&self.event_path)
            .await
            .with_context(|| format!("Could not read event file '{}'", self.event_path.display()))?;
        let event: Value = serde_json::from_str(&body)
            .with_context(|| format!("Invalid JSON in '{}'", self.event_path.display()))?;

        let output = self.handler.handle(&ctx.as_core_context(), event).await?;

        writeln!(
            ctx.writer.write().await,
            "{}",
            serde_json::to_string_pretty(&output)?
        )?;

        Ok(())
    }
}
