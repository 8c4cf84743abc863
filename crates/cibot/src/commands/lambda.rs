use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;
use clap::Parser;
use lambda_runtime::{service_fn, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use super::{Command, CommandContext};
use crate::{handlers::HandlerKind, Result};

/// Run the Lambda runtime loop for one handler
#[derive(Parser)]
pub(crate) struct LambdaCommand {
    /// Handler to run
    #[arg(value_enum)]
    handler: HandlerKind,
}

#[async_trait]
impl Command for LambdaCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let handler = self.handler;
        let ctx = Arc::new(ctx);

        info!(handler = ?handler, "Starting Lambda runtime");

        let handler_fn = service_fn(move |event: LambdaEvent<Value>| {
            let ctx = ctx.clone();
            async move {
                let request_id = event.context.request_id;
                handler
                    .handle(&ctx.as_core_context(), event.payload)
                    .await
                    .map_err(|e| {
                        error!(request_id = %request_id, error = %e, "Event handling failed");
                        lambda_runtime::Error::from(e)
                    })
            }
        });
        let handler_fn: std::pin::Pin<
            Box<
                dyn std::future::Future<Output = std::result::Result<(), lambda_runtime::Error>>
                    + Send,
            >,
        > = Box::pin(lambda_runtime::run(handler_fn));
        handler_fn.await.map_err(|e| anyhow!(e))
    }
}
