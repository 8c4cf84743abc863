//! Log configuration.
//!
//! Lambda forwards stdout to CloudWatch: the bunyan format writes one JSON
//! document per line there, the tree format is meant for local replays.

use std::str::FromStr;

use cibot_config::{Config, LoggingConfig};
use thiserror::Error;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_error::ErrorLayer;
use tracing_log::LogTracer;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Layer, Registry};
use tracing_tree::HierarchicalLayer;

/// Directives used when `RUST_LOG` is unset or blank.
pub const DEFAULT_FILTER: &str = "info,aws_config=warn,aws_smithy_runtime=warn,cibot=debug";

const FILTER_ENV: &str = "RUST_LOG";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Could not install log subscriber,\n  caused by: {}", source)]
    SubscriberAlreadySet {
        source: tracing::dispatcher::SetGlobalDefaultError,
    },
    #[error("Could not forward `log` records to tracing,\n  caused by: {}", source)]
    LogBridgeAlreadySet {
        source: tracing::log::SetLoggerError,
    },
    #[error("Invalid log filter `{}`,\n  caused by: {}", filter, source)]
    InvalidFilter {
        filter: String,
        source: tracing_subscriber::filter::ParseError,
    },
}

/// Output format of log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Indented spans, human readable.
    Tree,
    /// Bunyan JSON lines.
    Bunyan,
}

impl LogFormat {
    pub fn from_config(config: &LoggingConfig) -> Self {
        if config.use_bunyan {
            Self::Bunyan
        } else {
            Self::Tree
        }
    }
}

/// Parse filter directives, falling back to [`DEFAULT_FILTER`].
pub fn build_filter(directives: Option<&str>) -> Result<EnvFilter, LoggingError> {
    let filter = match directives.map(str::trim) {
        Some(d) if !d.is_empty() => d,
        _ => DEFAULT_FILTER,
    };

    EnvFilter::from_str(filter).map_err(|e| LoggingError::InvalidFilter {
        filter: filter.to_string(),
        source: e,
    })
}

fn format_layer(format: LogFormat, version: &str) -> Box<dyn Layer<Registry> + Send + Sync> {
    match format {
        LogFormat::Tree => Box::new(
            HierarchicalLayer::new(2)
                .with_targets(true)
                .with_bracketed_fields(true),
        ),
        LogFormat::Bunyan => Box::new(JsonStorageLayer.and_then(BunyanFormattingLayer::new(
            format!("cibot-{version}"),
            std::io::stdout,
        ))),
    }
}

/// Install the global subscriber. Must be called once, before any handler runs.
pub fn configure_logging(config: &Config) -> Result<(), LoggingError> {
    LogTracer::init().map_err(|e| LoggingError::LogBridgeAlreadySet { source: e })?;

    let directives = std::env::var(FILTER_ENV).ok();
    let filter = build_filter(directives.as_deref())?;
    let format = LogFormat::from_config(&config.logging);

    let subscriber = Registry::default()
        .with(format_layer(format, &config.version))
        .with(ErrorLayer::default())
        .with(filter);

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| LoggingError::SubscriberAlreadySet { source: e })
}
