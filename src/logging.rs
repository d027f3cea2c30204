//! Tracing subscriber setup.
//!
//! The interactive mode draws on stderr, so it only logs when a file is
//! given. Filtering follows `RUST_LOG`, defaulting to `info`.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::filter::EnvFilter;

/// Where log records go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
    Disabled,
}

fn env_filter() -> EnvFilter {
    EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into())
}

pub fn init(target: LogTarget<'_>) -> Result<()> {
    match target {
        LogTarget::Disabled => Ok(()),
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|err| anyhow::anyhow!(err))
            .context("Failed to install stderr logger"),
        LogTarget::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {:?}", path))?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|err| anyhow::anyhow!(err))
                .context("Failed to install file logger")
        }
    }
}
