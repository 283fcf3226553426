// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tracing subscriber setup.

use std::path::Path;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter used when `CCHELL_LOG` is unset.
const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber.
///
/// Logs go to stderr, or to `CCHELL_LOG_FILE` when set. The returned guard
/// flushes the file writer on drop and must live until exit.
pub fn setup_logging() -> anyhow::Result<Option<WorkerGuard>> {
    let filter = build_filter(crate::env::log_filter().as_deref());

    let Some(path) = crate::env::log_file() else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr).without_time())
            .try_init()
            .context("failed to install logger")?;
        return Ok(None);
    };

    let (dir, name) = split_log_path(&path)?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory '{}'", dir.display()))?;
    let file_appender = tracing_appender::rolling::never(dir, name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .try_init()
        .context("failed to install logger")?;
    Ok(Some(guard))
}

/// Filter from `directives`, falling back to the default on bad input.
fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

fn split_log_path(path: &Path) -> anyhow::Result<(&Path, &std::ffi::OsStr)> {
    let name = path
        .file_name()
        .with_context(|| format!("log file '{}' has no file name", path.display()))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    Ok((dir, name))
}
