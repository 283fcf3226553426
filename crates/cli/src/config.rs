// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User configuration, read from a TOML file.
//!
//! ```toml
//! [theme]
//! error_color = "#ff5555 bold"
//! context_lines = 3
//!
//! [prompt]
//! echo = false
//! tag_color = "#8be9fd"
//! ```

use std::path::{Path, PathBuf};

use cchell_shell::style::Color;
use cchell_shell::Theme;
use serde::Deserialize;
use thiserror::Error;

/// Errors from loading the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub theme: Theme,
    pub prompt: PromptConfig,
}

/// Settings for correction questions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PromptConfig {
    /// Echo the chosen answer after the question.
    pub echo: bool,
    pub tag_color: Color,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            echo: true,
            tag_color: Color::rgb(38, 139, 210),
        }
    }
}

impl Config {
    /// Parse config text. `path` is only used in errors.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the config file.
    ///
    /// Priority: `explicit` (the `--config` flag) > `CCHELL_CONFIG` >
    /// `<config dir>/cchell/config.toml`. An explicitly named file must
    /// exist; a missing default file gives the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let named = explicit
            .map(Path::to_path_buf)
            .or_else(crate::env::config_file);
        if let Some(path) = named {
            return Self::read(&path);
        }

        let Some(path) = default_path() else {
            tracing::debug!("no config directory, using defaults");
            return Ok(Self::default());
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::read(&path)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content, path)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

/// `<config dir>/cchell/config.toml`
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cchell").join("config.toml"))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
