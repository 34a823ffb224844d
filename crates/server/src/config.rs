// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Server configuration.
//!
//! Configuration comes from an optional TOML file and command-line flags,
//! with flags taking precedence:
//!
//! ```toml
//! bind = "0.0.0.0:8000"
//! seed = true
//!
//! [fields]
//! strict = false
//! ```

use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use issuebox_core::{Error, Result, ServiceConfig};

/// Server configuration loaded from `issuebox.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Address to listen on.
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,
    /// Load the sample issues on startup.
    #[serde(default = "default_seed")]
    pub seed: bool,
    /// Field validation settings.
    #[serde(default)]
    pub fields: FieldsConfig,
}

/// Validation settings for issue fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldsConfig {
    /// Hold status and priority to their documented vocabularies.
    #[serde(default)]
    pub strict: bool,
}

/// Command-line values that override the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub bind: Option<SocketAddr>,
    pub no_seed: bool,
    pub strict: bool,
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8000))
}

fn default_seed() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind: default_bind(),
            seed: default_seed(),
            fields: FieldsConfig::default(),
        }
    }
}

impl Config {
    /// Parses configuration from TOML text.
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }

    /// Loads configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::parse(&text)
    }

    /// Loads the file if given, otherwise starts from defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies command-line overrides on top of this configuration.
    pub fn with_overrides(mut self, overrides: &Overrides) -> Self {
        if let Some(bind) = overrides.bind {
            self.bind = bind;
        }
        if overrides.no_seed {
            self.seed = false;
        }
        if overrides.strict {
            self.fields.strict = true;
        }
        self
    }

    /// Returns the issue service settings.
    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig { strict_fields: self.fields.strict }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
