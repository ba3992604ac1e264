// SPDX-FileCopyrightText: 2026 MCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so a misspelled key is
//! reported at startup instead of silently ignored.

use serde::{Deserialize, Serialize};

/// Top-level MCT configuration. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MctConfig {
    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,

    /// Bundle manifests to load at startup.
    #[serde(default)]
    pub bundles: BundlesConfig,

    /// Extension registrar behavior.
    #[serde(default)]
    pub registrar: RegistrarConfig,

    /// Telemetry table display settings.
    #[serde(default)]
    pub table: TableConfig,
}

impl MctConfig {
    /// Renders the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Bundle manifest locations.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BundlesConfig {
    /// Paths of `bundle.toml` files, loaded in order.
    #[serde(default)]
    pub paths: Vec<String>,
}

/// Extension registrar settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RegistrarConfig {
    /// Register `category[]` as an empty list when extensions depend on a
    /// category nobody provides.
    #[serde(default = "default_true")]
    pub register_empty_dependencies: bool,
}

impl Default for RegistrarConfig {
    fn default() -> Self {
        Self {
            register_empty_dependencies: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Telemetry table settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TableConfig {
    /// strftime-style format for domain (timestamp) columns, rendered in UTC.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
        }
    }
}

/// Default timestamp format: `2026-10-16 09:30:00.250`.
pub fn default_date_format() -> String {
    "%Y-%m-%d %H:%M:%S%.3f".to_string()
}
