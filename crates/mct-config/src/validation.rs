// SPDX-FileCopyrightText: 2026 MCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Checks constraints serde attributes cannot express: known log levels,
//! parseable date formats, and well-formed bundle path lists.

use std::collections::HashSet;

use chrono::format::{Item, StrftimeItems};

use crate::diagnostic::ConfigError;
use crate::model::MctConfig;

/// Log levels accepted by `log.level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration.
///
/// Collects every violation instead of stopping at the first one.
pub fn validate_config(config: &MctConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let level = config.log.level.trim();
    if !LOG_LEVELS.contains(&level) {
        errors.push(ConfigError::Validation {
            message: format!(
                "log.level `{level}` is not one of: {}",
                LOG_LEVELS.join(", ")
            ),
        });
    }

    let format = &config.table.date_format;
    if format.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "table.date_format must not be empty".to_string(),
        });
    } else if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        errors.push(ConfigError::Validation {
            message: format!("table.date_format `{format}` is not a valid strftime format"),
        });
    }

    let mut seen = HashSet::new();
    for path in &config.bundles.paths {
        if path.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: "bundles.paths must not contain empty entries".to_string(),
            });
        } else if !seen.insert(path.as_str()) {
            errors.push(ConfigError::Validation {
                message: format!("bundles.paths lists `{path}` more than once"),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
