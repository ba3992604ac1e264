// SPDX-FileCopyrightText: 2026 MCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for MCT.
//!
//! TOML configuration with strict key checking (`deny_unknown_fields`), an XDG
//! file hierarchy, `MCT_*` environment overrides, and miette diagnostics with
//! typo suggestions.
//!
//! ```no_run
//! use mct_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("bundles: {:?}", config.bundles.paths);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

use std::path::Path;

pub use diagnostic::{ConfigError, render_errors};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{BundlesConfig, LogConfig, MctConfig, RegistrarConfig, TableConfig};

/// Load configuration from the XDG hierarchy and validate it.
pub fn load_and_validate() -> Result<MctConfig, Vec<ConfigError>> {
    finish(loader::load_config(), collect_toml_sources)
}

/// Load configuration from a TOML string and validate it.
pub fn load_and_validate_str(toml_content: &str) -> Result<MctConfig, Vec<ConfigError>> {
    finish(loader::load_config_from_str(toml_content), || {
        vec![("<inline>".to_string(), toml_content.to_string())]
    })
}

/// Load configuration from one file (plus env overrides) and validate it.
pub fn load_and_validate_path(path: &Path) -> Result<MctConfig, Vec<ConfigError>> {
    finish(loader::load_config_from_path(path), || {
        std::fs::read_to_string(path)
            .map(|content| vec![(path.display().to_string(), content)])
            .unwrap_or_default()
    })
}

/// Validates a loaded config, or turns the figment error into diagnostics.
/// Sources are only read on failure.
fn finish(
    loaded: Result<MctConfig, figment::Error>,
    sources: impl FnOnce() -> Vec<(String, String)>,
) -> Result<MctConfig, Vec<ConfigError>> {
    match loaded {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(err, &sources())),
    }
}

/// Contents of every config file in the hierarchy that exists, for span lookup.
fn collect_toml_sources() -> Vec<(String, String)> {
    let local = std::env::current_dir()
        .map(|d| d.join(loader::LOCAL_CONFIG))
        .unwrap_or_else(|_| loader::LOCAL_CONFIG.into());

    [Some(local), loader::user_config_path(), Some(loader::SYSTEM_CONFIG.into())]
        .into_iter()
        .flatten()
        .filter_map(|path| {
            let content = std::fs::read_to_string(&path).ok()?;
            Some((path.display().to_string(), content))
        })
        .collect()
}
