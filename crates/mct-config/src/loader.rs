// SPDX-FileCopyrightText: 2026 MCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./mct.toml` > `~/.config/mct/mct.toml` > `/etc/mct/mct.toml`
//! with environment variable overrides via the `MCT_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::MctConfig;

/// System-wide configuration file.
pub const SYSTEM_CONFIG: &str = "/etc/mct/mct.toml";
/// Local configuration file, relative to the working directory.
pub const LOCAL_CONFIG: &str = "mct.toml";

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/mct/mct.toml`
/// 3. `~/.config/mct/mct.toml`
/// 4. `./mct.toml`
/// 5. `MCT_*` environment variables
pub fn load_config() -> Result<MctConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string over the compiled defaults.
pub fn load_config_from_str(toml_content: &str) -> Result<MctConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(MctConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from one explicit file, with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<MctConfig, figment::Error> {
    tracing::debug!(path = %path.display(), "loading configuration file");
    Figment::new()
        .merge(Serialized::defaults(MctConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the layered Figment before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(MctConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG))
        .merge(env_provider())
}

/// `~/.config/mct/mct.toml`, when a config directory exists.
pub fn user_config_path() -> Option<std::path::PathBuf> {
    dirs::config_dir().map(|d| d.join("mct/mct.toml"))
}

/// Config sections addressable from the environment.
const ENV_SECTIONS: &[&str] = &["log", "bundles", "registrar", "table"];

/// Environment provider mapping `MCT_SECTION_KEY` to `section.key`.
///
/// Matches on known section prefixes rather than splitting on `_`, since
/// keys such as `date_format` contain underscores themselves.
pub fn env_provider() -> Env {
    Env::prefixed("MCT_").map(|key| {
        // Figment hands over the key in its original case.
        let key = key.as_str().to_ascii_lowercase();
        ENV_SECTIONS
            .iter()
            .find_map(|section| {
                let rest = key.strip_prefix(section)?.strip_prefix('_')?;
                Some(format!("{section}.{rest}"))
            })
            .unwrap_or(key)
            .into()
    })
}
