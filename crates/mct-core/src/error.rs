// SPDX-FileCopyrightText: 2026 MCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the MCT workspace.

use thiserror::Error;

/// The primary error type shared by the registrar, injector, and object layers.
#[derive(Debug, Error)]
pub enum MctError {
    /// Configuration errors (invalid manifest, bad version string, malformed definition).
    #[error("configuration error: {0}")]
    Config(String),

    /// A provider was requested that the container has never seen.
    #[error("unknown provider: {name}{}", .required_by.as_deref().map(|r| format!(" <- {r}")).unwrap_or_default())]
    UnknownProvider {
        name: String,
        required_by: Option<String>,
    },

    /// Resolution looped back onto a provider that is still being built.
    #[error("circular dependency: {chain}")]
    CircularDependency { chain: String },

    /// A constructor rejected its arguments.
    #[error("failed to construct {name}: {message}")]
    Construction { name: String, message: String },

    /// A resolved instance did not have the requested concrete type.
    #[error("instance {name} is not a {expected}")]
    TypeMismatch { name: String, expected: &'static str },

    /// The domain object does not expose the requested capability.
    #[error("capability `{capability}` is unavailable on {object}")]
    CapabilityUnavailable { object: String, capability: String },

    /// Filesystem errors while reading manifests or configuration.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
