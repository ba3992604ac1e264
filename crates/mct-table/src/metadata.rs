// SPDX-FileCopyrightText: 2026 MCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Telemetry metadata: which domain and range values a source produces.

use serde::{Deserialize, Serialize};

/// One domain (e.g. time) or range (e.g. value) a telemetry source reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueMetadata {
    /// Key of the value within a datum.
    pub key: String,
    /// Display name; the column title when present.
    #[serde(default)]
    pub name: Option<String>,
}

impl ValueMetadata {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: None,
        }
    }

    pub fn named(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: Some(name.into()),
        }
    }

    /// Column title: the name, falling back to the key.
    pub fn title(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.key)
    }
}

/// Metadata for one telemetry source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryMetadata {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub domains: Vec<ValueMetadata>,
    #[serde(default)]
    pub ranges: Vec<ValueMetadata>,
}

impl TelemetryMetadata {
    pub fn new(domains: Vec<ValueMetadata>, ranges: Vec<ValueMetadata>) -> Self {
        Self {
            domains,
            ranges,
            ..Self::default()
        }
    }
}
