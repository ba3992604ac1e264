// SPDX-FileCopyrightText: 2026 MCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Column descriptors.

use mct_core::DomainObject;
use serde_json::Value;

use crate::formatter::TelemetryFormatter;
use crate::metadata::ValueMetadata;

/// Title of the synthesized object-name column.
pub const NAME_COLUMN: &str = "Name";

/// One table column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Column {
    /// The name of the object a row came from.
    Name,
    Domain(ValueMetadata),
    Range(ValueMetadata),
}

impl Column {
    pub fn title(&self) -> &str {
        match self {
            Column::Name => NAME_COLUMN,
            Column::Domain(metadata) | Column::Range(metadata) => metadata.title(),
        }
    }

    /// Text for this column in the row produced by `datum` from `object`.
    pub fn value(
        &self,
        object: &dyn DomainObject,
        datum: &Value,
        formatter: &dyn TelemetryFormatter,
    ) -> String {
        match self {
            Column::Name => object
                .model()
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            Column::Domain(metadata) => {
                formatter.format_domain_value(datum.get(&metadata.key).unwrap_or(&Value::Null))
            }
            Column::Range(metadata) => {
                formatter.format_range_value(datum.get(&metadata.key).unwrap_or(&Value::Null))
            }
        }
    }
}
