// SPDX-FileCopyrightText: 2026 MCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Text formatting of domain and range values.

use std::fmt::Write;

use chrono::DateTime;
use serde_json::Value;

/// Renders telemetry values as table text.
pub trait TelemetryFormatter: Send + Sync {
    fn format_domain_value(&self, value: &Value) -> String;
    fn format_range_value(&self, value: &Value) -> String;
}

/// Domain values are epoch milliseconds rendered in UTC; range values are
/// rendered as plain text.
#[derive(Debug, Clone)]
pub struct DefaultFormatter {
    date_format: String,
}

impl DefaultFormatter {
    pub fn new(date_format: impl Into<String>) -> Self {
        Self {
            date_format: date_format.into(),
        }
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }
}

impl Default for DefaultFormatter {
    fn default() -> Self {
        Self::new(mct_config::model::default_date_format())
    }
}

impl TelemetryFormatter for DefaultFormatter {
    fn format_domain_value(&self, value: &Value) -> String {
        let Some(millis) = value.as_f64() else {
            return String::new();
        };
        let Some(time) = DateTime::from_timestamp_millis(millis as i64) else {
            return String::new();
        };

        // chrono reports bad format strings as fmt errors
        let mut out = String::new();
        if write!(out, "{}", time.format(&self.date_format)).is_err() {
            tracing::debug!(format = %self.date_format, "invalid date format");
            return String::new();
        }
        out
    }

    fn format_range_value(&self, value: &Value) -> String {
        match value {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}
