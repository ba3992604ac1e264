// SPDX-FileCopyrightText: 2026 MCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Table columns and their persisted visibility for one domain object.

use std::sync::Arc;

use indexmap::IndexMap;
use mct_core::types::{ensure_path, lookup_path};
use mct_core::{DomainObject, MctError, Model};
use serde_json::Value;

use crate::column::Column;
use crate::formatter::TelemetryFormatter;
use crate::metadata::TelemetryMetadata;

/// Where column visibility lives in an object's model.
const COLUMNS_PATH: &[&str] = &["configuration", "table", "columns"];

/// Column title to visibility.
pub type ColumnConfig = IndexMap<String, bool>;

/// Columns of a telemetry table shown for `object`.
pub struct TableConfiguration {
    object: Arc<dyn DomainObject>,
    formatter: Arc<dyn TelemetryFormatter>,
    columns: Vec<Column>,
}

impl TableConfiguration {
    pub fn new(object: Arc<dyn DomainObject>, formatter: Arc<dyn TelemetryFormatter>) -> Self {
        Self {
            object,
            formatter,
            columns: Vec::new(),
        }
    }

    /// Rebuilds the columns: each source's domains, then its ranges, with a
    /// `Name` column first when any column exists.
    pub fn build_columns(&mut self, metadata: &[TelemetryMetadata]) -> &[Column] {
        let mut columns: Vec<Column> = metadata
            .iter()
            .flat_map(|m| {
                let domains = m.domains.iter().cloned().map(Column::Domain);
                let ranges = m.ranges.iter().cloned().map(Column::Range);
                domains.chain(ranges)
            })
            .collect();

        if !columns.is_empty() {
            columns.insert(0, Column::Name);
        }
        tracing::debug!(object = self.object.id(), count = columns.len(), "table columns built");
        self.columns = columns;
        &self.columns
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Unique column titles, in order of first appearance. Sources often
    /// share titles such as `Time` and `Value`.
    pub fn headers(&self) -> Vec<&str> {
        let mut headers: Vec<&str> = Vec::with_capacity(self.columns.len());
        for title in self.columns.iter().map(Column::title) {
            if !headers.contains(&title) {
                headers.push(title);
            }
        }
        headers
    }

    /// Formatted values of one datum from `object` (which may be a child of
    /// the table's own object), keyed by column title.
    ///
    /// Where several columns share a title, an empty value never replaces a
    /// non-empty one.
    pub fn row_values(&self, object: &dyn DomainObject, datum: &Value) -> IndexMap<String, String> {
        let mut row: IndexMap<String, String> = IndexMap::with_capacity(self.columns.len());
        for column in &self.columns {
            let value = column.value(object, datum, self.formatter.as_ref());
            match row.get_mut(column.title()) {
                Some(existing) => {
                    if !value.is_empty() {
                        *existing = value;
                    }
                }
                None => {
                    row.insert(column.title().to_string(), value);
                }
            }
        }
        row
    }

    /// Visibility of every current column: the persisted value if the model
    /// has one, else `true`.
    pub fn column_configuration(&self) -> ColumnConfig {
        let model = self.object.model();
        let persisted = lookup_path(&model, COLUMNS_PATH);
        self.headers()
            .into_iter()
            .map(|title| {
                let visible = persisted
                    .and_then(|columns| columns.get(title))
                    .and_then(Value::as_bool)
                    .unwrap_or(true);
                (title.to_string(), visible)
            })
            .collect()
    }

    /// Writes `config` to the model's `configuration.table.columns`,
    /// creating intermediate objects as needed.
    pub async fn save_column_configuration(&self, config: &ColumnConfig) -> Result<bool, MctError> {
        let columns: serde_json::Map<String, Value> = config
            .iter()
            .map(|(title, visible)| (title.clone(), Value::Bool(*visible)))
            .collect();

        self.object
            .mutate(Box::new(move |model: &mut Model| {
                *ensure_path(model, COLUMNS_PATH) = Value::Object(columns);
                true
            }))
            .await
    }
}

/// Persists column configuration only when it differs from the last save.
#[derive(Debug, Default)]
pub struct ColumnConfigTracker {
    last_saved: Option<ColumnConfig>,
}

impl ColumnConfigTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Treats `config` as already saved.
    pub fn starting_from(config: ColumnConfig) -> Self {
        Self {
            last_saved: Some(config),
        }
    }

    /// Saves `config` through `table` unless it equals (key-wise, ignoring
    /// order) what was last saved. Returns `true` if a save happened.
    pub async fn update(
        &mut self,
        table: &TableConfiguration,
        config: ColumnConfig,
    ) -> Result<bool, MctError> {
        if self.last_saved.as_ref() == Some(&config) {
            return Ok(false);
        }
        table.save_column_configuration(&config).await?;
        self.last_saved = Some(config);
        Ok(true)
    }

    pub fn last_saved(&self) -> Option<&ColumnConfig> {
        self.last_saved.as_ref()
    }
}
