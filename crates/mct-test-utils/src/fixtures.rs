// SPDX-FileCopyrightText: 2026 MCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Object types and models shared across test suites.

use mct_core::types::FEATURE_CREATION;
use mct_core::{Model, ObjectType};
use serde_json::json;

/// A type users can create (`folder`).
pub fn creatable_type() -> ObjectType {
    ObjectType::new("folder").with_feature(FEATURE_CREATION)
}

/// A type without the creation feature (`root`).
pub fn fixed_type() -> ObjectType {
    ObjectType::new("root")
}

/// A telemetry point type inheriting from `telemetry`.
pub fn telemetry_type() -> ObjectType {
    ObjectType::new("generator")
        .with_feature(FEATURE_CREATION)
        .inheriting("telemetry")
}

/// A model named `name` with no configuration.
pub fn named_model(name: &str) -> Model {
    json!({ "name": name })
}

/// A model whose table configuration hides the given column titles.
pub fn model_with_hidden_columns(name: &str, hidden: &[&str]) -> Model {
    let columns: serde_json::Map<String, serde_json::Value> = hidden
        .iter()
        .map(|title| (title.to_string(), json!(false)))
        .collect();
    json!({
        "name": name,
        "configuration": { "table": { "columns": columns } }
    })
}
