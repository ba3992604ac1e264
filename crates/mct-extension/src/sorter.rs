// SPDX-FileCopyrightText: 2026 MCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Priority ordering of extensions within a category.

use std::str::FromStr;

use serde_json::Value;
use strum::{Display, EnumString};

use crate::extension::{Extension, ExtensionGroup};

/// Priority used when an extension declares none (or an unrecognized one).
pub const DEFAULT_PRIORITY: f64 = 0.0;

/// Named priority levels accepted in place of a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum PriorityLevel {
    Fallback,
    Default,
    None,
    Optional,
    Preferred,
    Mandatory,
}

impl PriorityLevel {
    pub fn value(self) -> f64 {
        match self {
            PriorityLevel::Fallback => f64::NEG_INFINITY,
            PriorityLevel::Default => -100.0,
            PriorityLevel::None => 0.0,
            PriorityLevel::Optional => 100.0,
            PriorityLevel::Preferred => 1000.0,
            PriorityLevel::Mandatory => f64::INFINITY,
        }
    }
}

/// Numeric priority of an extension, from its definition's `priority` field.
pub fn priority_of(extension: &Extension) -> f64 {
    match extension.definition.get("priority") {
        None => DEFAULT_PRIORITY,
        Some(Value::Number(n)) => n.as_f64().unwrap_or(DEFAULT_PRIORITY),
        Some(Value::String(name)) => match PriorityLevel::from_str(name) {
            Ok(level) => level.value(),
            Err(_) => unrecognized(extension, name),
        },
        Some(other) => unrecognized(extension, &other.to_string()),
    }
}

fn unrecognized(extension: &Extension, priority: &str) -> f64 {
    tracing::warn!(
        key = extension.key.as_deref().unwrap_or("<none>"),
        "unrecognized priority '{priority}'; defaulting to {DEFAULT_PRIORITY}"
    );
    DEFAULT_PRIORITY
}

/// Sorts by descending priority, keeping declaration order among equals.
pub fn sort_extensions(extensions: Vec<Extension>) -> Vec<Extension> {
    let mut prioritized: Vec<(f64, Extension)> = extensions
        .into_iter()
        .map(|extension| (priority_of(&extension), extension))
        .collect();
    prioritized.sort_by(|a, b| b.0.total_cmp(&a.0));
    prioritized.into_iter().map(|(_, extension)| extension).collect()
}

/// Sorts every category of `group`.
pub fn sort_group(group: ExtensionGroup) -> ExtensionGroup {
    group
        .into_iter()
        .map(|(category, extensions)| (category, sort_extensions(extensions)))
        .collect()
}
