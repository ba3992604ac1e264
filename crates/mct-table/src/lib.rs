// SPDX-FileCopyrightText: 2026 MCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Telemetry tables.
//!
//! [`TableConfiguration`] derives columns from telemetry metadata (a `Name`
//! column, then domain columns, then range columns), formats row values,
//! and reads and writes per-object column visibility at
//! `configuration.table.columns`.

pub mod column;
pub mod configuration;
pub mod formatter;
pub mod metadata;

pub use column::{Column, NAME_COLUMN};
pub use configuration::{ColumnConfig, ColumnConfigTracker, TableConfiguration};
pub use formatter::{DefaultFormatter, TelemetryFormatter};
pub use metadata::{TelemetryMetadata, ValueMetadata};
