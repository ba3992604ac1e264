// SPDX-FileCopyrightText: 2026 MCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Column derivation and visibility persistence against mock objects.

use std::sync::Arc;

use mct_core::DomainObject;
use mct_table::{
    Column, ColumnConfig, ColumnConfigTracker, DefaultFormatter, TableConfiguration,
    TelemetryMetadata, ValueMetadata,
};
use mct_test_utils::MockObject;
use mct_test_utils::fixtures::{model_with_hidden_columns, named_model};
use serde_json::json;

fn sine_metadata() -> TelemetryMetadata {
    TelemetryMetadata::new(
        vec![ValueMetadata::named("utc", "Time")],
        vec![ValueMetadata::named("sin", "Sine")],
    )
}

fn table_for(object: Arc<MockObject>) -> TableConfiguration {
    TableConfiguration::new(object, Arc::new(DefaultFormatter::new("%H:%M:%S")))
}

#[test]
fn one_domain_one_range_gives_three_columns() {
    let mut table = table_for(MockObject::new("t", named_model("Table")).shared());
    let columns = table.build_columns(&[sine_metadata()]);
    assert_eq!(
        columns,
        &[
            Column::Name,
            Column::Domain(ValueMetadata::named("utc", "Time")),
            Column::Range(ValueMetadata::named("sin", "Sine")),
        ]
    );
    assert_eq!(table.headers(), vec!["Name", "Time", "Sine"]);
}

#[test]
fn domains_precede_ranges_per_source() {
    let mut table = table_for(MockObject::new("t", named_model("Table")).shared());
    let second = TelemetryMetadata::new(
        vec![ValueMetadata::new("scet")],
        vec![ValueMetadata::new("cos"), ValueMetadata::new("tan")],
    );
    table.build_columns(&[sine_metadata(), second]);
    assert_eq!(
        table.headers(),
        vec!["Name", "Time", "Sine", "scet", "cos", "tan"]
    );
}

#[test]
fn no_metadata_means_no_columns() {
    let mut table = table_for(MockObject::new("t", named_model("Table")).shared());
    assert!(table.build_columns(&[]).is_empty());
    assert!(table.build_columns(&[TelemetryMetadata::default()]).is_empty());
    assert!(table.column_configuration().is_empty());
}

#[test]
fn row_values_are_keyed_by_title() {
    let mut table = table_for(MockObject::new("t", named_model("Table")).shared());
    table.build_columns(&[sine_metadata()]);

    let child = MockObject::new("sine", named_model("Sine Wave"));
    let row = table.row_values(&child, &json!({"utc": 3_723_000, "sin": -0.5}));
    let cells: Vec<(&str, &str)> = row.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
    assert_eq!(
        cells,
        vec![("Name", "Sine Wave"), ("Time", "01:02:03"), ("Sine", "-0.5")]
    );
}

#[test]
fn sources_sharing_titles_keep_their_values() {
    let mut table = table_for(MockObject::new("t", named_model("Table")).shared());
    table.build_columns(&[
        TelemetryMetadata::new(
            vec![ValueMetadata::named("utc", "Time")],
            vec![ValueMetadata::named("sin", "Value")],
        ),
        TelemetryMetadata::new(
            vec![ValueMetadata::named("utc", "Time")],
            vec![ValueMetadata::named("cos", "Value")],
        ),
    ]);
    assert_eq!(table.columns().len(), 5);
    assert_eq!(table.headers(), vec!["Name", "Time", "Value"]);
    assert_eq!(
        table.column_configuration().keys().collect::<Vec<_>>(),
        vec!["Name", "Time", "Value"]
    );

    let child = MockObject::new("sine", named_model("Sine"));
    let row = table.row_values(&child, &json!({"utc": 0, "sin": 0.5}));
    assert_eq!(row["Time"], "00:00:00");
    assert_eq!(row["Value"], "0.5");
    assert_eq!(row.len(), 3);
}

#[test]
fn visibility_defaults_to_true_unless_persisted() {
    let object = MockObject::new("t", model_with_hidden_columns("Table", &["Time"])).shared();
    let mut table = table_for(object);
    table.build_columns(&[sine_metadata()]);

    let config = table.column_configuration();
    assert_eq!(config["Name"], true);
    assert_eq!(config["Time"], false);
    assert_eq!(config["Sine"], true);
}

#[tokio::test]
async fn save_creates_configuration_path() {
    let object = MockObject::new("t", named_model("Table")).shared();
    let mut table = table_for(object.clone());
    table.build_columns(&[sine_metadata()]);

    let mut config = table.column_configuration();
    config.insert("Sine".to_string(), false);
    assert!(table.save_column_configuration(&config).await.unwrap());

    assert_eq!(
        object.model()["configuration"]["table"]["columns"],
        json!({"Name": true, "Time": true, "Sine": false})
    );
    assert_eq!(object.model()["name"], json!("Table"));
    assert_eq!(table.column_configuration()["Sine"], false);
}

#[tokio::test]
async fn tracker_saves_only_changes() {
    let object = MockObject::new("t", named_model("Table")).shared();
    let mut table = table_for(object.clone());
    table.build_columns(&[sine_metadata()]);
    let mut tracker = ColumnConfigTracker::new();

    let config = table.column_configuration();
    assert!(tracker.update(&table, config.clone()).await.unwrap());
    assert!(!tracker.update(&table, config.clone()).await.unwrap());

    // Same entries in another order are not a change.
    let reordered: ColumnConfig = config.iter().rev().map(|(k, v)| (k.clone(), *v)).collect();
    assert!(!tracker.update(&table, reordered).await.unwrap());

    let mut hidden = config;
    hidden.insert("Name".to_string(), false);
    assert!(tracker.update(&table, hidden).await.unwrap());
    assert_eq!(object.mutation_count(), 2);
}

#[tokio::test]
async fn tracker_seeded_from_persisted_state_skips_first_save() {
    let object = MockObject::new("t", model_with_hidden_columns("Table", &["Sine"])).shared();
    let mut table = table_for(object.clone());
    table.build_columns(&[sine_metadata()]);

    let mut tracker = ColumnConfigTracker::starting_from(table.column_configuration());
    assert!(!tracker.update(&table, table.column_configuration()).await.unwrap());
    assert_eq!(object.mutation_count(), 0);
}

#[tokio::test]
async fn failed_save_is_not_recorded() {
    let object = MockObject::new("t", named_model("Table")).read_only().shared();
    let mut table = table_for(object);
    table.build_columns(&[sine_metadata()]);
    let mut tracker = ColumnConfigTracker::new();

    assert!(tracker.update(&table, table.column_configuration()).await.is_err());
    assert!(tracker.last_saved().is_none());
}
