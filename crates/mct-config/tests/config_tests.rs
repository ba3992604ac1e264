// SPDX-FileCopyrightText: 2026 MCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for configuration loading and validation.

use figment::Jail;
use mct_config::loader::build_figment;
use mct_config::model::{MctConfig, default_date_format};
use mct_config::{
    ConfigError, load_and_validate, load_and_validate_path, load_and_validate_str,
    load_config_from_str,
};

#[test]
fn empty_toml_uses_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");
    assert_eq!(config, MctConfig::default());
    assert_eq!(config.log.level, "info");
    assert!(config.bundles.paths.is_empty());
    assert!(config.registrar.register_empty_dependencies);
    assert_eq!(config.table.date_format, default_date_format());
}

#[test]
fn parses_every_section() {
    let config = load_config_from_str(
        r#"
[log]
level = "debug"

[bundles]
paths = ["bundles/core/bundle.toml", "bundles/table/bundle.toml"]

[registrar]
register_empty_dependencies = false

[table]
date_format = "%H:%M:%S"
"#,
    )
    .unwrap();

    assert_eq!(config.log.level, "debug");
    assert_eq!(config.bundles.paths.len(), 2);
    assert!(!config.registrar.register_empty_dependencies);
    assert_eq!(config.table.date_format, "%H:%M:%S");
}

#[test]
fn unknown_key_gets_a_suggestion_and_span() {
    let toml = "[table]\ndate_fromat = \"%H\"\n";
    let errors = load_and_validate_str(toml).unwrap_err();
    assert_eq!(errors.len(), 1);

    match &errors[0] {
        ConfigError::UnknownKey {
            key,
            suggestion,
            span,
            ..
        } => {
            assert_eq!(key, "date_fromat");
            assert_eq!(suggestion.as_deref(), Some("date_format"));
            let span = span.expect("span should be located");
            assert_eq!(&toml[span.offset()..span.offset() + span.len()], "date_fromat");
        }
        other => panic!("expected UnknownKey, got {other:?}"),
    }
}

#[test]
fn wrong_type_is_reported() {
    let errors = load_and_validate_str("[registrar]\nregister_empty_dependencies = \"yes\"\n")
        .unwrap_err();
    assert!(matches!(errors[0], ConfigError::InvalidType { .. }));
}

#[test]
fn semantic_errors_surface_after_parsing() {
    let errors = load_and_validate_str("[log]\nlevel = \"chatty\"\n").unwrap_err();
    assert!(matches!(errors[0], ConfigError::Validation { .. }));
}

#[test]
fn env_overrides_file_values() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "mct.toml",
            "[log]\nlevel = \"warn\"\n\n[table]\ndate_format = \"%Y\"\n",
        )?;
        jail.set_env("MCT_TABLE_DATE_FORMAT", "%H:%M");
        jail.set_env("MCT_REGISTRAR_REGISTER_EMPTY_DEPENDENCIES", "false");

        let config: MctConfig = build_figment().extract()?;
        assert_eq!(config.log.level, "warn");
        assert_eq!(config.table.date_format, "%H:%M");
        assert!(!config.registrar.register_empty_dependencies);
        Ok(())
    });
}

#[test]
fn explicit_path_is_validated() {
    Jail::expect_with(|jail| {
        jail.create_file("custom.toml", "[bundles]\npaths = [\"a.toml\", \"a.toml\"]\n")?;
        let errors = load_and_validate_path(std::path::Path::new("custom.toml")).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("more than once"));
        Ok(())
    });
}

#[test]
fn env_log_level_reaches_validated_config() {
    Jail::expect_with(|jail| {
        jail.set_env("MCT_LOG_LEVEL", "debug");
        let config = load_and_validate().expect("env override should load");
        assert_eq!(config.log.level, "debug");
        Ok(())
    });
}
