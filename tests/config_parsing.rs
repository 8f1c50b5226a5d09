//! Integration tests for configuration parsing and validation

mod common;

use common::create_test_config;
use preseed::config::{
    find_config_file_from, parse_config, parse_config_file, validate_config,
};
use preseed::error::ConfigError;
use std::fs;

#[test]
fn test_parse_minimal_config() {
    let yaml = r#"
rules:
  deep-links:
    marker: extractDeepLinks
    dir: intermediates/navigation_json/${variant}/${task}
    file: navigation.json
"#;

    let config = parse_config(yaml).unwrap();
    validate_config(&config).unwrap();

    assert_eq!(config.rules.len(), 1);
    assert_eq!(config.root(), "build");
}

#[test]
fn test_parse_config_from_file() {
    let (_temp_dir, config_path) = create_test_config(
        r#"
root: out
rules:
  deep-links:
    marker: extractDeepLinks
    dir: intermediates/navigation_json/${variant}/${task}
    file: navigation.json
"#,
    );

    let config = parse_config_file(&config_path).unwrap();
    assert_eq!(config.root(), "out");
}

#[test]
fn test_discovery_walks_up_from_subdir() {
    let (temp_dir, config_path) = create_test_config(
        r#"
rules:
  deep-links:
    marker: extractDeepLinks
    dir: intermediates/${variant}
    file: navigation.json
"#,
    );

    let sub_dir = temp_dir.path().join("app/src");
    fs::create_dir_all(&sub_dir).unwrap();

    let found = find_config_file_from(sub_dir).unwrap();
    assert_eq!(found, config_path);
}

#[test]
fn test_yaml_alias_file_name() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let config_path = temp_dir.path().join("preseed.yaml");
    fs::write(
        &config_path,
        r#"
rules:
  deep-links:
    marker: extractDeepLinks
    dir: intermediates/${variant}
    file: navigation.json
"#,
    )
    .unwrap();

    let found = find_config_file_from(temp_dir.path().to_path_buf()).unwrap();
    assert_eq!(found, config_path);
}

#[test]
fn test_validation_rejects_bad_template() {
    let yaml = r#"
rules:
  bad:
    marker: extract
    dir: intermediates/${flavor}
    file: out.json
"#;

    let config = parse_config(yaml).unwrap();
    let result = validate_config(&config);
    assert!(matches!(result, Err(ConfigError::InvalidTemplate { .. })));
}

#[test]
fn test_validation_rejects_file_with_separator() {
    let yaml = r#"
rules:
  bad:
    marker: extract
    dir: intermediates/${variant}
    file: nested/out.json
"#;

    let config = parse_config(yaml).unwrap();
    let result = validate_config(&config);
    assert!(matches!(
        result,
        Err(ConfigError::FileWithSeparator { .. })
    ));
}

#[test]
fn test_parse_rejects_missing_required_fields() {
    let yaml = r#"
rules:
  bad:
    marker: extract
"#;

    assert!(parse_config(yaml).is_err());
}
