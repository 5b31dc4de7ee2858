//! Tests for loading config files from disk.

use std::path::PathBuf;

use workflowengine_config::{ConfigError, InputSource, OutputFormat, RunConfig};

#[test]
fn test_load_config_file() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("config.json");
  std::fs::write(
    &path,
    r#"{"inputs": ["orders.txt"], "output_format": "compact"}"#,
  )
  .unwrap();

  let config = RunConfig::load(&path).expect("config should load");
  assert_eq!(
    config.inputs,
    vec![InputSource::File(PathBuf::from("orders.txt"))]
  );
  assert_eq!(config.output_format, OutputFormat::Compact);
}

#[test]
fn test_load_missing_file_is_io_error() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("missing.json");

  let result = RunConfig::load(&path);
  assert!(matches!(result, Err(ConfigError::Io { .. })));
}

#[test]
fn test_load_optional_missing_file_gives_defaults() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("missing.json");

  let config = RunConfig::load_optional(&path).unwrap();
  assert_eq!(config, RunConfig::default());
}

#[test]
fn test_load_malformed_file_is_parse_error() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("config.json");
  std::fs::write(&path, "{ not json").unwrap();

  let result = RunConfig::load(&path);
  match result {
    Err(ConfigError::Parse { path: p, .. }) => assert_eq!(p, path),
    other => panic!("expected parse error, got {:?}", other),
  }
}
