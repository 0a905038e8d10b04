//! Tests for layered configuration.

use std::io::Write;

use serial_test::serial;

use crate::config::{ConfigError, OutputFormat, TreewalkConfig};
use crate::error::Error;
use crate::tree::TreeSpec;
use crate::Algorithm;

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_defaults() {
    let config = TreewalkConfig::default();
    assert_eq!(config.algorithm, Algorithm::Bfs);
    assert!(config.display.color);
    assert_eq!(config.display.scale, 1.0);
    assert_eq!(config.display.format, OutputFormat::Text);
    assert_eq!(config.logging.level, "warn");
    assert!(config.trees.bfs.is_none());
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_load_from_file() {
    let file = write_config(
        r#"
algorithm = "dfs"

[display]
color = false
scale = 2.5
format = "json"

[logging]
level = "debug"
"#,
    );

    let config = TreewalkConfig::load_from(file.path()).unwrap();
    assert_eq!(config.algorithm, Algorithm::Dfs);
    assert!(!config.display.color);
    assert_eq!(config.display.scale, 2.5);
    assert_eq!(config.display.format, OutputFormat::Json);
    assert_eq!(config.logging.level, "debug");
}

#[test]
#[serial]
fn test_partial_file_keeps_defaults() {
    let file = write_config("[display]\nscale = 3.0\n");
    let config = TreewalkConfig::load_from(file.path()).unwrap();
    assert_eq!(config.algorithm, Algorithm::Bfs);
    assert!(config.display.color);
    assert_eq!(config.display.scale, 3.0);
}

#[test]
#[serial]
fn test_load_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = TreewalkConfig::load_from(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound(_)));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
#[serial]
fn test_env_overrides_file() {
    let file = write_config("algorithm = \"bfs\"\n[display]\nscale = 1.5\n");

    std::env::set_var("TREEWALK_ALGORITHM", "dfs");
    std::env::set_var("TREEWALK_DISPLAY__SCALE", "4");
    let result = TreewalkConfig::load_from(file.path());
    std::env::remove_var("TREEWALK_ALGORITHM");
    std::env::remove_var("TREEWALK_DISPLAY__SCALE");

    let config = result.unwrap();
    assert_eq!(config.algorithm, Algorithm::Dfs);
    assert_eq!(config.display.scale, 4.0);
}

#[test]
#[serial]
fn test_rejects_non_positive_scale() {
    let file = write_config("[display]\nscale = 0.0\n");
    let err = TreewalkConfig::load_from(file.path()).unwrap_err();
    match err {
        ConfigError::InvalidValue { key, .. } => assert_eq!(key, "display.scale"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
#[serial]
fn test_rejects_unknown_algorithm() {
    let file = write_config("algorithm = \"astar\"\n");
    let err = TreewalkConfig::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Load(_)));
}

#[test]
#[serial]
fn test_tree_override_from_file() {
    let file = write_config(
        r#"
[trees.dfs]
root = 1
nodes = [{ id = 1, children = [2, 3] }, { id = 3, children = [4] }]
"#,
    );

    let config = TreewalkConfig::load_from(file.path()).unwrap();
    let catalog = config.catalog().unwrap();
    assert_eq!(catalog.get(Algorithm::Dfs).node_ids(), &[1, 2, 3, 4]);
    assert_eq!(catalog.get(Algorithm::Bfs).len(), 14);
}

#[test]
fn test_catalog_surfaces_invalid_tree() {
    let mut config = TreewalkConfig::default();
    config.trees.bfs = Some(TreeSpec::new(1).with_node(1, vec![1]));
    assert!(matches!(config.catalog(), Err(Error::RootHasParent(1))));
}

#[test]
fn test_output_format_parse() {
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert!("yaml".parse::<OutputFormat>().is_err());
    assert_eq!(OutputFormat::Json.to_string(), "json");
}

#[test]
fn test_config_error_wraps_into_error() {
    let err: Error = ConfigError::NotFound("x.toml".into()).into();
    assert_eq!(err.to_string(), "Configuration error: Config file not found: x.toml");
}
