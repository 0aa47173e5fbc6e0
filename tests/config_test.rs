// tests/config_test.rs
use semver_file::config::{load_config, ConfigOverrides, CONFIG_FILE_NAME};
use semver_file::SemanticVersion;
use serial_test::serial;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
initial_version = "1.0.0-rc.1"
file = "ci/version"
bumped_file = "out/version"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let overrides = load_config(Some(temp_file.path().to_str().unwrap()))
        .unwrap()
        .unwrap();
    let config = overrides.resolve().unwrap();
    assert_eq!(
        config.initial_version,
        SemanticVersion::parse("1.0.0-rc.1").unwrap()
    );
    assert_eq!(config.read_path(), Path::new("ci/version"));
    assert_eq!(config.write_path(), Path::new("out/version"));
}

#[test]
fn test_load_fixture() {
    let overrides = load_config(Some("tests/fixtures/semver-file.toml"))
        .expect("Failed to load test config")
        .unwrap();
    let config = overrides.resolve().unwrap();
    assert_eq!(config.initial_version, SemanticVersion::new(0, 1, 0));
    assert_eq!(config.write_path(), Path::new("version/number"));
}

#[test]
fn test_load_invalid_initial_version() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"initial_version = \"one\"\nfile = \"v\"\n")
        .unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(err.to_string().contains("Configuration error"));
}

#[test]
fn test_load_missing_explicit_path_is_error() {
    assert!(load_config(Some("tests/fixtures/does-not-exist.toml")).is_err());
}

#[test]
fn test_cli_overrides_file_values() {
    let from_file = load_config(Some("tests/fixtures/semver-file.toml"))
        .unwrap()
        .unwrap();
    let from_cli = ConfigOverrides {
        bumped_file: Some(PathBuf::from("published/number")),
        ..Default::default()
    };

    let config = from_file.merge(from_cli).resolve().unwrap();
    assert_eq!(config.read_path(), Path::new("version/number"));
    assert_eq!(config.write_path(), Path::new("published/number"));
}

#[test]
#[serial]
fn test_load_from_working_directory() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(CONFIG_FILE_NAME), "file = \"here\"\n").unwrap();

    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let loaded = load_config(None);
    std::env::set_current_dir(previous).unwrap();

    let config = loaded.unwrap().unwrap().resolve().unwrap();
    assert_eq!(config.read_path(), Path::new("here"));
}
