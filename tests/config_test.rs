use std::io::Write;

use git_devtags::config::{load_config, Config};

#[test]
fn missing_custom_path_is_an_error() {
    let result = load_config(Some("/nonexistent/devtags.toml"));
    assert!(result.is_err());
}

#[test]
fn defaults_match_the_standard_behavior() {
    let config = Config::default();
    assert_eq!(config.remote, "origin");
    assert_eq!(config.keep_releases, 2);
}

#[test]
fn loads_explicit_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "remote = \"upstream\"\nkeep_releases = 3").unwrap();

    let config = load_config(Some(file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.remote, "upstream");
    assert_eq!(config.keep_releases, 3);
}

#[test]
fn partial_config_fills_in_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "remote = \"upstream\"").unwrap();

    let config = load_config(Some(file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.remote, "upstream");
    assert_eq!(config.keep_releases, 2);
}

#[test]
fn zero_keep_releases_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "keep_releases = 0").unwrap();

    let err = load_config(Some(file.path().to_str().unwrap())).unwrap_err();
    assert!(err.to_string().contains("keep_releases"));
}

#[test]
fn malformed_toml_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "remote = ").unwrap();

    assert!(load_config(Some(file.path().to_str().unwrap())).is_err());
}
