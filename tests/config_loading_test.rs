//! Configuration loading from YAML files and `CASHTRACK_` environment variables.

use std::io::Write;

use cashtrack_client::infrastructure::config::{ConfigError, ConfigLoader};
use tempfile::NamedTempFile;

fn yaml_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("failed to create temp config");
    file.write_all(contents.as_bytes())
        .expect("failed to write temp config");
    file
}

#[test]
fn test_load_from_file_merges_over_defaults() {
    let file = yaml_file(
        r"
api:
  base_url: https://cashtrack.example.ch
  session_token: secret
logging:
  level: debug
",
    );

    temp_env::with_vars_unset(
        ["CASHTRACK_API__BASE_URL", "CASHTRACK_API__TIMEOUT_SECS"],
        || {
            let config = ConfigLoader::load_from_file(file.path()).unwrap();

            assert_eq!(config.api.base_url, "https://cashtrack.example.ch");
            assert_eq!(config.api.session_token.as_deref(), Some("secret"));
            assert_eq!(config.api.timeout_secs, 30);
            assert_eq!(config.api.session_cookie_name, "cashtrack_session");
            assert_eq!(config.logging.level, "debug");
            assert_eq!(config.logging.format, "pretty");
        },
    );
}

#[test]
fn test_environment_overrides_file() {
    let file = yaml_file(
        r"
api:
  base_url: https://cashtrack.example.ch
  timeout_secs: 10
",
    );

    temp_env::with_vars(
        [
            ("CASHTRACK_API__BASE_URL", Some("http://localhost:9000")),
            ("CASHTRACK_API__TIMEOUT_SECS", Some("7")),
        ],
        || {
            let config = ConfigLoader::load_from_file(file.path()).unwrap();

            assert_eq!(config.api.base_url, "http://localhost:9000");
            assert_eq!(config.api.timeout_secs, 7);
        },
    );
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");

    temp_env::with_vars_unset(["CASHTRACK_API__BASE_URL"], || {
        let config = ConfigLoader::load_from_file(&path).unwrap();
        assert_eq!(config.api.base_url, "/");
    });
}

#[test]
fn test_invalid_values_are_rejected() {
    let file = yaml_file(
        r"
logging:
  level: verbose
",
    );

    let err = ConfigLoader::load_from_file(file.path()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::InvalidLogLevel(level)) if level == "verbose"
    ));
}

#[test]
fn test_zero_timeout_from_env_is_rejected() {
    let file = yaml_file("api:\n  base_url: http://localhost:8080\n");

    temp_env::with_var("CASHTRACK_API__TIMEOUT_SECS", Some("0"), || {
        let err = ConfigLoader::load_from_file(file.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::InvalidTimeout(0))
        ));
    });
}
