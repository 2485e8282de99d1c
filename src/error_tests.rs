use std::path::PathBuf;

use super::*;

#[test]
fn config_error_displays_message() {
    let err = GateError::Config("missing key".to_string());
    assert_eq!(err.to_string(), "Configuration error: missing key");
}

#[test]
fn root_not_found_names_path() {
    let err = GateError::RootNotFound(PathBuf::from("/no/such/dir"));
    assert!(err.to_string().contains("/no/such/dir"));
}

#[test]
fn io_error_converts() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: GateError = io.into();
    assert!(matches!(err, GateError::Io(_)));
}

#[test]
fn invalid_pattern_names_pattern() {
    let source = globset::Glob::new("[invalid").unwrap_err();
    let err = GateError::InvalidPattern {
        pattern: "[invalid".to_string(),
        source,
    };
    assert!(err.to_string().contains("[invalid"));
}

#[test]
fn toml_error_converts() {
    let parse_err = toml::from_str::<toml::Value>("not = = toml").unwrap_err();
    let err: GateError = parse_err.into();
    assert!(matches!(err, GateError::TomlParse(_)));
}
