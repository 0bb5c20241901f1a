use std::path::PathBuf;

use super::*;

#[test]
fn error_display_config() {
    let err = ImageVariantsError::Config("quality out of range".to_string());
    assert_eq!(err.to_string(), "Configuration error: quality out of range");
}

#[test]
fn error_display_scan_root() {
    let err = ImageVariantsError::ScanRoot {
        path: PathBuf::from("public"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
    };
    assert!(err.to_string().contains("public"));
    assert_eq!(err.detail().as_deref(), Some("not found"));
}

#[test]
fn error_display_no_accessible_roots() {
    let err = ImageVariantsError::NoAccessibleRoots { attempted: 3 };
    assert_eq!(
        err.to_string(),
        "No image directory could be scanned (3 configured)"
    );
    assert!(err.suggestion().is_some());
}

#[test]
fn error_type_returns_correct_type() {
    assert_eq!(
        ImageVariantsError::Config("test".to_string()).error_type(),
        "Config"
    );
    assert_eq!(
        ImageVariantsError::Io(std::io::Error::other("test")).error_type(),
        "IO"
    );
    assert_eq!(
        ImageVariantsError::NoAccessibleRoots { attempted: 1 }.error_type(),
        "Scan"
    );
    assert_eq!(
        ImageVariantsError::WebPEncode {
            path: PathBuf::from("a.png"),
            reason: "unsupported".to_string(),
        }
        .error_type(),
        "Codec"
    );
}

#[test]
fn webp_encode_message_and_detail() {
    let err = ImageVariantsError::WebPEncode {
        path: PathBuf::from("img/logo.png"),
        reason: "Unimplemented".to_string(),
    };
    assert!(err.message().contains("img/logo.png"));
    assert_eq!(err.detail().as_deref(), Some("Unimplemented"));
}

#[test]
fn invalid_pattern_detail_comes_from_globset() {
    let source = globset::Glob::new("[invalid").unwrap_err();
    let err = ImageVariantsError::InvalidPattern {
        pattern: "[invalid".to_string(),
        source,
    };
    assert_eq!(err.message(), "invalid glob pattern '[invalid'");
    assert!(err.detail().is_some());
}

#[test]
fn toml_parse_error_has_suggestion() {
    let parse_err = toml::from_str::<toml::Table>("not = [valid").unwrap_err();
    let err = ImageVariantsError::from(parse_err);
    assert_eq!(err.error_type(), "TOML");
    assert!(err.suggestion().is_some());
}
