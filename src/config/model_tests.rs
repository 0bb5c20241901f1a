use super::*;

#[test]
fn config_default_values() {
    let config = Config::default();

    assert_eq!(config.scanner.roots, vec![PathBuf::from("public")]);
    assert_eq!(config.scanner.extensions.len(), 4);
    assert!(config.scanner.exclude.is_empty());
    assert_eq!(config.variants.sizes, SizeTable::default());
    assert_eq!(config.convert.quality, 85);
    assert_eq!(config.convert.overwrite, OverwritePolicy::Always);
}

#[test]
fn empty_document_uses_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn parse_full_document() {
    let content = r#"
[scanner]
roots = ["public", "assets/img"]
extensions = ["png", "jpg"]
exclude = ["**/favicon*"]

[variants.sizes]
thumb = 150
wide = 1600

[convert]
quality = 70
overwrite = "missing"
"#;

    let config: Config = toml::from_str(content).unwrap();

    assert_eq!(
        config.scanner.roots,
        vec![PathBuf::from("public"), PathBuf::from("assets/img")]
    );
    assert_eq!(
        config.scanner.extensions,
        vec![ImageExtension::Png, ImageExtension::Jpg]
    );
    assert_eq!(config.scanner.exclude, vec!["**/favicon*".to_string()]);
    let sizes: Vec<_> = config.variants.sizes.iter().collect();
    assert_eq!(sizes, vec![("thumb", 150), ("wide", 1600)]);
    assert_eq!(config.convert.quality, 70);
    assert_eq!(config.convert.overwrite, OverwritePolicy::Missing);
}

#[test]
fn unknown_extension_is_rejected() {
    let result: Result<Config, _> = toml::from_str("[scanner]\nextensions = [\"bmp\"]\n");
    assert!(result.is_err());
}

#[test]
fn config_serializes_back_to_equal_value() {
    let config = Config::default();
    let text = toml::to_string_pretty(&config).unwrap();
    let parsed: Config = toml::from_str(&text).unwrap();
    assert_eq!(parsed, config);
}
