use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use super::*;
use crate::output::ColorMode;
use crate::scanner::ImageExtension;
use crate::variants::SizeTable;

fn quiet_ctx() -> CommandContext {
    CommandContext::new(ColorMode::Never, 0, false)
}

#[test]
fn color_choice_maps_to_mode() {
    assert_eq!(color_choice_to_mode(ColorChoice::Auto), ColorMode::Auto);
    assert_eq!(color_choice_to_mode(ColorChoice::Always), ColorMode::Always);
    assert_eq!(color_choice_to_mode(ColorChoice::Never), ColorMode::Never);
}

#[test]
fn no_config_returns_defaults() {
    let config = load_config(Some(Path::new("does-not-exist.toml")), true, 0).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn explicit_missing_config_is_an_error() {
    let err = load_config(Some(Path::new("does-not-exist.toml")), false, 0).unwrap_err();
    assert!(err.to_string().contains("does-not-exist.toml"));
}

#[test]
fn overrides_replace_roots_extensions_and_sizes() {
    let mut config = Config::default();
    config.scanner.exclude.push("**/icons/**".to_string());

    let args = ScanArgs {
        roots: vec![PathBuf::from("assets")],
        ext: Some(vec![ImageExtension::Png]),
        exclude: vec!["**/tmp/**".to_string()],
        sizes: Some("xs=100".parse::<SizeTable>().unwrap()),
        ..ScanArgs::default()
    };
    apply_scan_overrides(&mut config, &args);

    assert_eq!(config.scanner.roots, vec![PathBuf::from("assets")]);
    assert_eq!(config.scanner.extensions, vec![ImageExtension::Png]);
    assert_eq!(config.scanner.exclude, vec!["**/icons/**", "**/tmp/**"]);
    assert_eq!(config.variants.sizes.width("xs"), Some(100));
    assert_eq!(config.variants.sizes.len(), 1);
}

#[test]
fn empty_overrides_keep_config() {
    let mut config = Config::default();
    apply_scan_overrides(&mut config, &ScanArgs::default());
    assert_eq!(config, Config::default());
}

#[test]
fn scan_images_reports_each_root() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("public");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("a.png"), b"x").unwrap();
    fs::write(root.join("b.JPG"), b"x").unwrap();
    fs::write(root.join("notes.txt"), b"x").unwrap();
    let missing = temp_dir.path().join("missing");

    let mut config = Config::default();
    config.scanner.roots = vec![root.clone(), missing];

    let mut out = Vec::new();
    let outcome = scan_images(&config, &quiet_ctx(), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(outcome.images.len(), 2);
    assert_eq!(outcome.failed_roots(), 1);
    assert!(!outcome.all_roots_failed());
    assert!(text.contains(&format!("Scanning directory: {}...", root.display())));
    assert!(text.contains("Found 2 images"));
}

#[test]
fn scan_images_quiet_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = Config::default();
    config.scanner.roots = vec![temp_dir.path().to_path_buf()];

    let mut out = Vec::new();
    let ctx = CommandContext::new(ColorMode::Never, 0, true);
    scan_images(&config, &ctx, &mut out).unwrap();
    assert!(out.is_empty());
}

#[test]
fn build_scanner_rejects_invalid_glob() {
    let mut config = Config::default();
    config.scanner.exclude.push("[invalid".to_string());
    assert!(build_scanner(&config).is_err());
}

#[test]
fn no_accessible_roots_counts_attempts() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = Config::default();
    config.scanner.roots = vec![temp_dir.path().join("a"), temp_dir.path().join("b")];

    let mut out = Vec::new();
    let outcome = scan_images(&config, &quiet_ctx(), &mut out).unwrap();
    assert!(outcome.all_roots_failed());

    let err = no_accessible_roots(&outcome);
    assert!(err.to_string().contains("2 configured"));
}
