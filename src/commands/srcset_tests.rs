use std::path::PathBuf;

use clap::Parser;

use super::*;
use crate::cli::{Cli, Commands};

fn parse(argv: &[&str]) -> Cli {
    let mut full = vec!["image-variants", "--no-config", "srcset"];
    full.extend_from_slice(argv);
    Cli::parse_from(full)
}

fn run(cli: &Cli) -> Result<String> {
    let Commands::Srcset(args) = &cli.command else {
        panic!("Expected Srcset command");
    };
    run_srcset_impl(args, cli)
}

#[test]
fn format_lists_every_variant() {
    let image = ImageRecord::from_path(PathBuf::from("public/img/hero.png")).unwrap();
    let output = format_srcset(&image, &SizeTable::default());

    assert!(output.contains("Image: public/img/hero.png"));
    assert!(output.contains("WebP: public/img/hero.webp"));
    assert!(output.contains("  sm (300w): public/img/hero-sm.png, public/img/hero-sm.webp"));
    assert!(output.contains("  lg (900w): public/img/hero-lg.png, public/img/hero-lg.webp"));
    assert!(output.contains(
        "srcset: public/img/hero-sm.png 300w, public/img/hero-md.png 600w, public/img/hero-lg.png 900w"
    ));
    assert!(output.contains(
        "srcset (webp): public/img/hero-sm.webp 300w, public/img/hero-md.webp 600w, public/img/hero-lg.webp 900w"
    ));
}

#[test]
fn run_uses_size_override() {
    let output = run(&parse(&["photo.JPG", "--sizes", "xs=120"])).unwrap();

    assert!(output.contains("  xs (120w): photo-xs.JPG, photo-xs.webp"));
    assert!(!output.contains("sm"));
}

#[test]
fn run_rejects_non_image_path() {
    let err = run(&parse(&["notes.txt"])).unwrap_err();
    assert!(err.to_string().contains("not a supported image"));
}

#[test]
fn run_rejects_invalid_size_name() {
    assert!(run(&parse(&["a.png", "--sizes", "bad/name=100"])).is_err());
}
