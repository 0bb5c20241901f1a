//! Integration tests for the `convert` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn convert_writes_webp_and_responsive_variants() {
    let fixture = TestFixture::new();
    fixture.create_image("public/hero.png", 1200, 800);

    image_variants!()
        .current_dir(fixture.path())
        .args(["--no-config", "--color", "never", "convert"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing:"))
        .stdout(predicate::str::contains("Created:"))
        .stdout(predicate::str::contains("Processed 1 images: 1 converted, 0 failed"));

    assert!(fixture.exists("public/hero.webp"));
    assert_eq!(fixture.dimensions("public/hero-sm.png"), (300, 200));
    assert_eq!(fixture.dimensions("public/hero-md.png"), (600, 400));
    assert_eq!(fixture.dimensions("public/hero-lg.png"), (900, 600));
    assert_eq!(fixture.dimensions("public/hero-md.webp"), (600, 400));
}

#[test]
fn convert_then_check_is_fully_optimized() {
    let fixture = TestFixture::new();
    fixture.create_image("public/a.jpg", 1000, 500);
    fixture.create_rgba_png("public/b.png", 640, 480);

    image_variants!()
        .current_dir(fixture.path())
        .args(["--no-config", "convert"])
        .assert()
        .success();

    image_variants!()
        .current_dir(fixture.path())
        .args(["--no-config", "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total images: 2"))
        .stdout(predicate::str::contains("All images are fully optimized!"));
}

#[test]
fn convert_continues_past_corrupt_image() {
    let fixture = TestFixture::new();
    fixture.create_file("public/broken.png", "definitely not a png");
    fixture.create_image("public/ok.png", 400, 400);

    image_variants!()
        .current_dir(fixture.path())
        .args(["--no-config", "--color", "never", "convert"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 converted, 1 failed"))
        .stderr(predicate::str::contains("Error processing"))
        .stderr(predicate::str::contains("broken.png"));

    assert!(fixture.exists("public/ok.webp"));
    assert!(fixture.exists("public/ok-lg.png"));
    assert!(!fixture.exists("public/broken.webp"));
}

#[test]
fn convert_does_not_upscale_small_images() {
    let fixture = TestFixture::new();
    fixture.create_image("public/icon.png", 200, 100);

    image_variants!()
        .current_dir(fixture.path())
        .args(["--no-config", "convert"])
        .assert()
        .success();

    assert_eq!(fixture.dimensions("public/icon-lg.png"), (200, 100));
}

#[test]
fn convert_incremental_keeps_existing_files() {
    let fixture = TestFixture::new();
    fixture.create_image("public/a.png", 800, 400);
    fixture.create_file("public/a.webp", "existing");

    image_variants!()
        .current_dir(fixture.path())
        .args(["--no-config", "convert", "--incremental"])
        .assert()
        .success()
        .stdout(predicate::str::contains("kept existing: 1"));

    assert_eq!(
        std::fs::read_to_string(fixture.path().join("public/a.webp")).unwrap(),
        "existing"
    );
}

#[test]
fn convert_overwrites_by_default() {
    let fixture = TestFixture::new();
    fixture.create_image("public/a.png", 800, 400);
    fixture.create_file("public/a.webp", "stale");

    image_variants!()
        .current_dir(fixture.path())
        .args(["--no-config", "convert"])
        .assert()
        .success();

    let bytes = std::fs::read(fixture.path().join("public/a.webp")).unwrap();
    assert_ne!(bytes, b"stale");
}

#[test]
fn convert_config_overwrite_missing_is_honoured() {
    let fixture = TestFixture::new();
    fixture.create_config("[convert]\noverwrite = \"missing\"\n");
    fixture.create_image("public/a.png", 800, 400);
    fixture.create_file("public/a-sm.png", "existing");

    image_variants!()
        .current_dir(fixture.path())
        .args(["convert"])
        .assert()
        .success();

    assert_eq!(
        std::fs::read_to_string(fixture.path().join("public/a-sm.png")).unwrap(),
        "existing"
    );
    assert!(fixture.exists("public/a-sm.webp"));
}

#[test]
fn convert_skips_gif() {
    let fixture = TestFixture::new();
    fixture.create_image("public/anim.gif", 64, 64);

    image_variants!()
        .current_dir(fixture.path())
        .args(["--no-config", "--color", "never", "convert"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not converted (GIF): 1"));

    assert!(!fixture.exists("public/anim.webp"));
}

#[test]
fn convert_rejects_out_of_range_quality() {
    let fixture = TestFixture::new();

    image_variants!()
        .current_dir(fixture.path())
        .args(["--no-config", "convert", "--quality", "150"])
        .assert()
        .code(2);
}

#[test]
fn convert_missing_root_exits_with_run_failure() {
    let fixture = TestFixture::new();

    image_variants!()
        .current_dir(fixture.path())
        .args(["--no-config", "convert"])
        .assert()
        .code(1);
}
