//! Integration tests for `srcset`, `init`, `config` and global flags.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn help_lists_commands() {
    image_variants!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("convert"))
        .stdout(predicate::str::contains("srcset"));
}

#[test]
fn unknown_command_is_a_usage_error() {
    image_variants!().arg("optimize").assert().code(2);
}

#[test]
fn srcset_prints_paths_and_values() {
    let fixture = TestFixture::new();

    image_variants!()
        .current_dir(fixture.path())
        .args(["--no-config", "srcset", "img/hero.jpg"])
        .assert()
        .success()
        .stdout(predicate::str::contains("WebP: img/hero.webp"))
        .stdout(predicate::str::contains(
            "srcset: img/hero-sm.jpg 300w, img/hero-md.jpg 600w, img/hero-lg.jpg 900w",
        ))
        .stdout(predicate::str::contains(
            "srcset (webp): img/hero-sm.webp 300w, img/hero-md.webp 600w, img/hero-lg.webp 900w",
        ));
}

#[test]
fn srcset_rejects_unsupported_file() {
    let fixture = TestFixture::new();

    image_variants!()
        .current_dir(fixture.path())
        .args(["--no-config", "--color", "never", "srcset", "readme.md"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not a supported image"));
}

#[test]
fn init_creates_default_config_file() {
    let fixture = TestFixture::new();

    image_variants!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    assert!(fixture.exists(".image-variants.toml"));
}

#[test]
fn init_fails_if_config_exists() {
    let fixture = TestFixture::new();
    fixture.create_config("# existing\n");

    image_variants!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn init_then_validate_round_trip() {
    let fixture = TestFixture::new();

    image_variants!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .success();

    image_variants!()
        .current_dir(fixture.path())
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn config_validate_reports_semantic_errors() {
    let fixture = TestFixture::new();
    fixture.create_config("[variants.sizes]\nsm = 0\n");

    image_variants!()
        .current_dir(fixture.path())
        .args(["--color", "never", "config", "validate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("positive width"));
}

#[test]
fn config_show_prints_effective_toml() {
    let fixture = TestFixture::new();
    fixture.create_config("[convert]\nquality = 70\n");

    image_variants!()
        .current_dir(fixture.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".image-variants.toml"))
        .stdout(predicate::str::contains("quality = 70"))
        .stdout(predicate::str::contains("[scanner]"));
}
