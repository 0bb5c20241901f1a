use std::fs;

use crate::cli::InitArgs;
use crate::output::ErrorOutput;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, ImageVariantsError, Result};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            ErrorOutput::stderr().print_failure(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(ImageVariantsError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# image-variants configuration file

[scanner]
# Directories scanned recursively for original images
roots = ["public"]

# Extensions treated as original images (matched case-insensitively)
extensions = ["png", "jpg", "jpeg", "gif"]

# Exclude patterns (glob syntax)
exclude = [
    "**/node_modules/**",
]

# Responsive sizes: name = width in pixels.
# Variants are written next to the original as {name}-{size}.webp and {name}-{size}.{ext}
[variants.sizes]
sm = 300
md = 600
lg = 900

[convert]
# WebP quality, 0-100 (default: 85)
quality = 85

# "always" regenerates every variant on each run,
# "missing" only writes variants that do not exist yet
overwrite = "always"
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
