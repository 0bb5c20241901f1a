use std::fmt::Write as _;

use crate::cli::{Cli, SrcsetArgs};
use crate::output::ErrorOutput;
use crate::scanner::ImageRecord;
use crate::variants::{SizeTable, SrcsetFormat, srcset, variant_paths};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, ImageVariantsError, Result};

use super::context::{color_choice_to_mode, load_config};

#[must_use]
pub fn run_srcset(args: &SrcsetArgs, cli: &Cli) -> i32 {
    match run_srcset_impl(args, cli) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            ErrorOutput::new(color_choice_to_mode(cli.color)).print_failure(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Resolves the variant names for a single image. The image does not have
/// to exist; only its name is used.
///
/// # Errors
/// Returns an error if the configuration is invalid or the path does not
/// carry a supported image extension.
pub fn run_srcset_impl(args: &SrcsetArgs, cli: &Cli) -> Result<String> {
    let config = load_config(args.config.as_deref(), cli.no_config, cli.verbose)?;
    let sizes = args
        .sizes
        .clone()
        .unwrap_or(config.variants.sizes);
    sizes.validate()?;

    let image = ImageRecord::from_path(args.image.clone()).ok_or_else(|| {
        ImageVariantsError::Config(format!(
            "not a supported image (expected .png, .jpg, .jpeg or .gif): {}",
            args.image.display()
        ))
    })?;
    Ok(format_srcset(&image, &sizes))
}

/// Plain-text listing of every derived path and both `srcset` values.
#[must_use]
pub fn format_srcset(image: &ImageRecord, sizes: &SizeTable) -> String {
    let paths = variant_paths(image, sizes);
    let mut out = String::new();

    let _ = writeln!(out, "Image: {}", image.path.display());
    let _ = writeln!(out, "WebP: {}", paths.webp.display());
    let _ = writeln!(out, "Responsive:");
    for variant in &paths.responsive {
        let _ = writeln!(
            out,
            "  {} ({}w): {}, {}",
            variant.size,
            variant.width,
            variant.original_path.display(),
            variant.webp_path.display()
        );
    }
    let _ = writeln!(
        out,
        "srcset: {}",
        srcset(&image.path, sizes, SrcsetFormat::Original)
    );
    let _ = writeln!(
        out,
        "srcset (webp): {}",
        srcset(&image.path, sizes, SrcsetFormat::WebP)
    );
    out
}

#[cfg(test)]
#[path = "srcset_tests.rs"]
mod tests;
