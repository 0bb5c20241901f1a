use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::LOCAL_CONFIG_NAME;
use crate::scanner::ImageExtension;
use crate::variants::SizeTable;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "image-variants")]
#[command(
    author,
    version,
    about = "Audit and generate WebP and responsive image variants"
)]
#[command(long_about = "Finds raster images under the configured directories, reports which \
    WebP and responsive variants are missing, and generates them.\n\n\
    Exit codes:\n  \
    0 - Run completed (missing variants are findings, not failures)\n  \
    1 - No image directory could be scanned\n  \
    2 - Configuration or usage error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report which images lack WebP or responsive variants
    Check(ScanArgs),

    /// Generate WebP and responsive variants for every image
    Convert(ConvertArgs),

    /// Print variant paths and srcset strings for one image
    Srcset(SrcsetArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

/// Options shared by `check` and `convert`.
#[derive(Parser, Debug, Default)]
pub struct ScanArgs {
    /// Directories to scan (overrides config `scanner.roots`)
    pub roots: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Image extensions to include (comma-separated, e.g., png,jpg)
    #[arg(long, value_delimiter = ',', value_parser = parse_extension)]
    pub ext: Option<Vec<ImageExtension>>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Responsive sizes as name=width pairs (e.g., sm=300,md=600,lg=900)
    #[arg(long)]
    pub sizes: Option<SizeTable>,
}

#[derive(Parser, Debug, Default)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// WebP quality, 0-100 (overrides config `convert.quality`)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub quality: Option<u8>,

    /// Regenerate every variant, even ones already on disk
    #[arg(long, conflicts_with = "incremental")]
    pub force: bool,

    /// Only write variants that do not exist yet
    #[arg(long)]
    pub incremental: bool,
}

#[derive(Parser, Debug)]
pub struct SrcsetArgs {
    /// Path of the original image
    pub image: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Responsive sizes as name=width pairs (overrides config)
    #[arg(long)]
    pub sizes: Option<SizeTable>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax and values
    Validate {
        /// Path to configuration file
        #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
        config: PathBuf,
    },

    /// Display the effective configuration as TOML
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn parse_extension(value: &str) -> Result<ImageExtension, String> {
    ImageExtension::parse(value).ok_or_else(|| {
        format!("unsupported image extension '{value}' (expected png, jpg, jpeg or gif)")
    })
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
