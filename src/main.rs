use clap::Parser;

use image_variants::cli::{Cli, Commands};
use image_variants::commands::{run_check, run_config, run_convert, run_init, run_srcset};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Convert(args) => run_convert(args, &cli),
        Commands::Srcset(args) => run_srcset(args, &cli),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}
