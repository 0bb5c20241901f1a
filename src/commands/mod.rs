pub mod check;
pub mod config;
pub mod context;
pub mod convert;
pub mod init;
pub mod srcset;

pub use check::{execute_check, run_check, run_check_impl};
pub use config::{format_config_toml, run_config, run_config_show_impl, run_config_validate_impl};
pub use context::{CommandContext, color_choice_to_mode};
pub use convert::{execute_convert, run_convert, run_convert_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use srcset::{format_srcset, run_srcset, run_srcset_impl};
