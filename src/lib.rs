pub mod audit;
pub mod cli;
pub mod commands;
pub mod config;
pub mod convert;
pub mod error;
pub mod output;
pub mod scanner;
pub mod variants;

pub use error::{ImageVariantsError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_RUN_FAILURE: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
