//! Library exports for realpath-cli.
//!
//! The binary in `main.rs` is a thin wrapper over these modules so that
//! argument handling, reporting and output can be tested in-process.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
