#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # realpath
//!
//! Resolve a filesystem path to its canonical absolute form.
//!
//! ## Core Types
//!
//! - [`PathResolver`] and [`ResolvedPath`]: resolution entry point and result
//! - [`Error`] and [`Result`]: the failure taxonomy
//! - [`Logger`] and [`LogLevel`]: stderr diagnostics
//!
//! ## Examples
//!
//! ```no_run
//! use realpath::PathResolver;
//! use std::ffi::OsString;
//!
//! let resolved = PathResolver::new()
//!     .resolve_args(&[OsString::from(".")])
//!     .unwrap();
//! assert!(resolved.as_path().is_absolute());
//! ```

pub mod error;
pub mod logging;
pub mod path;

pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{PathResolver, ResolvedPath};
