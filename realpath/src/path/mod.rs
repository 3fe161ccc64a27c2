//! Canonical path resolution.
//!
//! Canonicalization turns any path that names an existing filesystem entry
//! into its one true absolute spelling:
//!
//! - Relative paths are anchored at the current working directory
//! - Every symbolic link along the way is followed, including chains
//! - `.` and `..` segments are removed
//! - No trailing separator is kept, except for the root itself
//!
//! The heavy lifting is done by the operating system; this module types the
//! result ([`ResolvedPath`]) and the failures ([`crate::Error`]).
//!
//! # Examples
//!
//! ```no_run
//! use realpath::path::PathResolver;
//! use std::path::Path;
//!
//! let resolved = PathResolver::new()
//!     .resolve(Path::new("/etc/../etc/hosts"))
//!     .unwrap();
//! assert_eq!(resolved.as_path(), Path::new("/etc/hosts"));
//! ```

pub mod canonicalize;
pub mod resolver;
pub mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use resolver::PathResolver;
pub use types::ResolvedPath;
