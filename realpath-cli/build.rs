//! Build script for realpath-cli.
//!
//! Renders the `realpath.1` man page into `OUT_DIR/man` with clap_mangen.
//! The command is rebuilt here rather than imported because a build script
//! cannot depend on the crate it builds.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep in sync with src/cli.rs and src/commands/resolve.rs.
fn build_cli() -> Command {
    Command::new("realpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Print the canonical absolute form of a path")
        .long_about(
            "Resolve PATH by following every symbolic link and removing `.` and `..` \
             segments, then print the absolute result. Exits 1 on a usage error, 2 when \
             PATH cannot be resolved and 3 when the result cannot be written.",
        )
        .override_usage("realpath [OPTIONS] PATH")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Trace resolution steps on stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential stderr output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("path")
                .value_name("PATH")
                .help("Path to resolve")
                .required(true),
        )
}

fn main() -> io::Result<()> {
    let out_dir = std::env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "OUT_DIR is not set"))?;
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("realpath.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
