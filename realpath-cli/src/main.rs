//! Main entry point for the realpath CLI.
//!
//! Resolves a single PATH to its canonical absolute form and prints it.
//! Exit status is 0 on success, 1 on a usage error, 2 when the path cannot
//! be resolved and 3 when the result cannot be written.

use clap::error::ErrorKind;
use clap::Parser;
use realpath_cli::error::CliError;
use realpath_cli::utils::{program_name, GlobalOptions};
use realpath_cli::Cli;
use std::ffi::OsString;
use std::io;

fn main() {
    let argv: Vec<OsString> = std::env::args_os().collect();
    let program = program_name(argv.first().map(OsString::as_os_str));

    // Help and version go through clap; every other parse failure is a usage error
    let cli = match Cli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => fail(&program, &CliError::Usage),
    };

    let global = GlobalOptions {
        program,
        logger: realpath::init_logger(cli.verbose, cli.quiet),
    };

    let stdout = io::stdout();
    let result = cli.resolve.execute(&global, &mut stdout.lock());

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => fail(&global.program, &e),
    }
}

fn fail(program: &str, err: &CliError) -> ! {
    eprintln!("{}", err.report(program));
    std::process::exit(err.exit_code());
}
