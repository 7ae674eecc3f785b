//! # texasduel CLI Library
//!
//! Terminal front end for the heads-up duel engine.
//!
//! ## Main Entry Point
//!
//! [`run`] parses command-line arguments, dispatches to the subcommand
//! handler and returns the process exit code.
//!
//! ## Example Usage
//!
//! ```
//! use std::io;
//! let args = vec!["texasduel", "eval", "As", "Ks", "Qs", "Js", "10s"];
//! let code = texasduel_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play hands against the computer
//! - `deal`: Deal a single hand for inspection
//! - `eval`: Evaluate 5 to 7 cards
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::{BufRead, Write};

#[macro_use]
mod macros;

pub mod cli;
mod commands;
mod config;
mod error;
mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, TexasDuelCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_eval_command, handle_play_command,
};
use config::CliOverrides;

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "deal", "eval", "cfg"];

/// Main entry point for the CLI application. Interactive input for `play`
/// is read from the process stdin.
///
/// Returns `0` on success and `2` on any error.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, out, err, &mut stdin_lock)
}

/// Like [`run`], with interactive input taken from `stdin`.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let code = texasduel_cli::run_with_input(
///     ["texasduel", "play", "--seed", "3"],
///     &mut out,
///     &mut err,
///     &mut Cursor::new("q\n"),
/// );
/// assert_eq!(code, 0);
/// ```
pub fn run_with_input<I, S>(
    args: I,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match TexasDuelCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(e, out, err),
    };

    let result = match cli.cmd {
        Commands::Play {
            hands,
            seed,
            starting_chips,
            policy,
        } => {
            let overrides = CliOverrides {
                seed,
                starting_chips,
                policy,
            };
            handle_play_command(hands, &overrides, out, err, stdin)
        }
        Commands::Deal { seed, json } => handle_deal_command(seed, json, out),
        Commands::Eval { cards, json } => handle_eval_command(&cards, json, out),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

/// Help and version go to stdout with exit 0; anything else prints the clap
/// error and a command summary to stderr.
fn report_parse_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            if write!(out, "{}", e).is_err() {
                return exit_code::ERROR;
            }
            exit_code::SUCCESS
        }
        _ => {
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Usage: texasduel <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: texasduel --help");
            exit_code::ERROR
        }
    }
}
