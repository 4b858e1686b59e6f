//! # madcounter
//!
//! A CLI that reports character, word and line statistics for a text file.
//!
//! ## Overview
//!
//! madcounter is built on top of madcounterlib. It runs either one request
//! given on the command line or a batch of requests read from a control file,
//! one request per line.
//!
//! ## Usage
//!
//! ```bash
//! # Word statistics for one file, printed to stdout
//! madcounter -f notes.txt -w
//!
//! # Longest line first, then characters, written to a file
//! madcounter -f notes.txt -o report.txt -Ll -c
//!
//! # Run every line of a control file as its own request
//! madcounter -B jobs.txt
//! ```
//!
//! Sections are printed in the order their flags were given. Errors are
//! printed on stdout as `ERROR: <message>`; a single run exits 1 on error,
//! a batch run always exits 0.
//!
//! Set `RUST_LOG=debug` to trace the analysis passes on stderr.

use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, Command};
use console::style;
use madcounterlib::{run_batch, run_request, MadError, Request};

/// First argument that switches to batch mode
const BATCH_FLAG: &str = "-B";

/// Build the clap Command structure
///
/// Flag tokens are captured verbatim (including `-Lw`/`-Ll`) so their order
/// survives; the request grammar itself lives in `Request::parse`. Help and
/// version are long-only so `-h` and `-V` reach the grammar as invalid flags.
fn build_command() -> Command {
    Command::new("madcounter")
        .version(env!("CARGO_PKG_VERSION"))
        .disable_help_flag(true)
        .disable_version_flag(true)
        .author("Arthur Debert")
        .about("Character, word and line statistics for plain-text files")
        .override_usage(
            "madcounter -f <input file> [-o <output file>] [-c] [-w] [-l] [-Lw] [-Ll]\n       \
             madcounter -B <batch file>",
        )
        .after_help(
            "Analyses:\n  \
             -c    character counts and first positions\n  \
             -w    word frequencies\n  \
             -l    line frequencies\n  \
             -Lw   longest word(s)\n  \
             -Ll   longest line(s)\n\n\
             Sections are printed in the order the flags are given.",
        )
        .arg(
            Arg::new("help")
                .long("help")
                .help("Print help")
                .action(ArgAction::Help),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .help("Print version")
                .action(ArgAction::Version),
        )
        .arg(
            Arg::new("args")
                .help("Request flags, or -B <batch file>")
                .num_args(0..)
                .allow_hyphen_values(true)
                .trailing_var_arg(true),
        )
}

/// Print an error in the `ERROR: <message>` form users and scripts expect
fn report_error<W: Write>(out: &mut W, err: &MadError) -> io::Result<()> {
    if let Some(cause) = std::error::Error::source(err) {
        log::debug!("{err}: {cause}");
    }
    match err {
        MadError::Usage => writeln!(out, "{err}"),
        _ => writeln!(out, "{} {err}", style("ERROR:").red().bold()),
    }
}

/// Batch mode: every problem is reported, none fails the run
fn batch<W: Write>(path: &str, out: &mut W) -> anyhow::Result<bool> {
    match run_batch(Path::new(path), out, report_error::<W>) {
        Ok(summary) => log::info!(
            "{} of {} batch requests succeeded",
            summary.succeeded(),
            summary.requests
        ),
        Err(e) => report_error(out, &e).context("failed to write to stdout")?,
    }
    Ok(true)
}

/// Single-run mode: the first error aborts the run
fn single(args: &[String], out: &mut impl Write) -> anyhow::Result<bool> {
    match Request::parse(args).and_then(|request| run_request(&request, out)) {
        Ok(()) => Ok(true),
        Err(e) => {
            report_error(out, &e).context("failed to write to stdout")?;
            Ok(false)
        }
    }
}

/// Dispatch on the captured arguments; false means exit code 1
fn run(args: &[String]) -> anyhow::Result<bool> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.len() < 2 {
        report_error(&mut out, &MadError::Usage).context("failed to write to stdout")?;
        return Ok(false);
    }

    if args[0] == BATCH_FLAG {
        batch(&args[1], &mut out)
    } else {
        single(args, &mut out)
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let matches = build_command().get_matches();
    let args: Vec<String> = matches
        .get_many::<String>("args")
        .map(|v| v.cloned().collect())
        .unwrap_or_default();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
