mod repl;

use std::{fs, path::PathBuf, process::ExitCode};

use clap::Parser;
use tally::interpreter::session::Session;
use tracing_subscriber::{EnvFilter, fmt};

use crate::repl::Repl;

/// tally evaluates arithmetic expressions with variables, one `;`-separated
/// batch of statements at a time.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells tally that CONTENTS is a file; each of its lines is run as one
    /// batch.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Logs every statement's tokens, tree and value to stderr. Same as
    /// `RUST_LOG=tally=debug`.
    #[arg(short, long)]
    debug: bool,

    /// Prompt of the interactive shell.
    #[arg(long, default_value = ">>> ")]
    prompt: String,

    /// Loads interactive history from this file and saves it on exit.
    #[arg(long, value_name = "PATH")]
    history: Option<PathBuf>,

    /// Statements to evaluate. Starts the interactive shell when omitted.
    contents: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.debug);

    match args.contents {
        None => match Repl::new(args.prompt, args.history).and_then(|mut repl| repl.run()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            },
        },
        Some(path) if args.file => {
            let script = match fs::read_to_string(&path) {
                Ok(script) => script,
                Err(e) => {
                    eprintln!("Failed to read the input file '{path}': {e}");
                    return ExitCode::FAILURE;
                },
            };
            run_lines(script.lines())
        },
        Some(contents) => run_lines(std::iter::once(contents.as_str())),
    }
}

/// Runs each non-empty line as a batch in one session, stopping at the first
/// error.
fn run_lines<'a>(lines: impl Iterator<Item = &'a str>) -> ExitCode {
    let mut session = Session::new();

    for line in lines.map(str::trim).filter(|line| !line.is_empty()) {
        match session.run(line) {
            Ok(results) => results.iter().for_each(|value| println!("{value}")),
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            },
        }
    }

    ExitCode::SUCCESS
}

/// Installs the log subscriber.
///
/// The filter comes from `RUST_LOG`; `--debug` turns on this crate's debug
/// events regardless. With neither, nothing is logged.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("tally=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"))
    };

    fmt().with_env_filter(filter)
         .with_writer(std::io::stderr)
         .with_target(false)
         .init();
}
