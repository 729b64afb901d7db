//! Lox CLI - runs the scanner over a script or an interactive prompt.

mod driver;
mod error;
mod options;

use std::env;
use std::fs;
use std::io;
use std::path::Path;
use std::process::ExitCode;

use lox_lexer::ScanConfig;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing_subscriber::EnvFilter;

use crate::driver::{Driver, RunStatus};
use crate::error::{CliError, EXIT_DATA_ERROR};
use crate::options::{parse_args, Command, USAGE};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> ExitCode {
    init_logging();

    let args = env::args().skip(1);
    match run(args) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

/// Logs go to stderr so the token listing on stdout stays clean.
/// The filter is read from `LOX_LOG`, e.g. `LOX_LOG=lox_lexer=debug`.
fn init_logging() {
    let filter = EnvFilter::try_from_env("LOX_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(args: impl Iterator<Item = String>) -> Result<u8, CliError> {
    let options = parse_args(args)?;
    tracing::debug!(command = ?options.command, policy = ?options.scan.policy, "starting");

    match options.command {
        Command::Help => {
            print_usage();
            Ok(0)
        }
        Command::Version => {
            println!("lox {}", VERSION);
            Ok(0)
        }
        Command::RunFile(path) => run_file(&path, options.scan),
        Command::Prompt => {
            start_repl(options.scan)?;
            Ok(0)
        }
    }
}

fn print_usage() {
    println!(
        r#"{}

Options:
  -h, --help      Show this help message
  -v, --version   Show version
  --fail-fast     Stop scanning at the first lexical error

Examples:
  lox                Start interactive prompt
  lox script.lox     Print the tokens of a script"#,
        USAGE
    );
}

fn run_file(path: &Path, config: ScanConfig) -> Result<u8, CliError> {
    let source = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = source.len(), "read script");

    let mut driver = Driver::new(io::stdout().lock(), io::stderr().lock(), config);
    match driver.run(&source)? {
        RunStatus::Ok => Ok(0),
        RunStatus::LexicalErrors(count) => {
            tracing::debug!(count, "script has lexical errors");
            Ok(EXIT_DATA_ERROR)
        }
    }
}

fn start_repl(config: ScanConfig) -> Result<(), CliError> {
    let mut rl = DefaultEditor::new()?;
    let mut driver = Driver::new(io::stdout(), io::stderr(), config);

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                if line.trim() == "exit" {
                    break;
                }
                if !line.trim().is_empty() {
                    rl.add_history_entry(line.as_str()).ok(); // Ignore history errors
                }
                // Errors in one line do not end the session.
                driver.run(&line)?;
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
            }
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
