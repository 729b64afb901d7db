//! Command-line option parsing.

use std::path::PathBuf;

use lox_lexer::ScanConfig;

use crate::error::CliError;

pub const USAGE: &str = "Usage: lox [--fail-fast] [script]";

/// What the process was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Version,
    Prompt,
    RunFile(PathBuf),
}

#[derive(Debug, Clone)]
pub struct Options {
    pub command: Command,
    pub scan: ScanConfig,
}

/// Parse arguments, excluding the program name.
pub fn parse_args<I>(args: I) -> Result<Options, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut scan = ScanConfig::default();
    let mut script: Option<PathBuf> = None;

    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => {
                return Ok(Options {
                    command: Command::Help,
                    scan,
                });
            }
            "-v" | "--version" => {
                return Ok(Options {
                    command: Command::Version,
                    scan,
                });
            }
            "--fail-fast" => scan = ScanConfig::fail_fast(),
            arg if arg.starts_with('-') => {
                return Err(CliError::Usage(format!("Unknown option: {}\n{}", arg, USAGE)));
            }
            _ => {
                if script.is_some() {
                    return Err(CliError::Usage(USAGE.to_string()));
                }
                script = Some(PathBuf::from(arg));
            }
        }
    }

    let command = match script {
        Some(path) => Command::RunFile(path),
        None => Command::Prompt,
    };
    Ok(Options { command, scan })
}
