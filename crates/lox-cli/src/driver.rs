//! Runs one scan unit and presents the result.

use std::io::{self, Write};

use lox_lexer::{format_diagnostic, scan_with, ScanConfig};

/// Outcome of running one unit of source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Ok,
    /// The unit produced this many diagnostics and no token stream.
    LexicalErrors(usize),
}

/// Writes tokens to `out` and diagnostics to `err`.
pub struct Driver<O, E> {
    out: O,
    err: E,
    config: ScanConfig,
}

impl<O: Write, E: Write> Driver<O, E> {
    pub fn new(out: O, err: E, config: ScanConfig) -> Self {
        Self { out, err, config }
    }

    /// Scan `source` and print either its tokens or its diagnostics.
    pub fn run(&mut self, source: &str) -> io::Result<RunStatus> {
        match scan_with(source, &self.config) {
            Ok(tokens) => {
                writeln!(self.out, "Tokens:")?;
                for token in &tokens {
                    writeln!(self.out, "{}", token)?;
                }
                self.out.flush()?;
                Ok(RunStatus::Ok)
            }
            Err(diagnostics) => {
                for diagnostic in &diagnostics {
                    writeln!(self.err, "{}", format_diagnostic(diagnostic))?;
                }
                self.err.flush()?;
                Ok(RunStatus::LexicalErrors(diagnostics.len()))
            }
        }
    }

    #[cfg(test)]
    fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(source: &str, config: ScanConfig) -> (RunStatus, String, String) {
        let mut driver = Driver::new(Vec::new(), Vec::new(), config);
        let status = driver.run(source).unwrap();
        let (out, err) = driver.into_parts();
        (
            status,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_prints_tokens() {
        let (status, out, err) = run("print 1;", ScanConfig::default());
        assert_eq!(status, RunStatus::Ok);
        assert_eq!(out, "Tokens:\nPRINT print nil\nNUMBER 1 1.0\nSEMICOLON ; nil\nEOF  nil\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_reports_every_diagnostic() {
        let (status, out, err) = run("@\n\"open", ScanConfig::default());
        assert_eq!(status, RunStatus::LexicalErrors(2));
        assert!(out.is_empty());
        assert_eq!(
            err,
            "[line 1] Error: Unexpected character '@'.\n[line 2] Error: Unterminated string.\n"
        );
    }

    #[test]
    fn test_fail_fast_reports_first() {
        let (status, _, err) = run("@\n\"open", ScanConfig::fail_fast());
        assert_eq!(status, RunStatus::LexicalErrors(1));
        assert_eq!(err, "[line 1] Error: Unexpected character '@'.\n");
    }

    #[test]
    fn test_units_are_independent() {
        let mut driver = Driver::new(Vec::new(), Vec::new(), ScanConfig::default());
        assert_eq!(driver.run("@").unwrap(), RunStatus::LexicalErrors(1));
        assert_eq!(driver.run("x").unwrap(), RunStatus::Ok);
        let (out, _) = driver.into_parts();
        assert_eq!(String::from_utf8(out).unwrap(), "Tokens:\nIDENTIFIER x nil\nEOF  nil\n");
    }
}
