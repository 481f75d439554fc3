// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Evaluate a single expression.
//!
//! The expression comes either inline on the command line or from a file.
//! On success the value is printed to stdout; on failure the error is
//! rendered as a miette report pointing into the source text.

use std::fs;

use camino::Utf8Path;
use miette::{Context, IntoDiagnostic, NamedSource, Result, miette};
use tracing::debug;

/// Evaluate one expression and print its value.
pub fn run(expression: Option<&str>, file: Option<&Utf8Path>) -> Result<()> {
    let (name, source) = read_source(expression, file)?;
    debug!(%name, bytes = source.len(), "Evaluating expression");

    match tally_core::evaluate(&source) {
        Ok(value) => {
            println!("{value}");
            Ok(())
        }
        Err(err) => Err(miette::Report::new(err).with_source_code(NamedSource::new(name, source))),
    }
}

/// Resolves the expression text and a display name for diagnostics.
fn read_source(expression: Option<&str>, file: Option<&Utf8Path>) -> Result<(String, String)> {
    match (expression, file) {
        (Some(expr), None) => Ok(("<eval>".to_string(), expr.to_string())),
        (None, Some(path)) => {
            let source = fs::read_to_string(path)
                .into_diagnostic()
                .wrap_err_with(|| format!("Failed to read '{path}'"))?;
            Ok((path.to_string(), source))
        }
        // clap enforces exactly one of the two; this arm is for callers
        // that bypass argument parsing
        _ => Err(miette!("Provide either an expression or --file")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_source_passes_inline_expression_through() {
        let (name, source) = read_source(Some("1+2;"), None).expect("should resolve");
        assert_eq!(name, "<eval>");
        assert_eq!(source, "1+2;");
    }

    #[test]
    fn read_source_reports_missing_file() {
        let path = Utf8Path::new("/nonexistent/tally-test-expression.tally");
        let result = read_source(None, Some(path));
        assert!(result.is_err());
    }

    #[test]
    fn read_source_rejects_neither_input() {
        assert!(read_source(None, None).is_err());
    }
}
