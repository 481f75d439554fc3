// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Tally command-line interface.
//!
//! This is the main entry point for the `tally` command.

use clap::{ArgAction, Parser, Subcommand};
use miette::Result;
use tracing_subscriber::EnvFilter;

mod commands;
mod paths;

/// Tally: a tiny arithmetic expression evaluator
#[derive(Debug, Parser)]
#[command(name = "tally")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Increase logging verbosity (-v: debug, -vv+: trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate an expression and print its value
    Eval {
        /// The expression to evaluate, e.g. "1+2*(4+3);"
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        expression: Option<String>,

        /// Read the expression from a file instead
        #[arg(short, long, value_name = "PATH")]
        file: Option<camino::Utf8PathBuf>,
    },

    /// Start an interactive REPL
    Repl,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_directive = directive_for_verbosity(cli.verbose);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Install miette's fancy error handler
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Command::Eval { expression, file } => {
            commands::eval::run(expression.as_deref(), file.as_deref())
        }
        Command::Repl => commands::repl::run(),
    };

    // Exit with appropriate code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("{e:?}");
            std::process::exit(1);
        }
    }
}

fn directive_for_verbosity(v: u8) -> &'static str {
    // Target must match the crate's Rust module path (`tally` for this
    // binary, `tally_core` for the library).
    match v {
        0 => "tally=info,tally_core=info",
        1 => "tally=debug,tally_core=debug",
        _ => "tally=trace,tally_core=trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_defaults() {
        assert_eq!(directive_for_verbosity(0), "tally=info,tally_core=info");
        assert_eq!(directive_for_verbosity(1), "tally=debug,tally_core=debug");
        assert_eq!(directive_for_verbosity(2), "tally=trace,tally_core=trace");
    }

    #[test]
    fn cli_parses_eval_with_expression() {
        let cli = Cli::try_parse_from(["tally", "eval", "1+2;"]).expect("should parse");
        match cli.command {
            Command::Eval { expression, file } => {
                assert_eq!(expression.as_deref(), Some("1+2;"));
                assert!(file.is_none());
            }
            Command::Repl => panic!("expected eval command"),
        }
    }

    #[test]
    fn cli_parses_eval_with_file() {
        let cli = Cli::try_parse_from(["tally", "eval", "--file", "expr.tally"])
            .expect("should parse");
        match cli.command {
            Command::Eval { expression, file } => {
                assert!(expression.is_none());
                assert_eq!(file.as_deref().map(camino::Utf8Path::as_str), Some("expr.tally"));
            }
            Command::Repl => panic!("expected eval command"),
        }
    }

    #[test]
    fn cli_rejects_expression_and_file_together() {
        let result = Cli::try_parse_from(["tally", "eval", "1+2;", "--file", "expr.tally"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_requires_expression_or_file() {
        let result = Cli::try_parse_from(["tally", "eval"]);
        assert!(result.is_err());
    }
}
