// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Interactive read-eval-print loop.
//!
//! Each line is evaluated as one expression. The grammar requires a
//! terminating `;`, but typing one at a prompt is annoying, so the REPL
//! appends it when missing before handing the line to the evaluator.
//!
//! # Usage
//!
//! ```text
//! $ tally repl
//! > 1+2*(4+3)
//! 15
//! > :exit
//! ```
//!
//! Line history persists across sessions in `~/.tally/repl_history`.

use std::fs;
use std::path::PathBuf;

use miette::{IntoDiagnostic, NamedSource, Result};
use rustyline::error::ReadlineError;
use rustyline::history::FileHistory;
use rustyline::{DefaultEditor, Editor};
use tracing::debug;

use crate::paths::tally_dir;

/// Run the interactive REPL until `:exit` or end of input.
pub fn run() -> Result<()> {
    println!("Tally v{}", env!("CARGO_PKG_VERSION"));
    println!("Type :help for available commands, :exit to quit.");
    println!();

    // Set up rustyline editor
    let mut rl: Editor<(), FileHistory> = DefaultEditor::new().into_diagnostic()?;

    // Load history
    let history_file = history_path()?;
    let _ = rl.load_history(&history_file);

    // Main REPL loop
    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                // Add to history
                let _ = rl.add_history_entry(line);

                // Handle special commands
                match line {
                    ":exit" | ":quit" | ":q" => {
                        println!("Goodbye!");
                        break;
                    }
                    ":help" | ":h" | ":?" => {
                        print_help();
                        continue;
                    }
                    _ => {}
                }

                evaluate_line(line);
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C - just print newline and continue
                println!();
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D - exit
                println!("Goodbye!");
                break;
            }
            Err(e) => {
                eprintln!("Readline error: {e}");
                break;
            }
        }
    }

    // Save history
    let _ = rl.save_history(&history_file);

    Ok(())
}

/// Evaluate one REPL line, printing the value or a rendered error.
fn evaluate_line(line: &str) {
    let source = terminated(line);
    debug!(%source, "Evaluating REPL line");

    match tally_core::evaluate(&source) {
        Ok(value) => println!("{value}"),
        Err(err) => {
            let report =
                miette::Report::new(err).with_source_code(NamedSource::new("<repl>", source));
            eprintln!("{report:?}");
        }
    }
}

/// Appends the statement terminator if the line lacks one.
fn terminated(line: &str) -> String {
    if line.ends_with(';') {
        line.to_string()
    } else {
        format!("{line};")
    }
}

/// Path to REPL history file.
fn history_path() -> Result<PathBuf> {
    let dir = tally_dir()?;
    fs::create_dir_all(&dir).into_diagnostic()?;
    Ok(dir.join("repl_history"))
}

/// Print help message.
fn print_help() {
    println!("Tally REPL Commands:");
    println!();
    println!("  :help, :h       Show this help message");
    println!("  :exit, :q       Exit the REPL");
    println!();
    println!("Anything else is evaluated as an arithmetic expression:");
    println!();
    println!("  > 1+2*(4+3)");
    println!("  15");
}
