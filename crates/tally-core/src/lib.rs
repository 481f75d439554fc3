// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Tally expression evaluator core.
//!
//! This crate evaluates arithmetic expressions over 64-bit integers with
//! `+`, `*`, and parenthesized grouping, terminated by `;`. It is the
//! classic two-stage front end: a hand-written [`Lexer`] turns source text
//! into classified tokens, and a one-token-lookahead [`Parser`] matches the
//! grammar while computing the value. No syntax tree is built; the value of
//! each sub-expression travels up the recursive descent as a return value.
//!
//! # Example
//!
//! ```
//! use tally_core::evaluate;
//!
//! assert_eq!(evaluate("1+2*(4+3);"), Ok(15));
//! ```
//!
//! # Lexical Analysis
//!
//! The [`Lexer`] converts source text into a stream of [`Token`]s, one pull
//! at a time. Each token carries its source location via [`Span`].
//!
//! ```
//! use tally_core::{Lexer, TokenKind};
//!
//! let tokens: Vec<_> = Lexer::new("1 + 2").collect();
//! assert_eq!(tokens.len(), 3); // 1, +, 2
//! ```
//!
//! The lexer never fails: invalid input is converted into
//! [`TokenKind::Error`] tokens that flow through the stream until the
//! parser reports them.
//!
//! # Parsing and Evaluation
//!
//! [`Parser::parse`] evaluates one `;`-terminated expression, with `*`
//! binding tighter than `+` and both folding left to right. The first
//! fault, lexical or syntactic, aborts the parse and is returned as a
//! [`ParseError`] with the span of the offending input.

mod error;
mod lexer;
mod parser;
mod span;
mod token;


pub use error::{LexError, LexErrorKind, ParseError};
pub use lexer::{Lexer, lex, lex_with_eof};
pub use parser::Parser;
pub use span::Span;
pub use token::{Token, TokenKind};

/// Evaluates one `;`-terminated expression string.
///
/// This is the convenience entry point wiring a [`Lexer`] to a [`Parser`];
/// use those directly for anything more involved than string-in, value-out.
///
/// # Examples
///
/// ```
/// use tally_core::evaluate;
///
/// assert_eq!(evaluate("(1+2)*3;"), Ok(9));
/// assert!(evaluate("1+2").is_err()); // missing ';'
/// ```
///
/// # Errors
///
/// Returns the first fault encountered, lexical or syntactic.
pub fn evaluate(source: &str) -> Result<i64, ParseError> {
    Parser::new(Lexer::new(source)).parse()
}
