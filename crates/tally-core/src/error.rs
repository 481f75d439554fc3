// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Error types for the tally evaluator.
//!
//! Errors carry source locations ([`Span`]) for precise diagnostics.
//! They integrate with [`miette`] for beautiful error reporting.
//!
//! There is no recovery: the first fault aborts the parse and reaches the
//! caller as a single [`ParseError`].

// Spurious warnings from miette derive macro expansion
#![allow(unused_assignments)]

use ecow::EcoString;
use miette::Diagnostic;
use thiserror::Error;

use super::Span;

/// A lexical error encountered during tokenization.
///
/// The lexer itself never fails; it marks invalid input with error tokens.
/// The parser converts the first error token it meets into a `LexError`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{kind}")]
#[diagnostic()]
pub struct LexError {
    /// The kind of lexical error.
    #[source]
    pub kind: LexErrorKind,
    /// The source location of the error.
    #[label("here")]
    pub span: Span,
}

impl LexError {
    /// Creates a new lexical error.
    #[must_use]
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Creates an "unrecognized character" error.
    #[must_use]
    pub fn unrecognized_character(c: char, span: Span) -> Self {
        Self::new(LexErrorKind::UnrecognizedCharacter(c), span)
    }

    /// Creates an "integer overflow" error for an oversized literal.
    #[must_use]
    pub fn integer_overflow(literal: impl Into<EcoString>, span: Span) -> Self {
        Self::new(LexErrorKind::IntegerOverflow(literal.into()), span)
    }
}

/// The kind of lexical error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum LexErrorKind {
    /// A character that is not part of the expression language.
    #[error("unrecognized character '{0}'")]
    UnrecognizedCharacter(char),

    /// A number literal too large for a 64-bit integer.
    #[error("integer literal '{0}' is too large")]
    IntegerOverflow(EcoString),
}

/// An error produced while parsing and evaluating an expression.
///
/// Syntax errors carry the description of what the grammar required next to
/// keep expected-vs-actual visible in the message. Running out of input is a
/// distinct variant so its message can say so instead of naming a token.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ParseError {
    /// A lexical fault surfaced through the token stream.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lex(#[from] LexError),

    /// The token stream did not match the grammar.
    #[error("expected {expected}, found '{found}'")]
    #[diagnostic()]
    UnexpectedToken {
        /// What the grammar required at this point.
        expected: EcoString,
        /// The token that was actually there.
        found: EcoString,
        /// Where the unexpected token is.
        #[label("unexpected token")]
        span: Span,
    },

    /// The input ended while the grammar still required more.
    #[error("unexpected end of input, expected {expected}")]
    #[diagnostic()]
    UnexpectedEndOfInput {
        /// What the grammar required at this point.
        expected: EcoString,
        /// The empty span at the end of the source.
        #[label("input ends here")]
        span: Span,
    },

    /// Evaluation overflowed while folding a sub-expression.
    #[error("arithmetic overflow while evaluating this expression")]
    #[diagnostic()]
    Overflow {
        /// The sub-expression whose value does not fit in an `i64`.
        #[label("value does not fit in a 64-bit integer")]
        span: Span,
    },

    /// Parentheses nested deeper than the parser accepts.
    #[error("expression nesting is too deep")]
    #[diagnostic()]
    NestingTooDeep {
        /// The opening parenthesis that exceeded the limit.
        #[label("nesting exceeds the limit here")]
        span: Span,
    },
}

impl ParseError {
    /// Creates an "unexpected token" error.
    #[must_use]
    pub fn unexpected_token(
        expected: impl Into<EcoString>,
        found: impl Into<EcoString>,
        span: Span,
    ) -> Self {
        Self::UnexpectedToken {
            expected: expected.into(),
            found: found.into(),
            span,
        }
    }

    /// Creates an "unexpected end of input" error.
    #[must_use]
    pub fn unexpected_end_of_input(expected: impl Into<EcoString>, span: Span) -> Self {
        Self::UnexpectedEndOfInput {
            expected: expected.into(),
            span,
        }
    }

    /// Creates an evaluation overflow error.
    #[must_use]
    pub fn overflow(span: Span) -> Self {
        Self::Overflow { span }
    }

    /// Creates a "nesting too deep" error.
    #[must_use]
    pub fn nesting_too_deep(span: Span) -> Self {
        Self::NestingTooDeep { span }
    }

    /// Returns the source location of the error.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Lex(err) => err.span,
            Self::UnexpectedToken { span, .. }
            | Self::UnexpectedEndOfInput { span, .. }
            | Self::Overflow { span }
            | Self::NestingTooDeep { span } => *span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lex_error_display() {
        let err = LexError::unrecognized_character('§', Span::new(0, 2));
        assert_eq!(err.to_string(), "unrecognized character '§'");

        let err = LexError::integer_overflow("99999999999999999999", Span::new(0, 20));
        assert_eq!(
            err.to_string(),
            "integer literal '99999999999999999999' is too large"
        );
    }

    #[test]
    fn lex_error_span() {
        let err = LexError::new(LexErrorKind::UnrecognizedCharacter('a'), Span::new(5, 6));
        assert_eq!(err.span.start(), 5);
        assert_eq!(err.span.end(), 6);
    }

    #[test]
    fn parse_error_display() {
        let err = ParseError::unexpected_token("a number or '('", ";", Span::new(2, 3));
        assert_eq!(err.to_string(), "expected a number or '(', found ';'");

        let err = ParseError::unexpected_end_of_input("';'", Span::new(3, 3));
        assert_eq!(err.to_string(), "unexpected end of input, expected ';'");

        let err = ParseError::overflow(Span::new(0, 40));
        assert_eq!(
            err.to_string(),
            "arithmetic overflow while evaluating this expression"
        );

        let err = ParseError::nesting_too_deep(Span::new(10, 11));
        assert_eq!(err.to_string(), "expression nesting is too deep");
    }

    #[test]
    fn parse_error_from_lex_error() {
        let lex = LexError::unrecognized_character('a', Span::new(2, 3));
        let err = ParseError::from(lex.clone());
        assert_eq!(err.to_string(), lex.to_string());
        assert_eq!(err.span(), Span::new(2, 3));
    }

    #[test]
    fn parse_error_span() {
        let err = ParseError::unexpected_token("';'", "3", Span::new(4, 5));
        assert_eq!(err.span(), Span::new(4, 5));

        let err = ParseError::unexpected_end_of_input("a number or '('", Span::new(7, 7));
        assert_eq!(err.span(), Span::new(7, 7));
        assert!(err.span().is_empty());
    }
}
