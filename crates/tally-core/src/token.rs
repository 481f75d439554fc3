// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Token types for tally lexical analysis.
//!
//! This module defines the tokens produced by the lexer. The token set is
//! deliberately small: the grammar has integers, two binary operators,
//! parentheses, and a statement terminator.
//!
//! Each token consists of:
//! - A [`TokenKind`] indicating the type of token
//! - A [`Span`] indicating its location in the source string

use super::{LexErrorKind, Span};

/// The kind of token, not including source location.
///
/// Number literals are converted during lexing, so the parser never touches
/// digit text. Lexical faults travel through the stream as
/// [`TokenKind::Error`] rather than stopping the lexer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// An integer literal, already converted: `42`
    Number(i64),

    /// Addition operator: `+`
    Plus,

    /// Multiplication operator: `*`
    Star,

    /// Left parenthesis: `(`
    LeftParen,

    /// Right parenthesis: `)`
    RightParen,

    /// Statement terminator: `;`
    Semicolon,

    /// End of input
    Eof,

    /// Invalid input (unrecognized character or oversized literal)
    Error(LexErrorKind),
}

impl TokenKind {
    /// Returns `true` if this token is a number literal.
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Returns `true` if this is the end-of-input marker.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::Eof)
    }

    /// Returns `true` if this is an error token.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Plus => write!(f, "+"),
            Self::Star => write!(f, "*"),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
            Self::Semicolon => write!(f, ";"),
            Self::Eof => write!(f, "<eof>"),
            Self::Error(kind) => write!(f, "<error: {kind}>"),
        }
    }
}

/// A token with its source location.
///
/// # Examples
///
/// ```
/// use tally_core::{Span, Token, TokenKind};
///
/// let token = Token::new(TokenKind::Number(42), Span::new(0, 2));
/// assert!(token.kind().is_number());
/// assert_eq!(token.span().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns the kind of this token.
    #[must_use]
    pub const fn kind(&self) -> &TokenKind {
        &self.kind
    }

    /// Consumes the token and returns its kind.
    #[must_use]
    pub fn into_kind(self) -> TokenKind {
        self.kind
    }

    /// Returns the source span of this token.
    #[must_use]
    pub const fn span(&self) -> Span {
        self.span
    }
}
