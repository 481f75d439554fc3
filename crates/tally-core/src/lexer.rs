// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lexical analysis for tally expressions.
//!
//! This module converts source text into a stream of [`Token`]s. The lexer
//! is hand-written and pull-based: the parser asks for one token at a time
//! via [`Lexer::next_token`].
//!
//! # Design Principles
//!
//! - **Never panic**: malformed input becomes [`TokenKind::Error`] tokens
//! - **Precise spans**: every token carries its exact source location
//! - **Idempotent at the end**: once the input is exhausted, every further
//!   call returns [`TokenKind::Eof`] again
//!
//! # Example
//!
//! ```
//! use tally_core::{Lexer, TokenKind};
//!
//! let tokens: Vec<_> = Lexer::new("1 + 2").collect();
//! assert_eq!(tokens.len(), 3); // 1, +, 2 (EOF excluded from iterator)
//! ```

use std::iter::Peekable;
use std::str::CharIndices;

use ecow::EcoString;

use super::{LexErrorKind, Span, Token, TokenKind};

/// A lexer that tokenizes a tally expression string.
///
/// The lexer produces tokens with their source spans. It implements
/// [`Iterator`] for easy consumption in tests and tools; the parser drives
/// it directly through [`Lexer::next_token`].
///
/// # Faults
///
/// The lexer never fails. An unrecognized character or an oversized number
/// literal produces a [`TokenKind::Error`] token carrying the reason, and
/// lexing continues with the next character. Aborting on the first fault is
/// the parser's job.
pub struct Lexer<'src> {
    /// The source text being lexed.
    source: &'src str,
    /// Character iterator with byte positions.
    chars: Peekable<CharIndices<'src>>,
    /// Current byte position in source.
    position: usize,
}

impl std::fmt::Debug for Lexer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexer")
            .field("position", &self.position)
            .field("remaining", &self.source.get(self.position..).unwrap_or(""))
            .finish()
    }
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source text.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            position: 0,
        }
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    /// Consumes the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let (pos, c) = self.chars.next()?;
        self.position = pos + c.len_utf8();
        Some(c)
    }

    /// Consumes characters while the predicate is true.
    fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.peek_char().is_some_and(&predicate) {
            self.advance();
        }
    }

    /// Returns the current byte position.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "inputs over 4GB are not supported"
    )]
    fn current_position(&self) -> u32 {
        self.position as u32
    }

    /// Creates a span from start to current position.
    fn span_from(&self, start: u32) -> Span {
        Span::new(start, self.current_position())
    }

    /// Extracts source text for a span.
    fn text_for(&self, span: Span) -> &'src str {
        &self.source[span.as_range()]
    }

    /// Skips whitespace between tokens.
    fn skip_whitespace(&mut self) {
        self.advance_while(|c| matches!(c, ' ' | '\t' | '\r' | '\n'));
    }

    /// Lexes the next token.
    ///
    /// At the end of the input this returns a [`TokenKind::Eof`] token with
    /// an empty span, and keeps returning it on every subsequent call.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.current_position();
        let kind = match self.peek_char() {
            None => TokenKind::Eof,
            Some(c) => self.lex_token_kind(c, start),
        };

        Token::new(kind, self.span_from(start))
    }

    /// Lexes a token kind based on the first character.
    fn lex_token_kind(&mut self, c: char, start: u32) -> TokenKind {
        match c {
            '0'..='9' => self.lex_number(start),

            '+' => {
                self.advance();
                TokenKind::Plus
            }
            '*' => {
                self.advance();
                TokenKind::Star
            }
            '(' => {
                self.advance();
                TokenKind::LeftParen
            }
            ')' => {
                self.advance();
                TokenKind::RightParen
            }
            ';' => {
                self.advance();
                TokenKind::Semicolon
            }

            // Anything else is not part of the language
            _ => {
                self.advance();
                TokenKind::Error(LexErrorKind::UnrecognizedCharacter(c))
            }
        }
    }

    /// Lexes a number literal: a maximal run of decimal digits.
    ///
    /// The text is all digits with no sign, so the only way conversion can
    /// fail is the value not fitting in an `i64`. That becomes an error
    /// token rather than a wrapped or truncated value.
    fn lex_number(&mut self, start: u32) -> TokenKind {
        self.advance_while(|c| c.is_ascii_digit());

        let text = self.text_for(self.span_from(start));
        match text.parse::<i64>() {
            Ok(value) => TokenKind::Number(value),
            Err(_) => TokenKind::Error(LexErrorKind::IntegerOverflow(EcoString::from(text))),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.kind().is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

/// Convenience function to lex source into a vector of tokens (excluding EOF).
///
/// For most use cases, prefer using the `Lexer` iterator directly.
#[must_use]
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

/// Convenience function to lex source into a vector of tokens including EOF.
#[must_use]
pub fn lex_with_eof(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let is_eof = token.kind().is_eof();
        tokens.push(token);
        if is_eof {
            break;
        }
    }
    tokens
}
