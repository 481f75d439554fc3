// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Recursive descent parser and evaluator for tally expressions.
//!
//! The parser consumes tokens straight from a [`Lexer`] with one token of
//! lookahead and computes the value of the expression as it goes. There is
//! no syntax tree: each grammar procedure returns the value of the
//! sub-expression it matched (together with its source span), and binary
//! operators fold those values left to right.
//!
//! # Grammar
//!
//! ```text
//! expr   → term ( '+' term )*
//! term   → factor ( '*' factor )*
//! factor → '(' expr ')' | Number
//! ```
//!
//! One precedence level per non-terminal:
//!
//! | Level | Operators | Associativity |
//! |-------|-----------|---------------|
//! | 1     | `+`       | Left          |
//! | 2     | `*`       | Left          |
//!
//! The repetition at each level is a loop, not recursion, so chains like
//! `1+2+3+4` fold left-associatively and recursion depth is bounded by
//! parenthesis nesting alone.
//!
//! # Errors
//!
//! There is no recovery: the first fault ends the parse. Error tokens from
//! the lexer become [`ParseError::Lex`], running out of input becomes
//! [`ParseError::UnexpectedEndOfInput`], and any other mismatch becomes
//! [`ParseError::UnexpectedToken`] describing what the grammar required.
//!
//! # Usage
//!
//! ```
//! use tally_core::{Lexer, Parser};
//!
//! let parser = Parser::new(Lexer::new("1+2*(4+3);"));
//! assert_eq!(parser.parse(), Ok(15));
//! ```

use super::{LexError, Lexer, ParseError, Span, Token, TokenKind};

/// Maximum parenthesis nesting depth before the parser bails out.
///
/// Prevents stack overflow on deeply nested input (e.g., `((((...))))`).
/// Each nesting level uses multiple stack frames through the parser call
/// chain. 64 is generous enough for any realistic expression while staying
/// safe under fuzzing.
const MAX_NESTING_DEPTH: usize = 64;

/// A one-pass parser that evaluates an expression while matching it.
///
/// The parser owns its [`Lexer`] and pulls one token at a time, keeping a
/// single `lookahead` token between pulls. [`Parser::parse`] consumes the
/// parser; each parse runs over a fresh lexer.
pub struct Parser<'src> {
    /// The lexer supplying tokens on demand.
    lexer: Lexer<'src>,
    /// The next unconsumed token.
    lookahead: Token,
    /// Current parenthesis nesting depth (guards against stack overflow).
    nesting_depth: usize,
}

impl<'src> Parser<'src> {
    /// Creates a new parser, priming the lookahead with the first token.
    #[must_use]
    pub fn new(mut lexer: Lexer<'src>) -> Self {
        let lookahead = lexer.next_token();
        Self {
            lexer,
            lookahead,
            nesting_depth: 0,
        }
    }

    /// Parses one `;`-terminated expression and returns its value.
    ///
    /// The whole input must be a single statement: after the terminating
    /// `;`, only the end of input may follow.
    ///
    /// # Errors
    ///
    /// Returns the first fault encountered, lexical or syntactic.
    pub fn parse(mut self) -> Result<i64, ParseError> {
        let (value, _) = self.parse_expression()?;
        self.expect(&TokenKind::Semicolon, "';'")?;
        self.expect(&TokenKind::Eof, "end of input")?;
        Ok(value)
    }

    // ========================================================================
    // Grammar Procedures
    // ========================================================================

    /// `expr → term ( '+' term )*`
    fn parse_expression(&mut self) -> Result<(i64, Span), ParseError> {
        let (mut value, mut span) = self.parse_term()?;

        while self.match_token(&TokenKind::Plus) {
            let (rhs, rhs_span) = self.parse_term()?;
            span = span.merge(rhs_span);
            value = value
                .checked_add(rhs)
                .ok_or_else(|| ParseError::overflow(span))?;
        }

        Ok((value, span))
    }

    /// `term → factor ( '*' factor )*`
    fn parse_term(&mut self) -> Result<(i64, Span), ParseError> {
        let (mut value, mut span) = self.parse_factor()?;

        while self.match_token(&TokenKind::Star) {
            let (rhs, rhs_span) = self.parse_factor()?;
            span = span.merge(rhs_span);
            value = value
                .checked_mul(rhs)
                .ok_or_else(|| ParseError::overflow(span))?;
        }

        Ok((value, span))
    }

    /// `factor → '(' expr ')' | Number`
    fn parse_factor(&mut self) -> Result<(i64, Span), ParseError> {
        match self.lookahead.kind() {
            TokenKind::Number(value) => {
                let value = *value;
                let token = self.advance();
                Ok((value, token.span()))
            }
            TokenKind::LeftParen => {
                if self.nesting_depth >= MAX_NESTING_DEPTH {
                    return Err(ParseError::nesting_too_deep(self.lookahead.span()));
                }
                self.nesting_depth += 1;
                let open = self.advance();
                let (value, _) = self.parse_expression()?;
                self.nesting_depth -= 1;
                let close = self.expect(&TokenKind::RightParen, "')'")?;
                Ok((value, open.span().merge(close.span())))
            }
            _ => Err(self.unexpected("a number or '('")),
        }
    }

    // ========================================================================
    // Token Management
    // ========================================================================

    /// Consumes the lookahead and returns it, pulling the next token in.
    fn advance(&mut self) -> Token {
        std::mem::replace(&mut self.lookahead, self.lexer.next_token())
    }

    /// Checks if the lookahead matches the given kind.
    fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(self.lookahead.kind()) == std::mem::discriminant(kind)
    }

    /// Consumes the lookahead if it matches the given kind.
    fn match_token(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expects the lookahead to match the given kind, consuming it if so.
    ///
    /// `expected` is the human description used in the error when the
    /// lookahead does not match.
    fn expect(&mut self, kind: &TokenKind, expected: &str) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Classifies the lookahead as a fault.
    ///
    /// Error tokens carry a lexical fault through the stream, so they beat
    /// the syntactic description. End of input gets its own variant so the
    /// message can say the input ended rather than naming a token.
    fn unexpected(&self, expected: &str) -> ParseError {
        let span = self.lookahead.span();
        match self.lookahead.kind() {
            TokenKind::Error(kind) => LexError::new(kind.clone(), span).into(),
            TokenKind::Eof => ParseError::unexpected_end_of_input(expected, span),
            kind => ParseError::unexpected_token(expected, kind.to_string(), span),
        }
    }
}

impl std::fmt::Debug for Parser<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser")
            .field("lookahead", &self.lookahead)
            .field("nesting_depth", &self.nesting_depth)
            .finish_non_exhaustive()
    }
}
