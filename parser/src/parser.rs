//! Recursive-descent parser for field selections.
//!
//! Grammar:
//!
//! ```text
//! selection_set ::= '{' field* '}'
//! field         ::= IDENT arguments? selection_set?
//! arguments     ::= '(' argument (argument)* ')'
//! argument      ::= IDENT ':' (INTEGER | STRING)
//! ```
//!
//! A document is a selection set whose outer brace pair may be omitted.
//! Commas never reach the parser; the lexer discards them as separators.

use crate::ast::{Field, Span};
use crate::error::{ParseError, ParseResult};
use crate::lexer::{Token, TokenKind};
use graft_core::{ArgValue, Arguments};

/// Parser state: the token vector and a cursor.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Create a parser over a token sequence produced by the lexer.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parse a whole query document into its top-level selection.
    ///
    /// A leading `{` is optional; when present the matching `}` must close
    /// it. All input must be consumed.
    pub fn parse_document(&mut self) -> ParseResult<Vec<Field>> {
        let braced = self.check(&TokenKind::LBrace);
        if braced {
            self.advance();
        }

        let fields = self.parse_fields()?;

        if braced {
            self.expect(&TokenKind::RBrace)?;
        }

        let token = self.peek();
        if !matches!(token.kind, TokenKind::Eof) {
            return Err(ParseError::unexpected_token(
                token.span,
                "end of input",
                token.kind.name(),
            ));
        }

        Ok(fields)
    }

    /// Parse consecutive fields until a closing brace or end of input.
    fn parse_fields(&mut self) -> ParseResult<Vec<Field>> {
        let mut fields = Vec::new();
        while matches!(self.peek().kind, TokenKind::Ident(_)) {
            fields.push(self.parse_field()?);
        }
        Ok(fields)
    }

    /// Parse one field: name, optional arguments, optional sub-selection.
    fn parse_field(&mut self) -> ParseResult<Field> {
        let start = self.peek().span;
        let name = self.expect_ident()?;
        let mut field = Field::new(name, start);

        if self.check(&TokenKind::LParen) {
            self.advance();
            field.arguments = self.parse_arguments()?;
        }

        if self.check(&TokenKind::LBrace) {
            self.advance();
            field.selection = self.parse_fields()?;
            self.expect(&TokenKind::RBrace)?;
        }

        Ok(field)
    }

    /// Parse arguments up to and including the closing paren. The opening
    /// paren has already been consumed; at least one argument is required.
    fn parse_arguments(&mut self) -> ParseResult<Arguments> {
        let mut arguments = Arguments::new();

        loop {
            let token = self.peek().clone();
            match token.kind {
                TokenKind::RParen => {
                    if arguments.is_empty() {
                        return Err(ParseError::new("empty argument list", token.span));
                    }
                    self.advance();
                    return Ok(arguments);
                }
                TokenKind::Eof => {
                    return Err(ParseError::unexpected_eof(token.span, ")"));
                }
                _ => {
                    let key = self.expect_ident()?;
                    self.expect(&TokenKind::Colon)?;
                    let value = self.expect_arg_value()?;
                    arguments.insert(key, value);
                }
            }
        }
    }

    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or_else(|| {
            self.tokens
                .last()
                .expect("tokens should always end with EOF")
        })
    }

    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.peek().kind) == std::mem::discriminant(kind)
    }

    fn expect(&mut self, kind: &TokenKind) -> ParseResult<Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            let token = self.peek();
            Err(ParseError::unexpected_token(
                token.span,
                kind.name(),
                token.kind.name(),
            ))
        }
    }

    fn expect_ident(&mut self) -> ParseResult<String> {
        match self.peek().kind.clone() {
            TokenKind::Ident(name) => {
                self.advance();
                Ok(name)
            }
            _ => {
                let token = self.peek();
                Err(ParseError::unexpected_token(
                    token.span,
                    "identifier",
                    token.kind.name(),
                ))
            }
        }
    }

    /// Expect an argument value: integer or string literal.
    fn expect_arg_value(&mut self) -> ParseResult<ArgValue> {
        match self.peek().kind.clone() {
            TokenKind::Int(n) => {
                self.advance();
                Ok(ArgValue::Int(n))
            }
            TokenKind::Str(s) => {
                self.advance();
                Ok(ArgValue::Str(s))
            }
            _ => {
                let token = self.peek();
                Err(ParseError::unexpected_token(
                    token.span,
                    "argument value",
                    token.kind.name(),
                ))
            }
        }
    }
}
