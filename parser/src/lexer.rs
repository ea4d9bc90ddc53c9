//! Lexer (tokenizer) for query text.

use crate::{LexError, LexResult, Span};

/// Token types.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// Identifier: a run of `[A-Za-z0-9_]` that is not all digits.
    Ident(String),
    /// Integer literal: a run consisting solely of ASCII digits.
    Int(i64),
    /// Double-quoted string literal, quotes stripped.
    Str(String),

    // Symbols
    LBrace, // {
    RBrace, // }
    LParen, // (
    RParen, // )
    Colon,  // :

    // End of file
    Eof,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Ident(_) => "identifier",
            TokenKind::Int(_) => "integer",
            TokenKind::Str(_) => "string",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Colon => ":",
            TokenKind::Eof => "end of input",
        }
    }
}

/// A token with its span.
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn eof(pos: usize, line: usize, column: usize) -> Self {
        Self {
            kind: TokenKind::Eof,
            span: Span::new(pos, pos, line, column),
        }
    }
}

/// Lexer state: nothing beyond the scan position.
pub struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.char_indices().peekable(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize all input into a vector of tokens ending with `Eof`.
    ///
    /// The first illegal character aborts the scan; no partial token
    /// sequence is returned.
    pub fn tokenize(mut self) -> LexResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = matches!(token.kind, TokenKind::Eof);
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn span_from(&self, start: usize, start_line: usize, start_col: usize) -> Span {
        Span::new(start, self.pos, start_line, start_col)
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn next_char(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.pos = pos + c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            Some(c)
        } else {
            None
        }
    }

    fn skip_insignificant(&mut self) {
        // Whitespace and the comma separator are both discarded.
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() || c == ',' {
                self.next_char();
            } else {
                break;
            }
        }
    }

    fn next_token(&mut self) -> LexResult<Token> {
        self.skip_insignificant();

        let start = self.pos;
        let start_line = self.line;
        let start_col = self.column;

        let Some(c) = self.next_char() else {
            return Ok(Token::eof(self.pos, self.line, self.column));
        };

        let kind = match c {
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ':' => TokenKind::Colon,
            '"' => self.scan_string(start, start_line, start_col)?,
            c if c.is_ascii_alphanumeric() || c == '_' => {
                self.scan_word(c, start, start_line, start_col)?
            }
            _ => {
                return Err(LexError::new(
                    format!("unexpected character '{}'", c),
                    self.span_from(start, start_line, start_col),
                ));
            }
        };

        Ok(Token::new(
            kind,
            self.span_from(start, start_line, start_col),
        ))
    }

    fn scan_string(
        &mut self,
        start: usize,
        start_line: usize,
        start_col: usize,
    ) -> LexResult<TokenKind> {
        let mut value = String::new();

        loop {
            match self.next_char() {
                None => {
                    return Err(LexError::new(
                        "unterminated string literal",
                        self.span_from(start, start_line, start_col),
                    ));
                }
                Some('"') => break,
                Some(c) => value.push(c),
            }
        }

        Ok(TokenKind::Str(value))
    }

    /// Scan a word of `[A-Za-z0-9_]`. A word made solely of digits is an
    /// integer literal; everything else is an identifier.
    fn scan_word(
        &mut self,
        first: char,
        start: usize,
        start_line: usize,
        start_col: usize,
    ) -> LexResult<TokenKind> {
        let mut word = String::new();
        word.push(first);

        while let Some(c) = self.peek_char() {
            if c.is_ascii_alphanumeric() || c == '_' {
                word.push(c);
                self.next_char();
            } else {
                break;
            }
        }

        if word.bytes().all(|b| b.is_ascii_digit()) {
            let value: i64 = word.parse().map_err(|_| {
                LexError::new(
                    format!("invalid integer literal '{}'", word),
                    self.span_from(start, start_line, start_col),
                )
            })?;
            Ok(TokenKind::Int(value))
        } else {
            Ok(TokenKind::Ident(word))
        }
    }
}
