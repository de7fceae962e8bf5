//! Lexer for alias patterns.
//!
//! Splits a pattern such as `[dark ](oak|birch) log{facing}` into text runs,
//! group delimiters, pipes and `{tag}` references.

use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Lexer for alias pattern text.
pub struct Lexer<'src> {
    /// Remaining source text.
    rest: &'src str,
    /// Current byte offset in source.
    position: usize,
    /// Current column number (1-based).
    column: usize,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given pattern.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            rest: source,
            position: 0,
            column: 1,
        }
    }

    /// Returns the next token from the source.
    pub fn next_token(&mut self) -> Token {
        let start = self.position;
        let start_column = self.column;

        let Some(c) = self.peek_char() else {
            return Token::new(TokenKind::Eof, Span::new(start, start, start_column));
        };

        let kind = match c {
            '[' => self.single(TokenKind::LBracket),
            ']' => self.single(TokenKind::RBracket),
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            '|' => self.single(TokenKind::Pipe),
            '{' => self.scan_variation(),
            '}' => {
                self.advance();
                TokenKind::Error("unmatched '}'".into())
            }
            _ => self.scan_text(),
        };

        Token::new(kind, Span::new(start, self.position, start_column))
    }

    /// Tokenizes the whole pattern, including the trailing `Eof`.
    #[must_use]
    pub fn tokenize_all(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            let len = c.len_utf8();
            self.rest = &self.rest[len..];
            self.position += len;
            self.column += 1;
        }
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.advance();
        kind
    }

    /// Scans a `{tag}` reference.
    fn scan_variation(&mut self) -> TokenKind {
        self.advance(); // consume '{'
        let mut tag = String::new();
        loop {
            match self.peek_char() {
                Some('}') => {
                    self.advance();
                    break;
                }
                Some(c) if !is_special(c) => {
                    tag.push(c);
                    self.advance();
                }
                _ => return TokenKind::Error("unclosed '{'".into()),
            }
        }
        if tag.is_empty() {
            TokenKind::Error("empty variation name '{}'".into())
        } else {
            TokenKind::Variation(tag)
        }
    }

    /// Scans a run of characters with no special meaning.
    fn scan_text(&mut self) -> TokenKind {
        let mut text = String::new();
        while let Some(c) = self.peek_char() {
            if is_special(c) {
                break;
            }
            text.push(c);
            self.advance();
        }
        TokenKind::Text(text)
    }
}

fn is_special(c: char) -> bool {
    matches!(c, '[' | ']' | '(' | ')' | '|' | '{' | '}')
}
