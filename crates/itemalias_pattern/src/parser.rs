//! Parser for alias patterns.
//!
//! Recursive descent over the token stream:
//!
//! ```text
//! pattern     := sequence EOF
//! sequence    := (text | optional | alternation | variation)*
//! optional    := '[' sequence ']'
//! alternation := '(' sequence ('|' sequence)* ')'
//! variation   := '{' tag '}'
//! ```
//!
//! A `|` outside parentheses is literal text. A lexical error inside a group
//! becomes a [`Node::Malformed`] so that only its branch is lost; at the top
//! level it fails the whole pattern.

use itemalias_foundation::{Error, Result};

use crate::ast::{Node, Pattern};
use crate::lexer::Lexer;
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Deepest allowed nesting of `[...]` and `(...)` groups.
pub const MAX_NESTING_DEPTH: usize = 32;

/// Which construct a sequence is nested in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Scope {
    Top,
    Optional,
    Alternation,
}

/// Parser for alias patterns.
pub struct Parser<'src> {
    /// The pattern being parsed.
    source: &'src str,
    /// The lexer providing tokens.
    lexer: Lexer<'src>,
    /// Current token (lookahead).
    current: Token,
    /// Number of groups currently open.
    depth: usize,
}

impl<'src> Parser<'src> {
    /// Creates a new parser for the given pattern.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        Self {
            source,
            lexer,
            current,
            depth: 0,
        }
    }

    /// Parses the whole pattern.
    ///
    /// # Errors
    /// Returns a `MalformedPattern` error for unbalanced or empty groups and
    /// broken `{tag}` references.
    pub fn parse(&mut self) -> Result<Pattern> {
        let nodes = self.parse_sequence(Scope::Top)?;
        match &self.current.kind {
            TokenKind::Eof => Ok(Pattern::new(nodes)),
            TokenKind::RBracket => Err(self.error("unmatched ']'")),
            TokenKind::RParen => Err(self.error("unmatched ')'")),
            other => Err(self.error(format!("unexpected {other:?}"))),
        }
    }

    fn advance(&mut self) {
        self.current = self.lexer.next_token();
    }

    fn error(&self, message: impl Into<String>) -> Error {
        Error::malformed_pattern(message, self.current.span.column)
    }

    /// Opens a group, failing if groups nest too deeply.
    fn enter_group(&mut self) -> Result<()> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error(format!(
                "groups nested deeper than {MAX_NESTING_DEPTH} levels"
            )));
        }
        self.depth += 1;
        Ok(())
    }

    /// Parses nodes until a token that ends the current scope.
    fn parse_sequence(&mut self, scope: Scope) -> Result<Vec<Node>> {
        let mut nodes = Vec::new();
        loop {
            match &self.current.kind {
                TokenKind::Text(text) => {
                    let text = text.clone();
                    let span = self.current.span;
                    self.advance();
                    push_text(&mut nodes, text, span);
                }
                TokenKind::Pipe if scope != Scope::Alternation => {
                    let span = self.current.span;
                    self.advance();
                    push_text(&mut nodes, "|".to_string(), span);
                }
                TokenKind::Variation(tag) => {
                    let tag = tag.clone();
                    let span = self.current.span;
                    self.advance();
                    nodes.push(Node::Variation(tag, span));
                }
                TokenKind::LBracket => nodes.push(self.parse_optional()?),
                TokenKind::LParen => nodes.push(self.parse_alternation()?),
                TokenKind::Error(message) if scope == Scope::Top => {
                    let message = message.clone();
                    return Err(self.error(message));
                }
                TokenKind::Error(message) => {
                    let message = message.clone();
                    let span = self.current.span;
                    self.advance();
                    nodes.push(Node::Malformed {
                        text: span.text(self.source).to_string(),
                        message,
                        span,
                    });
                }
                TokenKind::Pipe | TokenKind::RBracket | TokenKind::RParen | TokenKind::Eof => {
                    return Ok(nodes);
                }
            }
        }
    }

    fn parse_optional(&mut self) -> Result<Node> {
        let open = self.current.span;
        self.enter_group()?;
        self.advance(); // consume '['
        let inner = self.parse_sequence(Scope::Optional)?;
        self.depth -= 1;
        if self.current.kind != TokenKind::RBracket {
            return Err(Error::malformed_pattern("unclosed '['", open.column));
        }
        let span = open.to(self.current.span);
        self.advance();
        if inner.is_empty() {
            return Err(Error::malformed_pattern("empty optional group '[]'", open.column));
        }
        Ok(Node::Optional(inner, span))
    }

    fn parse_alternation(&mut self) -> Result<Node> {
        let open = self.current.span;
        self.enter_group()?;
        self.advance(); // consume '('
        let mut alternatives = vec![self.parse_sequence(Scope::Alternation)?];
        while self.current.kind == TokenKind::Pipe {
            self.advance();
            alternatives.push(self.parse_sequence(Scope::Alternation)?);
        }
        self.depth -= 1;
        if self.current.kind != TokenKind::RParen {
            return Err(Error::malformed_pattern("unclosed '('", open.column));
        }
        let span = open.to(self.current.span);
        self.advance();
        if alternatives.iter().all(Vec::is_empty) {
            return Err(Error::malformed_pattern("empty group '()'", open.column));
        }
        Ok(Node::Alternation(alternatives, span))
    }
}

/// Appends text, merging with a preceding text node.
fn push_text(nodes: &mut Vec<Node>, text: String, span: Span) {
    if let Some(Node::Text(prev, prev_span)) = nodes.last_mut() {
        prev.push_str(&text);
        *prev_span = prev_span.to(span);
    } else {
        nodes.push(Node::Text(text, span));
    }
}

/// Parses an alias pattern.
///
/// # Errors
/// Returns a `MalformedPattern` error if the pattern is not well formed.
pub fn parse_pattern(source: &str) -> Result<Pattern> {
    Parser::new(source).parse()
}
