use std::fmt;

use minic_diagnostic::span::Span;

use crate::{Node, NodeCopy};

#[derive(Node!)]
pub struct Token {
    pub kind: TokenKind,
    /// Source text for identifiers and integers.
    pub value: Option<String>,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self {
            kind,
            value: None,
            span,
        }
    }

    pub fn with_value(kind: TokenKind, value: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            value: Some(value.into()),
            span,
        }
    }
}

#[derive(NodeCopy!)]
pub enum TokenKind {
    IntKeyword,
    ReturnKeyword,

    Identifier,
    Int,

    OpenParen,
    CloseParen,
    OpenBrace,
    CloseBrace,

    Semicolon,
}

impl TokenKind {
    pub fn token_name(&self) -> &'static str {
        match self {
            TokenKind::IntKeyword => "keyword `int`",
            TokenKind::ReturnKeyword => "keyword `return`",
            TokenKind::Identifier => "identifier",
            TokenKind::Int => "integer",
            TokenKind::OpenParen => "`(`",
            TokenKind::CloseParen => "`)`",
            TokenKind::OpenBrace => "`{`",
            TokenKind::CloseBrace => "`}`",
            TokenKind::Semicolon => "`;`",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token_name())
    }
}
