
use std::str::Chars;

use minic_diagnostic::sources::Sources;
use minic_diagnostic::span::Span;
use minic_diagnostic::{Diagnostic, IntoDiagnostic, Snippet};
use minic_utils::peek::Peek;

use crate::token::{Token, TokenKind};
use crate::token_source::TokenIter;
use crate::Node;

#[derive(Node!)]
pub struct LexerError {
    pub kind: LexerErrorKind,
    pub span: Span,
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexerErrorKind {
    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),
}

impl<S: Sources> IntoDiagnostic<S> for LexerError {
    fn into_diagnostic(self, source_id: S::SourceId) -> Diagnostic<S> {
        Diagnostic::error()
            .with_message("syntax error")
            .with_snippet(Snippet::primary(
                self.kind.to_string(),
                source_id,
                self.span,
            ))
    }
}

pub struct Lexer<'src> {
    errors: Vec<LexerError>,

    all: &'src str,
    chars: Chars<'src>,

    token_start: usize,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            errors: vec![],

            all: source,
            chars: source.chars(),

            token_start: 0,
        }
    }

    pub fn lex(mut self) -> (TokenIter, Vec<LexerError>) {
        let mut tokens = vec![];
        while let Some(token) = self.lex_token() {
            tokens.push(token);
        }

        tracing::debug!(
            tokens = tokens.len(),
            errors = self.errors.len(),
            "finished lexing"
        );

        let iter = TokenIter::new(tokens);
        (iter, self.errors)
    }

    fn lex_token(&mut self) -> Option<Token> {
        loop {
            self.token_start = self.byte_pos();

            let kind = match self.chars.next()? {
                // comment
                '/' if self.chars.eat('/') => {
                    self.chars.eat_while(|&ch| ch != '\n');
                    continue;
                }

                ch if ch.is_ascii_whitespace() => continue,

                '(' => TokenKind::OpenParen,
                ')' => TokenKind::CloseParen,
                '{' => TokenKind::OpenBrace,
                '}' => TokenKind::CloseBrace,
                ';' => TokenKind::Semicolon,

                '0'..='9' => {
                    self.chars.eat_while(char::is_ascii_digit);
                    return Some(self.token_with_text(TokenKind::Int));
                }

                ch if is_ident_start(ch) => {
                    self.chars.eat_while(|&ch| is_ident(ch));

                    match self.token_text() {
                        "int" => TokenKind::IntKeyword,
                        "return" => TokenKind::ReturnKeyword,
                        _ => return Some(self.token_with_text(TokenKind::Identifier)),
                    }
                }

                ch => {
                    self.report_error(LexerErrorKind::UnexpectedChar(ch));
                    continue;
                }
            };

            return Some(Token::new(kind, self.token_span()));
        }
    }

    fn token_with_text(&self, kind: TokenKind) -> Token {
        Token::with_value(kind, self.token_text(), self.token_span())
    }

    fn token_text(&self) -> &'src str {
        let all = self.all;
        &all[self.token_start..self.byte_pos()]
    }

    fn token_span(&self) -> Span {
        Span::new(self.token_start, self.byte_pos())
    }

    fn byte_pos(&self) -> usize {
        self.all.len() - self.chars.as_str().len()
    }

    fn report_error(&mut self, kind: LexerErrorKind) {
        let span = self.token_span();
        self.errors.push(LexerError { kind, span });
    }
}

fn is_ident_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_ident(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}
