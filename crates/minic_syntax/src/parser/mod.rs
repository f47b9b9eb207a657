
use minic_diagnostic::span::Span;

use crate::ast::*;
use crate::error::{ParseResult, SyntaxError, SyntaxErrorKind};
use crate::token::{Token, TokenKind};
use crate::token_source::TokenSource;

/// Recursive-descent parser for `int <ident> ( ) { return <int> <int> ; }`.
///
/// Every check takes exactly one token from the source and compares its kind;
/// there is no lookahead and no recovery. The first mismatch ends the parse.
pub struct Parser<T> {
    tokens: T,
    prev_span: Option<Span>,
}

impl<T: TokenSource> Parser<T> {
    pub fn new(tokens: T) -> Self {
        Self {
            tokens,
            prev_span: None,
        }
    }

    /// Gives the token source back, positioned just after the last token taken.
    pub fn into_tokens(self) -> T {
        self.tokens
    }

    /// Parses one function definition. Anything after it is not inspected.
    pub fn parse_program(&mut self) -> ParseResult<Program> {
        let function = self.parse_function()?;

        tracing::debug!("parsed program");
        Ok(Program { function })
    }

    fn parse_function(&mut self) -> ParseResult<Function> {
        self.expect(TokenKind::IntKeyword)?;
        self.expect(TokenKind::Identifier)?; // the name is not kept
        self.expect(TokenKind::OpenParen)?;
        self.expect(TokenKind::CloseParen)?;
        self.expect(TokenKind::OpenBrace)?;

        let statement = self.parse_statement()?;

        self.expect(TokenKind::CloseBrace)?;

        Ok(Function { statement })
    }

    fn parse_statement(&mut self) -> ParseResult<Stmt> {
        self.expect(TokenKind::ReturnKeyword)?;

        // A second integer token precedes the returned literal. Its value is ignored.
        self.expect(TokenKind::Int)?;

        let expr = self.parse_expression()?;

        self.expect(TokenKind::Semicolon)?;

        Ok(Stmt::Return(expr))
    }

    fn parse_expression(&mut self) -> ParseResult<Expr> {
        let token = self.expect(TokenKind::Int)?;
        let text = token.value.unwrap_or_default();

        match text.parse::<i64>() {
            Ok(n) => Ok(Expr::IntLiteral(n)),
            Err(_) => Err(SyntaxError {
                kind: SyntaxErrorKind::InvalidInteger { text },
                span: token.span,
            }),
        }
    }

    fn expect(&mut self, kind: TokenKind) -> ParseResult<Token> {
        tracing::trace!(expected = %kind, "expecting token");

        let Some(token) = self.tokens.next_token() else {
            return Err(SyntaxError {
                kind: SyntaxErrorKind::UnexpectedEof { expected: kind },
                span: self.eof_span(),
            });
        };

        self.prev_span = Some(token.span);

        if token.kind == kind {
            Ok(token)
        } else {
            Err(SyntaxError {
                kind: SyntaxErrorKind::UnexpectedToken {
                    expected: kind,
                    found: token.kind,
                },
                span: token.span,
            })
        }
    }

    /// Points just past the last token taken.
    fn eof_span(&self) -> Span {
        Span::empty(self.prev_span.map_or(0, |span| span.end))
    }
}
