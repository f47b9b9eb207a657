#[macro_use]
extern crate macro_rules_attribute;

mod error;
mod lexer;
mod parser;

pub mod ast;
pub mod token;
pub mod token_source;

pub use error::{ParseResult, SyntaxError, SyntaxErrorKind};
pub use lexer::{LexerError, LexerErrorKind};
pub use parser::Parser;

use ast::Program;
use lexer::Lexer;
use token::Token;
use token_source::TokenIter;

derive_alias! {
    #[derive(Node!)] = #[derive(Debug, Clone, PartialEq, Eq)];
    #[derive(NodeCopy!)] = #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)];
    #[derive(AstNode!)] = #[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)];
}

#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> (TokenIter, Vec<LexerError>) {
    Lexer::new(source).lex()
}

/// Parses exactly one function definition from `tokens`.
///
/// Tokens after the closing brace are left in the source untouched. Pass a
/// `&mut` borrow of the source to inspect them afterwards.
#[tracing::instrument(skip_all)]
pub fn parse(tokens: impl IntoIterator<Item = Token>) -> ParseResult<Program> {
    Parser::new(tokens.into_iter()).parse_program()
}
