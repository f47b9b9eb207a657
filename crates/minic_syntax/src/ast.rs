//! The syntax tree of a single-function program.
//!
//! Nodes own their children directly and are never mutated once the parser
//! has built them.

use crate::AstNode;

#[derive(AstNode!)]
pub struct Program {
    pub function: Function,
}

/// A function definition. Its name is checked by the parser but not kept.
#[derive(AstNode!)]
pub struct Function {
    pub statement: Stmt,
}

#[derive(AstNode!)]
pub enum Stmt {
    Return(Expr),
}

#[derive(AstNode!)]
pub enum Expr {
    IntLiteral(i64),
}
