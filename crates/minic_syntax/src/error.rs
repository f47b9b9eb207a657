use minic_diagnostic::sources::Sources;
use minic_diagnostic::span::Span;
use minic_diagnostic::{Diagnostic, IntoDiagnostic, Snippet};

use crate::token::TokenKind;
use crate::Node;

/// The single failure the parser reports. Parsing stops at the first one.
#[derive(Node!, thiserror::Error)]
#[error("{kind}")]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub span: Span,
}

#[derive(Node!, thiserror::Error)]
pub enum SyntaxErrorKind {
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },

    #[error("expected {expected}, found end of input")]
    UnexpectedEof { expected: TokenKind },

    /// `text` is empty when the token carried no value at all.
    #[error("invalid integer literal {text:?}")]
    InvalidInteger { text: String },
}

pub type ParseResult<T> = Result<T, SyntaxError>;

impl<S: Sources> IntoDiagnostic<S> for SyntaxError {
    fn into_diagnostic(self, source_id: S::SourceId) -> Diagnostic<S> {
        let label = match &self.kind {
            SyntaxErrorKind::UnexpectedToken { expected, .. }
            | SyntaxErrorKind::UnexpectedEof { expected } => format!("expected {expected} here"),
            SyntaxErrorKind::InvalidInteger { .. } => "not a valid 64-bit integer".to_owned(),
        };

        Diagnostic::error()
            .with_message(self.kind.to_string())
            .with_snippet(Snippet::primary(label, source_id, self.span))
    }
}
