use std::io::Write;

use minic_diagnostic::sources::Source as _;
use minic_diagnostic::Snippet;
use minic_syntax::ast::Program;

use crate::cli::Emit;
use crate::session::{Diagnostic, DiagnosticEmitter, Session, SourceId};
use crate::{DriverError, DriverResult};

/// Lexes and parses one registered source, reporting every problem to the session.
pub fn parse_source<D: DiagnosticEmitter>(
    session: &mut Session<D>,
    source_id: SourceId,
) -> DriverResult<Program> {
    let source = session
        .source(source_id)
        .ok_or(DriverError::UnknownSource(source_id))?;

    tracing::info!(name = source.name_str(), "parsing");

    let (mut tokens, lexer_errors) = minic_syntax::lex(source.source_str());
    tracing::debug!(tokens = tokens.len(), "lexed");

    let mut had_errors = session.report_all(lexer_errors, source_id).is_err();

    let program = match minic_syntax::parse(&mut tokens) {
        Ok(program) => Some(program),
        Err(err) => {
            had_errors |= session.report(err, source_id).is_err();
            None
        }
    };

    let program = match program {
        Some(program) if !had_errors => program,
        _ => return Err(DriverError::HadErrors),
    };

    let remaining = tokens.remaining();
    if let (Some(first), Some(last)) = (remaining.first(), remaining.last()) {
        let span = first.span.to(last.span);
        session.warn(
            Diagnostic::warning()
                .with_message("tokens after the function are ignored")
                .with_snippet(Snippet::primary("ignored", source_id, span)),
        );
    }

    Ok(program)
}

pub fn write_program(program: &Program, emit: Emit, out: &mut impl Write) -> DriverResult<()> {
    match emit {
        Emit::Debug => writeln!(out, "{program:#?}")?,
        Emit::Json => {
            serde_json::to_writer_pretty(&mut *out, program)?;
            writeln!(out)?;
        }
    }

    Ok(())
}
