use clap::{CommandFactory, Parser as _};
use minic_diagnostic::termcolor::NoColor;
use minic_diagnostic::{Config, Severity};
use minic_syntax::ast::{Expr, Function, Program, Stmt};

use crate::cli::{Cli, Command, Emit};
use crate::compilation::{parse_source, write_program};
use crate::session::{Diagnostic, Session, SourceFile};
use crate::DriverError;

fn parse_inline(text: &str) -> (Result<Program, DriverError>, Session<Vec<Diagnostic>>) {
    let mut session = Session::new(vec![]);
    let source_id = session.add_source(SourceFile::inline(text));
    let result = parse_source(&mut session, source_id);
    (result, session)
}

fn messages(session: &Session<Vec<Diagnostic>>) -> Vec<(Severity, String)> {
    session
        .diagnostics
        .iter()
        .map(|d| (d.severity, d.message.clone().unwrap_or_default()))
        .collect()
}

fn returning(n: i64) -> Program {
    Program {
        function: Function {
            statement: Stmt::Return(Expr::IntLiteral(n)),
        },
    }
}

#[test]
fn parses_program() {
    let (result, session) = parse_inline("int main() { return 0 2; }");

    assert_eq!(result.unwrap(), returning(2));
    assert!(session.diagnostics.is_empty());
}

#[test]
fn spacing_does_not_matter() {
    for text in [
        "\nint\nmain\n(\n)\n{\nreturn\n0\n100\n;\n}",
        "int main(){return 0 100;}",
        "  int  main  (  )  {  return  0  100  ;  }  ",
    ] {
        let (result, _) = parse_inline(text);
        assert_eq!(result.unwrap(), returning(100), "{text:?}");
    }
}

#[test]
fn missing_close_brace() {
    let (result, session) = parse_inline("int main() { return 0 2;");

    assert!(matches!(result, Err(DriverError::HadErrors)));
    assert_eq!(
        messages(&session),
        [(
            Severity::Error,
            "expected `}`, found end of input".to_owned()
        )]
    );
}

#[test]
fn lexer_errors_fail_the_parse() {
    let (result, session) = parse_inline("int main() { return 0 $2; }");

    assert!(matches!(result, Err(DriverError::HadErrors)));
    assert_eq!(
        messages(&session),
        [(Severity::Error, "syntax error".to_owned())]
    );
}

#[test]
fn lexer_and_parser_errors_are_both_reported() {
    let (result, session) = parse_inline("int main() { return $ 2; }");

    assert!(result.is_err());
    assert_eq!(
        messages(&session),
        [
            (Severity::Error, "syntax error".to_owned()),
            (Severity::Error, "expected integer, found `;`".to_owned()),
        ]
    );
}

#[test]
fn trailing_tokens_warn() {
    let (result, session) = parse_inline("int main() { return 0 2; } }}");

    assert_eq!(result.unwrap(), returning(2));
    assert_eq!(
        messages(&session),
        [(
            Severity::Warning,
            "tokens after the function are ignored".to_owned()
        )]
    );
    assert_eq!(
        session.diagnostics[0].snippets[0].span,
        minic_diagnostic::span::Span::new(27, 29)
    );
}

#[test]
fn unknown_source() {
    let mut session: Session<Vec<Diagnostic>> = Session::new(vec![]);
    let result = parse_source(&mut session, 3);

    assert!(matches!(result, Err(DriverError::UnknownSource(3))));
}

#[test]
fn rendered_error() {
    let text = "int main() { return 2; }";
    let (_, session) = parse_inline(text);

    let mut stream = NoColor::new(vec![]);
    session.diagnostics[0]
        .write_to_stream(&session.sources, &Config::default(), &mut stream)
        .unwrap();
    let rendered = String::from_utf8(stream.into_inner()).unwrap();

    let expected = format!(
        "Error: expected integer, found `;`\n\
         In <inline>:1:22\n\
         1 │ {text}\n  \
         │ {}^ expected integer here\n\
         \n",
        " ".repeat(21)
    );
    assert_eq!(rendered, expected);
}

#[test]
fn reads_source_from_file() {
    let file = temp_file::with_contents(b"int main() {\n    return 0 42;\n}\n");

    let source = SourceFile::read(file.path()).unwrap();
    assert_eq!(source.path.as_deref(), Some(file.path()));

    let mut session = Session::new(vec![]);
    let source_id = session.add_source(source);
    assert_eq!(parse_source(&mut session, source_id).unwrap(), returning(42));
}

#[test]
fn missing_file() {
    let path = std::env::temp_dir().join("minic-missing-input.c");

    let err = SourceFile::read(&path).unwrap_err();
    assert!(matches!(&err, DriverError::ReadInput { path: p, .. } if *p == path));
    assert!(
        err.to_string()
            .starts_with(&format!("could not read {}: ", path.display())),
        "{err}"
    );
}

#[test]
fn warnings_do_not_fail_the_session() {
    let mut session: Session<Vec<Diagnostic>> = Session::new(vec![]);
    let source_id = session.add_source(SourceFile::inline("int"));

    session.warn(Diagnostic::warning().with_message("first"));
    assert_eq!(
        session.report(Diagnostic::warning().with_message("second"), source_id),
        Ok(())
    );
    assert!(session
        .report(Diagnostic::error().with_message("third"), source_id)
        .is_err());

    assert_eq!(
        messages(&session),
        [
            (Severity::Warning, "first".to_owned()),
            (Severity::Warning, "second".to_owned()),
            (Severity::Error, "third".to_owned()),
        ]
    );
}

#[test]
fn emit_debug() {
    let mut out = vec![];
    write_program(&returning(2), Emit::Debug, &mut out).unwrap();

    insta::assert_snapshot!(String::from_utf8(out).unwrap().trim_end(), @r###"
    Program {
        function: Function {
            statement: Return(
                IntLiteral(
                    2,
                ),
            ),
        },
    }
    "###);
}

#[test]
fn emit_json() {
    let mut out = vec![];
    write_program(&returning(-7), Emit::Json, &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "{\n  \"function\": {\n    \"statement\": {\n      \"Return\": {\n        \"IntLiteral\": -7\n      }\n    }\n  }\n}\n"
    );
}

#[test]
fn cli_definition() {
    Cli::command().debug_assert();
}

#[test]
fn cli_parse_inline() {
    let cli = Cli::try_parse_from(["minic", "parse", "-s", "int main() { return 0 1; }"]).unwrap();

    let Command::Parse {
        input,
        source,
        emit,
    } = cli.command;
    assert_eq!(input, "int main() { return 0 1; }");
    assert!(source);
    assert_eq!(emit, Emit::Debug);
}

#[test]
fn cli_emit_json() {
    let cli = Cli::try_parse_from(["minic", "parse", "main.c", "--emit", "json"]).unwrap();

    let Command::Parse { source, emit, .. } = cli.command;
    assert!(!source);
    assert_eq!(emit, Emit::Json);
}
