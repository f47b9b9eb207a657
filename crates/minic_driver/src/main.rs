mod cli;
mod compilation;
mod session;

#[cfg(test)]
mod tests;

use clap::Parser as _;
use cli::{Cli, Command};
use tracing_subscriber::EnvFilter;

use crate::compilation::{parse_source, write_program};
use crate::session::{ErrorsEmitted, PrettyDiagnosticEmitter, Session, SourceFile};

#[derive(thiserror::Error, Debug)]
pub enum DriverError {
    #[error("could not read {}: {source}", .path.display())]
    ReadInput {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("error writing syntax tree: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no source with id {0}")]
    UnknownSource(usize),

    #[error("errors while parsing")]
    HadErrors,
}

impl From<ErrorsEmitted> for DriverError {
    fn from(_: ErrorsEmitted) -> Self {
        DriverError::HadErrors
    }
}

pub type DriverResult<T> = Result<T, DriverError>;

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> DriverResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Parse {
            input,
            source,
            emit,
        } => {
            let source = if source {
                SourceFile::inline(input)
            } else {
                SourceFile::read(input)?
            };

            let mut session = Session::new(PrettyDiagnosticEmitter::default());
            let source_id = session.add_source(source);

            let program = parse_source(&mut session, source_id)?;

            let mut stdout = std::io::stdout().lock();
            write_program(&program, emit, &mut stdout)?;

            Ok(())
        }
    }
}
