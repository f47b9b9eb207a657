use std::path::{Path, PathBuf};

use minic_diagnostic::sources::{Cached, Source, Sources};
use minic_diagnostic::termcolor::{ColorChoice, StandardStream};
use minic_diagnostic::{Config, IntoDiagnostic, Severity};

use crate::{DriverError, DriverResult};

pub type SourceId = usize;
pub type SourceMap = Vec<Cached<SourceFile>>;
pub type Diagnostic = minic_diagnostic::Diagnostic<SourceMap>;

#[derive(Debug, Clone)]
pub struct SourceFile {
    pub name: String,
    pub path: Option<PathBuf>,
    pub text: String,
}

impl SourceFile {
    /// A program given directly on the command line.
    pub fn inline(text: impl Into<String>) -> Self {
        Self {
            name: "<inline>".to_owned(),
            path: None,
            text: text.into(),
        }
    }

    pub fn read(path: impl Into<PathBuf>) -> DriverResult<Self> {
        let path = path.into();
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(source) => return Err(DriverError::ReadInput { path, source }),
        };

        Ok(Self {
            name: path.display().to_string(),
            path: Some(path),
            text,
        })
    }
}

impl Source for SourceFile {
    fn name_str(&self) -> &str {
        &self.name
    }

    fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn source_str(&self) -> &str {
        &self.text
    }
}

pub trait DiagnosticEmitter {
    fn emit_diagnostic(&mut self, diagnostic: Diagnostic, sources: &SourceMap);
}

impl DiagnosticEmitter for Vec<Diagnostic> {
    fn emit_diagnostic(&mut self, diagnostic: Diagnostic, _sources: &SourceMap) {
        self.push(diagnostic);
    }
}

pub struct PrettyDiagnosticEmitter {
    pub stream: StandardStream,
    pub config: Config,
}

impl Default for PrettyDiagnosticEmitter {
    fn default() -> Self {
        Self {
            stream: StandardStream::stderr(ColorChoice::Auto),
            config: Config::default(),
        }
    }
}

impl DiagnosticEmitter for PrettyDiagnosticEmitter {
    fn emit_diagnostic(&mut self, diagnostic: Diagnostic, sources: &SourceMap) {
        if let Err(err) = diagnostic.write_to_stream(sources, &self.config, &mut self.stream) {
            tracing::error!(%err, "failed to emit diagnostic");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorsEmitted;

pub struct Session<D: DiagnosticEmitter> {
    pub sources: SourceMap,
    pub diagnostics: D,
}

impl<D: DiagnosticEmitter> Session<D> {
    pub fn new(diagnostics: D) -> Self {
        Self {
            sources: SourceMap::new(),
            diagnostics,
        }
    }

    pub fn add_source(&mut self, source: SourceFile) -> SourceId {
        self.sources.push(Cached::new(source));
        self.sources.len() - 1
    }

    pub fn source(&self, id: SourceId) -> Option<&Cached<SourceFile>> {
        self.sources.get_source(id)
    }

    /// Emits one diagnostic. Fails if it was an error.
    pub fn report(
        &mut self,
        diagnostic: impl IntoDiagnostic<SourceMap>,
        source_id: SourceId,
    ) -> Result<(), ErrorsEmitted> {
        let diagnostic = diagnostic.into_diagnostic(source_id);
        let severity = diagnostic.severity;

        self.diagnostics.emit_diagnostic(diagnostic, &self.sources);

        if severity < Severity::Error {
            Ok(())
        } else {
            Err(ErrorsEmitted)
        }
    }

    /// Emits a diagnostic that never fails the session.
    pub fn warn(&mut self, diagnostic: Diagnostic) {
        debug_assert!(diagnostic.severity < Severity::Error);
        self.diagnostics.emit_diagnostic(diagnostic, &self.sources);
    }

    /// Emits every diagnostic. Fails if any of them was an error.
    pub fn report_all<I>(&mut self, diagnostics: I, source_id: SourceId) -> Result<(), ErrorsEmitted>
    where
        I: IntoIterator,
        I::Item: IntoDiagnostic<SourceMap>,
    {
        let mut had_error = false;

        for diagnostic in diagnostics {
            had_error |= self.report(diagnostic, source_id).is_err();
        }

        if had_error {
            Err(ErrorsEmitted)
        } else {
            Ok(())
        }
    }
}
