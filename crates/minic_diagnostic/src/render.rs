use std::collections::HashMap;
use std::io;

use termcolor::{ColorSpec, WriteColor};
use unicode_width::UnicodeWidthStr;

use super::sources::{Cached, Source, Sources};
use super::{Config, Diagnostic, Severity, SnippetKind};
use crate::span::Span;

const TAB: &str = "    ";

impl<S: Sources> Diagnostic<S> {
    pub fn write_to_stream(
        &self,
        sources: &S,
        config: &Config,
        stream: &mut impl WriteColor,
    ) -> io::Result<()> {
        DiagnosticWriter {
            diagnostic: self,
            sources,
            stream,
            config,
        }
        .draw_all()
    }
}

struct DiagnosticWriter<'stream, 'a, W: WriteColor, S: Sources> {
    diagnostic: &'a Diagnostic<S>,
    sources: &'a S,

    stream: &'stream mut W,
    config: &'a Config,
}

impl<'a, W: WriteColor, S: Sources> DiagnosticWriter<'_, 'a, W, S> {
    fn draw_all(mut self) -> io::Result<()> {
        self.draw_header()?;

        let by_source = self.snippets_by_source()?;
        if by_source.is_empty() {
            writeln!(self.stream)?;
        }

        for (source, snippets) in by_source {
            let num_lines = source.num_lines();
            let context = self.config.context_size;

            let groups = get_overlapping_groups(snippets, |s| {
                Span::new(
                    s.line.saturating_sub(context),
                    (s.line + 1 + context).min(num_lines),
                )
            });

            for (snippets, lines) in groups {
                self.draw_group(source, &snippets, lines)?;
            }
        }

        Ok(())
    }

    fn draw_header(&mut self) -> io::Result<()> {
        self.stream.set_color(self.severity_color())?;

        if let Some(id) = &self.diagnostic.id {
            write!(self.stream, "[{id}] ")?;
        }

        write!(self.stream, "{}:", self.diagnostic.severity.as_str())?;
        self.stream.reset()?;

        match &self.diagnostic.message {
            Some(message) => writeln!(self.stream, " {message}"),
            None => writeln!(self.stream),
        }
    }

    fn draw_group(
        &mut self,
        source: &Cached<S::Source>,
        snippets: &[SnippetData],
        lines: Span,
    ) -> io::Result<()> {
        let line_num_width = digits(lines.end);

        // groups are never empty
        let anchor = snippets
            .iter()
            .find(|s| s.kind == SnippetKind::Primary)
            .unwrap_or(&snippets[0]);
        let col_chars = source
            .line_str(anchor.line)
            .and_then(|line_str| line_str.get(..anchor.col))
            .map_or(anchor.col, |before| before.chars().count());
        let (line_num, col_num) = (anchor.line + 1, col_chars + 1);

        self.stream.set_color(&self.config.subtle)?;
        write!(self.stream, "In {}:{line_num}:{col_num}", source.name_str())?;
        if let Some(path) = source.path() {
            write!(self.stream, " ({}:{line_num}:{col_num})", path.display())?;
        }
        writeln!(self.stream)?;
        self.stream.reset()?;

        for line in lines {
            let Some(line_str) = source.line_str(line) else {
                break;
            };

            self.draw_gutter(Some(line + 1), line_num_width)?;
            if line_str.is_empty() {
                writeln!(self.stream)?;
            } else {
                writeln!(self.stream, " {}", line_str.replace('\t', TAB))?;
            }

            for snippet in snippets.iter().filter(|s| s.line == line) {
                self.draw_underline(line_str, snippet, line_num_width)?;
            }
        }

        writeln!(self.stream)
    }

    fn draw_underline(
        &mut self,
        line_str: &str,
        snippet: &SnippetData,
        line_num_width: usize,
    ) -> io::Result<()> {
        self.draw_gutter(None, line_num_width)?;

        // snippets spanning several lines are underlined to the end of their first line
        let start = snippet.col.min(line_str.len());
        let end = (start + snippet.bytes.len()).min(line_str.len());

        let offset = str_width(&line_str[..start]);
        let width = str_width(&line_str[start..end]).max(1);

        let underline = match snippet.kind {
            SnippetKind::Primary => self.config.underline_primary,
            SnippetKind::Secondary => self.config.underline_secondary,
        };

        self.stream.set_color(self.snippet_color(snippet.kind))?;
        write!(
            self.stream,
            " {:offset$}{}",
            "",
            underline.repeat(width)
        )?;
        if !snippet.label.is_empty() {
            write!(self.stream, "{}{}", self.config.underline_after, snippet.label)?;
        }
        self.stream.reset()?;

        writeln!(self.stream)
    }

    fn draw_gutter(&mut self, line: Option<usize>, line_num_width: usize) -> io::Result<()> {
        self.stream.set_color(&self.config.subtle)?;

        match line {
            Some(line) => write!(self.stream, "{line:>line_num_width$} ")?,
            None => write!(self.stream, "{:>line_num_width$} ", "")?,
        }
        write!(self.stream, "{}", self.config.gutter)?;

        self.stream.reset()
    }

    fn snippets_by_source(&self) -> io::Result<Vec<(&'a Cached<S::Source>, Vec<SnippetData<'a>>)>> {
        let mut order = vec![];
        let mut by_id: HashMap<S::SourceId, usize> = HashMap::new();

        let diagnostic = self.diagnostic;
        for snippet in &diagnostic.snippets {
            let source = self
                .sources
                .get_source(snippet.source_id)
                .ok_or_else(|| invalid_input("snippet refers to an unknown source"))?;

            let (line, col) = source
                .byte_to_line_col(snippet.span.start)
                .ok_or_else(|| invalid_input("snippet span is out of bounds"))?;

            let index = *by_id.entry(snippet.source_id).or_insert_with(|| {
                order.push((source, vec![]));
                order.len() - 1
            });

            order[index].1.push(SnippetData {
                label: &snippet.label,
                kind: snippet.kind,

                bytes: snippet.span,
                line: line - 1,
                col: col - 1,
            });
        }

        Ok(order)
    }

    fn severity_color(&self) -> &'a ColorSpec {
        match self.diagnostic.severity {
            Severity::Warning => &self.config.warning_color,
            Severity::Error => &self.config.error_color,
        }
    }

    fn snippet_color(&self, kind: SnippetKind) -> &'a ColorSpec {
        match kind {
            SnippetKind::Primary => self.severity_color(),
            SnippetKind::Secondary => &self.config.emphasis,
        }
    }
}

#[derive(Clone)]
struct SnippetData<'a> {
    label: &'a str,
    kind: SnippetKind,

    bytes: Span,
    // zero-based, `col` in bytes
    line: usize,
    col: usize,
}

/// Sorts items by the start of their range and merges overlapping ranges into groups.
fn get_overlapping_groups<T, F>(mut items: Vec<T>, get_range: F) -> Vec<(Vec<T>, Span)>
where
    F: Fn(&T) -> Span,
{
    items.sort_by_key(|item| get_range(item).start);

    let mut groups: Vec<(Vec<T>, Span)> = vec![];

    for item in items {
        let range = get_range(&item);

        match groups.last_mut() {
            Some((group, group_range)) if range.start <= group_range.end => {
                group_range.end = group_range.end.max(range.end);
                group.push(item);
            }
            _ => groups.push((vec![item], range)),
        }
    }

    groups
}

fn invalid_input(msg: &str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, msg)
}

fn digits(n: usize) -> usize {
    n.max(1).ilog10() as usize + 1
}

fn str_width(s: &str) -> usize {
    let num_tabs = s.chars().filter(|&ch| ch == '\t').count();
    s.width() + num_tabs * TAB.len()
}
