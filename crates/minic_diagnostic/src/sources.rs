use std::path::Path;

/// A collection of source files addressable by id.
pub trait Sources {
    type SourceId: Copy + Eq + std::hash::Hash;
    type Source: Source;

    fn get_source(&self, id: Self::SourceId) -> Option<&Cached<Self::Source>>;
}

pub trait Source {
    fn name_str(&self) -> &str;
    fn path(&self) -> Option<&Path>;

    fn source_str(&self) -> &str;
}

impl<S: Source> Sources for Vec<Cached<S>> {
    type SourceId = usize;
    type Source = S;

    fn get_source(&self, id: Self::SourceId) -> Option<&Cached<Self::Source>> {
        self.get(id)
    }
}

/// A named source that was never read from disk.
impl Source for (String, String) {
    fn name_str(&self) -> &str {
        &self.0
    }

    fn path(&self) -> Option<&Path> {
        None
    }

    fn source_str(&self) -> &str {
        &self.1
    }
}

/// A source together with the byte offsets of its line breaks.
#[derive(Debug, Clone)]
pub struct Cached<S: Source> {
    source: S,
    line_breaks: Vec<usize>,
}

impl<S: Source> Cached<S> {
    pub fn new(source: S) -> Self {
        let line_breaks = source
            .source_str()
            .bytes()
            .enumerate()
            .filter_map(|(i, byte)| (byte == b'\n').then_some(i))
            .collect();

        Self {
            source,
            line_breaks,
        }
    }

    /// One-based line and column of `byte`.
    pub fn byte_to_line_col(&self, byte: usize) -> Option<(usize, usize)> {
        let line = self.byte_to_line_index(byte)?;
        let col = byte - self.line_to_byte(line)?;

        Some((line + 1, col + 1))
    }

    /// Zero-based line index of `byte`. The end of the source is a valid position.
    pub fn byte_to_line_index(&self, byte: usize) -> Option<usize> {
        if byte > self.source_str().len() {
            return None;
        }

        Some(self.line_breaks.partition_point(|&brk| brk < byte))
    }

    pub fn line_to_byte(&self, line: usize) -> Option<usize> {
        match line {
            0 => Some(0),
            _ => self.line_breaks.get(line - 1).map(|&brk| brk + 1),
        }
    }

    /// The text of a line, without its line terminator.
    pub fn line_str(&self, line: usize) -> Option<&str> {
        let start = self.line_to_byte(line)?;
        let end = self
            .line_breaks
            .get(line)
            .copied()
            .unwrap_or(self.source_str().len());

        let s = &self.source_str()[start..end];
        Some(s.strip_suffix('\r').unwrap_or(s))
    }

    pub fn num_lines(&self) -> usize {
        self.line_breaks.len() + 1
    }
}

impl<S: Source> Source for Cached<S> {
    fn name_str(&self) -> &str {
        self.source.name_str()
    }

    fn path(&self) -> Option<&Path> {
        self.source.path()
    }

    fn source_str(&self) -> &str {
        self.source.source_str()
    }
}

#[cfg(test)]
mod tests {
    use super::Cached;

    fn cached(s: &str) -> Cached<(String, String)> {
        Cached::new(("test.c".to_owned(), s.to_owned()))
    }

    #[test]
    fn line_index() {
        let src = cached("");
        assert_eq!(src.byte_to_line_index(0), Some(0));
        assert_eq!(src.byte_to_line_index(1), None);

        let src = cached("int\nmain");
        assert_eq!(src.byte_to_line_index(0), Some(0));
        assert_eq!(src.byte_to_line_index(3), Some(0));
        assert_eq!(src.byte_to_line_index(4), Some(1));
        assert_eq!(src.byte_to_line_index(8), Some(1));
        assert_eq!(src.byte_to_line_index(9), None);
    }

    #[test]
    fn line_col() {
        let src = cached("int main()\n{ return 0 2; }");
        assert_eq!(src.byte_to_line_col(0), Some((1, 1)));
        assert_eq!(src.byte_to_line_col(4), Some((1, 5)));
        assert_eq!(src.byte_to_line_col(11), Some((2, 1)));
        assert_eq!(src.byte_to_line_col(13), Some((2, 3)));
    }

    #[test]
    fn line_text() {
        let src = cached("{\r\n  return\n}\n");
        assert_eq!(src.num_lines(), 4);
        assert_eq!(src.line_str(0), Some("{"));
        assert_eq!(src.line_str(1), Some("  return"));
        assert_eq!(src.line_str(2), Some("}"));
        assert_eq!(src.line_str(3), Some(""));
        assert_eq!(src.line_str(4), None);
    }

    #[test]
    fn line_start() {
        let src = cached("\nx\n");
        assert_eq!(src.line_to_byte(0), Some(0));
        assert_eq!(src.line_to_byte(1), Some(1));
        assert_eq!(src.line_to_byte(2), Some(3));
        assert_eq!(src.line_to_byte(3), None);
    }
}
