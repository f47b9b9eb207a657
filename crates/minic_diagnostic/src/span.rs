use std::ops::Range;

/// A half-open byte range into a source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A zero-width span at `pos`.
    pub fn empty(pos: usize) -> Self {
        Self::new(pos, pos)
    }

    /// The smallest span covering both `self` and `other`.
    #[must_use]
    pub fn to(self, other: Span) -> Self {
        Self::new(self.start.min(other.start), self.end.max(other.end))
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl IntoIterator for Span {
    type Item = usize;
    type IntoIter = Range<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.start..self.end
    }
}

pub trait AsSpan {
    fn as_span(&self) -> Span;
}

impl AsSpan for Span {
    fn as_span(&self) -> Span {
        *self
    }
}

impl AsSpan for Range<usize> {
    fn as_span(&self) -> Span {
        Span::new(self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::Span;

    #[test]
    fn join() {
        let a = Span::new(4, 6);
        let b = Span::new(10, 11);
        assert_eq!(a.to(b), Span::new(4, 11));
        assert_eq!(b.to(a), Span::new(4, 11));
    }

    #[test]
    fn empty_span() {
        let span = Span::empty(7);
        assert!(span.is_empty());
        assert_eq!(span.len(), 0);
    }

    #[test]
    fn iterates_positions() {
        let lines: Vec<usize> = Span::new(2, 5).into_iter().collect();
        assert_eq!(lines, [2, 3, 4]);
        assert_eq!(Span::empty(3).into_iter().count(), 0);
    }
}
