/// An iterator that can look at its next item without consuming it.
pub trait Peek: Iterator {
    fn peek(&self) -> Option<Self::Item>;

    fn eat<P>(&mut self, pat: P) -> bool
    where
        Self::Item: PartialEq<P>,
    {
        self.eat_if(|item| *item == pat)
    }

    fn eat_if(&mut self, f: impl FnOnce(&Self::Item) -> bool) -> bool {
        match self.peek() {
            Some(item) if f(&item) => {
                self.next();
                true
            }
            _ => false,
        }
    }

    /// Consumes items while `f` holds, returning how many were eaten.
    fn eat_while(&mut self, mut f: impl FnMut(&Self::Item) -> bool) -> usize {
        let mut count = 0;
        while self.eat_if(&mut f) {
            count += 1;
        }
        count
    }
}

impl Peek for std::str::Chars<'_> {
    fn peek(&self) -> Option<Self::Item> {
        self.clone().next()
    }
}

#[cfg(test)]
mod tests {
    use super::Peek;

    #[test]
    fn eat_only_matching() {
        let mut chars = "ab".chars();
        assert!(!chars.eat('b'));
        assert!(chars.eat('a'));
        assert!(chars.eat('b'));
        assert_eq!(chars.peek(), None);
    }

    #[test]
    fn eat_while_counts() {
        let mut chars = "123abc".chars();
        assert_eq!(chars.eat_while(char::is_ascii_digit), 3);
        assert_eq!(chars.as_str(), "abc");
        assert_eq!(chars.eat_while(char::is_ascii_digit), 0);
    }
}
