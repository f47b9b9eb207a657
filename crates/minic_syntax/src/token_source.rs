use crate::token::Token;

/// A forward-only supply of tokens.
///
/// Every token iterator is a token source; `None` means the input is exhausted.
pub trait TokenSource {
    fn next_token(&mut self) -> Option<Token>;
}

impl<I: Iterator<Item = Token>> TokenSource for I {
    fn next_token(&mut self) -> Option<Token> {
        self.next()
    }
}

/// The token source produced by the lexer.
#[derive(Debug, Clone)]
pub struct TokenIter {
    tokens: Vec<Token>,
    position: usize,
}

impl TokenIter {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Number of tokens taken so far.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> &[Token] {
        &self.tokens[self.position..]
    }
}

impl From<Vec<Token>> for TokenIter {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}

impl Iterator for TokenIter {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.tokens.get(self.position)?.clone();
        self.position += 1;
        Some(token)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining().len();
        (len, Some(len))
    }
}

impl ExactSizeIterator for TokenIter {}
