use super::lex::*;
use super::token::*;
use super::Position;

/// ## Token sequence with a single cursor
///
/// The sequence is built once by [`lex`](super::lex) and never changes
/// afterwards. Only the cursor moves.

#[derive(Debug, PartialEq, Clone, Default)]
pub struct Sequence {
    tokens: Vec<Token>,
    cursor: usize,
}

impl Sequence {
    pub fn new(tokens: Vec<Token>) -> Sequence {
        Sequence { tokens, cursor: 0 }
    }

    pub fn from_str(s: &str) -> Sequence {
        Sequence::new(lex(s))
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn current(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }

    pub fn has_next(&self) -> bool {
        self.cursor + 1 < self.tokens.len()
    }

    /// Move to the next token. At the end the cursor stays put.
    pub fn advance(&mut self) -> bool {
        if self.has_next() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    pub fn retreat(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    pub fn index(&self) -> usize {
        self.cursor
    }

    pub fn seek(&mut self, index: usize) {
        debug_assert!(index < self.tokens.len().max(1));
        self.cursor = index;
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Lookup by 1-based position.
    pub fn get(&self, position: Position) -> Option<&Token> {
        position.checked_sub(1).and_then(|i| self.tokens.get(i))
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

impl std::fmt::Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let words: Vec<&str> = self.tokens.iter().map(|t| t.text()).collect();
        write!(f, "{}", words.join(" "))
    }
}
