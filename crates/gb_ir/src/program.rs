use crate::Token;

/// One statement. `words[i]` is the source word index of `tokens[i]`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Line {
    pub number: usize,
    pub tokens: Vec<Token>,
    pub words: Vec<usize>,
}

impl Line {
    pub fn new(number: usize) -> Self {
        Self {
            number,
            tokens: Vec::new(),
            words: Vec::new(),
        }
    }

    pub fn push(&mut self, token: Token, word: usize) {
        self.tokens.push(token);
        self.words.push(word);
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn word_of(&self, token_idx: usize) -> usize {
        self.words.get(token_idx).copied().unwrap_or(0)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Program {
    pub lines: Vec<Line>,
}

impl Program {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
