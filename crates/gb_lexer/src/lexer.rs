//! Word splitter.
//!
//! Splits source into lines of whitespace-delimited words. A `"` toggles
//! quoted mode, inside which spaces belong to the word; a word starting with
//! `//` ends the line. Words borrow from the input.
use gb_syntax::{DiagnosticKind, GbError};

/// One whitespace-delimited word and its 0-based position on the line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Word<'a> {
    pub text: &'a str,
    pub index: usize,
}

/// A source line that produced at least one word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexedLine<'a> {
    pub number: usize,
    pub words: Vec<Word<'a>>,
}

/// Lexing result.
pub struct LexResult<'a> {
    pub lines: Vec<LexedLine<'a>>,
    pub diagnostics: Vec<GbError>,
}

pub struct Lexer<'a> {
    input: &'a str,
    lines: Vec<LexedLine<'a>>,
    diagnostics: Vec<GbError>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            lines: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Run the lexer and return lines + diagnostics.
    pub fn lex(mut self) -> LexResult<'a> {
        self.lines.reserve(self.input.len().saturating_div(24).max(8));
        for (number, line) in self.input.split('\n').enumerate() {
            let words = self.split_line(line, number);
            if !words.is_empty() {
                self.lines.push(LexedLine { number, words });
            }
        }
        LexResult {
            lines: self.lines,
            diagnostics: self.diagnostics,
        }
    }

    fn split_line(&mut self, line: &'a str, number: usize) -> Vec<Word<'a>> {
        let mut words = Vec::new();
        let mut start: Option<usize> = None;
        let mut quoted = false;

        for (i, c) in line.char_indices() {
            if c == '"' {
                quoted = !quoted;
                start.get_or_insert(i);
                continue;
            }
            if !quoted && (c == ' ' || c == '\t' || c == '\r') {
                if let Some(s) = start.take() {
                    if self.push_word(&mut words, &line[s..i]) {
                        return words;
                    }
                }
                continue;
            }
            start.get_or_insert(i);
        }

        if quoted {
            self.diagnostics.push(GbError::parse(
                DiagnosticKind::UnterminatedString,
                number,
                words.len(),
            ));
        }
        if let Some(s) = start {
            self.push_word(&mut words, &line[s..]);
        }
        words
    }

    /// Returns true once a comment has been reached.
    fn push_word(&self, words: &mut Vec<Word<'a>>, text: &'a str) -> bool {
        if text.starts_with("//") {
            return true;
        }
        let index = words.len();
        words.push(Word { text, index });
        false
    }
}
