//! File and text front door: normalize, split into words, parse.

use std::fs;

use gb_ir::{CompiledUnit, Frontend, ParseOptions, Program};
use gb_lexer::{Lexer, normalize_source};
use gb_parser::Parser;
use gb_syntax::{GbError, SourceFile};

pub struct Driver;

impl Frontend for Driver {
    fn compile_text(
        &self,
        path: &str,
        input: &str,
        options: ParseOptions,
    ) -> Result<CompiledUnit, GbError> {
        let parsed = self.parse_text(path, input, options);
        Ok(CompiledUnit {
            text: parsed.source.text,
            program: parsed.program,
            diagnostics: parsed.diagnostics,
        })
    }
}

/// One word with its 0-based position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexedWord {
    pub line: usize,
    pub word: usize,
    pub text: String,
}

#[derive(Clone, Debug)]
pub struct LexedFile {
    pub path: String,
    pub source: SourceFile,
    pub words: Vec<LexedWord>,
    pub diagnostics: Vec<GbError>,
}

#[derive(Clone, Debug)]
pub struct ParsedFile {
    pub path: String,
    pub source: SourceFile,
    pub program: Program,
    /// Lexer diagnostics first, then parser diagnostics.
    pub diagnostics: Vec<GbError>,
}

impl ParsedFile {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

fn read_source(path: &str) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| format!("Failed to read file {path}: {e}"))
}

impl Driver {
    pub fn new() -> Self {
        Self
    }

    pub fn lex_text(&self, path: &str, input: &str) -> LexedFile {
        let normalized = normalize_source(input);
        let source = SourceFile::new(path, normalized.text);
        let lex = Lexer::new(source.text.as_str()).lex();
        let words = lex
            .lines
            .iter()
            .flat_map(|line| {
                line.words.iter().map(move |w| LexedWord {
                    line: line.number,
                    word: w.index,
                    text: w.text.to_string(),
                })
            })
            .collect();
        let diagnostics = lex.diagnostics;

        LexedFile {
            path: path.to_string(),
            source,
            words,
            diagnostics,
        }
    }

    pub fn parse_file(&self, path: &str, options: ParseOptions) -> Result<ParsedFile, String> {
        let input = read_source(path)?;
        Ok(self.parse_text(path, &input, options))
    }

    pub fn parse_text(&self, path: &str, input: &str, options: ParseOptions) -> ParsedFile {
        let normalized = normalize_source(input);
        let source = SourceFile::new(path, normalized.text);
        let (program, diagnostics) = {
            let lex = Lexer::new(source.text.as_str()).lex();
            let parse = Parser::new(&lex.lines, options).parse();
            let mut diagnostics = lex.diagnostics;
            diagnostics.extend(parse.diagnostics);
            (parse.program, diagnostics)
        };

        ParsedFile {
            path: path.to_string(),
            source,
            program,
            diagnostics,
        }
    }
}

impl Default for Driver {
    fn default() -> Self {
        Self::new()
    }
}
