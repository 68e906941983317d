//! Structural parser.
//!
//! Turns lexed lines into a [`Program`]. Word 0 decides the statement kind;
//! every word then goes through the classifier chain. `{` opens a nested
//! program on the block stack and `}` closes it, attaching it as the
//! `CodeBlock` token of the line that opened it. A line is appended to the
//! level that was innermost when the line started, so a block-opening line
//! lands one level outside its own body.
use std::rc::Rc;

use gb_ir::{Line, ParseOptions, Program, Token};
use gb_lexer::{HEADER_MACROS, LexedLine, Word, keyword};
use gb_syntax::words::is_plain_text;
use gb_syntax::{DiagnosticKind, GbError};

use crate::classify::{classify_literal, parse_cast, parse_definition, parse_invocation};
use crate::expr::{EQUATION_DELIMITER, EquationBuilder, LOGICAL_DELIMITER, LogicalBuilder};

/// Parse result.
pub struct ParseResult {
    pub program: Program,
    pub diagnostics: Vec<GbError>,
}

struct BlockFrame {
    program: Program,
    line: usize,
    word: usize,
    // Opened by a line that failed to parse; dropped on close.
    orphan: bool,
}

enum Region {
    None,
    Equation(EquationBuilder, usize),
    Logical(LogicalBuilder, usize),
}

/// GoldByte parser.
pub struct Parser<'a> {
    lines: &'a [LexedLine<'a>],
    options: ParseOptions,
    root: Program,
    blocks: Vec<BlockFrame>,
    header_open: bool,
    diagnostics: Vec<GbError>,
}

impl<'a> Parser<'a> {
    pub fn new(lines: &'a [LexedLine<'a>], options: ParseOptions) -> Self {
        Self {
            lines,
            options,
            root: Program::new(),
            blocks: Vec::new(),
            header_open: true,
            diagnostics: Vec::new(),
        }
    }

    /// Parse every line and return the program plus diagnostics.
    pub fn parse(mut self) -> ParseResult {
        for lexed in self.lines {
            let depth = self.blocks.len();
            let result = self.parse_line(lexed);
            let is_header = lexed
                .words
                .first()
                .is_some_and(|w| HEADER_MACROS.contains(w.text));
            if !is_header {
                self.header_open = false;
            }
            match result {
                Ok(Some(line)) => self.level_mut(depth).lines.push(line),
                Ok(None) => {}
                Err(err) => {
                    self.diagnostics.push(err);
                    if lexed.words.last().is_some_and(|w| w.text == "{")
                        && self.options.allow_multiline
                    {
                        self.open_block(lexed.number, lexed.words.len() - 1, true);
                    }
                }
            }
        }

        if let Some(frame) = self.blocks.last() {
            let (line, word) = (frame.line, frame.word);
            self.diagnostics
                .push(GbError::parse(DiagnosticKind::UnfinishedCodeBlock, line, word));
        }

        ParseResult {
            program: self.root,
            diagnostics: self.diagnostics,
        }
    }

    fn level_mut(&mut self, depth: usize) -> &mut Program {
        match depth.checked_sub(1).and_then(|i| self.blocks.get_mut(i)) {
            Some(frame) => &mut frame.program,
            None => &mut self.root,
        }
    }

    fn open_block(&mut self, line: usize, word: usize, orphan: bool) {
        self.blocks.push(BlockFrame {
            program: Program::new(),
            line,
            word,
            orphan,
        });
    }

    fn close_block(&mut self, line: usize, word: usize) -> Result<(), GbError> {
        let Some(frame) = self.blocks.pop() else {
            return Err(GbError::parse(DiagnosticKind::UnexpectedClosingBrace, line, word));
        };
        if frame.orphan {
            return Ok(());
        }
        let depth = self.blocks.len();
        let owner = self
            .level_mut(depth)
            .lines
            .last_mut()
            .filter(|l| owns_block(l))
            .ok_or_else(|| GbError::parse(DiagnosticKind::InvalidBlock, frame.line, frame.word))?;
        owner.push(Token::CodeBlock(Rc::new(frame.program)), frame.word);
        Ok(())
    }

    fn parse_line(&mut self, lexed: &LexedLine<'a>) -> Result<Option<Line>, GbError> {
        let number = lexed.number;
        let mut line = Line::new(number);
        let mut region = Region::None;
        let last = lexed.words.len().saturating_sub(1);

        for word in &lexed.words {
            let at = |kind: DiagnosticKind| GbError::parse(kind, number, word.index);
            let text = word.text;

            match &mut region {
                Region::Equation(builder, start) => {
                    let start = *start;
                    if let Some(eq) = builder.feed(text).map_err(at)? {
                        line.push(Token::Equation(eq), start);
                        region = Region::None;
                    }
                    continue;
                }
                Region::Logical(builder, start) => {
                    let start = *start;
                    if let Some(expr) = builder.feed(text).map_err(at)? {
                        line.push(Token::LogicalExpression(expr), start);
                        region = Region::None;
                    }
                    continue;
                }
                Region::None => {}
            }

            if word.index == 0 && is_plain_text(text) {
                line.push(self.statement_head(word, number)?, 0);
                continue;
            }
            if let Some(call) = parse_invocation(text).map_err(at)? {
                line.push(Token::FunctionInvocation(call), word.index);
                continue;
            }
            if text == "{" {
                if !self.options.allow_multiline {
                    return Err(at(DiagnosticKind::MultilineDisabled));
                }
                if word.index != last {
                    return Err(GbError::parse(
                        DiagnosticKind::UnexpectedToken(lexed.words[last].text.to_string()),
                        number,
                        last,
                    ));
                }
                self.open_block(number, word.index, false);
                continue;
            }
            if text == "}" {
                if word.index != 0 {
                    return Err(at(DiagnosticKind::UnexpectedToken(text.to_string())));
                }
                if last != 0 {
                    return Err(at(DiagnosticKind::ClosingBraceNotAlone));
                }
                self.close_block(number, word.index)?;
                return Ok(None);
            }
            if let Some(rest) = text.strip_prefix(LOGICAL_DELIMITER) {
                let mut builder = LogicalBuilder::default();
                match builder.feed(rest).map_err(at)? {
                    Some(expr) => line.push(Token::LogicalExpression(expr), word.index),
                    None => region = Region::Logical(builder, word.index),
                }
                continue;
            }
            if let Some(rest) = text.strip_prefix(EQUATION_DELIMITER) {
                let mut builder = EquationBuilder::default();
                match builder.feed(rest).map_err(at)? {
                    Some(eq) => line.push(Token::Equation(eq), word.index),
                    None => region = Region::Equation(builder, word.index),
                }
                continue;
            }
            if let Some(cast) = parse_cast(text).map_err(at)? {
                line.push(cast, word.index);
                continue;
            }
            if let Some(def) = parse_definition(text).map_err(at)? {
                line.push(Token::FunctionDefinition(def), word.index);
                continue;
            }
            match classify_literal(text) {
                Some(token) => line.push(token, word.index),
                None => return Err(at(DiagnosticKind::UnexpectedToken(text.to_string()))),
            }
        }

        match region {
            Region::Equation(..) => {
                return Err(GbError::parse(DiagnosticKind::UnfinishedEquation, number, last));
            }
            Region::Logical(..) => {
                return Err(GbError::parse(
                    DiagnosticKind::UnfinishedLogicalExpression,
                    number,
                    last,
                ));
            }
            Region::None => {}
        }

        if line.is_empty() {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Word 0 as a keyword or macro name.
    fn statement_head(&self, word: &Word<'a>, number: usize) -> Result<Token, GbError> {
        if let Some(kw) = keyword(word.text) {
            if kw.opens_block() && !self.options.allow_multiline {
                return Err(GbError::parse(DiagnosticKind::MultilineDisabled, number, 0));
            }
            return Ok(Token::Keyword(kw));
        }
        let in_header = self.blocks.is_empty() && self.header_open;
        if HEADER_MACROS.contains(word.text) && !in_header {
            return Err(GbError::parse(DiagnosticKind::HeaderMacroMisplaced, number, 0));
        }
        Ok(Token::Macro(word.text.to_string()))
    }
}

fn owns_block(line: &Line) -> bool {
    let opens = matches!(line.tokens.first(), Some(Token::Keyword(k)) if k.opens_block());
    opens && !line.tokens.iter().any(|t| matches!(t, Token::CodeBlock(_)))
}
