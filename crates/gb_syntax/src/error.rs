//!
//!

use std::fmt;

use crate::{DiagnosticKind, DiagnosticsFormatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Parse,
    Type,
    Macro,
    Interpreting,
    Thrown,
    Panic,
}

impl ErrorKind {
    pub fn label(self) -> &'static str {
        match self {
            ErrorKind::Parse => "PARSE",
            ErrorKind::Type => "TYPE",
            ErrorKind::Macro => "MACRO",
            ErrorKind::Interpreting => "INTERPRETING",
            ErrorKind::Thrown => "THROWN",
            ErrorKind::Panic => "PANIC",
        }
    }
}

/// A failure raised while parsing or running GoldByte code.
///
/// `line` and `word` are 0-based. `origin` names the source file the error
/// was raised in once it has crossed a library boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GbError {
    pub kind: ErrorKind,
    pub message: String,
    pub line: usize,
    pub word: usize,
    pub origin: Option<String>,
}

impl GbError {
    pub fn new(kind: ErrorKind, diag: DiagnosticKind, line: usize, word: usize) -> Self {
        Self::raw(kind, DiagnosticsFormatter::format(&diag), line, word)
    }

    pub fn raw(kind: ErrorKind, message: impl Into<String>, line: usize, word: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            line,
            word,
            origin: None,
        }
    }

    pub fn parse(diag: DiagnosticKind, line: usize, word: usize) -> Self {
        Self::new(ErrorKind::Parse, diag, line, word)
    }

    pub fn interpreting(diag: DiagnosticKind, line: usize, word: usize) -> Self {
        Self::new(ErrorKind::Interpreting, diag, line, word)
    }

    /// Tags the error with the file it came from. A tag that is already set
    /// is kept so the innermost file wins.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        if self.origin.is_none() {
            self.origin = Some(origin.into());
        }
        self
    }
}

impl fmt::Display for GbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::render_error(self))
    }
}

impl std::error::Error for GbError {}
