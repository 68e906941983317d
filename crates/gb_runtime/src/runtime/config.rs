//! Runtime configuration and result types.

use gb_ir::{ParseOptions, Value};

/// Runtime configuration options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// `if`, `while`, `func`, `namespace`, `struct` and braces.
    pub allow_multiline: bool,
    pub allow_libraries: bool,
    /// Print `Program exited with exit code: N` when `start` returns.
    pub show_exit_message: bool,
    /// Do not look up and call `main` after the top level ran.
    pub skip_main: bool,
    pub trace: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            allow_multiline: true,
            allow_libraries: true,
            show_exit_message: true,
            skip_main: false,
            trace: false,
        }
    }
}

impl RuntimeConfig {
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            allow_multiline: self.allow_multiline,
        }
    }
}

/// How execution of a program ended.
#[derive(Clone, Debug, PartialEq)]
pub enum Flow {
    None,
    Return(Option<Value>),
    Exit,
}
