//! Tree-walking executor.
//!
//! A line is folded token by token into a [`Task`](task::Task); once the
//! line is exhausted the task runs. Nested programs (block bodies, function
//! bodies, struct bodies) re-enter [`Runtime::exec_program`] with a derived
//! [`ExecContext`].

mod call;
mod resolve;
mod task;

use gb_ir::{NamespacePath, Program, ValueType};
use gb_syntax::{DiagnosticKind, ErrorKind, GbError};

use crate::Runtime;
use crate::runtime::Flow;
use crate::storage::Scope;

/// Why a statement stopped before finishing normally.
pub(crate) enum Halt {
    Exit,
    Error(GbError),
}

impl From<GbError> for Halt {
    fn from(err: GbError) -> Self {
        Halt::Error(err)
    }
}

pub(crate) type Exec<T> = Result<T, Halt>;

/// Where a program runs.
#[derive(Clone, Debug)]
pub struct ExecContext {
    pub scope: Scope,
    pub namespace: NamespacePath,
    /// Directly inside a function body. Declarations here are not prefixed
    /// with the namespace.
    pub in_function: bool,
    pub return_type: ValueType,
}

impl ExecContext {
    pub fn global() -> Self {
        Self {
            scope: Scope::Global,
            namespace: NamespacePath::root(),
            in_function: false,
            return_type: ValueType::Void,
        }
    }

    /// Context for a namespace body (or struct instance) named `path`.
    pub fn namespaced(&self, path: NamespacePath) -> Self {
        Self {
            namespace: path,
            in_function: false,
            ..self.clone()
        }
    }
}

/// The error family a diagnostic is reported under.
pub(crate) fn error_kind(diag: &DiagnosticKind) -> ErrorKind {
    match diag {
        DiagnosticKind::TypeMismatch { .. }
        | DiagnosticKind::ArgumentCountMismatch { .. }
        | DiagnosticKind::InvalidArgumentType { .. }
        | DiagnosticKind::InvalidVariableType(_)
        | DiagnosticKind::NotANumber(_)
        | DiagnosticKind::ExpectedNumberInComparison
        | DiagnosticKind::ExpectedBool
        | DiagnosticKind::VoidReturnWithValue
        | DiagnosticKind::MissingReturnValue
        | DiagnosticKind::EntryPointType(_) => ErrorKind::Type,
        DiagnosticKind::UnknownMacro(_)
        | DiagnosticKind::MacroDisabled(_)
        | DiagnosticKind::InvalidMacroArgument
        | DiagnosticKind::ExpectedMacroArgument { .. } => ErrorKind::Macro,
        _ => ErrorKind::Interpreting,
    }
}

pub(crate) fn fail(diag: DiagnosticKind, line: usize, word: usize) -> GbError {
    GbError::new(error_kind(&diag), diag, line, word)
}

impl Runtime {
    /// Runs `program` to completion under `ctx`.
    pub fn execute(&mut self, program: &Program, ctx: &ExecContext) -> Result<Flow, GbError> {
        match self.exec_program(program, ctx) {
            Ok(flow) => Ok(flow),
            Err(Halt::Exit) => Ok(Flow::Exit),
            Err(Halt::Error(err)) => Err(err),
        }
    }

    pub(crate) fn exec_program(&mut self, program: &Program, ctx: &ExecContext) -> Exec<Flow> {
        for line in &program.lines {
            let flow = self.exec_line(line, ctx)?;
            if self.halted {
                return Err(Halt::Exit);
            }
            if !matches!(flow, Flow::None) {
                return Ok(flow);
            }
        }
        Ok(Flow::None)
    }
}
