use gb_ir::{Program, QualifiedName, Value, ValueType};
use gb_syntax::{DiagnosticKind, GbError};

use super::config::Flow;
use super::core::Runtime;
use crate::interpreter::{ExecContext, Halt, fail};

const ENTRY_POINT: &str = "main";

impl Runtime {
    /// Parses `code` with the configured frontend.
    pub fn compile(&self, code: &str, origin: &str) -> Result<Program, GbError> {
        let frontend = self.frontend.as_ref().ok_or_else(|| {
            GbError::interpreting(DiagnosticKind::Raw("No frontend configured.".into()), 0, 0)
        })?;
        frontend
            .compile_text(origin, code, self.config.parse_options())?
            .into_program()
    }

    /// Parses and runs `code` at the top level without calling `main`.
    /// Definitions stay in storage, so this is also the REPL entry.
    ///
    /// Outside a library include, a non-empty `origin` becomes the entry
    /// path that relative `USE` paths resolve against, and an `exit` from
    /// an earlier run no longer applies.
    pub fn load(&mut self, code: &str, origin: &str) -> Result<(), GbError> {
        if self.library_stack.is_empty() {
            self.halted = false;
            if !origin.is_empty() {
                self.set_entry_path(origin);
            }
        }
        let program = self.compile(code, origin)?;
        self.run_nested(&program, &ExecContext::global())
    }

    /// Runs `program` on behalf of a macro or library. An `exit` inside
    /// marks the runtime halted so every caller unwinds.
    pub fn run_nested(&mut self, program: &Program, ctx: &ExecContext) -> Result<(), GbError> {
        if let Flow::Exit = self.execute(program, ctx)? {
            self.halted = true;
        }
        Ok(())
    }

    /// Runs the top level of `code`, then `main`. Returns the exit code.
    pub fn run(&mut self, code: &str, origin: &str) -> Result<i32, GbError> {
        self.load(code, origin)?;
        if self.halted || self.config.skip_main {
            return Ok(0);
        }
        self.call_main()
    }

    fn call_main(&mut self) -> Result<i32, GbError> {
        let function = self
            .storage
            .lookup_function(&QualifiedName::local(ENTRY_POINT), &[])
            .map_err(|diag| fail(diag, 0, 0))?;
        if function.return_type != ValueType::Number {
            return Err(fail(DiagnosticKind::EntryPointType(ENTRY_POINT.into()), 0, 0));
        }
        match self.run_function(function, Vec::new(), 0, 0) {
            Ok(Some(Value::Number(code))) => Ok(code as i32),
            Ok(_) | Err(Halt::Exit) => Ok(0),
            Err(Halt::Error(err)) => Err(err),
        }
    }

    /// [`run`](Self::run), reporting any error to the error handler.
    /// A failed program exits with 1.
    pub fn start(&mut self, code: &str, origin: &str) -> i32 {
        let status = match self.run(code, origin) {
            Ok(status) => status,
            Err(err) => {
                self.caps.error_handler.report(&err);
                1
            }
        };
        if self.config.show_exit_message {
            self.emit(&format!("Program exited with exit code: {status}\n"));
        }
        status
    }
}
