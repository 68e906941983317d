use std::rc::Rc;

use gb_ir::{NamespacePath, Value};
use gb_syntax::{DiagnosticKind, DiagnosticsFormatter, ErrorKind, GbError};
use indexmap::{IndexMap, IndexSet};

use super::Runtime;
use super::macros;
use crate::storage::Scope;

/// Everything a macro handler gets to see about its invocation.
#[derive(Clone, Debug)]
pub struct MacroCall {
    pub name: String,
    pub args: Vec<Value>,
    /// Source word of each argument.
    pub words: Vec<usize>,
    pub line: usize,
    pub word: usize,
    pub namespace: NamespacePath,
    pub scope: Scope,
}

impl MacroCall {
    /// A macro error reported as `NAME: message` at the macro word.
    pub fn error(&self, diag: DiagnosticKind) -> GbError {
        self.fail_with(DiagnosticsFormatter::format(&diag))
    }

    /// Same as [`error`](Self::error), pointing at argument `position`.
    pub fn error_at(&self, position: usize, diag: DiagnosticKind) -> GbError {
        let word = self.words.get(position).copied().unwrap_or(self.word);
        GbError::raw(
            ErrorKind::Macro,
            format!("{}: {}", self.name, DiagnosticsFormatter::format(&diag)),
            self.line,
            word,
        )
    }

    pub fn fail_with(&self, message: impl AsRef<str>) -> GbError {
        GbError::raw(
            ErrorKind::Macro,
            format!("{}: {}", self.name, message.as_ref()),
            self.line,
            self.word,
        )
    }

    pub fn arg(&self, position: usize) -> Option<&Value> {
        self.args.get(position)
    }

    /// Fails unless exactly `count` arguments were passed.
    pub fn expect_args(&self, count: usize) -> Result<(), GbError> {
        if self.args.len() != count {
            return Err(self.error(DiagnosticKind::ArgumentCountMismatch {
                expected: count,
                actual: self.args.len(),
            }));
        }
        Ok(())
    }
}

pub trait Macro {
    fn call(&self, rt: &mut Runtime, call: &MacroCall) -> Result<(), GbError>;
}

impl<F> Macro for F
where
    F: Fn(&mut Runtime, &MacroCall) -> Result<(), GbError>,
{
    fn call(&self, rt: &mut Runtime, call: &MacroCall) -> Result<(), GbError> {
        self(rt, call)
    }
}

pub type MacroFn = fn(&mut Runtime, &MacroCall) -> Result<(), GbError>;

pub struct MacroRegistry {
    entries: IndexMap<String, Rc<dyn Macro>>,
    disabled: IndexSet<String>,
}

impl MacroRegistry {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
            disabled: IndexSet::new(),
        }
    }

    /// Adds or replaces the handler for `name`.
    pub fn register(&mut self, name: &str, handler: impl Macro + 'static) {
        self.entries.insert(name.to_string(), Rc::new(handler));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn enable(&mut self, name: &str) -> Result<(), DiagnosticKind> {
        if !self.contains(name) {
            return Err(DiagnosticKind::UnknownMacro(name.to_string()));
        }
        self.disabled.shift_remove(name);
        Ok(())
    }

    pub fn disable(&mut self, name: &str) -> Result<(), DiagnosticKind> {
        if !self.contains(name) {
            return Err(DiagnosticKind::UnknownMacro(name.to_string()));
        }
        self.disabled.insert(name.to_string());
        Ok(())
    }

    pub fn is_disabled(&self, name: &str) -> bool {
        self.disabled.contains(name)
    }

    /// The handler for `name`, if it exists and is enabled.
    pub fn get(&self, name: &str) -> Result<Rc<dyn Macro>, DiagnosticKind> {
        let handler = self
            .entries
            .get(name)
            .ok_or_else(|| DiagnosticKind::UnknownMacro(name.to_string()))?;
        if self.disabled.contains(name) {
            return Err(DiagnosticKind::MacroDisabled(name.to_string()));
        }
        Ok(Rc::clone(handler))
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

impl Default for MacroRegistry {
    fn default() -> Self {
        Self::new()
    }
}

pub trait MacroProvider {
    fn install(&self, registry: &mut MacroRegistry);
}

pub struct StdMacroProvider;

impl MacroProvider for StdMacroProvider {
    fn install(&self, registry: &mut MacroRegistry) {
        // storage
        registry.register("ASSIGN", macros::macro_assign as MacroFn);
        registry.register("set", macros::macro_assign as MacroFn);
        registry.register("MODULO", macros::macro_modulo as MacroFn);
        registry.register("RAND", macros::macro_rand as MacroFn);
        registry.register("DYN_VAR_MAKE", macros::macro_dyn_var_make as MacroFn);
        registry.register("DYN_VAR_READ", macros::macro_dyn_var_read as MacroFn);
        // console
        registry.register("PRINT", macros::macro_print as MacroFn);
        registry.register("PRINTLN", macros::macro_println as MacroFn);
        registry.register("INPUT", macros::macro_input as MacroFn);
        // registry
        registry.register("ENABLE", macros::macro_enable as MacroFn);
        registry.register("DISABLE", macros::macro_disable as MacroFn);
        // objects and libraries
        registry.register("NEW", macros::macro_new as MacroFn);
        registry.register("FREE", macros::macro_free as MacroFn);
        registry.register("USE", macros::macro_use as MacroFn);
        registry.register("use", macros::macro_use as MacroFn);
        // failures
        registry.register("ERROR", macros::macro_error as MacroFn);
        registry.register("THROW", macros::macro_throw as MacroFn);
        registry.register("PANIC", macros::macro_panic as MacroFn);

        registry.disabled.insert("DYN_VAR_MAKE".to_string());
        registry.disabled.insert("DYN_VAR_READ".to_string());
    }
}
