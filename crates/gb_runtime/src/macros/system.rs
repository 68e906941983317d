use gb_ir::{NamespacePath, QualifiedName, SELF_SEGMENT, SEPARATOR, Value, ValueType};
use gb_syntax::{DiagnosticKind, ErrorKind, GbError};

use super::common::string_arg;
use crate::Runtime;
use crate::interpreter::ExecContext;
use crate::macro_registry::MacroCall;
use crate::modules;
use crate::storage::Scope;
use crate::util::value_to_string;

/// `ENABLE "NAME"`
pub fn macro_enable(rt: &mut Runtime, call: &MacroCall) -> Result<(), GbError> {
    call.expect_args(1)?;
    let name = string_arg(call, 0)?;
    rt.storage
        .macros
        .enable(name)
        .map_err(|diag| call.error_at(0, diag))
}

/// `DISABLE "NAME"`
pub fn macro_disable(rt: &mut Runtime, call: &MacroCall) -> Result<(), GbError> {
    call.expect_args(1)?;
    let name = string_arg(call, 0)?;
    rt.storage
        .macros
        .disable(name)
        .map_err(|diag| call.error_at(0, diag))
}

/// `NEW Template instance`
///
/// Runs the template body as a namespace block. The instance lives next to
/// the template: `NEW shapes::Circle c` fills `shapes::c`. A `self::`
/// instance name is taken relative to the caller instead.
pub fn macro_new(rt: &mut Runtime, call: &MacroCall) -> Result<(), GbError> {
    call.expect_args(2)?;
    let template_name = string_arg(call, 0)?;
    let template = QualifiedName::resolve(template_name, &call.namespace);
    let body = rt.storage.lookup_struct(&template).ok_or_else(|| {
        call.error_at(0, DiagnosticKind::UndefinedStruct(template_name.to_string()))
    })?;

    let instance = string_arg(call, 1)?;
    let path = if instance.split(SEPARATOR).next() == Some(SELF_SEGMENT) {
        QualifiedName::resolve(instance, &call.namespace).as_namespace()
    } else {
        template.path.join(&NamespacePath::parse(instance))
    };
    let ctx = ExecContext {
        scope: Scope::Global,
        namespace: path,
        in_function: false,
        return_type: ValueType::Void,
    };
    rt.run_nested(&body, &ctx)
}

/// `FREE $name`
///
/// Deletes the variable `name`, or everything under the namespace `name`
/// when no such variable exists.
pub fn macro_free(rt: &mut Runtime, call: &MacroCall) -> Result<(), GbError> {
    call.expect_args(1)?;
    let name = match call.arg(0) {
        Some(Value::Pointer(name) | Value::Str(name)) => name.as_str(),
        _ => {
            return Err(call.error_at(
                0,
                DiagnosticKind::ExpectedMacroArgument {
                    position: 0,
                    expected: "pointer",
                },
            ));
        }
    };
    let key = QualifiedName::resolve(name, &call.namespace);
    if rt.storage.delete_variable(&key) {
        return Ok(());
    }
    if rt.storage.delete_by_namespace_prefix(&key.as_namespace()) == 0 {
        return Err(call.error_at(0, DiagnosticKind::ObjectNotFound(name.to_string())));
    }
    Ok(())
}

/// `USE path` / `use path`
pub fn macro_use(rt: &mut Runtime, call: &MacroCall) -> Result<(), GbError> {
    call.expect_args(1)?;
    let raw = match call.arg(0) {
        Some(Value::Str(raw) | Value::Url(raw)) => raw.clone(),
        _ => {
            return Err(call.error_at(
                0,
                DiagnosticKind::ExpectedMacroArgument {
                    position: 0,
                    expected: "library path",
                },
            ));
        }
    };
    modules::use_library(rt, &raw, |diag| call.error_at(0, diag))
}

fn message(call: &MacroCall) -> Result<String, GbError> {
    call.expect_args(1)?;
    Ok(call.arg(0).map(value_to_string).unwrap_or_default())
}

/// `ERROR "message"`
pub fn macro_error(_: &mut Runtime, call: &MacroCall) -> Result<(), GbError> {
    Err(GbError::raw(ErrorKind::Macro, message(call)?, call.line, call.word))
}

/// `THROW "message"`
pub fn macro_throw(_: &mut Runtime, call: &MacroCall) -> Result<(), GbError> {
    Err(GbError::raw(ErrorKind::Thrown, message(call)?, call.line, call.word))
}

/// `PANIC "message"`
pub fn macro_panic(_: &mut Runtime, call: &MacroCall) -> Result<(), GbError> {
    Err(GbError::raw(ErrorKind::Panic, message(call)?, call.line, call.word))
}
