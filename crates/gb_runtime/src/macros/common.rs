use gb_ir::{QualifiedName, Value, ValueType};
use gb_syntax::{DiagnosticKind, GbError};

use crate::macro_registry::MacroCall;
use crate::storage::{Storage, WriteOutcome};
use crate::Runtime;

fn expected(call: &MacroCall, position: usize, what: &'static str) -> GbError {
    call.error_at(
        position,
        DiagnosticKind::ExpectedMacroArgument {
            position,
            expected: what,
        },
    )
}

/// `$name` argument resolved against the caller's namespace.
pub fn pointer_arg(call: &MacroCall, position: usize) -> Result<QualifiedName, GbError> {
    match call.arg(position) {
        Some(Value::Pointer(name)) => Ok(QualifiedName::resolve(name, &call.namespace)),
        _ => Err(expected(call, position, "pointer")),
    }
}

pub fn number_arg(call: &MacroCall, position: usize) -> Result<f64, GbError> {
    call.arg(position)
        .and_then(Value::as_number)
        .ok_or_else(|| expected(call, position, "number"))
}

pub fn string_arg(call: &MacroCall, position: usize) -> Result<&str, GbError> {
    call.arg(position)
        .and_then(Value::as_str)
        .ok_or_else(|| expected(call, position, "string"))
}

/// A type name passed as `NUMBER` or `"NUMBER"`. Only storable types qualify.
pub fn type_arg(call: &MacroCall, position: usize) -> Result<ValueType, GbError> {
    let name = string_arg(call, position)?;
    match ValueType::from_name(name) {
        Some(ty) if ty.is_storable() => Ok(ty),
        _ => Err(call.error_at(position, DiagnosticKind::InvalidVariableType(name.to_string()))),
    }
}

/// Type of the variable at `key`, which must exist.
pub fn existing_type(
    storage: &Storage,
    call: &MacroCall,
    position: usize,
    key: &QualifiedName,
) -> Result<ValueType, GbError> {
    storage
        .get(key)
        .map(|var| var.ty)
        .ok_or_else(|| call.error_at(position, DiagnosticKind::UndefinedVariable(key.to_string())))
}

pub fn require_type(
    call: &MacroCall,
    position: usize,
    expected: ValueType,
    actual: ValueType,
) -> Result<(), GbError> {
    if expected != actual {
        return Err(call.error_at(
            position,
            DiagnosticKind::TypeMismatch {
                expected: expected.name().to_string(),
                actual: actual.name().to_string(),
            },
        ));
    }
    Ok(())
}

/// Writes `value` into the existing variable `key`. Constants only warn.
pub fn store(
    rt: &mut Runtime,
    call: &MacroCall,
    position: usize,
    key: &QualifiedName,
    value: Value,
) -> Result<(), GbError> {
    let outcome = rt
        .storage
        .assign(key, value)
        .map_err(|diag| call.error_at(position, diag))?;
    if outcome == WriteOutcome::RejectedConstant {
        rt.warn_constant(&key.to_string());
    }
    Ok(())
}
