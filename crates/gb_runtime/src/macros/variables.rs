use gb_ir::{QualifiedName, Value, ValueType};
use gb_syntax::{DiagnosticKind, GbError};

use super::common::{
    existing_type, number_arg, pointer_arg, require_type, store, string_arg, type_arg,
};
use crate::Runtime;
use crate::eval::convert_text;
use crate::macro_registry::MacroCall;
use crate::storage::{Scope, Variable, WriteOutcome};
use crate::util::value_to_string;

/// `ASSIGN $ptr value`
pub fn macro_assign(rt: &mut Runtime, call: &MacroCall) -> Result<(), GbError> {
    call.expect_args(2)?;
    let key = pointer_arg(call, 0)?;
    let value = match call.arg(1) {
        Some(v) if v.value_type().is_storable() => v.clone(),
        _ => return Err(call.error_at(1, DiagnosticKind::InvalidMacroArgument)),
    };
    store(rt, call, 1, &key, value)
}

/// `MODULO $ptr number divisor`
pub fn macro_modulo(rt: &mut Runtime, call: &MacroCall) -> Result<(), GbError> {
    call.expect_args(3)?;
    let key = pointer_arg(call, 0)?;
    let ty = existing_type(&rt.storage, call, 0, &key)?;
    require_type(call, 0, ValueType::Number, ty)?;
    let number = number_arg(call, 1)? as i64;
    let divisor = number_arg(call, 2)? as i64;
    if divisor == 0 {
        return Err(call.error_at(2, DiagnosticKind::DivisionByZero));
    }
    store(rt, call, 0, &key, Value::Number(number.wrapping_rem(divisor) as f64))
}

/// `RAND $ptr min max`
pub fn macro_rand(rt: &mut Runtime, call: &MacroCall) -> Result<(), GbError> {
    call.expect_args(3)?;
    let key = pointer_arg(call, 0)?;
    let ty = existing_type(&rt.storage, call, 0, &key)?;
    require_type(call, 0, ValueType::Number, ty)?;
    let min = number_arg(call, 1)?;
    let max = number_arg(call, 2)?;
    if min > max {
        return Err(call.error(DiagnosticKind::InvalidRange {
            min: value_to_string(&Value::Number(min)),
            max: value_to_string(&Value::Number(max)),
        }));
    }
    let value = rt.random_in(min as i64, max as i64);
    store(rt, call, 0, &key, Value::Number(value as f64))
}

/// `DYN_VAR_MAKE TYPE "name" value`
pub fn macro_dyn_var_make(rt: &mut Runtime, call: &MacroCall) -> Result<(), GbError> {
    call.expect_args(3)?;
    let ty = type_arg(call, 0)?;
    let name = string_arg(call, 1)?;
    let value = match call.arg(2) {
        Some(Value::Pointer(_) | Value::Array(_)) | None => {
            return Err(call.error_at(2, DiagnosticKind::InvalidMacroArgument));
        }
        Some(v) => convert_text(&value_to_string(v), ty).map_err(|diag| call.error_at(2, diag))?,
    };
    let key = QualifiedName::resolve(name, &call.namespace);
    let outcome = rt
        .storage
        .set(key.clone(), Variable::new(value, Scope::Global))
        .map_err(|diag| call.error_at(2, diag))?;
    if outcome == WriteOutcome::RejectedConstant {
        rt.warn_constant(&key.to_string());
    }
    Ok(())
}

/// `DYN_VAR_READ TYPE "name" $ptr`
pub fn macro_dyn_var_read(rt: &mut Runtime, call: &MacroCall) -> Result<(), GbError> {
    call.expect_args(3)?;
    let ty = type_arg(call, 0)?;
    let source = QualifiedName::resolve(string_arg(call, 1)?, &call.namespace);
    let target = pointer_arg(call, 2)?;
    let target_ty = existing_type(&rt.storage, call, 2, &target)?;
    require_type(call, 0, ty, target_ty)?;
    let text = match rt.storage.get(&source) {
        Some(var) => value_to_string(&var.value),
        None => {
            return Err(call.error_at(1, DiagnosticKind::UndefinedVariable(source.to_string())));
        }
    };
    let value = convert_text(&text, ty).map_err(|diag| call.error_at(1, diag))?;
    store(rt, call, 2, &target, value)
}
