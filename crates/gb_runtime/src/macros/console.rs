use gb_ir::{QualifiedName, Value, ValueType};
use gb_syntax::{DiagnosticKind, GbError};

use super::common::{existing_type, pointer_arg, require_type, store, type_arg};
use crate::Runtime;
use crate::eval::{convert_text, detect_type};
use crate::macro_registry::MacroCall;
use crate::util::value_to_string;

fn display(rt: &Runtime, call: &MacroCall) -> Result<String, GbError> {
    call.expect_args(1)?;
    match call.arg(0) {
        Some(Value::Pointer(name)) => {
            let key = QualifiedName::resolve(name, &call.namespace);
            rt.storage
                .get(&key)
                .map(|var| value_to_string(&var.value))
                .ok_or_else(|| call.error_at(0, DiagnosticKind::UndefinedVariable(name.clone())))
        }
        Some(value) => Ok(value_to_string(value)),
        None => Err(call.error(DiagnosticKind::InvalidMacroArgument)),
    }
}

/// `PRINT value`
pub fn macro_print(rt: &mut Runtime, call: &MacroCall) -> Result<(), GbError> {
    let text = display(rt, call)?;
    rt.emit(&text);
    Ok(())
}

/// `PRINTLN value`
pub fn macro_println(rt: &mut Runtime, call: &MacroCall) -> Result<(), GbError> {
    let mut text = display(rt, call)?;
    text.push('\n');
    rt.emit(&text);
    Ok(())
}

/// `INPUT TYPE $ptr [ignoreType]`
///
/// The line read must look like TYPE (any line is a STRING), and TYPE must
/// be the variable's type.
/// With `ignoreType` set the line is cast to the variable's type instead of
/// being rejected.
pub fn macro_input(rt: &mut Runtime, call: &MacroCall) -> Result<(), GbError> {
    let ignore_type = match call.args.len() {
        2 => false,
        3 => call
            .arg(2)
            .and_then(Value::as_bool)
            .ok_or_else(|| {
                call.error_at(
                    2,
                    DiagnosticKind::ExpectedMacroArgument {
                        position: 2,
                        expected: "bool",
                    },
                )
            })?,
        actual => {
            return Err(call.error(DiagnosticKind::ArgumentCountMismatch {
                expected: 2,
                actual,
            }));
        }
    };
    let ty = type_arg(call, 0)?;
    let key = pointer_arg(call, 1)?;
    let var_ty = existing_type(&rt.storage, call, 1, &key)?;
    if !ignore_type {
        require_type(call, 0, var_ty, ty)?;
    }

    let line = rt
        .read_line()
        .ok_or_else(|| call.error(DiagnosticKind::InputUnavailable))?;
    if !ignore_type && ty != ValueType::String {
        require_type(call, 1, ty, detect_type(&line))?;
    }
    let value = convert_text(&line, var_ty).map_err(|diag| call.error_at(1, diag))?;
    store(rt, call, 1, &key, value)
}
