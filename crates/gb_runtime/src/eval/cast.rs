//! `(TYPE)value` conversions. The source is reduced to its display text and
//! the text is then read as the target type.

use gb_ir::{NamespacePath, QualifiedName, Value, ValueType};
use gb_syntax::DiagnosticKind;
use gb_syntax::words::{is_bool, is_number, is_url};

use crate::storage::Storage;
use crate::util::value_to_string;

pub fn cast_value(
    source: &Value,
    target: ValueType,
    storage: &Storage,
    namespace: &NamespacePath,
) -> Result<Value, DiagnosticKind> {
    let text = match source {
        Value::Pointer(name) => {
            let key = QualifiedName::resolve(name, namespace);
            let var = storage
                .get(&key)
                .ok_or_else(|| DiagnosticKind::UndefinedVariable(name.clone()))?;
            value_to_string(&var.value)
        }
        Value::Array(_) => {
            return Err(DiagnosticKind::InvalidCast {
                value: value_to_string(source),
                target: target.name().to_string(),
            });
        }
        other => value_to_string(other),
    };
    convert_text(&text, target)
}

/// Reads `text` as a value of `target`.
pub fn convert_text(text: &str, target: ValueType) -> Result<Value, DiagnosticKind> {
    let invalid = || DiagnosticKind::InvalidCast {
        value: text.to_string(),
        target: target.name().to_string(),
    };
    match target {
        ValueType::String => Ok(Value::Str(text.to_string())),
        ValueType::Number if is_number(text) => {
            text.parse().map(Value::Number).map_err(|_| invalid())
        }
        ValueType::Bool if is_bool(text) => Ok(Value::Bool(text == "true")),
        ValueType::Url if is_url(text) => Ok(Value::Url(text.to_string())),
        _ => Err(invalid()),
    }
}

/// The type a line of console input looks like.
pub fn detect_type(text: &str) -> ValueType {
    if is_number(text) {
        ValueType::Number
    } else if is_bool(text) {
        ValueType::Bool
    } else {
        ValueType::String
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{Scope, Variable};

    fn cast(v: Value, t: ValueType) -> Result<Value, DiagnosticKind> {
        cast_value(&v, t, &Storage::new(), &NamespacePath::root())
    }

    #[test]
    fn literal_casts() {
        assert_eq!(cast(Value::Str("2.5".into()), ValueType::Number), Ok(Value::Number(2.5)));
        assert_eq!(cast(Value::Number(3.0), ValueType::String), Ok(Value::Str("3".into())));
        assert_eq!(cast(Value::Str("true".into()), ValueType::Bool), Ok(Value::Bool(true)));
        assert!(matches!(
            cast(Value::Str("abc".into()), ValueType::Number),
            Err(DiagnosticKind::InvalidCast { .. })
        ));
    }

    #[test]
    fn pointer_casts_read_the_variable() {
        let mut storage = Storage::new();
        let ns = NamespacePath::parse("a");
        storage
            .set(
                QualifiedName::new(ns.clone(), "n"),
                Variable::new(Value::Str("42".into()), Scope::Global),
            )
            .unwrap();
        let out = cast_value(&Value::Pointer("self::n".into()), ValueType::Number, &storage, &ns);
        assert_eq!(out, Ok(Value::Number(42.0)));
        let out = cast_value(&Value::Pointer("n".into()), ValueType::Number, &storage, &ns);
        assert!(matches!(out, Err(DiagnosticKind::UndefinedVariable(_))));
    }

    #[test]
    fn input_type_detection() {
        assert_eq!(detect_type("12"), ValueType::Number);
        assert_eq!(detect_type("false"), ValueType::Bool);
        assert_eq!(detect_type("hello world"), ValueType::String);
    }
}
