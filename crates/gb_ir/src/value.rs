use std::fmt;

/// Type names usable in declarations, parameters and casts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueType {
    Null,
    Void,
    Variable,
    String,
    Number,
    Bool,
    Url,
    Any,
}

impl ValueType {
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "NULL" => ValueType::Null,
            "VOID" => ValueType::Void,
            "VARIABLE" => ValueType::Variable,
            "STRING" => ValueType::String,
            "NUMBER" => ValueType::Number,
            "BOOL" => ValueType::Bool,
            "URL" => ValueType::Url,
            "ANY" => ValueType::Any,
            _ => return None,
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            ValueType::Null => "NULL",
            ValueType::Void => "VOID",
            ValueType::Variable => "VARIABLE",
            ValueType::String => "STRING",
            ValueType::Number => "NUMBER",
            ValueType::Bool => "BOOL",
            ValueType::Url => "URL",
            ValueType::Any => "ANY",
        }
    }

    /// Whether a variable may be declared with this type.
    pub fn is_storable(self) -> bool {
        matches!(
            self,
            ValueType::String | ValueType::Number | ValueType::Bool | ValueType::Url
        )
    }

    pub fn accepts(self, actual: ValueType) -> bool {
        self == ValueType::Any || self == actual
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    Str(String),
    Number(f64),
    Bool(bool),
    Url(String),
    Pointer(String),
    Array(Vec<Value>),
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Str(_) => ValueType::String,
            Value::Number(_) => ValueType::Number,
            Value::Bool(_) => ValueType::Bool,
            Value::Url(_) => ValueType::Url,
            Value::Pointer(_) => ValueType::Variable,
            Value::Array(_) => ValueType::Any,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

/// Values of different variants are never equal.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Url(a), Value::Url(b)) => a == b,
            (Value::Pointer(a), Value::Pointer(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            _ => false,
        }
    }
}
