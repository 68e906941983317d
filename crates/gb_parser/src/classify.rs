//! Word classifiers.
//!
//! Each function answers "is this word of my kind?" and converts it. The
//! structural parser tries them in a fixed priority order.
use std::sync::LazyLock;

use gb_ir::{
    FunctionDefinition, FunctionInvocation, InvocationArgument, Parameter, Token, Value,
    ValueType,
};
use gb_syntax::DiagnosticKind;
use gb_syntax::words::{
    is_bool, is_number, is_plain_text, is_pointer, is_string, is_url, unquote,
};
use regex::Regex;

static INVOCATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z_@][A-Za-z0-9_:@]*)\((.*)\)$").expect("invocation pattern")
});

static DEFINITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z_@][A-Za-z0-9_:@]*)\(([^()]*)\):([A-Z]+)$").expect("definition pattern")
});

static CAST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(([A-Z]+)\)(.+)$").expect("cast pattern"));

/// Literal and identifier words, in priority order: string, bool, type name,
/// number, pointer, plain identifier, URL.
pub fn classify_literal(word: &str) -> Option<Token> {
    if is_string(word) {
        return Some(Token::Str(unquote(word).to_string()));
    }
    if is_bool(word) {
        return Some(Token::Bool(word == "true"));
    }
    if let Some(ty) = ValueType::from_name(word) {
        return Some(Token::VariableType(ty));
    }
    if is_number(word) {
        return word.parse().ok().map(Token::Number);
    }
    if is_pointer(word) {
        return Some(Token::Pointer(word[1..].to_string()));
    }
    if is_plain_text(word) {
        return Some(Token::PlainText(word.to_string()));
    }
    if is_url(word) {
        return Some(Token::Url(word.to_string()));
    }
    None
}

/// `name(a,b,...)`. `Ok(None)` when the word does not have that shape.
pub fn parse_invocation(word: &str) -> Result<Option<FunctionInvocation>, DiagnosticKind> {
    let Some(caps) = INVOCATION.captures(word) else {
        return Ok(None);
    };
    let name = caps[1].to_string();
    let mut args = Vec::new();
    for raw in split_arguments(&caps[2]) {
        args.push(classify_argument(raw)?);
    }
    Ok(Some(FunctionInvocation { name, args }))
}

fn classify_argument(raw: &str) -> Result<InvocationArgument, DiagnosticKind> {
    let arg = raw.trim();
    if is_string(arg) {
        return Ok(InvocationArgument::Literal(Value::Str(unquote(arg).to_string())));
    }
    if is_bool(arg) {
        return Ok(InvocationArgument::Literal(Value::Bool(arg == "true")));
    }
    if is_number(arg) {
        if let Ok(n) = arg.parse() {
            return Ok(InvocationArgument::Literal(Value::Number(n)));
        }
    }
    if is_plain_text(arg) {
        return Ok(InvocationArgument::Variable(arg.to_string()));
    }
    if is_url(arg) {
        return Ok(InvocationArgument::Literal(Value::Url(arg.to_string())));
    }
    Err(DiagnosticKind::InvalidFunctionArgument(arg.to_string()))
}

/// Splits on commas outside quotes. An empty list yields no arguments.
fn split_arguments(list: &str) -> Vec<&str> {
    if list.trim().is_empty() {
        return Vec::new();
    }
    let mut out = Vec::new();
    let mut quoted = false;
    let mut start = 0;
    for (i, c) in list.char_indices() {
        match c {
            '"' => quoted = !quoted,
            ',' if !quoted => {
                out.push(&list[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    out.push(&list[start..]);
    out
}

/// `name(arg:TYPE,...):RETURNTYPE`.
pub fn parse_definition(word: &str) -> Result<Option<FunctionDefinition>, DiagnosticKind> {
    let Some(caps) = DEFINITION.captures(word) else {
        return Ok(None);
    };
    let invalid = || DiagnosticKind::InvalidFunctionDefinition(word.to_string());
    let return_type = ValueType::from_name(&caps[3])
        .filter(|t| t.is_storable() || *t == ValueType::Void)
        .ok_or_else(invalid)?;
    let mut params = Vec::new();
    for raw in caps[2].split(',').filter(|p| !p.trim().is_empty()) {
        let (name, ty) = raw.trim().rsplit_once(':').ok_or_else(invalid)?;
        let ty = ValueType::from_name(ty)
            .filter(|t| t.is_storable() || *t == ValueType::Any)
            .ok_or_else(invalid)?;
        if !is_plain_text(name) || name.contains(':') {
            return Err(invalid());
        }
        params.push(Parameter {
            name: name.to_string(),
            ty,
        });
    }
    Ok(Some(FunctionDefinition {
        name: caps[1].to_string(),
        params,
        return_type,
    }))
}

/// `(TYPE)value`.
pub fn parse_cast(word: &str) -> Result<Option<Token>, DiagnosticKind> {
    let Some(caps) = CAST.captures(word) else {
        return Ok(None);
    };
    let unexpected = || DiagnosticKind::UnexpectedToken(word.to_string());
    let target = ValueType::from_name(&caps[1])
        .filter(|t| t.is_storable())
        .ok_or_else(unexpected)?;
    let source = &caps[2];
    let value = if is_string(source) {
        Value::Str(unquote(source).to_string())
    } else if is_bool(source) {
        Value::Bool(source == "true")
    } else if is_number(source) {
        Value::Number(source.parse().map_err(|_| unexpected())?)
    } else if is_pointer(source) {
        Value::Pointer(source[1..].to_string())
    } else if is_url(source) && !is_plain_text(source) {
        Value::Url(source.to_string())
    } else {
        return Err(unexpected());
    };
    Ok(Some(Token::Casted(value, target)))
}
