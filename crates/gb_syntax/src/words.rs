//! Shape predicates for single source words.
//!
//! Every predicate looks at one whitespace-delimited word (quoted strings
//! already merged) and never allocates.

const FORBIDDEN: &str = "£§!#$%@^&*()+-={}[]|<>?;'\\,./~\"";

pub fn is_string(word: &str) -> bool {
    word.len() >= 2 && word.starts_with('"') && word.ends_with('"')
}

pub fn is_plain_text(word: &str) -> bool {
    !word.is_empty() && !is_string(word) && !word.chars().any(|c| FORBIDDEN.contains(c))
}

pub fn is_bool(word: &str) -> bool {
    word == "true" || word == "false"
}

/// Decimal literals only; `inf`, `nan` and friends stay identifiers.
pub fn is_number(word: &str) -> bool {
    word.bytes().any(|b| b.is_ascii_digit())
        && word
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
        && word.parse::<f64>().is_ok_and(f64::is_finite)
}

pub fn is_pointer(word: &str) -> bool {
    word.strip_prefix('$').is_some_and(is_plain_text)
}

pub fn is_math_symbol(word: &str) -> bool {
    matches!(word, "+" | "-" | "*" | "/")
}

pub fn is_comparator(word: &str) -> bool {
    matches!(word, "==" | "!=" | "<" | ">")
}

pub fn is_combinator(word: &str) -> bool {
    matches!(word, "&&" | "||")
}

pub fn is_logical_operator(word: &str) -> bool {
    is_comparator(word) || is_combinator(word)
}

/// Names usable for functions: letters, digits, `_`, `@` and the `::`
/// separator, not starting with a digit.
pub fn is_callable_name(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '@' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '@' | ':'))
}

/// RFC 3986 URI reference: an optional `scheme:` followed by characters
/// allowed in a URI, with well-formed percent escapes.
pub fn is_url(word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    let bytes = word.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'%' {
            let ok = i + 2 < bytes.len()
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !ok {
                return false;
            }
            i += 3;
            continue;
        }
        let allowed = b.is_ascii_alphanumeric()
            || matches!(
                b,
                b'-' | b'.'
                    | b'_'
                    | b'~'
                    | b':'
                    | b'/'
                    | b'?'
                    | b'#'
                    | b'['
                    | b']'
                    | b'@'
                    | b'!'
                    | b'$'
                    | b'&'
                    | b'\''
                    | b'('
                    | b')'
                    | b'*'
                    | b'+'
                    | b','
                    | b';'
                    | b'='
            );
        if !allowed {
            return false;
        }
        i += 1;
    }
    match word.find(':') {
        Some(0) => false,
        Some(pos) if !word[..pos].contains('/') => {
            let scheme = &word[..pos];
            scheme.as_bytes()[0].is_ascii_alphabetic()
                && scheme
                    .bytes()
                    .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.'))
        }
        _ => true,
    }
}

/// Drops the surrounding quotes of a string word. No escapes are processed.
pub fn unquote(word: &str) -> &str {
    if is_string(word) {
        &word[1..word.len() - 1]
    } else {
        word
    }
}
