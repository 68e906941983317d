pub struct NormalizedSource {
    pub text: String,
}

/// Folds line endings to `\n` and every exotic blank (tab, no-break space,
/// full-width space) to an ASCII space. A leading byte-order mark is dropped.
pub fn normalize_source(input: &str) -> NormalizedSource {
    let input = input.strip_prefix('\u{FEFF}').unwrap_or(input);
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push('\n');
            }
            '\t' | '\u{00A0}' | '\u{3000}' => out.push(' '),
            _ => out.push(c),
        }
    }

    NormalizedSource { text: out }
}
