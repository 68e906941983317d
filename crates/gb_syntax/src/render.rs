use crate::{GbError, SourceFile};

/// `[KIND ERROR] line:word` followed by the message, with 1-based positions.
pub fn render_error(err: &GbError) -> String {
    let mut out = String::new();
    if let Some(origin) = &err.origin {
        out.push_str(origin);
        out.push_str(": ");
    }
    out.push_str(&format!(
        "[{} ERROR] {}:{}\n{}",
        err.kind.label(),
        err.line + 1,
        err.word + 1,
        err.message
    ));
    out
}

/// Same as [`render_error`] plus the offending source line.
pub fn render_error_in(source: &SourceFile, err: &GbError) -> String {
    let mut out = render_error(err);
    let foreign = err.origin.as_deref().is_some_and(|o| o != source.name);
    if foreign {
        return out;
    }
    if let Some(text) = source.line(err.line) {
        out.push('\n');
        out.push_str("  | ");
        out.push_str(text);
        let col = text
            .split_whitespace()
            .take(err.word)
            .map(|w| w.chars().count() + 1)
            .sum::<usize>()
            + (text.chars().count() - text.trim_start().chars().count());
        out.push('\n');
        out.push_str("  | ");
        out.extend(std::iter::repeat_n(' ', col));
        out.push('^');
    }
    out
}
