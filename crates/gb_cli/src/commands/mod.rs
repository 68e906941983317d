use gb_syntax::{GbError, SourceFile, render_error_in};
use serde_json::json;

pub(crate) mod check;
pub(crate) mod common;
pub(crate) mod info;
pub(crate) mod repl;
pub(crate) mod run;
pub(crate) mod tokens;

pub(crate) fn diagnostic_json(source: &SourceFile, err: &GbError) -> serde_json::Value {
    json!({
        "kind": err.kind.label(),
        "message": err.message,
        "line": err.line + 1,
        "word": err.word + 1,
        "file": err.origin.as_deref().unwrap_or(&source.name),
    })
}

pub(crate) fn emit_diagnostics(source: &SourceFile, diagnostics: &[GbError], json_out: bool) {
    for d in diagnostics {
        if json_out {
            common::print_json(diagnostic_json(source, d));
        } else {
            eprintln!("{}", render_error_in(source, d));
        }
    }
}
