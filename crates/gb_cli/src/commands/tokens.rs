use std::io::Write;

use gb_driver::Driver;
use gb_ir::{ParseOptions, Program, Token};

use crate::args::{CliArgs, usage};
use crate::commands::common::file_arg;
use crate::commands::emit_diagnostics;

pub(crate) fn run(args: &CliArgs, driver: &Driver) -> i32 {
    let Some(path) = file_arg(args) else {
        eprintln!("Missing <file>\n{}", usage());
        return 2;
    };
    let parsed = match driver.parse_file(&path, ParseOptions::default()) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{e}");
            return 2;
        }
    };
    emit_diagnostics(&parsed.source, &parsed.diagnostics, false);

    let mut out = std::io::stdout().lock();
    if let Err(e) = dump(&mut out, &parsed.program, 0) {
        if e.kind() == std::io::ErrorKind::BrokenPipe {
            return 0;
        }
        eprintln!("stdout error: {e}");
        return 2;
    }
    if parsed.has_errors() { 1 } else { 0 }
}

/// One row per token: `line:word`, then the token. Block bodies follow
/// their `{` token, indented one level.
fn dump(out: &mut impl Write, program: &Program, depth: usize) -> std::io::Result<()> {
    let indent = "  ".repeat(depth);
    for line in &program.lines {
        for (idx, token) in line.tokens.iter().enumerate() {
            let pos = format!("{}:{}", line.number + 1, line.word_of(idx) + 1);
            writeln!(out, "{indent}{pos}\t{}", render_token(token))?;
            if let Token::CodeBlock(body) = token {
                dump(out, body, depth + 1)?;
            }
        }
    }
    Ok(())
}

fn render_token(token: &Token) -> String {
    match token {
        Token::Str(s) => format!("string\t{}", escape_visible(s)),
        Token::Number(n) => format!("number\t{n}"),
        Token::Bool(b) => format!("bool\t{b}"),
        Token::Url(u) => format!("url\t{u}"),
        Token::Casted(value, ty) => format!("cast to {ty}\t{value:?}"),
        other => other.describe(),
    }
}

fn escape_visible(s: &str) -> String {
    let mut out = String::new();
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}
