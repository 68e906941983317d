use gb_driver::Driver;
use gb_ir::{Frontend, ParseOptions, Token};

#[test]
fn lex_text_reports_word_positions() {
    let lexed = Driver::new().lex_text("a.goldbyte", "PRINTLN \"a b\"\n\nvar NUMBER x 1 // note\n");
    let words: Vec<(usize, usize, &str)> = lexed
        .words
        .iter()
        .map(|w| (w.line, w.word, w.text.as_str()))
        .collect();
    assert_eq!(
        words,
        vec![
            (0, 0, "PRINTLN"),
            (0, 1, "\"a b\""),
            (2, 0, "var"),
            (2, 1, "NUMBER"),
            (2, 2, "x"),
            (2, 3, "1"),
        ]
    );
    assert!(lexed.diagnostics.is_empty());
}

#[test]
fn lexer_and_parser_diagnostics_are_merged() {
    let parsed = Driver::new().parse_text(
        "bad.goldbyte",
        "PRINTLN \"open\nfunc main():NUMBER {\n",
        ParseOptions::default(),
    );
    assert!(parsed.has_errors());
    assert!(parsed.diagnostics[0].message.contains("Unterminated string"));
    assert!(
        parsed
            .diagnostics
            .iter()
            .any(|d| d.message.contains("Didn't finish code block"))
    );
}

#[test]
fn compile_text_yields_first_diagnostic() {
    let unit = Driver::new()
        .compile_text("t.goldbyte", "}\n", ParseOptions::default())
        .unwrap();
    let err = unit.into_program().unwrap_err();
    assert!(err.message.contains("Unexpected closing brace"));
}

#[test]
fn crlf_sources_parse_like_lf() {
    let parsed = Driver::new().parse_text(
        "crlf.goldbyte",
        "var NUMBER x 1\r\nPRINTLN x\r\n",
        ParseOptions::default(),
    );
    assert!(!parsed.has_errors(), "{:?}", parsed.diagnostics);
    assert_eq!(parsed.program.lines.len(), 2);
    assert_eq!(parsed.program.lines[1].tokens[1], Token::PlainText("x".into()));
}

#[test]
fn parse_file_reports_missing_files() {
    let err = Driver::new()
        .parse_file("/definitely/missing.goldbyte", ParseOptions::default())
        .unwrap_err();
    assert!(err.contains("Failed to read file"));
}
