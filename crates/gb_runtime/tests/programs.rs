mod common;

use common::{harness, script};
use gb_ir::QualifiedName;
use gb_syntax::ErrorKind;

#[test]
fn countdown_prints_five_to_one() {
    let mut h = script();
    let src = "\
var NUMBER x |2 + 3|
while #x > 0# {
    PRINTLN x
    ASSIGN $x |x - 1|
}
";
    assert_eq!(h.start(src), 0);
    h.assert_clean();
    assert_eq!(h.output(), "5\n4\n3\n2\n1\n");
}

#[test]
fn equations_have_no_precedence() {
    let mut h = script();
    h.start("var NUMBER r |3 + 4 * 2|\nPRINTLN r\nPRINTLN |10 / 4|\n");
    h.assert_clean();
    assert_eq!(h.output(), "14\n2.5\n");
}

#[test]
fn division_by_zero_is_fatal() {
    let mut h = script();
    assert_eq!(h.start("PRINTLN 1\nvar NUMBER r |1 / 0|\nPRINTLN 2\n"), 1);
    assert_eq!(h.output(), "1\n");
    let err = h.first_error();
    assert_eq!(err.kind, ErrorKind::Interpreting);
    assert_eq!(err.line, 1);
    assert!(err.message.contains("Can't divide by 0"));
}

#[test]
fn main_value_is_the_exit_code() {
    let mut h = harness();
    let src = "\
func main():NUMBER {
    PRINTLN \"hi\"
    return 7
}
";
    assert_eq!(h.start(src), 7);
    assert_eq!(h.output(), "hi\n");
}

#[test]
fn exit_message_is_printed_when_enabled() {
    let mut h = common::harness_with(gb_runtime::RuntimeConfig::default());
    h.start("func main():NUMBER {\n    return 3\n}\n");
    assert_eq!(h.output(), "Program exited with exit code: 3\n");
}

#[test]
fn main_must_exist_and_return_a_number() {
    let mut h = harness();
    assert_eq!(h.start("PRINTLN 1\n"), 1);
    assert!(h.first_error().message.contains("No function found named \"main\""));

    let mut h = harness();
    assert_eq!(h.start("func main():STRING {\n    return \"x\"\n}\n"), 1);
    assert_eq!(h.first_error().kind, ErrorKind::Type);
}

#[test]
fn exit_stops_everything() {
    let mut h = harness();
    let src = "\
func main():NUMBER {
    PRINTLN \"a\"
    exit
    PRINTLN \"b\"
    return 9
}
";
    assert_eq!(h.start(src), 0);
    h.assert_clean();
    assert_eq!(h.output(), "a\n");

    let mut h = harness();
    assert_eq!(h.start("PRINTLN 1\nexit\nPRINTLN 2\n"), 0);
    assert_eq!(h.output(), "1\n");
}

#[test]
fn function_scope_is_torn_down() {
    let mut h = harness();
    let src = "\
var NUMBER g 1
func bump(n:NUMBER):NUMBER {
    var NUMBER local |n + g|
    return local
}
func main():NUMBER {
    var NUMBER r bump(41)
    PRINTLN r
    return 0
}
";
    assert_eq!(h.start(src), 0);
    h.assert_clean();
    assert_eq!(h.output(), "42\n");
    let storage = &h.rt.storage;
    assert!(storage.get(&QualifiedName::local("local")).is_none());
    assert!(storage.get(&QualifiedName::local("n")).is_none());
    assert!(storage.get(&QualifiedName::local("r")).is_none());
    assert!(storage.get(&QualifiedName::local("g")).is_some());
}

#[test]
fn locals_shadow_globals_and_recursion_keeps_frames_apart() {
    let mut h = script();
    let src = "\
var NUMBER n 100
func sum(n:NUMBER):NUMBER {
    if #n < 1# {
        return 0
    }
    var NUMBER next |n - 1|
    var NUMBER rest sum(next)
    return |n + rest|
}
var NUMBER total sum(4)
PRINTLN total
PRINTLN n
";
    h.start(src);
    h.assert_clean();
    assert_eq!(h.output(), "10\n100\n");
}

#[test]
fn return_leaves_nested_blocks() {
    let mut h = script();
    let src = "\
func first():NUMBER {
    var NUMBER i 0
    while #true# {
        ASSIGN $i |i + 1|
        if #i == 3# {
            return i
        }
    }
    return 0
}
var NUMBER r first()
PRINTLN r
";
    h.start(src);
    h.assert_clean();
    assert_eq!(h.output(), "3\n");
}

#[test]
fn return_type_rules() {
    let mut h = script();
    h.start("func f():NUMBER {\n    PRINTLN 1\n}\nf()\n");
    assert!(h.first_error().message.contains("Expected value from function."));

    let mut h = script();
    h.start("func f():VOID {\n    return 1\n}\nf()\n");
    assert!(h.first_error().message.contains("VOID"));

    let mut h = script();
    h.start("func f(x:ANY):STRING {\n    return x\n}\nvar STRING s f(\"ok\")\nPRINTLN s\n");
    h.assert_clean();
    assert_eq!(h.output(), "ok\n");
}

#[test]
fn argument_checks() {
    let mut h = script();
    h.start("func f(x:NUMBER):VOID {\n}\nf(\"a\")\n");
    let err = h.first_error();
    assert_eq!(err.kind, ErrorKind::Type);
    assert!(err.message.contains("Invalid type for argument"));

    let mut h = script();
    h.start("func f(x:NUMBER):VOID {\n}\nf(1,2)\n");
    assert!(h.first_error().message.contains("Expected 1 arguments, got 2."));
}

#[test]
fn declarations_are_type_checked() {
    let mut h = script();
    assert_eq!(h.start("var NUMBER x \"a\"\n"), 1);
    let err = h.first_error();
    assert_eq!(err.kind, ErrorKind::Type);
    assert_eq!(err.message, "Expected NUMBER, got STRING.");
}

#[test]
fn constants_warn_instead_of_failing() {
    let mut h = script();
    h.start("const NUMBER c 1\nASSIGN $c 2\nvar NUMBER c 3\nPRINTLN c\n");
    h.assert_clean();
    assert_eq!(h.output(), "1\n");
    let warnings = h.console.warnings();
    assert_eq!(warnings.len(), 2);
    assert_eq!(warnings[0], "Can't change value of constant \"c\".");
}

#[test]
fn casts_and_interpolation() {
    let mut h = script();
    let src = "\
var NUMBER n (NUMBER)\"2.5\"
var STRING name \"Ann\"
PRINTLN (STRING)$n
PRINTLN \"Hi %(name)! n=%(n)\"
PRINTLN \"%(name|missing|n)\"
";
    h.start(src);
    h.assert_clean();
    assert_eq!(h.output(), "2.5\nHi Ann! n=2.5\nAnn2.5\n");
}

#[test]
fn logical_expressions_combine_left_to_right() {
    let mut h = script();
    let src = "\
var STRING name \"Ann\"
if #name == \"Ann\" && 1 > 2 || true# {
    PRINTLN \"yes\"
}
if #true || false && false# {
    PRINTLN \"no\"
}
";
    h.start(src);
    h.assert_clean();
    assert_eq!(h.output(), "yes\n");
}

#[test]
fn bare_non_bool_operand_is_an_error() {
    let mut h = script();
    h.start("if #1# {\n    PRINTLN 1\n}\n");
    assert!(h.first_error().message.contains("Expected bool"));
}

#[test]
fn thrown_and_panic_are_fatal() {
    let mut h = script();
    assert_eq!(h.start("THROW \"boom\"\nPRINTLN 1\n"), 1);
    let err = h.first_error();
    assert_eq!(err.kind, ErrorKind::Thrown);
    assert_eq!(err.message, "boom");
    assert_eq!(h.output(), "");

    let mut h = script();
    h.start("PANIC \"bad\"\n");
    assert_eq!(h.first_error().kind, ErrorKind::Panic);
}

#[test]
fn parse_errors_stop_before_running() {
    let mut h = script();
    assert_eq!(h.start("PRINTLN 1\nfunc main():NUMBER {\n"), 1);
    assert_eq!(h.output(), "");
    let err = h.first_error();
    assert_eq!(err.kind, ErrorKind::Parse);
    assert!(err.message.contains("Didn't finish code block"));
}

#[test]
fn load_keeps_state_between_calls() {
    let mut h = script();
    h.rt.load("var NUMBER x 1\n", "<repl>").unwrap();
    h.rt.load("ASSIGN $x |x + 1|\n", "<repl>").unwrap();
    h.rt.load("PRINTLN x\n", "<repl>").unwrap();
    assert_eq!(h.output(), "2\n");
    let err = h.rt.load("var NUMBER z y\n", "<repl>").unwrap_err();
    assert!(err.message.contains("Variable \"y\" doesn't exist."));
}

#[test]
fn exit_does_not_leak_into_the_next_load() {
    let mut h = script();
    h.rt.load("PRINTLN 0\nexit\nPRINTLN 9\n", "").unwrap();
    assert!(h.rt.is_halted());
    h.rt.load("PRINTLN 1\nPRINTLN 2\nPRINTLN 3\n", "").unwrap();
    assert!(!h.rt.is_halted());
    assert_eq!(h.output(), "0\n1\n2\n3\n");
}
