mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::script;
use gb_ir::{NamespacePath, QualifiedName, Value};
use gb_runtime::{MacroCall, Runtime, RngAlgorithm};
use gb_syntax::{ErrorKind, GbError};

fn key(raw: &str) -> QualifiedName {
    QualifiedName::resolve(raw, &NamespacePath::root())
}

#[test]
fn namespaces_qualify_members() {
    let mut h = script();
    let src = "\
namespace shapes {
    var NUMBER sides 4
    func describe():VOID {
        PRINTLN \"sides=%(self::sides)\"
    }
    namespace inner {
        const STRING label \"deep\"
    }
}
shapes::describe()
PRINTLN shapes::inner::label
";
    h.start(src);
    h.assert_clean();
    assert_eq!(h.output(), "sides=4\ndeep\n");
    assert!(h.rt.storage.get(&key("sides")).is_none());
    assert!(h.rt.storage.get(&key("shapes::sides")).is_some());
}

#[test]
fn struct_instances_get_their_own_namespace() {
    let mut h = script();
    let src = "\
struct Point {
    var NUMBER x 0
    func move(dx:NUMBER):VOID {
        ASSIGN $self::x |self::x + dx|
    }
}
NEW Point p
NEW Point q
p::move(5)
PRINTLN p::x
PRINTLN q::x
";
    h.start(src);
    h.assert_clean();
    assert_eq!(h.output(), "5\n0\n");
    assert!(h.rt.storage.function_exists(&key("p::move")));
}

#[test]
fn instances_live_next_to_a_namespaced_template() {
    let mut h = script();
    let src = "\
namespace game {
    struct Player {
        var NUMBER hp 10
    }
}
NEW game::Player hero
PRINTLN game::hero::hp
";
    h.start(src);
    h.assert_clean();
    assert_eq!(h.output(), "10\n");
}

#[test]
fn free_removes_a_variable_or_a_whole_instance() {
    let mut h = script();
    let src = "\
struct Point {
    var NUMBER x 1
    var NUMBER y 2
}
NEW Point p
var NUMBER lone 3
FREE $lone
FREE p
";
    h.start(src);
    h.assert_clean();
    let storage = &h.rt.storage;
    assert!(storage.get(&key("lone")).is_none());
    assert!(storage.get(&key("p::x")).is_none());
    assert!(storage.get(&key("p::y")).is_none());

    let mut h = script();
    h.start("struct Point {\n    var NUMBER x 1\n}\nNEW Point p\nFREE p\nFREE p\n");
    let err = h.first_error();
    assert_eq!(err.kind, ErrorKind::Macro);
    assert_eq!(err.message, "FREE: Object \"p\" doesn't exist.");
}

#[test]
fn unknown_struct_is_reported() {
    let mut h = script();
    h.start("NEW Ghost g\n");
    assert!(h.first_error().message.contains("No struct found named \"Ghost\"."));
}

#[test]
fn input_is_type_checked() {
    let mut h = script().with_input(&["42", "hello world", "abc", "7"]);
    let src = "\
var NUMBER n 0
var STRING s \"\"
INPUT NUMBER $n
INPUT STRING $s
PRINTLN n
PRINTLN s
INPUT STRING $s
PRINTLN s
INPUT NUMBER $s true
PRINTLN s
";
    h.start(src);
    h.assert_clean();
    assert_eq!(h.output(), "42\nhello world\nabc\n7\n");
}

#[test]
fn input_rejects_the_wrong_shape() {
    let mut h = script().with_input(&["abc"]);
    h.start("var NUMBER n 0\nINPUT NUMBER $n\n");
    let err = h.first_error();
    assert_eq!(err.kind, ErrorKind::Macro);
    assert!(err.message.starts_with("INPUT: "), "{}", err.message);

    let mut h = script();
    h.start("var NUMBER n 0\nINPUT NUMBER $n\n");
    assert_eq!(h.first_error().message, "INPUT: No input available.");
}

#[test]
fn assign_requires_matching_types() {
    let mut h = script();
    h.start("var NUMBER n 0\nASSIGN $n \"x\"\n");
    assert_eq!(h.first_error().message, "ASSIGN: Expected NUMBER, got STRING.");

    let mut h = script();
    h.start("set $missing 1\n");
    assert!(h.first_error().message.contains("doesn't exist"));
}

struct FixedRng(u64);

impl RngAlgorithm for FixedRng {
    fn next_u64(&self, _: &mut u64) -> u64 {
        self.0
    }
}

#[test]
fn rand_and_modulo() {
    let mut h = script();
    h.rt.set_rng_algorithm(Box::new(FixedRng(10)));
    h.start("var NUMBER r 0\nRAND $r 1 6\nPRINTLN r\nMODULO $r 17 5\nPRINTLN r\n");
    h.assert_clean();
    assert_eq!(h.output(), "5\n2\n");

    let mut h = script();
    h.start("var NUMBER r 0\nRAND $r 6 1\n");
    assert_eq!(h.first_error().message, "RAND: Invalid range: 6 is greater than 1.");

    let mut h = script();
    h.start("var NUMBER r 0\nMODULO $r 1 0\n");
    assert_eq!(h.first_error().message, "MODULO: Can't divide by 0");
}

#[test]
fn rand_stays_in_range_with_the_default_generator() {
    let mut h = script();
    h.rt.set_rng_seed(7);
    let src = "\
var NUMBER i 0
var NUMBER r 0
while #i < 200# {
    RAND $r -3 3
    if #r < -3 || r > 3# {
        PANIC \"out of range\"
    }
    ASSIGN $i |i + 1|
}
";
    assert_eq!(h.start(src), 0);
    h.assert_clean();
}

#[test]
fn dynamic_variables_are_disabled_until_enabled() {
    let mut h = script();
    h.start("DYN_VAR_MAKE NUMBER \"a\" 1\n");
    let err = h.first_error();
    assert_eq!(err.kind, ErrorKind::Macro);
    assert_eq!(err.message, "Macro [DYN_VAR_MAKE] is disabled.");

    let mut h = script();
    let src = "\
ENABLE \"DYN_VAR_MAKE\"
ENABLE DYN_VAR_READ
DYN_VAR_MAKE NUMBER \"a\" 41
var NUMBER b 0
DYN_VAR_READ NUMBER \"a\" $b
PRINTLN |b + 1|
DISABLE \"PRINTLN\"
PRINTLN 1
";
    h.start(src);
    assert_eq!(h.output(), "42\n");
    assert_eq!(h.first_error().message, "Macro [PRINTLN] is disabled.");
}

#[test]
fn unknown_macros_are_errors() {
    let mut h = script();
    h.start("FROBNICATE 1\n");
    let err = h.first_error();
    assert_eq!(err.kind, ErrorKind::Macro);
    assert_eq!(err.message, "Unknown macro: [FROBNICATE]");

    let mut h = script();
    h.start("ENABLE \"NOPE\"\n");
    assert!(h.first_error().message.starts_with("ENABLE: Unknown macro"));
}

#[test]
fn hosts_can_register_macros() {
    let seen: Rc<RefCell<Vec<Value>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let mut h = script();
    h.rt.register_macro("RECORD", move |_: &mut Runtime, call: &MacroCall| -> Result<(), GbError> {
        sink.borrow_mut().extend(call.args.iter().cloned());
        Ok(())
    });
    h.start("var NUMBER n 2\nRECORD n \"s\" Thing NUMBER $n\n");
    h.assert_clean();
    assert_eq!(
        *seen.borrow(),
        vec![
            Value::Number(2.0),
            Value::Str("s".into()),
            Value::Str("Thing".into()),
            Value::Str("NUMBER".into()),
            Value::Pointer("n".into()),
        ]
    );
}

#[test]
fn print_follows_pointers() {
    let mut h = script();
    h.start("var BOOL ok true\nPRINT $ok\nPRINT \" \"\nPRINTLN ok\n");
    h.assert_clean();
    assert_eq!(h.output(), "true true\n");
}

#[test]
fn error_macro_carries_the_message() {
    let mut h = script();
    h.start("ERROR \"custom failure\"\n");
    let err = h.first_error();
    assert_eq!(err.kind, ErrorKind::Macro);
    assert_eq!(err.message, "custom failure");
}
