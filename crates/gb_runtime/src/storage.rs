//! Variables, functions, struct templates and the macro registry.
//!
//! Each key holds a small stack of variables so a function local can shadow
//! a global of the same name; lookups see the most recent entry. Scope
//! teardown removes entries by scope tag, never by position.

use std::rc::Rc;

use gb_ir::{NamespacePath, Parameter, Program, QualifiedName, Value, ValueType};
use gb_syntax::DiagnosticKind;
use smallvec::SmallVec;

use crate::macro_registry::MacroRegistry;
use crate::util::{FastHashMap, fast_map_new};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scope {
    Global,
    Local(u64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    pub value: Value,
    pub ty: ValueType,
    pub scope: Scope,
    pub constant: bool,
}

impl Variable {
    pub fn new(value: Value, scope: Scope) -> Self {
        Self {
            ty: value.value_type(),
            value,
            scope,
            constant: false,
        }
    }

    pub fn constant(value: Value, scope: Scope) -> Self {
        Self {
            constant: true,
            ..Self::new(value, scope)
        }
    }
}

#[derive(Debug)]
pub struct Function {
    pub name: QualifiedName,
    pub params: Vec<Parameter>,
    pub return_type: ValueType,
    pub body: Rc<Program>,
}

impl Function {
    /// The namespace the body runs in.
    pub fn namespace(&self) -> &NamespacePath {
        &self.name.path
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteOutcome {
    Declared,
    Updated,
    RejectedConstant,
}

pub struct Storage {
    variables: FastHashMap<QualifiedName, SmallVec<[Variable; 1]>>,
    functions: FastHashMap<QualifiedName, Rc<Function>>,
    structs: FastHashMap<QualifiedName, Rc<Program>>,
    pub macros: MacroRegistry,
}

impl Storage {
    pub fn new() -> Self {
        Self {
            variables: fast_map_new(),
            functions: fast_map_new(),
            structs: fast_map_new(),
            macros: MacroRegistry::new(),
        }
    }

    pub fn get(&self, key: &QualifiedName) -> Option<&Variable> {
        self.variables.get(key).and_then(|stack| stack.last())
    }

    pub fn exists(&self, key: &QualifiedName) -> bool {
        self.get(key).is_some()
    }

    /// Declares `var` at `key`. A variable of the same scope already living
    /// there is overwritten if the types match; one of another scope is
    /// shadowed.
    pub fn set(&mut self, key: QualifiedName, var: Variable) -> Result<WriteOutcome, DiagnosticKind> {
        let scope = var.scope;
        let stack = self.variables.entry(key).or_default();
        if let Some(existing) = stack.iter_mut().rev().find(|v| v.scope == scope) {
            return write_into(existing, var.value);
        }
        stack.push(var);
        Ok(WriteOutcome::Declared)
    }

    /// Writes a new value into the visible variable at `key`.
    pub fn assign(&mut self, key: &QualifiedName, value: Value) -> Result<WriteOutcome, DiagnosticKind> {
        match self.variables.get_mut(key).and_then(|s| s.last_mut()) {
            Some(existing) => write_into(existing, value),
            None => Err(DiagnosticKind::UndefinedVariable(key.to_string())),
        }
    }

    /// Removes the visible variable at `key`.
    pub fn delete_variable(&mut self, key: &QualifiedName) -> bool {
        let Some(stack) = self.variables.get_mut(key) else {
            return false;
        };
        let removed = stack.pop().is_some();
        if stack.is_empty() {
            self.variables.remove(key);
        }
        removed
    }

    /// Removes every variable tagged with `scope`. Returns how many went.
    pub fn delete_scope(&mut self, scope: Scope) -> usize {
        let mut removed = 0;
        self.variables.retain(|_, stack| {
            let before = stack.len();
            stack.retain(|v| v.scope != scope);
            removed += before - stack.len();
            !stack.is_empty()
        });
        removed
    }

    /// Removes every variable and function living under `prefix`.
    pub fn delete_by_namespace_prefix(&mut self, prefix: &NamespacePath) -> usize {
        let mut removed = 0;
        self.variables.retain(|key, stack| {
            if key.is_under(prefix) {
                removed += stack.len();
                false
            } else {
                true
            }
        });
        let before = self.functions.len();
        self.functions.retain(|key, _| !key.is_under(prefix));
        removed + (before - self.functions.len())
    }

    pub fn define_function(&mut self, function: Function) {
        self.functions.insert(function.name.clone(), Rc::new(function));
    }

    pub fn function_exists(&self, key: &QualifiedName) -> bool {
        self.functions.contains_key(key)
    }

    /// Finds `key` and checks the call's arity and argument types.
    pub fn lookup_function(&self, key: &QualifiedName, args: &[Value]) -> Result<Rc<Function>, DiagnosticKind> {
        let function = self
            .functions
            .get(key)
            .ok_or_else(|| DiagnosticKind::UndefinedFunction(key.to_string()))?;
        if function.params.len() != args.len() {
            return Err(DiagnosticKind::ArgumentCountMismatch {
                expected: function.params.len(),
                actual: args.len(),
            });
        }
        for (param, arg) in function.params.iter().zip(args) {
            if !param.ty.accepts(arg.value_type()) {
                return Err(DiagnosticKind::InvalidArgumentType {
                    function: key.to_string(),
                    expected: param.ty.name().to_string(),
                    actual: arg.value_type().name().to_string(),
                });
            }
        }
        Ok(Rc::clone(function))
    }

    pub fn define_struct(&mut self, key: QualifiedName, body: Rc<Program>) {
        self.structs.insert(key, body);
    }

    pub fn lookup_struct(&self, key: &QualifiedName) -> Option<Rc<Program>> {
        self.structs.get(key).cloned()
    }
}

impl Default for Storage {
    fn default() -> Self {
        Self::new()
    }
}

fn write_into(existing: &mut Variable, value: Value) -> Result<WriteOutcome, DiagnosticKind> {
    if existing.ty != value.value_type() {
        return Err(DiagnosticKind::TypeMismatch {
            expected: existing.ty.name().to_string(),
            actual: value.value_type().name().to_string(),
        });
    }
    if existing.constant {
        return Ok(WriteOutcome::RejectedConstant);
    }
    existing.value = value;
    Ok(WriteOutcome::Updated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(raw: &str) -> QualifiedName {
        QualifiedName::resolve(raw, &NamespacePath::root())
    }

    #[test]
    fn type_is_fixed_at_declaration() {
        let mut s = Storage::new();
        s.set(key("x"), Variable::new(Value::Number(1.0), Scope::Global)).unwrap();
        let err = s
            .set(key("x"), Variable::new(Value::Str("a".into()), Scope::Global))
            .unwrap_err();
        assert!(matches!(err, DiagnosticKind::TypeMismatch { .. }));
        assert!(s.assign(&key("x"), Value::Bool(true)).is_err());
        assert_eq!(s.get(&key("x")).unwrap().value, Value::Number(1.0));
    }

    #[test]
    fn constants_reject_writes() {
        let mut s = Storage::new();
        s.set(key("c"), Variable::constant(Value::Number(7.0), Scope::Global)).unwrap();
        let out = s.assign(&key("c"), Value::Number(8.0)).unwrap();
        assert_eq!(out, WriteOutcome::RejectedConstant);
        let out = s
            .set(key("c"), Variable::new(Value::Number(9.0), Scope::Global))
            .unwrap();
        assert_eq!(out, WriteOutcome::RejectedConstant);
        assert_eq!(s.get(&key("c")).unwrap().value, Value::Number(7.0));
    }

    #[test]
    fn scope_deletion_only_touches_its_scope() {
        let mut s = Storage::new();
        s.set(key("x"), Variable::new(Value::Number(1.0), Scope::Global)).unwrap();
        s.set(key("x"), Variable::new(Value::Number(2.0), Scope::Local(1))).unwrap();
        s.set(key("y"), Variable::new(Value::Number(3.0), Scope::Local(1))).unwrap();
        s.set(key("z"), Variable::new(Value::Number(4.0), Scope::Local(2))).unwrap();
        assert_eq!(s.get(&key("x")).unwrap().value, Value::Number(2.0));

        assert_eq!(s.delete_scope(Scope::Local(1)), 2);
        assert_eq!(s.get(&key("x")).unwrap().value, Value::Number(1.0));
        assert!(!s.exists(&key("y")));
        assert!(s.exists(&key("z")));
        assert_eq!(s.delete_scope(Scope::Local(1)), 0);
    }

    #[test]
    fn prefix_deletion_covers_variables_and_functions() {
        let mut s = Storage::new();
        s.set(key("foo::x"), Variable::new(Value::Number(1.0), Scope::Global)).unwrap();
        s.set(key("foo::inner::y"), Variable::new(Value::Bool(true), Scope::Global)).unwrap();
        s.set(key("foobar::x"), Variable::new(Value::Number(1.0), Scope::Global)).unwrap();
        s.define_function(Function {
            name: key("foo::get"),
            params: Vec::new(),
            return_type: ValueType::Void,
            body: Rc::new(Program::new()),
        });

        let prefix = NamespacePath::parse("foo");
        assert_eq!(s.delete_by_namespace_prefix(&prefix), 3);
        assert!(!s.exists(&key("foo::x")));
        assert!(!s.function_exists(&key("foo::get")));
        assert!(s.exists(&key("foobar::x")));
        assert_eq!(s.delete_by_namespace_prefix(&prefix), 0);
    }

    #[test]
    fn function_lookup_checks_arity_and_types() {
        let mut s = Storage::new();
        s.define_function(Function {
            name: key("f"),
            params: vec![
                Parameter {
                    name: "a".into(),
                    ty: ValueType::Number,
                },
                Parameter {
                    name: "b".into(),
                    ty: ValueType::Any,
                },
            ],
            return_type: ValueType::Void,
            body: Rc::new(Program::new()),
        });
        assert!(s.lookup_function(&key("f"), &[Value::Number(1.0), Value::Bool(true)]).is_ok());
        assert!(matches!(
            s.lookup_function(&key("f"), &[Value::Number(1.0)]),
            Err(DiagnosticKind::ArgumentCountMismatch { expected: 2, actual: 1 })
        ));
        assert!(matches!(
            s.lookup_function(&key("f"), &[Value::Str("x".into()), Value::Bool(true)]),
            Err(DiagnosticKind::InvalidArgumentType { .. })
        ));
        assert!(matches!(
            s.lookup_function(&key("g"), &[]),
            Err(DiagnosticKind::UndefinedFunction(_))
        ));
    }
}
