use std::rc::Rc;

use gb_ir::{FunctionInvocation, InvocationArgument, QualifiedName, Value, ValueType};
use gb_syntax::DiagnosticKind;

use super::{Exec, ExecContext, Halt, fail};
use crate::Runtime;
use crate::runtime::Flow;
use crate::storage::{Function, Scope, Variable};

impl Runtime {
    /// Evaluates the arguments of `call`, then runs the function.
    pub(crate) fn invoke(
        &mut self,
        call: &FunctionInvocation,
        ctx: &ExecContext,
        line: usize,
        word: usize,
    ) -> Exec<Option<Value>> {
        let mut args = Vec::with_capacity(call.args.len());
        for arg in &call.args {
            let value = match arg {
                InvocationArgument::Literal(v) => v.clone(),
                InvocationArgument::Variable(name) => {
                    let key = QualifiedName::resolve(name, &ctx.namespace);
                    match self.storage.get(&key) {
                        Some(var) => var.value.clone(),
                        None => {
                            return Err(fail(
                                DiagnosticKind::UndefinedVariable(name.clone()),
                                line,
                                word,
                            )
                            .into());
                        }
                    }
                }
            };
            args.push(value);
        }

        let key = QualifiedName::resolve(&call.name, &ctx.namespace);
        let function = self
            .storage
            .lookup_function(&key, &args)
            .map_err(|diag| fail(diag, line, word))?;
        self.run_function(function, args, line, word)
    }

    /// Binds `args` in a fresh scope and runs the body. The scope is torn
    /// down whether or not the body succeeds.
    pub(crate) fn run_function(
        &mut self,
        function: Rc<Function>,
        args: Vec<Value>,
        line: usize,
        word: usize,
    ) -> Exec<Option<Value>> {
        if self.config.trace {
            eprintln!("trace: call {}", function.name);
        }
        let scope = Scope::Local(self.next_scope_id());
        let ctx = ExecContext {
            scope,
            namespace: function.namespace().clone(),
            in_function: true,
            return_type: function.return_type,
        };

        let result = self.bind_and_run(&function, args, &ctx, (line, word));
        self.storage.delete_scope(scope);

        match result? {
            Flow::Return(value) => check_return(&function, value, line, word),
            Flow::Exit => Err(Halt::Exit),
            Flow::None => check_return(&function, None, line, word),
        }
    }

    fn bind_and_run(
        &mut self,
        function: &Function,
        args: Vec<Value>,
        ctx: &ExecContext,
        (line, word): (usize, usize),
    ) -> Exec<Flow> {
        for (param, arg) in function.params.iter().zip(args) {
            self.storage
                .set(QualifiedName::local(param.name.as_str()), Variable::new(arg, ctx.scope))
                .map_err(|diag| fail(diag, line, word))?;
        }
        self.exec_program(&function.body, ctx)
    }

    pub(crate) fn next_scope_id(&mut self) -> u64 {
        self.next_scope += 1;
        self.next_scope
    }
}

fn check_return(
    function: &Function,
    value: Option<Value>,
    line: usize,
    word: usize,
) -> Exec<Option<Value>> {
    match (function.return_type, value) {
        (ValueType::Void, None) => Ok(None),
        (ValueType::Void, Some(_)) => {
            Err(fail(DiagnosticKind::VoidReturnWithValue, line, word).into())
        }
        (_, None) => Err(fail(DiagnosticKind::MissingReturnValue, line, word).into()),
        (expected, Some(v)) if expected.accepts(v.value_type()) => Ok(Some(v)),
        (expected, Some(v)) => Err(fail(
            DiagnosticKind::TypeMismatch {
                expected: expected.name().to_string(),
                actual: v.value_type().name().to_string(),
            },
            line,
            word,
        )
        .into()),
    }
}
