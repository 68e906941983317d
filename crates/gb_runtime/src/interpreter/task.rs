use std::rc::Rc;

use gb_ir::{FunctionDefinition, FunctionInvocation, Line, LogicalExpression, Program, Token, Value, ValueType};
use gb_syntax::{DiagnosticKind, DiagnosticsFormatter, Keyword};

use super::resolve::{declaration_key, member_key};
use super::{Exec, ExecContext, Halt, fail};
use crate::Runtime;
use crate::eval::evaluate_logical;
use crate::macro_registry::MacroCall;
use crate::runtime::Flow;
use crate::storage::{Function, Variable, WriteOutcome};

/// A statement being assembled from the tokens of one line. Each slot is
/// filled in source order; an empty slot at the end of the line is an
/// incomplete statement.
enum Task<'a> {
    Declare {
        constant: bool,
        ty: Option<ValueType>,
        name: Option<&'a str>,
        value: Option<(Value, usize)>,
    },
    Branch {
        looping: bool,
        condition: Option<(&'a LogicalExpression, usize)>,
        body: Option<&'a Rc<Program>>,
    },
    Function {
        definition: Option<&'a FunctionDefinition>,
        body: Option<&'a Rc<Program>>,
    },
    Namespace {
        name: Option<&'a str>,
        body: Option<&'a Rc<Program>>,
    },
    Struct {
        name: Option<&'a str>,
        body: Option<&'a Rc<Program>>,
    },
    Return {
        value: Option<(Value, usize)>,
    },
    Exit,
    Macro {
        name: &'a str,
        args: Vec<Value>,
        words: Vec<usize>,
    },
    Invocation {
        call: &'a FunctionInvocation,
    },
}

impl<'a> Task<'a> {
    fn open(head: &'a Token) -> Option<Self> {
        Some(match head {
            Token::Keyword(kw) => match kw {
                Keyword::Var | Keyword::Const => Task::Declare {
                    constant: *kw == Keyword::Const,
                    ty: None,
                    name: None,
                    value: None,
                },
                Keyword::If | Keyword::While => Task::Branch {
                    looping: *kw == Keyword::While,
                    condition: None,
                    body: None,
                },
                Keyword::Func => Task::Function {
                    definition: None,
                    body: None,
                },
                Keyword::Namespace => Task::Namespace {
                    name: None,
                    body: None,
                },
                Keyword::Struct => Task::Struct {
                    name: None,
                    body: None,
                },
                Keyword::Return => Task::Return { value: None },
                Keyword::Exit => Task::Exit,
            },
            Token::Macro(name) => Task::Macro {
                name: name.as_str(),
                args: Vec::new(),
                words: Vec::new(),
            },
            Token::FunctionInvocation(call) => Task::Invocation { call },
            _ => return None,
        })
    }
}

fn unexpected(token: &Token, line: usize, word: usize) -> Halt {
    let diag = match token {
        Token::CodeBlock(_) => DiagnosticKind::UnexpectedCodeBlock,
        other => DiagnosticKind::UnexpectedInStatement(other.describe()),
    };
    fail(diag, line, word).into()
}

fn require<T>(slot: Option<T>, what: &'static str, line: usize, word: usize) -> Exec<T> {
    slot.ok_or_else(|| fail(DiagnosticKind::IncompleteStatement(what), line, word).into())
}

impl Runtime {
    pub(crate) fn exec_line(&mut self, line: &Line, ctx: &ExecContext) -> Exec<Flow> {
        let Some(head) = line.tokens.first() else {
            return Ok(Flow::None);
        };
        let number = line.number;
        let mut task = match Task::open(head) {
            Some(task) => task,
            None => return Err(unexpected(head, number, line.word_of(0))),
        };
        for (idx, token) in line.tokens.iter().enumerate().skip(1) {
            self.feed(&mut task, token, ctx, number, line.word_of(idx))?;
        }
        let end = line.words.last().copied().unwrap_or(0);
        self.finish(task, ctx, number, end)
    }

    fn feed<'a>(
        &mut self,
        task: &mut Task<'a>,
        token: &'a Token,
        ctx: &ExecContext,
        line: usize,
        word: usize,
    ) -> Exec<()> {
        match task {
            Task::Declare {
                ty, name, value, ..
            } => match token {
                Token::VariableType(t) if ty.is_none() => {
                    if !t.is_storable() {
                        let diag = DiagnosticKind::InvalidVariableType(t.name().to_string());
                        return Err(fail(diag, line, word).into());
                    }
                    *ty = Some(*t);
                }
                Token::PlainText(n) if ty.is_some() && name.is_none() => *name = Some(n.as_str()),
                _ if name.is_some() && value.is_none() => {
                    *value = Some((self.token_value(token, ctx, line, word)?, word));
                }
                _ => return Err(unexpected(token, line, word)),
            },
            Task::Branch {
                condition, body, ..
            } => match token {
                Token::LogicalExpression(expr) if condition.is_none() => {
                    *condition = Some((expr, word));
                }
                Token::CodeBlock(block) if condition.is_some() && body.is_none() => {
                    *body = Some(block);
                }
                _ => return Err(unexpected(token, line, word)),
            },
            Task::Function { definition, body } => match token {
                Token::FunctionDefinition(def) if definition.is_none() => *definition = Some(def),
                Token::CodeBlock(block) if definition.is_some() && body.is_none() => {
                    *body = Some(block);
                }
                _ => return Err(unexpected(token, line, word)),
            },
            Task::Namespace { name, body } | Task::Struct { name, body } => match token {
                Token::PlainText(n) if name.is_none() => *name = Some(n.as_str()),
                Token::CodeBlock(block) if name.is_some() && body.is_none() => *body = Some(block),
                _ => return Err(unexpected(token, line, word)),
            },
            Task::Return { value } => {
                if value.is_some() {
                    return Err(unexpected(token, line, word));
                }
                *value = Some((self.token_value(token, ctx, line, word)?, word));
            }
            Task::Macro { args, words, .. } => {
                if matches!(token, Token::CodeBlock(_)) {
                    return Err(unexpected(token, line, word));
                }
                args.push(self.macro_argument(token, ctx, line, word)?);
                words.push(word);
            }
            Task::Exit | Task::Invocation { .. } => return Err(unexpected(token, line, word)),
        }
        Ok(())
    }

    fn finish(&mut self, task: Task<'_>, ctx: &ExecContext, line: usize, end: usize) -> Exec<Flow> {
        match task {
            Task::Declare {
                constant,
                ty,
                name,
                value,
            } => {
                let ty = require(ty, "variable type", line, end)?;
                let name = require(name, "variable name", line, end)?;
                let (value, word) = require(value, "value", line, end)?;
                if value.value_type() != ty {
                    let diag = DiagnosticKind::TypeMismatch {
                        expected: ty.name().to_string(),
                        actual: value.value_type().name().to_string(),
                    };
                    return Err(fail(diag, line, word).into());
                }
                let var = if constant {
                    Variable::constant(value, ctx.scope)
                } else {
                    Variable::new(value, ctx.scope)
                };
                let key = declaration_key(name, ctx);
                let outcome = self
                    .storage
                    .set(key, var)
                    .map_err(|diag| fail(diag, line, word))?;
                if outcome == WriteOutcome::RejectedConstant {
                    self.warn_constant(name);
                }
                Ok(Flow::None)
            }
            Task::Branch {
                looping,
                condition,
                body,
            } => {
                let (expr, word) = require(condition, "logical expression", line, end)?;
                let body = require(body, "code block", line, end)?;
                if !looping {
                    if self.condition_holds(expr, ctx, line, word)? {
                        return self.exec_program(body, ctx);
                    }
                    return Ok(Flow::None);
                }
                while self.condition_holds(expr, ctx, line, word)? {
                    let flow = self.exec_program(body, ctx)?;
                    if !matches!(flow, Flow::None) {
                        return Ok(flow);
                    }
                }
                Ok(Flow::None)
            }
            Task::Function { definition, body } => {
                let def = require(definition, "function definition", line, end)?;
                let body = require(body, "code block", line, end)?;
                self.storage.define_function(Function {
                    name: member_key(&def.name, &ctx.namespace),
                    params: def.params.clone(),
                    return_type: def.return_type,
                    body: Rc::clone(body),
                });
                Ok(Flow::None)
            }
            Task::Namespace { name, body } => {
                let name = require(name, "namespace name", line, end)?;
                let body = require(body, "code block", line, end)?;
                let path = member_key(name, &ctx.namespace).as_namespace();
                self.exec_program(body, &ctx.namespaced(path))
            }
            Task::Struct { name, body } => {
                let name = require(name, "struct name", line, end)?;
                let body = require(body, "code block", line, end)?;
                self.storage
                    .define_struct(member_key(name, &ctx.namespace), Rc::clone(body));
                Ok(Flow::None)
            }
            Task::Return { value } => {
                let expected = ctx.return_type;
                match value {
                    None if expected != ValueType::Void => {
                        Err(fail(DiagnosticKind::MissingReturnValue, line, end).into())
                    }
                    None => Ok(Flow::Return(None)),
                    Some((_, word)) if expected == ValueType::Void => {
                        Err(fail(DiagnosticKind::VoidReturnWithValue, line, word).into())
                    }
                    Some((v, word)) if !expected.accepts(v.value_type()) => {
                        let diag = DiagnosticKind::TypeMismatch {
                            expected: expected.name().to_string(),
                            actual: v.value_type().name().to_string(),
                        };
                        Err(fail(diag, line, word).into())
                    }
                    Some((v, _)) => Ok(Flow::Return(Some(v))),
                }
            }
            Task::Exit => Err(Halt::Exit),
            Task::Macro { name, args, words } => {
                let call = MacroCall {
                    name: name.to_string(),
                    args,
                    words,
                    line,
                    word: 0,
                    namespace: ctx.namespace.clone(),
                    scope: ctx.scope,
                };
                self.dispatch_macro(&call)?;
                Ok(Flow::None)
            }
            Task::Invocation { call } => {
                self.invoke(call, ctx, line, 0)?;
                Ok(Flow::None)
            }
        }
    }

    fn condition_holds(
        &self,
        expr: &LogicalExpression,
        ctx: &ExecContext,
        line: usize,
        word: usize,
    ) -> Exec<bool> {
        evaluate_logical(expr, &self.storage, &ctx.namespace)
            .map_err(|diag| fail(diag, line, word).into())
    }

    fn dispatch_macro(&mut self, call: &MacroCall) -> Exec<()> {
        let handler = self
            .storage
            .macros
            .get(&call.name)
            .map_err(|diag| fail(diag, call.line, call.word))?;
        if self.config.trace {
            eprintln!("trace: macro {}", call.name);
        }
        handler.call(self, call)?;
        if self.halted {
            return Err(Halt::Exit);
        }
        Ok(())
    }

    pub(crate) fn warn_constant(&mut self, name: &str) {
        let text = DiagnosticsFormatter::format(&DiagnosticKind::ConstantWrite(name.to_string()));
        self.caps.console.emit_warning(&text);
    }
}
