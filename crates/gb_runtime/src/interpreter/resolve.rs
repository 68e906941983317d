use gb_ir::{NamespacePath, QualifiedName, SELF_SEGMENT, SEPARATOR, Token, Value};
use gb_syntax::DiagnosticKind;

use super::{Exec, ExecContext, fail};
use crate::Runtime;
use crate::eval::{cast_value, evaluate_equation, evaluate_logical, interpolate};

fn is_self_relative(raw: &str) -> bool {
    raw.split(SEPARATOR).next() == Some(SELF_SEGMENT)
}

/// Key a variable declared as `raw` is stored under.
pub(crate) fn declaration_key(raw: &str, ctx: &ExecContext) -> QualifiedName {
    let key = QualifiedName::resolve(raw, &ctx.namespace);
    if ctx.in_function || is_self_relative(raw) {
        key
    } else {
        key.within(&ctx.namespace)
    }
}

/// Key a function or struct template declared as `raw` is stored under.
pub(crate) fn member_key(raw: &str, namespace: &NamespacePath) -> QualifiedName {
    let key = QualifiedName::resolve(raw, namespace);
    if is_self_relative(raw) {
        key
    } else {
        key.within(namespace)
    }
}

impl Runtime {
    /// Evaluates one value-producing token.
    pub(crate) fn token_value(
        &mut self,
        token: &Token,
        ctx: &ExecContext,
        line: usize,
        word: usize,
    ) -> Exec<Value> {
        let at = |diag: DiagnosticKind| fail(diag, line, word);
        let value = match token {
            Token::Str(s) => Value::Str(interpolate(s, &self.storage, &ctx.namespace)),
            Token::Number(n) => Value::Number(*n),
            Token::Bool(b) => Value::Bool(*b),
            Token::Url(u) => Value::Url(u.clone()),
            Token::Pointer(name) => Value::Pointer(name.clone()),
            Token::PlainText(name) => {
                let key = QualifiedName::resolve(name, &ctx.namespace);
                match self.storage.get(&key) {
                    Some(var) => var.value.clone(),
                    None => return Err(at(DiagnosticKind::UndefinedVariable(name.clone())).into()),
                }
            }
            Token::Equation(eq) => Value::Number(
                evaluate_equation(eq, &self.storage, &ctx.namespace).map_err(at)?,
            ),
            Token::LogicalExpression(expr) => Value::Bool(
                evaluate_logical(expr, &self.storage, &ctx.namespace).map_err(at)?,
            ),
            Token::Casted(source, target) => {
                cast_value(source, *target, &self.storage, &ctx.namespace).map_err(at)?
            }
            Token::FunctionInvocation(call) => match self.invoke(call, ctx, line, word)? {
                Some(v) => v,
                None => return Err(at(DiagnosticKind::NoReturnValue(call.name.clone())).into()),
            },
            Token::CodeBlock(_) => return Err(at(DiagnosticKind::UnexpectedCodeBlock).into()),
            other => {
                return Err(at(DiagnosticKind::UnexpectedInStatement(other.describe())).into());
            }
        };
        Ok(value)
    }

    /// Like [`token_value`](Self::token_value), but identifiers that name a
    /// struct template or no variable at all pass through as bare strings,
    /// and type names become their spelling.
    pub(crate) fn macro_argument(
        &mut self,
        token: &Token,
        ctx: &ExecContext,
        line: usize,
        word: usize,
    ) -> Exec<Value> {
        match token {
            Token::PlainText(name) => {
                let key = QualifiedName::resolve(name, &ctx.namespace);
                if self.storage.lookup_struct(&key).is_none() {
                    if let Some(var) = self.storage.get(&key) {
                        return Ok(var.value.clone());
                    }
                }
                Ok(Value::Str(name.clone()))
            }
            Token::VariableType(ty) => Ok(Value::Str(ty.name().to_string())),
            other => self.token_value(other, ctx, line, word),
        }
    }
}
