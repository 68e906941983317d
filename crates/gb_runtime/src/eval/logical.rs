//! Boolean evaluation of `# … #` regions.
//!
//! Variables are substituted first, then every comparison is reduced to a
//! bool, then `&&`/`||` are folded strictly by position.

use gb_ir::{LogicalElement, LogicalExpression, NamespacePath, QualifiedName, Value};
use gb_syntax::DiagnosticKind;

use crate::storage::Storage;

enum Resolved {
    Operand(Value),
    Compare(LogicalElement),
    And,
    Or,
}

enum Reduced {
    Bool(bool),
    And,
    Or,
}

pub fn evaluate_logical(
    expr: &LogicalExpression,
    storage: &Storage,
    namespace: &NamespacePath,
) -> Result<bool, DiagnosticKind> {
    let resolved = substitute(expr, storage, namespace)?;
    let reduced = reduce_comparisons(resolved)?;
    combine(reduced)
}

fn substitute(
    expr: &LogicalExpression,
    storage: &Storage,
    namespace: &NamespacePath,
) -> Result<Vec<Resolved>, DiagnosticKind> {
    expr.elements
        .iter()
        .map(|element| {
            Ok(match element {
                LogicalElement::Literal(v) => Resolved::Operand(v.clone()),
                LogicalElement::Variable(name) => {
                    let key = QualifiedName::resolve(name, namespace);
                    let var = storage
                        .get(&key)
                        .ok_or_else(|| DiagnosticKind::UndefinedVariable(name.clone()))?;
                    Resolved::Operand(var.value.clone())
                }
                LogicalElement::And => Resolved::And,
                LogicalElement::Or => Resolved::Or,
                cmp => Resolved::Compare(cmp.clone()),
            })
        })
        .collect()
}

fn reduce_comparisons(items: Vec<Resolved>) -> Result<Vec<Reduced>, DiagnosticKind> {
    let mut out = Vec::new();
    let mut current: Option<Value> = None;
    let mut pending: Option<(Value, LogicalElement)> = None;

    for item in items {
        match item {
            Resolved::Operand(rhs) => {
                current = Some(match pending.take() {
                    Some((lhs, cmp)) => Value::Bool(compare(&lhs, &cmp, &rhs)?),
                    None => rhs,
                });
            }
            Resolved::Compare(cmp) => {
                let lhs = current
                    .take()
                    .ok_or(DiagnosticKind::InvalidLogicalExpression)?;
                pending = Some((lhs, cmp));
            }
            Resolved::And => {
                out.push(Reduced::Bool(truth(current.take())?));
                out.push(Reduced::And);
            }
            Resolved::Or => {
                out.push(Reduced::Bool(truth(current.take())?));
                out.push(Reduced::Or);
            }
        }
    }
    if pending.is_some() {
        return Err(DiagnosticKind::UnfinishedLogicalExpression);
    }
    out.push(Reduced::Bool(truth(current)?));
    Ok(out)
}

fn combine(items: Vec<Reduced>) -> Result<bool, DiagnosticKind> {
    let mut items = items.into_iter();
    let mut acc = match items.next() {
        Some(Reduced::Bool(b)) => b,
        _ => return Err(DiagnosticKind::InvalidLogicalExpression),
    };
    while let Some(op) = items.next() {
        let rhs = match items.next() {
            Some(Reduced::Bool(b)) => b,
            _ => return Err(DiagnosticKind::InvalidLogicalExpression),
        };
        acc = match op {
            Reduced::And => acc && rhs,
            Reduced::Or => acc || rhs,
            Reduced::Bool(_) => return Err(DiagnosticKind::InvalidLogicalExpression),
        };
    }
    Ok(acc)
}

fn compare(lhs: &Value, cmp: &LogicalElement, rhs: &Value) -> Result<bool, DiagnosticKind> {
    match cmp {
        LogicalElement::Equal => Ok(lhs == rhs),
        LogicalElement::NotEqual => Ok(lhs != rhs),
        LogicalElement::Less | LogicalElement::Greater => {
            let (Some(a), Some(b)) = (lhs.as_number(), rhs.as_number()) else {
                return Err(DiagnosticKind::ExpectedNumberInComparison);
            };
            Ok(if matches!(cmp, LogicalElement::Less) {
                a < b
            } else {
                a > b
            })
        }
        _ => Err(DiagnosticKind::InvalidLogicalExpression),
    }
}

fn truth(value: Option<Value>) -> Result<bool, DiagnosticKind> {
    match value {
        Some(Value::Bool(b)) => Ok(b),
        Some(_) => Err(DiagnosticKind::ExpectedBool),
        None => Err(DiagnosticKind::InvalidLogicalExpression),
    }
}
