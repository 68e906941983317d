//! Arithmetic over `| … |` regions.
//!
//! There is no precedence: the first operand seeds the accumulator and every
//! operator is applied as soon as its right operand is read.

use gb_ir::{Equation, EquationSymbol, NamespacePath, QualifiedName, Value};
use gb_syntax::DiagnosticKind;

use crate::storage::Storage;

#[derive(Clone, Copy)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

pub fn evaluate_equation(
    equation: &Equation,
    storage: &Storage,
    namespace: &NamespacePath,
) -> Result<f64, DiagnosticKind> {
    let mut symbols = equation.symbols.iter();
    let mut acc = match symbols.next() {
        Some(first) => operand(first, storage, namespace)?,
        None => return Err(DiagnosticKind::UnfinishedEquation),
    };

    while let Some(symbol) = symbols.next() {
        let op = match symbol {
            EquationSymbol::Plus => Op::Add,
            EquationSymbol::Minus => Op::Sub,
            EquationSymbol::Multiply => Op::Mul,
            EquationSymbol::Divide => Op::Div,
            _ => return Err(DiagnosticKind::InvalidEquation),
        };
        let rhs = match symbols.next() {
            Some(next) => operand(next, storage, namespace)?,
            None => return Err(DiagnosticKind::UnfinishedEquation),
        };
        acc = apply(op, acc, rhs)?;
    }
    Ok(acc)
}

fn apply(op: Op, lhs: f64, rhs: f64) -> Result<f64, DiagnosticKind> {
    Ok(match op {
        Op::Add => lhs + rhs,
        Op::Sub => lhs - rhs,
        Op::Mul => lhs * rhs,
        Op::Div => {
            if rhs == 0.0 {
                return Err(DiagnosticKind::DivisionByZero);
            }
            lhs / rhs
        }
    })
}

fn operand(
    symbol: &EquationSymbol,
    storage: &Storage,
    namespace: &NamespacePath,
) -> Result<f64, DiagnosticKind> {
    match symbol {
        EquationSymbol::Number(n) => Ok(*n),
        EquationSymbol::Variable(name) => {
            let key = QualifiedName::resolve(name, namespace);
            match storage.get(&key).map(|v| &v.value) {
                Some(Value::Number(n)) => Ok(*n),
                Some(_) => Err(DiagnosticKind::NotANumber(name.clone())),
                None => Err(DiagnosticKind::UndefinedVariable(name.clone())),
            }
        }
        _ => Err(DiagnosticKind::InvalidEquation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{Scope, Variable};
    use proptest::prelude::*;

    fn eq(symbols: Vec<EquationSymbol>) -> Equation {
        Equation { symbols }
    }

    fn eval(symbols: Vec<EquationSymbol>) -> Result<f64, DiagnosticKind> {
        evaluate_equation(&eq(symbols), &Storage::new(), &NamespacePath::root())
    }

    #[test]
    fn no_precedence() {
        use EquationSymbol::*;
        let out = eval(vec![Number(3.0), Plus, Number(4.0), Multiply, Number(2.0)]).unwrap();
        assert_eq!(out, 14.0);
    }

    #[test]
    fn division_by_zero_fails() {
        use EquationSymbol::*;
        let out = eval(vec![Number(3.0), Divide, Number(0.0)]);
        assert_eq!(out, Err(DiagnosticKind::DivisionByZero));
    }

    #[test]
    fn variables_resolve_through_self() {
        use EquationSymbol::{Minus, Number, Plus};
        let mut storage = Storage::new();
        let ns = NamespacePath::parse("obj");
        storage
            .set(
                QualifiedName::new(ns.clone(), "x"),
                Variable::new(Value::Number(10.0), Scope::Global),
            )
            .unwrap();
        storage
            .set(
                QualifiedName::local("s"),
                Variable::new(Value::Str("no".into()), Scope::Global),
            )
            .unwrap();

        let e = eq(vec![EquationSymbol::Variable("self::x".into()), Minus, Number(4.0)]);
        assert_eq!(evaluate_equation(&e, &storage, &ns), Ok(6.0));

        let e = eq(vec![EquationSymbol::Variable("s".into()), Plus, Number(1.0)]);
        assert_eq!(
            evaluate_equation(&e, &storage, &ns),
            Err(DiagnosticKind::NotANumber("s".into()))
        );

        let e = eq(vec![EquationSymbol::Variable("missing".into())]);
        assert!(matches!(
            evaluate_equation(&e, &storage, &ns),
            Err(DiagnosticKind::UndefinedVariable(_))
        ));
    }

    fn op_strategy() -> impl Strategy<Value = EquationSymbol> {
        prop_oneof![
            Just(EquationSymbol::Plus),
            Just(EquationSymbol::Minus),
            Just(EquationSymbol::Multiply),
            Just(EquationSymbol::Divide),
        ]
    }

    fn fold(lhs: f64, op: &EquationSymbol, rhs: f64) -> f64 {
        match op {
            EquationSymbol::Plus => lhs + rhs,
            EquationSymbol::Minus => lhs - rhs,
            EquationSymbol::Multiply => lhs * rhs,
            _ => lhs / rhs,
        }
    }

    proptest! {
        #[test]
        fn left_to_right_law(
            a in -1000i32..1000,
            b in 1i32..1000,
            c in 1i32..1000,
            op1 in op_strategy(),
            op2 in op_strategy(),
        ) {
            let (a, b, c) = (a as f64, b as f64, c as f64);
            let out = eval(vec![
                EquationSymbol::Number(a),
                op1.clone(),
                EquationSymbol::Number(b),
                op2.clone(),
                EquationSymbol::Number(c),
            ]).unwrap();
            prop_assert_eq!(out, fold(fold(a, &op1, b), &op2, c));
        }
    }
}
