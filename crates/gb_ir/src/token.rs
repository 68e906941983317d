use std::rc::Rc;

use gb_syntax::Keyword;

use crate::{Program, Value, ValueType};

#[derive(Clone, Debug, PartialEq)]
pub enum EquationSymbol {
    Number(f64),
    Variable(String),
    Plus,
    Minus,
    Multiply,
    Divide,
}

impl EquationSymbol {
    pub fn is_operator(&self) -> bool {
        !matches!(self, EquationSymbol::Number(_) | EquationSymbol::Variable(_))
    }
}

/// A `| … |` region: operands and operators alternating, in source order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Equation {
    pub symbols: Vec<EquationSymbol>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum LogicalElement {
    Literal(Value),
    Variable(String),
    Equal,
    NotEqual,
    Less,
    Greater,
    And,
    Or,
}

impl LogicalElement {
    pub fn from_operator(word: &str) -> Option<Self> {
        Some(match word {
            "==" => LogicalElement::Equal,
            "!=" => LogicalElement::NotEqual,
            "<" => LogicalElement::Less,
            ">" => LogicalElement::Greater,
            "&&" => LogicalElement::And,
            "||" => LogicalElement::Or,
            _ => return None,
        })
    }

    pub fn is_operand(&self) -> bool {
        matches!(self, LogicalElement::Literal(_) | LogicalElement::Variable(_))
    }

    pub fn is_comparator(&self) -> bool {
        matches!(
            self,
            LogicalElement::Equal
                | LogicalElement::NotEqual
                | LogicalElement::Less
                | LogicalElement::Greater
        )
    }
}

/// A `# … #` region.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LogicalExpression {
    pub elements: Vec<LogicalElement>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub ty: ValueType,
}

/// `name(arg:TYPE,...):RETURNTYPE`
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionDefinition {
    pub name: String,
    pub params: Vec<Parameter>,
    pub return_type: ValueType,
}

#[derive(Clone, Debug, PartialEq)]
pub enum InvocationArgument {
    Literal(Value),
    Variable(String),
}

/// `name(a,b,...)`
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionInvocation {
    pub name: String,
    pub args: Vec<InvocationArgument>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    Str(String),
    Number(f64),
    Bool(bool),
    Url(String),
    PlainText(String),
    Pointer(String),
    VariableType(ValueType),
    Macro(String),
    Keyword(Keyword),
    CodeBlock(Rc<Program>),
    Equation(Equation),
    LogicalExpression(LogicalExpression),
    FunctionInvocation(FunctionInvocation),
    FunctionDefinition(FunctionDefinition),
    Casted(Value, ValueType),
}

impl Token {
    /// Short human name used in diagnostics.
    pub fn describe(&self) -> String {
        match self {
            Token::Str(_) => "string".into(),
            Token::Number(_) => "number".into(),
            Token::Bool(_) => "bool".into(),
            Token::Url(_) => "url".into(),
            Token::PlainText(name) => format!("identifier \"{}\"", name),
            Token::Pointer(name) => format!("pointer \"${}\"", name),
            Token::VariableType(t) => format!("type {}", t),
            Token::Macro(name) => format!("macro {}", name),
            Token::Keyword(k) => format!("keyword \"{}\"", k),
            Token::CodeBlock(_) => "code block".into(),
            Token::Equation(_) => "equation".into(),
            Token::LogicalExpression(_) => "logical expression".into(),
            Token::FunctionInvocation(f) => format!("call of \"{}\"", f.name),
            Token::FunctionDefinition(f) => format!("definition of \"{}\"", f.name),
            Token::Casted(_, t) => format!("cast to {}", t),
        }
    }
}
