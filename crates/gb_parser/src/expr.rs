//! Builders for the `| … |` and `# … #` regions.
//!
//! Words are fed one at a time with the opening delimiter already removed.
//! A trailing delimiter closes the region. Operands and operators must
//! alternate, starting and ending with an operand.
use gb_ir::{Equation, EquationSymbol, LogicalElement, LogicalExpression, Value};
use gb_syntax::DiagnosticKind;
use gb_syntax::words::{
    is_bool, is_logical_operator, is_math_symbol, is_number, is_plain_text, is_string, unquote,
};

pub(crate) const EQUATION_DELIMITER: char = '|';
pub(crate) const LOGICAL_DELIMITER: char = '#';

#[derive(Default)]
pub(crate) struct EquationBuilder {
    symbols: Vec<EquationSymbol>,
    last_was_operand: bool,
}

impl EquationBuilder {
    pub(crate) fn feed(&mut self, word: &str) -> Result<Option<Equation>, DiagnosticKind> {
        let (body, closes) = match word.strip_suffix(EQUATION_DELIMITER) {
            Some(body) => (body, true),
            None => (word, false),
        };
        if !body.is_empty() {
            self.push(body)?;
        }
        if !closes {
            return Ok(None);
        }
        if !self.last_was_operand {
            return Err(DiagnosticKind::InvalidEquation);
        }
        Ok(Some(Equation {
            symbols: std::mem::take(&mut self.symbols),
        }))
    }

    fn push(&mut self, body: &str) -> Result<(), DiagnosticKind> {
        let symbol = if is_number(body) {
            EquationSymbol::Number(body.parse().map_err(|_| DiagnosticKind::InvalidEquation)?)
        } else if is_math_symbol(body) {
            match body {
                "+" => EquationSymbol::Plus,
                "-" => EquationSymbol::Minus,
                "*" => EquationSymbol::Multiply,
                _ => EquationSymbol::Divide,
            }
        } else if is_plain_text(body) {
            EquationSymbol::Variable(body.to_string())
        } else {
            return Err(DiagnosticKind::UnexpectedToken(body.to_string()));
        };
        if symbol.is_operator() == !self.last_was_operand {
            return Err(DiagnosticKind::InvalidEquation);
        }
        self.last_was_operand = !symbol.is_operator();
        self.symbols.push(symbol);
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct LogicalBuilder {
    elements: Vec<LogicalElement>,
    last_was_operand: bool,
}

impl LogicalBuilder {
    pub(crate) fn feed(
        &mut self,
        word: &str,
    ) -> Result<Option<LogicalExpression>, DiagnosticKind> {
        let (body, closes) = match word.strip_suffix(LOGICAL_DELIMITER) {
            Some(body) => (body, true),
            None => (word, false),
        };
        if !body.is_empty() {
            self.push(body)?;
        }
        if !closes {
            return Ok(None);
        }
        if !self.last_was_operand {
            return Err(DiagnosticKind::InvalidLogicalExpression);
        }
        Ok(Some(LogicalExpression {
            elements: std::mem::take(&mut self.elements),
        }))
    }

    fn push(&mut self, body: &str) -> Result<(), DiagnosticKind> {
        let element = if is_string(body) {
            LogicalElement::Literal(Value::Str(unquote(body).to_string()))
        } else if is_bool(body) {
            LogicalElement::Literal(Value::Bool(body == "true"))
        } else if is_number(body) {
            let n = body
                .parse()
                .map_err(|_| DiagnosticKind::InvalidLogicalExpression)?;
            LogicalElement::Literal(Value::Number(n))
        } else if is_logical_operator(body) {
            LogicalElement::from_operator(body).ok_or(DiagnosticKind::InvalidLogicalExpression)?
        } else if is_plain_text(body) {
            LogicalElement::Variable(body.to_string())
        } else {
            return Err(DiagnosticKind::UnexpectedToken(body.to_string()));
        };
        if element.is_operand() == self.last_was_operand {
            return Err(DiagnosticKind::InvalidLogicalExpression);
        }
        self.last_was_operand = element.is_operand();
        self.elements.push(element);
        Ok(())
    }
}
