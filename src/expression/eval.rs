use log::debug;

use crate::expression::errors::ExpressionError;
use crate::expression::operator::Operator;

/// Deepest parenthesis nesting `evaluate` accepts
pub const MAX_NESTING: usize = 256;

struct Parser {
    chars: Vec<char>,
    position: usize,
    nesting: usize,
}

impl Parser {
    fn new(expr: &str) -> Self {
        Self {
            chars: expr.chars().collect(),
            position: 0,
            nesting: 0,
        }
    }

    fn skip_whitespace(&mut self) {
        while self.chars.get(self.position).is_some_and(|c| c.is_whitespace()) {
            self.position += 1;
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.skip_whitespace();
        self.chars.get(self.position).copied()
    }

    fn parse_sum(&mut self) -> Result<i128, ExpressionError> {
        let mut value = self.parse_product()?;

        while let Some(op) = self.peek().and_then(Operator::from_symbol) {
            if !matches!(op, Operator::Add | Operator::Sub) {
                break;
            }
            self.position += 1;
            let rhs = self.parse_product()?;
            value = combine(value, rhs, op)?;
        }

        Ok(value)
    }

    fn parse_product(&mut self) -> Result<i128, ExpressionError> {
        let mut value = self.parse_factor()?;

        while let Some(op) = self.peek().and_then(Operator::from_symbol) {
            if !matches!(op, Operator::Mul | Operator::Div) {
                break;
            }
            self.position += 1;
            let rhs = self.parse_factor()?;
            value = combine(value, rhs, op)?;
        }

        Ok(value)
    }

    fn parse_factor(&mut self) -> Result<i128, ExpressionError> {
        match self.peek() {
            None => Err(ExpressionError::UnexpectedEnd),
            Some('(') => {
                if self.nesting >= MAX_NESTING {
                    return Err(ExpressionError::NestingTooDeep(MAX_NESTING));
                }
                self.position += 1;
                self.nesting += 1;
                let value = self.parse_sum()?;
                self.nesting -= 1;
                if self.peek() != Some(')') {
                    return Err(ExpressionError::UnbalancedParentheses);
                }
                self.position += 1;
                Ok(value)
            }
            Some(c) if c.is_ascii_digit() => self.parse_number(),
            Some(token) => Err(ExpressionError::UnexpectedToken {
                token,
                position: self.position,
            }),
        }
    }

    fn parse_number(&mut self) -> Result<i128, ExpressionError> {
        let mut value: i128 = 0;
        while let Some(digit) = self.chars.get(self.position).and_then(|c| c.to_digit(10)) {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(i128::from(digit)))
                .ok_or(ExpressionError::Overflow)?;
            self.position += 1;
        }
        Ok(value)
    }
}

fn combine(lhs: i128, rhs: i128, op: Operator) -> Result<i128, ExpressionError> {
    match op {
        Operator::Add => lhs.checked_add(rhs).ok_or(ExpressionError::Overflow),
        Operator::Sub => lhs.checked_sub(rhs).ok_or(ExpressionError::Overflow),
        Operator::Mul => lhs.checked_mul(rhs).ok_or(ExpressionError::Overflow),
        Operator::Div => {
            if rhs == 0 {
                debug!("Division by zero attempted");
                Err(ExpressionError::DivisionByZero)
            } else if lhs % rhs != 0 {
                Err(ExpressionError::InexactDivision {
                    dividend: lhs,
                    divisor: rhs,
                })
            } else {
                Ok(lhs / rhs)
            }
        }
    }
}

/// Evaluate an infix expression such as `"(2 + 3) × 4"`.
///
/// Accepts non-negative integer literals, `+ - × ÷` (or `*` and `/`) and
/// parentheses, with the usual precedence and left associativity.
/// Parentheses may nest at most [`MAX_NESTING`] levels deep.
///
/// # Errors
///
/// Returns an error when the text is empty, malformed or nested too deeply,
/// when a division has a zero divisor or a remainder, or when an intermediate
/// value overflows.
pub fn evaluate(expr: &str) -> Result<i128, ExpressionError> {
    debug!("Evaluating expression: {}", expr);

    let mut parser = Parser::new(expr);
    if parser.peek().is_none() {
        return Err(ExpressionError::EmptyExpression);
    }

    let result = parser.parse_sum().and_then(|value| match parser.peek() {
        None => Ok(value),
        Some(')') => Err(ExpressionError::UnbalancedParentheses),
        Some(token) => Err(ExpressionError::UnexpectedToken {
            token,
            position: parser.position,
        }),
    });

    match &result {
        Ok(value) => debug!("Expression evaluated to: {}", value),
        Err(e) => debug!("Expression evaluation failed: {}", e),
    }

    result
}
