use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Expression is empty")]
    EmptyExpression,
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Division does not produce an integer: {dividend} / {divisor}")]
    InexactDivision { dividend: i128, divisor: i128 },
    #[error("Unexpected token '{token}' at position {position}")]
    UnexpectedToken { token: char, position: usize },
    #[error("Unexpected end of expression")]
    UnexpectedEnd,
    #[error("Unbalanced parentheses")]
    UnbalancedParentheses,
    #[error("Parentheses nested deeper than {0} levels")]
    NestingTooDeep(usize),
    #[error("Arithmetic overflow")]
    Overflow,
}
