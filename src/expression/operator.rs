use std::fmt;

/// Largest integer an intermediate value may reach (2^53 - 1)
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// The four binary operators the game allows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// All operators in the order the solver tries them
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    /// Display glyph used in rendered solutions
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '×',
            Operator::Div => '÷',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '×' | '*' => Some(Operator::Mul),
            '÷' | '/' => Some(Operator::Div),
            _ => None,
        }
    }

    pub fn is_commutative(self) -> bool {
        matches!(self, Operator::Add | Operator::Mul)
    }

    /// Apply the operator to two game values.
    ///
    /// Returns `None` when the result would be negative, fractional, a division
    /// by zero, or larger than [`MAX_SAFE_INTEGER`].
    pub fn apply(self, a: u64, b: u64) -> Option<u64> {
        let value = match self {
            Operator::Add => a.checked_add(b)?,
            Operator::Sub => a.checked_sub(b)?,
            Operator::Mul => a.checked_mul(b)?,
            Operator::Div => {
                if b == 0 || a % b != 0 {
                    return None;
                }
                a / b
            }
        };

        (value <= MAX_SAFE_INTEGER).then_some(value)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
