use std::fmt;

/// Outcome of a search: the value reached and the expression producing it.
///
/// An empty expression with value `0` means no candidate was ever produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    pub value: u64,
    pub expression: String,
}

impl Solution {
    pub fn new(value: u64, expression: String) -> Self {
        Self { value, expression }
    }

    pub fn is_exact(&self, target: i64) -> bool {
        i64::try_from(self.value).is_ok_and(|value| value == target)
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.expression.is_empty() || self.expression == self.value.to_string() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} = {}", self.expression, self.value)
        }
    }
}
