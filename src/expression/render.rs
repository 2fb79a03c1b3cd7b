use crate::expression::operator::Operator;

/// A rendered operand is compound when it contains any display glyph
fn is_compound(expr: &str) -> bool {
    expr.chars().any(|c| matches!(c, '+' | '-' | '×' | '÷'))
}

fn parenthesize(expr: &str) -> String {
    format!("({})", expr)
}

/// Combine two rendered operands under `op` into an infix string.
///
/// Compound operands of `×` and `÷` are wrapped in parentheses, and so is a
/// compound right operand of `-` or `÷`. Nothing else is wrapped, e.g.
/// `render("2 + 3", "4", Operator::Mul)` gives `"(2 + 3) × 4"`.
pub fn render(left: &str, right: &str, op: Operator) -> String {
    let left_compound = is_compound(left);
    let right_compound = is_compound(right);
    let tight = matches!(op, Operator::Mul | Operator::Div);

    let left = if left_compound && tight {
        parenthesize(left)
    } else {
        left.to_string()
    };

    let right = if right_compound && (tight || op == Operator::Sub) {
        parenthesize(right)
    } else {
        right.to_string()
    };

    format!("{} {} {}", left, op.symbol(), right)
}
