//! Operators, infix rendering and evaluation of rendered solutions

mod errors;
mod eval;
mod operator;
mod render;

pub use errors::ExpressionError;
pub use eval::{MAX_NESTING, evaluate};
pub use operator::{MAX_SAFE_INTEGER, Operator};
pub use render::render;
