//! Input parsing and validation for the solver

mod errors;
mod parse;
mod validation;

pub use errors::UtilsError;
pub use parse::parse_numbers;
pub use validation::{validate_numbers, validate_target};
