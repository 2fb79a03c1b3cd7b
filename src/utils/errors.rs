use thiserror::Error;

/// Errors raised while checking solver input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("At least one number is required")]
    EmptyNumbers,
    #[error("Number {value} exceeds the largest safe integer {max}")]
    UnsafeInteger { value: u64, max: u64 },
    #[error("Target {0} exceeds the largest safe integer")]
    UnsafeTarget(i64),
}
