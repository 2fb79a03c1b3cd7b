pub mod constants;
mod config;
mod core;
mod errors;
mod solution;
mod state;

pub use config::SolverConfig;
pub use self::core::ExpressionSolver;
pub use errors::SolverError;
pub use solution::Solution;
pub use state::{CanonicalKey, NumericToken, SearchState};

#[cfg(test)]
mod tests;
