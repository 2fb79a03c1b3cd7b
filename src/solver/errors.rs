use thiserror::Error;

use crate::utils::UtilsError;

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Invalid input: {0}")]
    UtilsError(#[from] UtilsError),
}
