use log::{debug, warn};

use crate::expression::MAX_SAFE_INTEGER;
use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if `numbers` is empty or holds a value above
/// [`MAX_SAFE_INTEGER`].
pub fn validate_numbers(numbers: &[u64]) -> Result<(), UtilsError> {
    debug!("Validating numbers: {:?}", numbers);

    if numbers.is_empty() {
        warn!("No numbers supplied");
        return Err(UtilsError::EmptyNumbers);
    }

    if let Some(&value) = numbers.iter().find(|&&n| n > MAX_SAFE_INTEGER) {
        warn!("Number {} is too large to combine safely", value);
        return Err(UtilsError::UnsafeInteger {
            value,
            max: MAX_SAFE_INTEGER,
        });
    }

    Ok(())
}

/// # Errors
///
/// Returns an error if the magnitude of `target` is above [`MAX_SAFE_INTEGER`].
pub fn validate_target(target: i64) -> Result<(), UtilsError> {
    if target.unsigned_abs() > MAX_SAFE_INTEGER {
        warn!("Target {} is too large", target);
        return Err(UtilsError::UnsafeTarget(target));
    }
    Ok(())
}
