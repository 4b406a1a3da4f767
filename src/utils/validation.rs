use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if no source numbers were supplied.
pub fn validate_numbers(numbers: &[i64]) -> Result<(), UtilsError> {
    debug!("Validating source numbers: {:?}", numbers);

    if numbers.is_empty() {
        warn!("No source numbers supplied");
        return Err(UtilsError::EmptyNumbers);
    }

    Ok(())
}
