use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if the trimmed string is empty or not a decimal integer
/// that fits in an `i64`.
pub fn parse_number(text: &str) -> Result<i64, UtilsError> {
    debug!("Parsing number: '{}'", text);

    let trimmed = text.trim();
    if trimmed.is_empty() {
        warn!("Number is empty");
        return Err(UtilsError::EmptyNumber);
    }

    trimmed.parse::<i64>().map_err(|_| {
        warn!("Not a valid integer: '{}'", trimmed);
        UtilsError::InvalidNumber(trimmed.to_string())
    })
}

/// # Errors
///
/// Returns the first error produced by [`parse_number`].
pub fn parse_numbers<S: AsRef<str>>(texts: &[S]) -> Result<Vec<i64>, UtilsError> {
    let numbers = texts
        .iter()
        .map(|text| parse_number(text.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    debug!("Parsed numbers: {:?}", numbers);
    Ok(numbers)
}
