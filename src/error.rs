use chrono::NaiveDate;
use thiserror::Error;

/// Rejections produced while turning user input into an age report.
///
/// Both variants have a user-correctable cause; callers surface the message
/// and wait for new input rather than retrying.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AgeError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Birth date cannot be in the future")]
    FutureDate {
        birth: NaiveDate,
        reference: NaiveDate,
    },
}

impl AgeError {
    pub fn missing_birth_date() -> Self {
        AgeError::InvalidInput("Please select your birth date".to_string())
    }
}

/// Parse an ISO `YYYY-MM-DD` birth date. Blank input counts as missing.
pub fn parse_birth_date(input: &str) -> Result<NaiveDate, AgeError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(AgeError::missing_birth_date());
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|e| {
        AgeError::InvalidInput(format!(
            "Invalid birth date '{input}' (expected YYYY-MM-DD): {e}"
        ))
    })
}
