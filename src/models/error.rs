//! Validation errors
//!
//! Every rejection path of a calculation returns one of these.

use serde::Serialize;
use thiserror::Error;

/// Why a measurement or calculation was rejected.
///
/// The `Display` text is the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    #[error("Please enter a valid, positive number.")]
    InvalidMeasurement,

    #[error("Please enter valid weight and height values.")]
    MissingInput,

    #[error("Weight must be between 10 and 1000 kg.")]
    WeightOutOfRange,

    #[error("Height must be between 50 cm and 300 cm.")]
    HeightOutOfRange,
}

impl ValidationError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::InvalidMeasurement => "invalid_measurement",
            ValidationError::MissingInput => "missing_input",
            ValidationError::WeightOutOfRange => "weight_out_of_range",
            ValidationError::HeightOutOfRange => "height_out_of_range",
        }
    }
}

/// Result type for engine operations
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::WeightOutOfRange.to_string(),
            "Weight must be between 10 and 1000 kg."
        );
        assert_eq!(
            ValidationError::HeightOutOfRange.to_string(),
            "Height must be between 50 cm and 300 cm."
        );
        assert_eq!(
            ValidationError::MissingInput.to_string(),
            "Please enter valid weight and height values."
        );
    }

    #[test]
    fn test_code_matches_serde_name() {
        let json = serde_json::to_value(ValidationError::HeightOutOfRange).unwrap();
        assert_eq!(json, ValidationError::HeightOutOfRange.code());
    }
}
