//! Raw input parsing
//!
//! Turns the text typed into the weight and height fields into measurements.

use serde::{Deserialize, Serialize};

use crate::conversion::{HeightUnit, WeightUnit};
use crate::models::{HeightMeasurement, ValidationError, ValidationResult, WeightMeasurement};

/// Text of the form fields plus the selected units
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawInput {
    pub weight: String,
    pub weight_unit: WeightUnit,
    pub height_unit: HeightUnit,
    /// Used when `height_unit` is centimeters
    pub height_cm: String,
    /// Used when `height_unit` is feet and inches
    pub feet: String,
    pub inches: String,
}

impl RawInput {
    pub fn metric(weight: &str, height_cm: &str) -> Self {
        Self {
            weight: weight.to_string(),
            height_cm: height_cm.to_string(),
            ..Self::default()
        }
    }

    pub fn imperial(weight_lb: &str, feet: &str, inches: &str) -> Self {
        Self {
            weight: weight_lb.to_string(),
            weight_unit: WeightUnit::Pound,
            height_unit: HeightUnit::FeetInches,
            feet: feet.to_string(),
            inches: inches.to_string(),
            ..Self::default()
        }
    }

    /// Parse the fields for the selected units
    pub fn measurements(&self) -> ValidationResult<(WeightMeasurement, HeightMeasurement)> {
        let weight = parse_weight(&self.weight, self.weight_unit)?;
        let height = match self.height_unit {
            HeightUnit::Centimeter => parse_height_cm(&self.height_cm)?,
            HeightUnit::FeetInches => parse_height_feet_inches(&self.feet, &self.inches),
        };
        Ok((weight, height))
    }

    /// Whether the fields are complete enough for a live recalculation
    pub fn has_valid_inputs(&self) -> bool {
        match self.measurements() {
            Ok((weight, height)) => weight.is_positive() && height.is_positive(),
            Err(_) => false,
        }
    }
}

/// Leading-number parse: `" 70.5kg"` gives 70.5, `"abc"` gives `None`.
///
/// Accepts an optional sign, digits with an optional fraction and an optional
/// exponent. Anything after the number is ignored.
pub fn parse_number(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    let int_start = end;
    end = skip_digits(bytes, end);
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = skip_digits(bytes, end + 1);
        digits += frac_end - (end + 1);
        end = frac_end;
    }

    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+') | Some(b'-')) {
            exp_start += 1;
        }
        let exp_end = skip_digits(bytes, exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

fn skip_digits(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    i
}

pub fn parse_weight(raw: &str, unit: WeightUnit) -> ValidationResult<WeightMeasurement> {
    parse_number(raw)
        .map(|value| WeightMeasurement::new(value, unit))
        .ok_or(ValidationError::MissingInput)
}

pub fn parse_height_cm(raw: &str) -> ValidationResult<HeightMeasurement> {
    parse_number(raw)
        .map(HeightMeasurement::centimeters)
        .ok_or(ValidationError::MissingInput)
}

/// Feet and inches; a blank or unreadable field counts as zero
pub fn parse_height_feet_inches(raw_feet: &str, raw_inches: &str) -> HeightMeasurement {
    let feet = parse_number(raw_feet).unwrap_or(0.0);
    let inches = parse_number(raw_inches).unwrap_or(0.0);
    HeightMeasurement::feet_inches(feet, inches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_plain() {
        assert_eq!(parse_number("70"), Some(70.0));
        assert_eq!(parse_number("  72.5 "), Some(72.5));
        assert_eq!(parse_number("-3"), Some(-3.0));
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("5."), Some(5.0));
        assert_eq!(parse_number("1e2"), Some(100.0));
    }

    #[test]
    fn test_parse_number_ignores_trailing_text() {
        assert_eq!(parse_number("70kg"), Some(70.0));
        assert_eq!(parse_number("1.80 m"), Some(1.8));
        assert_eq!(parse_number("2e"), Some(2.0));
        assert_eq!(parse_number("3.2.1"), Some(3.2));
    }

    #[test]
    fn test_parse_number_rejects() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("   "), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("-"), None);
        assert_eq!(parse_number("."), None);
        assert_eq!(parse_number("inf"), None);
    }

    #[test]
    fn test_parse_weight() {
        assert_eq!(
            parse_weight("154", WeightUnit::Pound),
            Ok(WeightMeasurement::pounds(154.0))
        );
        assert_eq!(
            parse_weight("", WeightUnit::Kilogram),
            Err(ValidationError::MissingInput)
        );
    }

    #[test]
    fn test_parse_height_feet_inches_blank_is_zero() {
        assert_eq!(
            parse_height_feet_inches("5", ""),
            HeightMeasurement::feet_inches(5.0, 0.0)
        );
        assert_eq!(
            parse_height_feet_inches("", "x"),
            HeightMeasurement::feet_inches(0.0, 0.0)
        );
    }

    #[test]
    fn test_measurements_for_selected_units() {
        let raw = RawInput::imperial("180", "5", "11");
        let (weight, height) = raw.measurements().unwrap();
        assert_eq!(weight, WeightMeasurement::pounds(180.0));
        assert_eq!(height, HeightMeasurement::feet_inches(5.0, 11.0));

        // The centimeter field is ignored when feet and inches are selected
        let mut raw = RawInput::metric("70", "");
        raw.height_unit = HeightUnit::FeetInches;
        raw.feet = "6".to_string();
        let (_, height) = raw.measurements().unwrap();
        assert_eq!(height, HeightMeasurement::feet_inches(6.0, 0.0));
    }

    #[test]
    fn test_has_valid_inputs() {
        assert!(RawInput::metric("70", "175").has_valid_inputs());
        assert!(!RawInput::metric("70", "").has_valid_inputs());
        assert!(!RawInput::metric("0", "175").has_valid_inputs());
        assert!(!RawInput::imperial("150", "", "").has_valid_inputs());
        assert!(RawInput::imperial("150", "", "60").has_valid_inputs());
    }
}
