//! Unit types and conversion constants
//!
//! Provides the weight and height unit selections and the standard conversion factors.

use serde::{Deserialize, Serialize};

/// Unit a weight was entered in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kilogram,
    Pound,
}

impl WeightUnit {
    /// Short symbol used in hints and reports
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightUnit::Kilogram => "kg",
            WeightUnit::Pound => "lb",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "kg" | "kgs" | "kilogram" | "kilograms" => Some(WeightUnit::Kilogram),
            "lb" | "lbs" | "pound" | "pounds" => Some(WeightUnit::Pound),
            _ => None,
        }
    }

    /// The unit a conversion from this unit lands in
    pub fn other(&self) -> Self {
        match self {
            WeightUnit::Kilogram => WeightUnit::Pound,
            WeightUnit::Pound => WeightUnit::Kilogram,
        }
    }
}

/// How a height was entered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeightUnit {
    #[default]
    Centimeter,
    FeetInches,
}

impl HeightUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeightUnit::Centimeter => "cm",
            HeightUnit::FeetInches => "ft-in",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => {
                Some(HeightUnit::Centimeter)
            }
            "ft" | "feet" | "ft-in" | "feet-inches" | "imperial" => Some(HeightUnit::FeetInches),
            _ => None,
        }
    }
}

// ============================================================================
// Weight Conversion Constants
// ============================================================================

/// Pounds per kilogram
pub const LB_PER_KG: f64 = 2.20462;

// ============================================================================
// Length Conversion Constants
// ============================================================================

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;
/// Centimeters per foot
pub const CM_PER_FOOT: f64 = 30.48;
/// Inches per foot
pub const INCHES_PER_FOOT: f64 = 12.0;
/// Centimeters per meter
pub const CM_PER_METER: f64 = 100.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_unit_from_str() {
        assert_eq!(WeightUnit::from_str("kg"), Some(WeightUnit::Kilogram));
        assert_eq!(WeightUnit::from_str(" Kilograms "), Some(WeightUnit::Kilogram));
        assert_eq!(WeightUnit::from_str("lbs"), Some(WeightUnit::Pound));
        assert_eq!(WeightUnit::from_str("stone"), None);
    }

    #[test]
    fn test_height_unit_from_str() {
        assert_eq!(HeightUnit::from_str("cm"), Some(HeightUnit::Centimeter));
        assert_eq!(HeightUnit::from_str("ft-in"), Some(HeightUnit::FeetInches));
        assert_eq!(HeightUnit::from_str("feet_inches"), Some(HeightUnit::FeetInches));
        assert_eq!(HeightUnit::from_str("m"), None);
    }

    #[test]
    fn test_weight_unit_other() {
        assert_eq!(WeightUnit::Kilogram.other(), WeightUnit::Pound);
        assert_eq!(WeightUnit::Pound.other(), WeightUnit::Kilogram);
    }

    #[test]
    fn test_foot_is_twelve_inches() {
        assert!((CM_PER_INCH * INCHES_PER_FOOT - CM_PER_FOOT).abs() < 1e-9);
    }
}
