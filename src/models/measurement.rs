//! Measurement models
//!
//! Unit-tagged weight and height values as entered by the user.

use serde::{Deserialize, Serialize};

use crate::conversion::{HeightUnit, WeightUnit, CM_PER_FOOT, CM_PER_INCH};

/// A weight value tagged with the unit it was entered in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightMeasurement {
    value: f64,
    unit: WeightUnit,
}

impl WeightMeasurement {
    pub fn new(value: f64, unit: WeightUnit) -> Self {
        Self { value, unit }
    }

    pub fn kilograms(value: f64) -> Self {
        Self::new(value, WeightUnit::Kilogram)
    }

    pub fn pounds(value: f64) -> Self {
        Self::new(value, WeightUnit::Pound)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> WeightUnit {
        self.unit
    }

    /// Whether the value is a positive finite number
    pub fn is_positive(&self) -> bool {
        self.value.is_finite() && self.value > 0.0
    }

    /// Value as typed followed by its unit, e.g. `70 kg`
    pub fn format_original(&self) -> String {
        format!("{} {}", self.value, self.unit.as_str())
    }
}

/// A height, either in centimeters or in feet and inches
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", rename_all = "snake_case")]
pub enum HeightMeasurement {
    Centimeters { cm: f64 },
    FeetInches { feet: f64, inches: f64 },
}

impl HeightMeasurement {
    pub fn centimeters(cm: f64) -> Self {
        HeightMeasurement::Centimeters { cm }
    }

    pub fn feet_inches(feet: f64, inches: f64) -> Self {
        HeightMeasurement::FeetInches { feet, inches }
    }

    pub fn unit(&self) -> HeightUnit {
        match self {
            HeightMeasurement::Centimeters { .. } => HeightUnit::Centimeter,
            HeightMeasurement::FeetInches { .. } => HeightUnit::FeetInches,
        }
    }

    /// Total length in centimeters, without validation
    pub fn total_cm(&self) -> f64 {
        match *self {
            HeightMeasurement::Centimeters { cm } => cm,
            HeightMeasurement::FeetInches { feet, inches } => {
                feet * CM_PER_FOOT + inches * CM_PER_INCH
            }
        }
    }

    /// Whether this height describes a strictly positive, finite length.
    ///
    /// Feet and inches must each be finite and non-negative; a total of zero
    /// (0 ft 0 in) is not a usable height.
    pub fn is_positive(&self) -> bool {
        match *self {
            HeightMeasurement::Centimeters { cm } => cm.is_finite() && cm > 0.0,
            HeightMeasurement::FeetInches { feet, inches } => {
                feet.is_finite()
                    && inches.is_finite()
                    && feet >= 0.0
                    && inches >= 0.0
                    && (feet > 0.0 || inches > 0.0)
            }
        }
    }

    /// Height as the user typed it: `175` for centimeters, `5' 9"` for feet and inches
    pub fn format_original(&self) -> String {
        match *self {
            HeightMeasurement::Centimeters { cm } => format!("{}", cm),
            HeightMeasurement::FeetInches { feet, inches } => format!("{}' {}\"", feet, inches),
        }
    }
}
