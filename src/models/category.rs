//! BMI category model
//!
//! The four weight-status categories and their fixed boundaries on the BMI scale.

use serde::{Deserialize, Serialize};

/// Lower bound of the Normal category
pub const NORMAL_LOWER_BOUND: f64 = 18.5;
/// Lower bound of the Overweight category
pub const OVERWEIGHT_LOWER_BOUND: f64 = 25.0;
/// Lower bound of the Obese category
pub const OBESE_LOWER_BOUND: f64 = 30.0;

/// Weight-status category for a BMI value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// All categories in ascending BMI order
    pub const ALL: [BmiCategory; 4] = [
        BmiCategory::Underweight,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::Obese,
    ];

    /// Label shown next to the computed value
    pub fn display_name(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal Weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    /// Style class for the category badge
    pub fn css_class(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "underweight",
            BmiCategory::Normal => "normal",
            BmiCategory::Overweight => "overweight",
            BmiCategory::Obese => "obese",
        }
    }

    /// Label used in the report's reference table
    pub fn reference_label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    /// Human-readable range for the reference table
    pub fn reference_range(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Less than 18.5",
            BmiCategory::Normal => "18.5 - 24.9",
            BmiCategory::Overweight => "25 - 29.9",
            BmiCategory::Obese => "30 or greater",
        }
    }

    /// Inclusive lower and exclusive upper bound; `None` means unbounded
    pub fn bounds(&self) -> (Option<f64>, Option<f64>) {
        match self {
            BmiCategory::Underweight => (None, Some(NORMAL_LOWER_BOUND)),
            BmiCategory::Normal => (Some(NORMAL_LOWER_BOUND), Some(OVERWEIGHT_LOWER_BOUND)),
            BmiCategory::Overweight => (Some(OVERWEIGHT_LOWER_BOUND), Some(OBESE_LOWER_BOUND)),
            BmiCategory::Obese => (Some(OBESE_LOWER_BOUND), None),
        }
    }

    pub fn contains(&self, bmi: f64) -> bool {
        let (lower, upper) = self.bounds();
        lower.map_or(true, |l| bmi >= l) && upper.map_or(true, |u| bmi < u)
    }
}
