//! Calculation result model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BmiCategory, HeightMeasurement, WeightMeasurement};

/// Outcome of one successful BMI calculation.
///
/// Only produced from validated inputs. A new calculation yields a new value;
/// results are never updated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    pub bmi_value: f64,
    pub category: BmiCategory,
    pub weight_in_kg: f64,
    pub height_in_meters: f64,
    pub computed_at: DateTime<Utc>,
    /// Weight exactly as it was entered
    pub weight: WeightMeasurement,
    /// Height exactly as it was entered
    pub height: HeightMeasurement,
}

impl BmiResult {
    /// BMI rounded to one decimal for display
    pub fn format_value(&self) -> String {
        format!("{:.1}", self.bmi_value)
    }

    pub fn height_in_cm(&self) -> f64 {
        self.height_in_meters * crate::conversion::CM_PER_METER
    }
}
