//! BMI calculation pipeline
//!
//! Validation, normalization, computation and classification. Every function
//! here is pure: nothing is cached between calls.

use chrono::{DateTime, Utc};

use crate::conversion::{normalize_height_to_meters, normalize_weight_to_kg};
use crate::models::{
    BmiCategory, BmiResult, HeightMeasurement, ValidationError, ValidationResult,
    WeightMeasurement, NORMAL_LOWER_BOUND, OBESE_LOWER_BOUND, OVERWEIGHT_LOWER_BOUND,
};

// ============================================================================
// Plausible Human Ranges
// ============================================================================

pub const MIN_WEIGHT_KG: f64 = 10.0;
pub const MAX_WEIGHT_KG: f64 = 1000.0;
pub const MIN_HEIGHT_M: f64 = 0.5;
pub const MAX_HEIGHT_M: f64 = 3.0;

/// Body Mass Index from kilograms and meters.
///
/// Inputs are assumed to be validated already.
pub fn compute_bmi(weight_kg: f64, height_m: f64) -> f64 {
    weight_kg / (height_m * height_m)
}

/// Classify a BMI value; each category includes its lower bound
pub fn classify(bmi: f64) -> BmiCategory {
    if bmi < NORMAL_LOWER_BOUND {
        BmiCategory::Underweight
    } else if bmi < OVERWEIGHT_LOWER_BOUND {
        BmiCategory::Normal
    } else if bmi < OBESE_LOWER_BOUND {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Validate the measurements and compute a result stamped with the current time
pub fn validate_and_compute(
    weight: &WeightMeasurement,
    height: &HeightMeasurement,
) -> ValidationResult<BmiResult> {
    validate_and_compute_at(weight, height, Utc::now())
}

/// Same as [`validate_and_compute`] with an explicit timestamp
pub fn validate_and_compute_at(
    weight: &WeightMeasurement,
    height: &HeightMeasurement,
    computed_at: DateTime<Utc>,
) -> ValidationResult<BmiResult> {
    if !weight.is_positive() || !height.is_positive() {
        tracing::debug!(?weight, ?height, "Rejected calculation: missing input");
        return Err(ValidationError::MissingInput);
    }

    let weight_in_kg = normalize_weight_to_kg(weight);
    let height_in_meters = normalize_height_to_meters(height);

    if !(MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&weight_in_kg) {
        tracing::debug!(weight_in_kg, "Rejected calculation: weight out of range");
        return Err(ValidationError::WeightOutOfRange);
    }

    if !(MIN_HEIGHT_M..=MAX_HEIGHT_M).contains(&height_in_meters) {
        tracing::debug!(height_in_meters, "Rejected calculation: height out of range");
        return Err(ValidationError::HeightOutOfRange);
    }

    let bmi_value = compute_bmi(weight_in_kg, height_in_meters);
    let category = classify(bmi_value);

    tracing::debug!(bmi_value, ?category, "Computed BMI");

    Ok(BmiResult {
        bmi_value,
        category,
        weight_in_kg,
        height_in_meters,
        computed_at,
        weight: *weight,
        height: *height,
    })
}
