//! Unit conversion functions
//!
//! Converts between kilograms and pounds, centimeters and feet/inches, and
//! normalizes measurements to kilograms and meters.

use super::units::{
    WeightUnit, CM_PER_FOOT, CM_PER_INCH, CM_PER_METER, INCHES_PER_FOOT, LB_PER_KG,
};
use crate::models::{HeightMeasurement, ValidationError, ValidationResult, WeightMeasurement};

pub fn kg_to_lb(kg: f64) -> f64 {
    kg * LB_PER_KG
}

pub fn lb_to_kg(lb: f64) -> f64 {
    lb / LB_PER_KG
}

/// Convert a weight to the other unit
///
/// Returns the converted value together with the unit it is now expressed in.
/// Non-finite or non-positive values are rejected with `InvalidMeasurement`.
pub fn convert_weight(value: f64, from_unit: WeightUnit) -> ValidationResult<(f64, WeightUnit)> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::InvalidMeasurement);
    }

    let converted = match from_unit {
        WeightUnit::Kilogram => kg_to_lb(value),
        WeightUnit::Pound => lb_to_kg(value),
    };

    Ok((converted, from_unit.other()))
}

pub fn feet_inches_to_cm(feet: f64, inches: f64) -> f64 {
    feet * CM_PER_FOOT + inches * CM_PER_INCH
}

/// Split a length in centimeters into whole feet and remaining inches
///
/// Inches are rounded to one decimal place, halves rounding up, so the
/// remainder may display as 12.0 just below a whole foot.
pub fn cm_to_feet_inches(cm: f64) -> (f64, f64) {
    let total_inches = cm / CM_PER_INCH;
    let feet = (total_inches / INCHES_PER_FOOT).floor();
    let inches = round_half_up_tenths(total_inches % INCHES_PER_FOOT);
    (feet, inches)
}

fn round_half_up_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Express a height in the other representation
pub fn convert_height(measurement: &HeightMeasurement) -> HeightMeasurement {
    match *measurement {
        HeightMeasurement::Centimeters { cm } => {
            let (feet, inches) = cm_to_feet_inches(cm);
            HeightMeasurement::feet_inches(feet, inches)
        }
        HeightMeasurement::FeetInches { feet, inches } => {
            HeightMeasurement::centimeters(feet_inches_to_cm(feet, inches))
        }
    }
}

pub fn normalize_weight_to_kg(measurement: &WeightMeasurement) -> f64 {
    match measurement.unit() {
        WeightUnit::Kilogram => measurement.value(),
        WeightUnit::Pound => lb_to_kg(measurement.value()),
    }
}

pub fn normalize_height_to_meters(measurement: &HeightMeasurement) -> f64 {
    measurement.total_cm() / CM_PER_METER
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_convert_weight_kg_to_lb() {
        let (lb, unit) = convert_weight(70.0, WeightUnit::Kilogram).unwrap();
        assert_relative_eq!(lb, 154.3234, epsilon = 1e-9);
        assert_eq!(unit, WeightUnit::Pound);
    }

    #[test]
    fn test_convert_weight_lb_to_kg() {
        let (kg, unit) = convert_weight(220.462, WeightUnit::Pound).unwrap();
        assert_relative_eq!(kg, 100.0, epsilon = 1e-9);
        assert_eq!(unit, WeightUnit::Kilogram);
    }

    #[test]
    fn test_convert_weight_rejects_invalid() {
        for value in [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(
                convert_weight(value, WeightUnit::Kilogram),
                Err(ValidationError::InvalidMeasurement)
            );
        }
    }

    #[test]
    fn test_weight_round_trip() {
        for w in [0.5, 10.0, 63.2, 70.0, 154.7, 999.9] {
            let (lb, unit) = convert_weight(w, WeightUnit::Kilogram).unwrap();
            let back = normalize_weight_to_kg(&WeightMeasurement::new(lb, unit));
            assert_relative_eq!(back, w, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_cm_to_feet_inches() {
        assert_eq!(cm_to_feet_inches(175.0), (5.0, 8.9));
        assert_eq!(cm_to_feet_inches(182.88), (6.0, 0.0));
        assert_eq!(cm_to_feet_inches(152.4), (5.0, 0.0));
    }

    #[test]
    fn test_cm_to_feet_inches_rounds_half_up() {
        // 0.25 in = 0.635 cm; 0.25 rounds up to 0.3
        let (feet, inches) = cm_to_feet_inches(0.635);
        assert_eq!(feet, 0.0);
        assert_abs_diff_eq!(inches, 0.3, epsilon = 1e-12);
    }

    #[test]
    fn test_round_tenths_just_below_half() {
        // 0.049999999999999996 * 10 is 0.49999999999999994, which must round down
        assert_eq!(round_half_up_tenths(0.049999999999999996), 0.0);
        assert_eq!(round_half_up_tenths(0.05), 0.1);
    }

    #[test]
    fn test_feet_inches_to_cm() {
        assert_abs_diff_eq!(feet_inches_to_cm(5.0, 9.0), 175.26, epsilon = 1e-9);
        assert_abs_diff_eq!(feet_inches_to_cm(0.0, 6.0), 15.24, epsilon = 1e-9);
    }

    #[test]
    fn test_height_round_trip_within_rounding() {
        // One-decimal inch rounding moves the value by at most 0.05 in
        let tolerance = 0.05 * CM_PER_INCH + 1e-9;
        let mut cm = 1.0;
        while cm < 300.0 {
            let (feet, inches) = cm_to_feet_inches(cm);
            let back = feet_inches_to_cm(feet, inches);
            assert!((back - cm).abs() <= tolerance, "{cm} cm came back as {back}");
            cm += 0.37;
        }
    }

    #[test]
    fn test_convert_height_both_directions() {
        let imperial = convert_height(&HeightMeasurement::centimeters(175.0));
        assert_eq!(imperial, HeightMeasurement::feet_inches(5.0, 8.9));

        match convert_height(&HeightMeasurement::feet_inches(6.0, 0.0)) {
            HeightMeasurement::Centimeters { cm } => assert_abs_diff_eq!(cm, 182.88, epsilon = 1e-9),
            other => panic!("expected centimeters, got {other:?}"),
        }
    }

    #[test]
    fn test_normalize_height_to_meters() {
        assert_abs_diff_eq!(
            normalize_height_to_meters(&HeightMeasurement::centimeters(175.0)),
            1.75,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            normalize_height_to_meters(&HeightMeasurement::feet_inches(5.0, 9.0)),
            1.7526,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_normalize_weight_kg_unchanged() {
        assert_eq!(normalize_weight_to_kg(&WeightMeasurement::kilograms(72.5)), 72.5);
    }
}
