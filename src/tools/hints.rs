//! Live conversion hints
//!
//! The `≈ ...` text shown next to a field while the user types.

use crate::conversion::{cm_to_feet_inches, convert_weight, WeightUnit};
use crate::models::HeightMeasurement;

/// `≈ 154.3 lb` for 70 kg; `None` when the value is not a positive number
pub fn weight_hint(value: f64, unit: WeightUnit) -> Option<String> {
    let (converted, to_unit) = convert_weight(value, unit).ok()?;
    Some(format!("≈ {:.1} {}", converted, to_unit.as_str()))
}

/// The height expressed in the other representation
pub fn height_hint(height: &HeightMeasurement) -> Option<String> {
    let cm = height.total_cm();
    if !cm.is_finite() || cm <= 0.0 {
        return None;
    }

    match height {
        HeightMeasurement::Centimeters { .. } => {
            let (feet, inches) = cm_to_feet_inches(cm);
            Some(format!("≈ {}' {}\"", feet, inches))
        }
        HeightMeasurement::FeetInches { .. } => Some(format!("≈ {:.1} cm", cm)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_hint() {
        assert_eq!(weight_hint(70.0, WeightUnit::Kilogram).as_deref(), Some("≈ 154.3 lb"));
        assert_eq!(weight_hint(154.0, WeightUnit::Pound).as_deref(), Some("≈ 69.9 kg"));
        assert_eq!(weight_hint(0.0, WeightUnit::Pound), None);
        assert_eq!(weight_hint(f64::NAN, WeightUnit::Kilogram), None);
    }

    #[test]
    fn test_height_hint_from_cm() {
        assert_eq!(
            height_hint(&HeightMeasurement::centimeters(175.0)).as_deref(),
            Some("≈ 5' 8.9\"")
        );
        assert_eq!(
            height_hint(&HeightMeasurement::centimeters(152.4)).as_deref(),
            Some("≈ 5' 0\"")
        );
        assert_eq!(height_hint(&HeightMeasurement::centimeters(-1.0)), None);
    }

    #[test]
    fn test_height_hint_from_feet_inches() {
        assert_eq!(
            height_hint(&HeightMeasurement::feet_inches(5.0, 9.0)).as_deref(),
            Some("≈ 175.3 cm")
        );
        assert_eq!(height_hint(&HeightMeasurement::feet_inches(0.0, 0.0)), None);
    }
}
