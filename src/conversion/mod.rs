//! Unit conversion module
//!
//! Handles weight and height conversions and normalization to kilograms and meters.

pub mod converter;
pub mod units;

pub use converter::{
    cm_to_feet_inches, convert_height, convert_weight, feet_inches_to_cm, kg_to_lb, lb_to_kg,
    normalize_height_to_meters, normalize_weight_to_kg,
};
pub use units::{HeightUnit, WeightUnit, CM_PER_FOOT, CM_PER_INCH, CM_PER_METER, LB_PER_KG};
