//! Data models
//!
//! Measurements, categories, results and validation errors shared by the engine
//! and the presentation layer.

mod category;
mod error;
mod measurement;
mod result;

pub use category::{
    BmiCategory, NORMAL_LOWER_BOUND, OBESE_LOWER_BOUND, OVERWEIGHT_LOWER_BOUND,
};
pub use error::{ValidationError, ValidationResult};
pub use measurement::{HeightMeasurement, WeightMeasurement};
pub use result::BmiResult;
