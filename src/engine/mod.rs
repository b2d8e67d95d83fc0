//! BMI engine
//!
//! Stateless pipeline of validation, normalization, computation and
//! classification, plus the gauge mapping used to draw the result.

pub mod calculator;
pub mod gauge;

pub use calculator::{
    classify, compute_bmi, validate_and_compute, validate_and_compute_at, MAX_HEIGHT_M,
    MAX_WEIGHT_KG, MIN_HEIGHT_M, MIN_WEIGHT_KG,
};
pub use gauge::{gauge_fill_fraction, GaugeReading, GAUGE_MAX_BMI, GAUGE_MIN_BMI};
