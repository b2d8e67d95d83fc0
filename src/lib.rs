//! BMI Calculator Library
//!
//! Unit conversion, BMI computation and classification, plus the helpers a
//! front end needs to parse input, draw the gauge and export a text report.

pub mod build_info;
pub mod conversion;
pub mod engine;
pub mod models;
pub mod tools;
