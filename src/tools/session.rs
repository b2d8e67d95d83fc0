//! Calculator session
//!
//! Presentation-side state: the user's unit selection and the most recent
//! successful calculation, kept so it can be exported as a report. The engine
//! itself never holds on to results.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::input::RawInput;
use super::report::Report;
use crate::conversion::{HeightUnit, WeightUnit};
use crate::engine::{validate_and_compute, GaugeReading};
use crate::models::{BmiResult, ValidationError};

/// Session error types
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("No BMI calculation available to download.")]
    NoCalculation,

    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    weight_unit: WeightUnit,
    height_unit: HeightUnit,
    last_calculation: Option<BmiResult>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn weight_unit(&self) -> WeightUnit {
        self.weight_unit
    }

    pub fn height_unit(&self) -> HeightUnit {
        self.height_unit
    }

    /// Record a unit choice without calculating
    pub fn select_units(&mut self, weight_unit: WeightUnit, height_unit: HeightUnit) {
        self.weight_unit = weight_unit;
        self.height_unit = height_unit;
    }

    /// Empty form fields carrying the remembered unit selection
    pub fn blank_input(&self) -> RawInput {
        RawInput {
            weight_unit: self.weight_unit,
            height_unit: self.height_unit,
            ..RawInput::default()
        }
    }

    /// Parse the raw fields and run a calculation.
    ///
    /// The input's units become the remembered selection even when the
    /// calculation fails. A failed calculation leaves the previous result in place.
    pub fn calculate(&mut self, input: &RawInput) -> Result<&BmiResult, ValidationError> {
        self.select_units(input.weight_unit, input.height_unit);

        if !input.has_valid_inputs() {
            tracing::debug!("Skipping calculation: incomplete input");
            return Err(ValidationError::MissingInput);
        }

        let (weight, height) = input.measurements()?;
        let result = validate_and_compute(&weight, &height)?;
        Ok(&*self.last_calculation.insert(result))
    }

    pub fn last_calculation(&self) -> Option<&BmiResult> {
        self.last_calculation.as_ref()
    }

    /// Gauge for the last calculation, or the empty gauge
    pub fn gauge(&self) -> GaugeReading {
        self.last_calculation
            .as_ref()
            .map(|r| GaugeReading::from_bmi(r.bmi_value))
            .unwrap_or_default()
    }

    pub fn report(&self) -> Result<Report, SessionError> {
        self.last_calculation
            .as_ref()
            .map(Report::from_result)
            .ok_or(SessionError::NoCalculation)
    }

    /// Render the last calculation and save it under `dir`
    pub fn download_report(&self, dir: &Path) -> Result<PathBuf, SessionError> {
        let report = self.report()?;
        Ok(report.write_to_dir(dir)?)
    }

    /// Forget the last calculation; the unit selection stays
    pub fn reset(&mut self) {
        self.last_calculation = None;
    }
}
