//! Thermometer gauge geometry
//!
//! Maps a BMI value onto the fixed 15-40 display scale of the gauge.

use serde::Serialize;

/// BMI at the bottom of the gauge
pub const GAUGE_MIN_BMI: f64 = 15.0;
/// BMI at the top of the gauge
pub const GAUGE_MAX_BMI: f64 = 40.0;

/// Bulb opacity with an empty gauge
const BULB_BASE_OPACITY: f64 = 0.7;
/// Extra opacity reached at a full gauge
const BULB_OPACITY_RANGE: f64 = 0.3;

/// Fraction of the gauge to fill, in [0, 1]
pub fn gauge_fill_fraction(bmi: f64) -> f64 {
    let clamped = bmi.clamp(GAUGE_MIN_BMI, GAUGE_MAX_BMI);
    (clamped - GAUGE_MIN_BMI) / (GAUGE_MAX_BMI - GAUGE_MIN_BMI)
}

/// Everything needed to draw the gauge for one BMI value
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GaugeReading {
    /// Height of the fill, 0-100 from the bottom
    pub fill_percent: f64,
    /// Indicator offset, 0-100 from the top
    pub indicator_top_percent: f64,
    pub bulb_opacity: f64,
}

impl GaugeReading {
    pub fn from_bmi(bmi: f64) -> Self {
        let fraction = gauge_fill_fraction(bmi);
        let fill_percent = fraction * 100.0;
        Self {
            fill_percent,
            indicator_top_percent: 100.0 - fill_percent,
            bulb_opacity: BULB_BASE_OPACITY + fraction.min(1.0) * BULB_OPACITY_RANGE,
        }
    }

    /// Gauge state before any calculation
    pub fn empty() -> Self {
        Self {
            fill_percent: 0.0,
            indicator_top_percent: 100.0,
            bulb_opacity: BULB_BASE_OPACITY,
        }
    }
}

impl Default for GaugeReading {
    fn default() -> Self {
        Self::empty()
    }
}
