//! Text report generation
//!
//! Builds the downloadable plain-text BMI report for a calculation.

use std::fmt::Display;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{Local, TimeZone};
use serde::Serialize;

use crate::models::{BmiCategory, BmiResult};

const REPORT_TITLE: &str = "BMI CALCULATOR RESULTS";
const DISCLAIMER: &str = "BMI is a screening tool and not a diagnostic tool. \n\
Consult with a healthcare professional for personalized health advice.";
const FOOTER: &str = "Generated by BMI Calculator - Interactive Health Tool";

/// A rendered report and the file name it should be saved under
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub file_name: String,
    pub body: String,
}

impl Report {
    /// Render the report with the calculation date in local time
    pub fn from_result(result: &BmiResult) -> Self {
        Self::from_result_in(result, &Local)
    }

    /// Render the report with the calculation date shown in `tz`
    pub fn from_result_in<Tz>(result: &BmiResult, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let calculation_date = result
            .computed_at
            .with_timezone(tz)
            .format("%-m/%-d/%Y, %-I:%M:%S %p")
            .to_string();

        Self {
            file_name: report_file_name(result),
            body: render_body(result, &calculation_date),
        }
    }

    /// Write the report into `dir`, creating the directory if needed
    pub fn write_to_dir(&self, dir: &Path) -> io::Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        fs::write(&path, &self.body)?;
        tracing::info!(path = %path.display(), "Wrote BMI report");
        Ok(path)
    }
}

/// `BMI_Report_YYYY-MM-DD.txt`, dated by the calculation's UTC day
pub fn report_file_name(result: &BmiResult) -> String {
    format!("BMI_Report_{}.txt", result.computed_at.format("%Y-%m-%d"))
}

fn render_body(result: &BmiResult, calculation_date: &str) -> String {
    let reference = BmiCategory::ALL
        .iter()
        .map(|c| format!("• {}: {}", c.reference_label(), c.reference_range()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{title}\n{underline}\n\n\
Calculation Date: {date}\n\n\
PERSONAL MEASUREMENTS:\n\
• Weight: {weight} ({weight_kg:.1} kg)\n\
• Height: {height} ({height_cm:.1} cm)\n\n\
BMI RESULT:\n\
• BMI Value: {bmi}\n\
• Category: {category}\n\n\
BMI CATEGORIES REFERENCE:\n\
{reference}\n\n\
HEALTH RECOMMENDATIONS:\n\
{recommendations}\n\n\
IMPORTANT NOTE:\n\
{disclaimer}\n\n\
{footer}",
        title = REPORT_TITLE,
        underline = "=".repeat(24),
        date = calculation_date,
        weight = result.weight.format_original(),
        weight_kg = result.weight_in_kg,
        height = result.height.format_original(),
        height_cm = result.height_in_cm(),
        bmi = result.format_value(),
        category = result.category.display_name(),
        reference = reference,
        recommendations = recommendations(result.category),
        disclaimer = DISCLAIMER,
        footer = FOOTER,
    )
}

/// Advice block for a category
pub fn recommendations(category: BmiCategory) -> &'static str {
    match category {
        BmiCategory::Underweight => {
            "Your BMI indicates you may be underweight. Consider:\n\
• Consulting with a healthcare provider about healthy weight gain\n\
• Focusing on nutrient-dense foods\n\
• Regular exercise to build muscle mass\n\
• Monitoring your health with regular check-ups"
        }
        BmiCategory::Normal => {
            "Your BMI is in the normal weight range. To maintain your health:\n\
• Continue with a balanced diet\n\
• Stay physically active (150+ minutes moderate exercise per week)\n\
• Maintain current healthy lifestyle habits\n\
• Regular health screenings as recommended by your doctor"
        }
        BmiCategory::Overweight => {
            "Your BMI indicates you may be overweight. Consider:\n\
• Consulting with a healthcare provider about weight management\n\
• Adopting a balanced, calorie-controlled diet\n\
• Increasing physical activity gradually\n\
• Setting realistic weight loss goals (1-2 lbs per week)\n\
• Focus on sustainable lifestyle changes"
        }
        BmiCategory::Obese => {
            "Your BMI indicates obesity. Important steps to consider:\n\
• Consult with a healthcare provider for a comprehensive health assessment\n\
• Work with professionals to develop a safe weight loss plan\n\
• Focus on gradual lifestyle changes rather than quick fixes\n\
• Consider joining support groups or programs\n\
• Regular monitoring of related health conditions (diabetes, heart disease)"
        }
    }
}
