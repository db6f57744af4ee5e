//! # BMI Module
//!
//! Body Mass Index (IMC) calculation and WHO classification.
//!
//! ## Classification
//! ```text
//! ┌──────────────────────┬──────────────────────┐
//! │  BMI                 │  Class               │
//! ├──────────────────────┼──────────────────────┤
//! │  < 18.5              │  Underweight         │
//! │  18.5 ≤ BMI < 25     │  Normal              │
//! │  25   ≤ BMI < 30     │  Overweight          │
//! │  30   ≤ BMI < 35     │  Obesity I           │
//! │  35   ≤ BMI < 40     │  Obesity II          │
//! │  ≥ 40                │  Obesity III         │
//! └──────────────────────┴──────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreResult;
use crate::validation::validate_positive;

/// BMI class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum BmiClass {
    Underweight,
    Normal,
    Overweight,
    ObesityI,
    ObesityII,
    ObesityIII,
}

impl BmiClass {
    /// Classifies a BMI value. Boundaries belong to the upper class.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiClass::Underweight
        } else if bmi < 25.0 {
            BmiClass::Normal
        } else if bmi < 30.0 {
            BmiClass::Overweight
        } else if bmi < 35.0 {
            BmiClass::ObesityI
        } else if bmi < 40.0 {
            BmiClass::ObesityII
        } else {
            BmiClass::ObesityIII
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiClass::Underweight => "Underweight",
            BmiClass::Normal => "Normal weight",
            BmiClass::Overweight => "Overweight",
            BmiClass::ObesityI => "Obesity class I",
            BmiClass::ObesityII => "Obesity class II",
            BmiClass::ObesityIII => "Obesity class III",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BmiClass::Underweight => "Weight below normal for your height",
            BmiClass::Normal => "Adequate weight for your height",
            BmiClass::Overweight => "Weight above normal for your height",
            BmiClass::ObesityI => "Mild obesity",
            BmiClass::ObesityII => "Moderate obesity",
            BmiClass::ObesityIII => "Severe obesity",
        }
    }

    /// Health notes shown next to the result.
    pub fn health_notes(&self) -> &'static [&'static str] {
        match self {
            BmiClass::Underweight => &[
                "Malnutrition",
                "Weakened immunity",
                "Loss of muscle mass",
            ],
            BmiClass::Normal => &[
                "Lower risk of cardiovascular disease",
                "Good overall health",
            ],
            BmiClass::Overweight => &[
                "Increased risk of type 2 diabetes",
                "High blood pressure",
                "Heart disease",
            ],
            BmiClass::ObesityI => &[
                "High risk of diabetes",
                "Cardiovascular problems",
                "Sleep apnea",
            ],
            BmiClass::ObesityII => &[
                "Very high risk of complications",
                "Requires medical follow-up",
                "Bariatric surgery may be considered",
            ],
            BmiClass::ObesityIII => &[
                "Extreme health risk",
                "Urgent medical follow-up",
                "Surgical indication",
            ],
        }
    }
}

/// Result of [`calculate_bmi`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BmiReport {
    pub bmi: f64,
    pub class: BmiClass,
    pub label: String,
    pub description: String,
    pub health_notes: Vec<String>,
}

/// Computes BMI from weight in kilograms and height in centimetres.
///
/// ## Errors
/// `ValidationError` if either value is not a finite positive number.
///
/// ## Example
/// ```rust
/// use ferramentas_core::bmi::{calculate_bmi, BmiClass};
///
/// let report = calculate_bmi(70.0, 175.0).unwrap();
/// assert_eq!(report.class, BmiClass::Normal);
/// assert!((report.bmi - 22.857).abs() < 0.001);
/// ```
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> CoreResult<BmiReport> {
    let weight = validate_positive("weight", weight_kg)?;
    let height_m = validate_positive("height", height_cm)? / 100.0;

    let bmi = weight / (height_m * height_m);
    let class = BmiClass::from_bmi(bmi);

    Ok(BmiReport {
        bmi,
        class,
        label: class.label().to_string(),
        description: class.description().to_string(),
        health_notes: class.health_notes().iter().map(|s| s.to_string()).collect(),
    })
}
