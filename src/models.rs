// ABOUTME: Value objects for biomarker panels and biological-age estimation results
// ABOUTME: Defines the BiomarkerPanel input, Biomarker identifiers, and EstimationResult output
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Input and output value types shared by both scoring models.

use serde::{Deserialize, Serialize};

/// Blood biomarkers used by the scoring models
///
/// Both models score the same five fasting markers; only the reference
/// statistics differ between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Biomarker {
    /// Fasting glucose (mg/dL)
    Glucose,
    /// High-density lipoprotein cholesterol (mg/dL)
    Hdl,
    /// Low-density lipoprotein cholesterol (mg/dL)
    Ldl,
    /// Triglycerides (mg/dL)
    Triglycerides,
    /// C-reactive protein (mg/L)
    Crp,
}

impl Biomarker {
    /// All scored biomarkers, in scoring order
    pub const ALL: [Self; 5] = [
        Self::Glucose,
        Self::Hdl,
        Self::Ldl,
        Self::Triglycerides,
        Self::Crp,
    ];

    /// Biomarker name for logging and display
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Glucose => "glucose",
            Self::Hdl => "hdl",
            Self::Ldl => "ldl",
            Self::Triglycerides => "triglycerides",
            Self::Crp => "crp",
        }
    }

    /// Measurement unit
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Crp => "mg/L",
            _ => "mg/dL",
        }
    }
}

/// A single lab draw: five fasting blood biomarkers plus chronological age
///
/// Values come straight from the extraction layer; the engine only checks
/// that they are finite and strictly positive. Clinically implausible but
/// positive values (glucose = 1) are accepted, a documented limitation of
/// the upstream contract. Chronological age is likewise not bounded to a
/// plausible human range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BiomarkerPanel {
    /// Chronological (calendar) age in years
    pub chronological_age: f64,
    /// Fasting glucose (mg/dL)
    pub glucose: f64,
    /// HDL cholesterol (mg/dL)
    pub hdl: f64,
    /// LDL cholesterol (mg/dL)
    pub ldl: f64,
    /// Triglycerides (mg/dL)
    pub triglycerides: f64,
    /// C-reactive protein (mg/L)
    pub crp: f64,
}

impl BiomarkerPanel {
    /// Value of one biomarker from this panel
    #[must_use]
    pub const fn value(&self, marker: Biomarker) -> f64 {
        match marker {
            Biomarker::Glucose => self.glucose,
            Biomarker::Hdl => self.hdl,
            Biomarker::Ldl => self.ldl,
            Biomarker::Triglycerides => self.triglycerides,
            Biomarker::Crp => self.crp,
        }
    }

    /// Whether every field is finite and strictly greater than zero
    ///
    /// This is the single precondition shared by both models. An incomplete
    /// panel produces no estimate; it is never an error condition.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        [
            self.chronological_age,
            self.glucose,
            self.hdl,
            self.ldl,
            self.triglycerides,
            self.crp,
        ]
        .into_iter()
        .all(|v| v.is_finite() && v > 0.0)
    }
}

/// One model's biological-age estimate
///
/// Value object: constructed by a model, consumed by the caller, never
/// mutated. `age_delta` is `chronological_age - biological_age`, so positive
/// means the body scores younger than the calendar says.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimationResult {
    /// Estimated biological age in whole years
    pub biological_age: i32,
    /// Chronological age minus biological age, whole years
    pub age_delta: i32,
    /// Fixed label identifying the producing model
    pub method_label: String,
    /// Source publication, for models derived from the literature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citation: Option<String>,
}

impl EstimationResult {
    /// Build a result from a continuous year-delta.
    ///
    /// Rounding is half-away-from-zero (`f64::round`), which matters for
    /// half-integer deltas. `age_delta` is recomputed from the rounded
    /// biological age, so it can differ by one year from the negated input
    /// delta; that mismatch is part of the published contract.
    pub(crate) fn from_delta(
        chronological_age: f64,
        delta_years: f64,
        method_label: &str,
        citation: Option<&str>,
    ) -> Self {
        let biological_age = (chronological_age + delta_years).round() as i32;
        let age_delta = (chronological_age - f64::from(biological_age)).round() as i32;
        Self {
            biological_age,
            age_delta,
            method_label: method_label.to_owned(),
            citation: citation.map(str::to_owned),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_panel() -> BiomarkerPanel {
        BiomarkerPanel {
            chronological_age: 40.0,
            glucose: 90.0,
            hdl: 60.0,
            ldl: 100.0,
            triglycerides: 100.0,
            crp: 1.0,
        }
    }

    #[test]
    fn test_complete_panel_accepted() {
        assert!(valid_panel().is_complete());
    }

    #[test]
    fn test_zero_and_negative_fields_rejected() {
        let mut panel = valid_panel();
        panel.chronological_age = 0.0;
        assert!(!panel.is_complete());

        let mut panel = valid_panel();
        panel.glucose = -5.0;
        assert!(!panel.is_complete());
    }

    #[test]
    fn test_non_finite_fields_rejected() {
        let mut panel = valid_panel();
        panel.crp = f64::NAN;
        assert!(!panel.is_complete());

        let mut panel = valid_panel();
        panel.triglycerides = f64::INFINITY;
        assert!(!panel.is_complete());
    }

    #[test]
    fn test_implausible_but_positive_values_accepted() {
        let mut panel = valid_panel();
        panel.glucose = 1.0;
        panel.chronological_age = 150.0;
        assert!(panel.is_complete());
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        let result = EstimationResult::from_delta(40.0, 2.5, "test", None);
        assert_eq!(result.biological_age, 43);
        assert_eq!(result.age_delta, -3);

        // 37.5 rounds away from zero, upward: the tie does not break toward
        // the lower year for negative deltas.
        let result = EstimationResult::from_delta(40.0, -2.5, "test", None);
        assert_eq!(result.biological_age, 38);
        assert_eq!(result.age_delta, 2);

        let result = EstimationResult::from_delta(40.0, -2.6, "test", None);
        assert_eq!(result.biological_age, 37);
        assert_eq!(result.age_delta, 3);
    }
}
