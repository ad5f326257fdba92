// ABOUTME: Clinical reference statistics calibrating the biological-age scoring models
// ABOUTME: Immutable per-biomarker tables for the Metabolic Score and PhenoAge models
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Calibration tables for both scoring models.
//!
//! These values are the ground truth encoding of each model's clinical
//! calibration. They are compile-time constants: never mutated, never loaded
//! from configuration. Changing any entry changes every estimate the engine
//! produces, so treat edits as model re-calibration, not tuning.
//!
//! References:
//! - Levine, M.E. et al. (2018). "An epigenetic biomarker of aging for
//!   lifespan and healthspan." *Aging Cell*, 17(4), e12765.
//! - NHANES III population statistics (means/SDs for the `PhenoAge` table).

use crate::models::Biomarker;

/// Reference row for the Metabolic Score model
#[derive(Debug, Clone, Copy)]
pub struct MetabolicReference {
    /// Clinically ideal value for this biomarker
    pub optimal: f64,
    /// Normalization divisor (SD-equivalent) for deviations from optimal
    pub range: f64,
    /// Signed weight: positive means above-optimal accelerates aging,
    /// negative means the biomarker is protective
    pub weight: f64,
}

/// Reference row for the `PhenoAge` model
#[derive(Debug, Clone, Copy)]
pub struct PhenoAgeReference {
    /// NHANES-derived population mean
    pub mean: f64,
    /// NHANES-derived population standard deviation
    pub sd: f64,
    /// Regression-style effect size, years per standard deviation
    pub beta: f64,
}

/// Metabolic Score model tuning constants
pub mod metabolic {
    /// Global score-to-years scale factor (single tuning constant, not
    /// per-biomarker)
    pub const ADJUSTMENT_FACTOR: f64 = 2.8;

    /// Hard bound on the year-delta, applied before rounding.
    ///
    /// Business rule: out-of-range biomarker combinations must never move
    /// the estimate more than ten years from chronological age.
    pub const MAX_DELTA_YEARS: f64 = 10.0;
}

/// Metabolic Score reference row for one biomarker
#[must_use]
pub const fn metabolic_reference(marker: Biomarker) -> MetabolicReference {
    match marker {
        Biomarker::Glucose => MetabolicReference {
            optimal: 90.0,
            range: 25.0,
            weight: 0.22,
        },
        Biomarker::Hdl => MetabolicReference {
            optimal: 60.0,
            range: 15.0,
            weight: -0.20,
        },
        Biomarker::Ldl => MetabolicReference {
            optimal: 100.0,
            range: 35.0,
            weight: 0.15,
        },
        Biomarker::Triglycerides => MetabolicReference {
            optimal: 100.0,
            range: 60.0,
            weight: 0.18,
        },
        Biomarker::Crp => MetabolicReference {
            optimal: 1.0,
            range: 3.0,
            weight: 0.25,
        },
    }
}

/// `PhenoAge` reference row for one biomarker
#[must_use]
pub const fn phenoage_reference(marker: Biomarker) -> PhenoAgeReference {
    match marker {
        Biomarker::Glucose => PhenoAgeReference {
            mean: 98.0,
            sd: 26.8,
            beta: 1.12,
        },
        Biomarker::Hdl => PhenoAgeReference {
            mean: 53.3,
            sd: 15.0,
            beta: -0.95,
        },
        Biomarker::Ldl => PhenoAgeReference {
            mean: 119.0,
            sd: 36.5,
            beta: 0.48,
        },
        Biomarker::Triglycerides => PhenoAgeReference {
            mean: 131.5,
            sd: 88.0,
            beta: 0.75,
        },
        Biomarker::Crp => PhenoAgeReference {
            mean: 3.1,
            sd: 5.4,
            beta: 1.35,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hdl_is_protective_in_both_models() {
        // HDL is the only marker where higher is better; both tables must
        // carry a negative effect size for it.
        assert!(metabolic_reference(Biomarker::Hdl).weight < 0.0);
        assert!(phenoage_reference(Biomarker::Hdl).beta < 0.0);

        for marker in [
            Biomarker::Glucose,
            Biomarker::Ldl,
            Biomarker::Triglycerides,
            Biomarker::Crp,
        ] {
            assert!(metabolic_reference(marker).weight > 0.0);
            assert!(phenoage_reference(marker).beta > 0.0);
        }
    }

    #[test]
    fn test_normalization_divisors_are_positive() {
        for marker in Biomarker::ALL {
            assert!(metabolic_reference(marker).range > 0.0);
            assert!(phenoage_reference(marker).sd > 0.0);
        }
    }
}
