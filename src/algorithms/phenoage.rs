// ABOUTME: Simplified PhenoAge biological-age model using population z-scores
// ABOUTME: NHANES-derived means/SDs with regression-style weights, unclamped delta
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Simplified `PhenoAge` model after Levine et al. (2018).
//!
//! Formula: `delta = Σ beta × (value − mean) / sd`
//!
//! Each biomarker is z-scored against NHANES-derived population statistics
//! and weighted by a regression-style effect size in years per standard
//! deviation. The weighted sum is the year-delta directly; there is no
//! separate adjustment factor and, unlike the Metabolic Score model, no
//! clamp on the delta.
//!
//! # Scientific References
//!
//! - Levine, M.E. et al. (2018). "An epigenetic biomarker of aging for
//!   lifespan and healthspan." *Aging Cell*, 17(4), e12765.

use crate::models::{Biomarker, BiomarkerPanel, EstimationResult};
use crate::reference_values::phenoage_reference;

/// Label carried by every result this model produces
pub const METHOD_LABEL: &str = "PhenoAge (Levine et al., 2018)";

/// Source publication cited in every result this model produces
pub const CITATION: &str = "Levine ME et al. \"An epigenetic biomarker of aging for lifespan and healthspan.\" Aging Cell, 2018; 17(4): e12765.";

/// Estimate biological age with the simplified `PhenoAge` model
///
/// Returns `None` when any panel field is missing its precondition (finite
/// and strictly positive); this signals "insufficient data", not a fault.
///
/// Rounding is half-away-from-zero, matching the Metabolic Score model.
#[must_use]
pub fn estimate(panel: &BiomarkerPanel) -> Option<EstimationResult> {
    if !panel.is_complete() {
        return None;
    }

    let delta_years: f64 = Biomarker::ALL
        .into_iter()
        .map(|marker| {
            let reference = phenoage_reference(marker);
            let z_score = (panel.value(marker) - reference.mean) / reference.sd;
            reference.beta * z_score
        })
        .sum();

    // No clamp here: the delta is reported in full, an intentional asymmetry
    // with the Metabolic Score model. Locked in by the no-clamp test.
    Some(EstimationResult::from_delta(
        panel.chronological_age,
        delta_years,
        METHOD_LABEL,
        Some(CITATION),
    ))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_population_mean_panel_scores_zero() {
        // Every biomarker at the population mean: all z-scores vanish.
        let panel = BiomarkerPanel {
            chronological_age: 50.0,
            glucose: 98.0,
            hdl: 53.3,
            ldl: 119.0,
            triglycerides: 131.5,
            crp: 3.1,
        };

        let result = estimate(&panel).unwrap();
        assert_eq!(result.biological_age, 50);
        assert_eq!(result.age_delta, 0);
    }

    #[test]
    fn test_result_carries_citation() {
        let panel = BiomarkerPanel {
            chronological_age: 40.0,
            glucose: 90.0,
            hdl: 60.0,
            ldl: 100.0,
            triglycerides: 100.0,
            crp: 1.0,
        };

        let result = estimate(&panel).unwrap();
        assert_eq!(result.method_label, METHOD_LABEL);
        assert_eq!(result.citation.as_deref(), Some(CITATION));
    }
}
