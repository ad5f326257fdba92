// ABOUTME: Metabolic Score biological-age model using deviations from clinical optima
// ABOUTME: Weighted normalized deviations, scaled by a fixed factor and clamped to ±10 years
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Proprietary Metabolic Score model.
//!
//! Formula: `delta = clamp(Σ weight × (value − optimal) / range × 2.8, −10, +10)`
//!
//! Each biomarker's deviation from its clinical optimum is normalized by a
//! fixed per-biomarker divisor, weighted, and summed into a single scalar
//! score. The score scales into a year-delta through one global adjustment
//! factor and is hard-clamped to ±10 years before rounding.

use crate::models::{Biomarker, BiomarkerPanel, EstimationResult};
use crate::reference_values::{
    metabolic::{ADJUSTMENT_FACTOR, MAX_DELTA_YEARS},
    metabolic_reference,
};

/// Label carried by every result this model produces
pub const METHOD_LABEL: &str = "Modelo Metabólico de Idade Biológica";

/// Estimate biological age with the Metabolic Score model
///
/// Returns `None` when any panel field is missing its precondition (finite
/// and strictly positive); this signals "insufficient data", not a fault.
///
/// The biological age is `round(chronological_age + clamped_delta)` with
/// half-away-from-zero rounding; `age_delta` is recomputed from the rounded
/// value, so it may differ from the negated clamped delta by one year.
#[must_use]
pub fn estimate(panel: &BiomarkerPanel) -> Option<EstimationResult> {
    if !panel.is_complete() {
        return None;
    }

    let metabolic_score: f64 = Biomarker::ALL
        .into_iter()
        .map(|marker| {
            let reference = metabolic_reference(marker);
            let deviation = (panel.value(marker) - reference.optimal) / reference.range;
            reference.weight * deviation
        })
        .sum();

    let raw_delta = metabolic_score * ADJUSTMENT_FACTOR;
    // Clamp is a business rule, not numerical hygiene. The sibling PhenoAge
    // model deliberately has no such bound.
    let clamped_delta = raw_delta.clamp(-MAX_DELTA_YEARS, MAX_DELTA_YEARS);

    Some(EstimationResult::from_delta(
        panel.chronological_age,
        clamped_delta,
        METHOD_LABEL,
        None,
    ))
}
