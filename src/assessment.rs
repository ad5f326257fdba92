// ABOUTME: Combined multi-model biological-age assessment over one biomarker panel
// ABOUTME: Runs every scoring model and summarizes the candidate estimates
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Multi-model assessment entry point.
//!
//! Dashboard and report consumers show "one or more candidate estimates";
//! this module runs every model over one panel so those callers don't
//! hand-roll the iteration. An invalid panel yields an assessment with zero
//! estimates, the collection-shaped twin of the single-model `None`.

use crate::algorithms::BioAgeAlgorithm;
use crate::models::{BiomarkerPanel, EstimationResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Candidate biological-age estimates from every available model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BioAgeAssessment {
    estimates: Vec<EstimationResult>,
}

impl BioAgeAssessment {
    /// Run every scoring model over the panel
    ///
    /// Models that cannot estimate (invalid panel) simply contribute
    /// nothing; with an incomplete panel the assessment comes back empty.
    #[must_use]
    pub fn from_panel(panel: &BiomarkerPanel) -> Self {
        let estimates: Vec<EstimationResult> = BioAgeAlgorithm::ALL
            .into_iter()
            .filter_map(|algorithm| algorithm.estimate(panel))
            .collect();

        debug!(
            estimates = estimates.len(),
            "biological age assessment complete"
        );

        Self { estimates }
    }

    /// All candidate estimates, in house-preference model order
    #[must_use]
    pub fn estimates(&self) -> &[EstimationResult] {
        &self.estimates
    }

    /// Preferred estimate: the first model that produced one
    #[must_use]
    pub fn best(&self) -> Option<&EstimationResult> {
        self.estimates.first()
    }

    /// Whether no model could estimate from the panel
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.estimates.is_empty()
    }

    /// Disagreement between models: max minus min biological age, in years
    ///
    /// `None` with fewer than two estimates.
    #[must_use]
    pub fn spread_years(&self) -> Option<i32> {
        if self.estimates.len() < 2 {
            return None;
        }
        let ages = self.estimates.iter().map(|e| e.biological_age);
        let min = ages.clone().min()?;
        let max = ages.max()?;
        Some(max - min)
    }
}
