// ABOUTME: Algorithm abstraction layer for biological-age scoring models
// ABOUTME: Enum-based dispatch between the Metabolic Score and PhenoAge models
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Algorithm Selection Module
//!
//! Type-safe, enum-based selection between the biological-age scoring
//! models. Both variants share one contract (a panel goes in, an optional
//! estimate comes out) while clamping and rounding differences stay
//! internal to each model.
//!
//! # Design Philosophy
//!
//! - **Type Safety**: models are enum variants, not strings or booleans
//! - **Performance**: enum dispatch, no vtable overhead
//! - **Uniformity**: callers iterate [`BioAgeAlgorithm::ALL`] without caring
//!   which model is which
//!
//! # Example
//!
//! ```rust
//! use bioage::{BioAgeAlgorithm, BiomarkerPanel};
//!
//! let panel = BiomarkerPanel {
//!     chronological_age: 40.0,
//!     glucose: 95.0,
//!     hdl: 55.0,
//!     ldl: 110.0,
//!     triglycerides: 120.0,
//!     crp: 1.5,
//! };
//! for algorithm in BioAgeAlgorithm::ALL {
//!     if let Some(result) = algorithm.estimate(&panel) {
//!         println!("{}: {}", result.method_label, result.biological_age);
//!     }
//! }
//! ```

pub mod metabolic;
pub mod phenoage;

use crate::errors::AppError;
use crate::models::{BiomarkerPanel, EstimationResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

/// Biological-age scoring model selection
///
/// Two independent models over the same five-biomarker panel:
///
/// - `MetabolicScore`: deviation-from-optimum scoring, ±10 year clamp
/// - `PhenoAge`: population z-score scoring, unclamped
///
/// # Scientific References
///
/// - Levine, M.E. et al. (2018). "An epigenetic biomarker of aging for
///   lifespan and healthspan." *Aging Cell*, 17(4), e12765.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BioAgeAlgorithm {
    /// Proprietary Metabolic Score model
    ///
    /// `delta = clamp(Σ weight × (value − optimal) / range × 2.8, −10, +10)`
    ///
    /// Pros: calibrated against clinical optima, bounded output
    /// Cons: the ±10 year clamp hides extreme panels
    ///
    /// The default: this is the house model, with `PhenoAge` offered as the
    /// literature-backed second opinion.
    #[default]
    MetabolicScore,

    /// Simplified `PhenoAge` model
    ///
    /// `delta = Σ beta × (value − mean) / sd`
    ///
    /// Pros: literature-derived weights, reports the full delta
    /// Cons: simplified from the published nine-marker `PhenoAge`
    PhenoAge,
}

impl BioAgeAlgorithm {
    /// Every available model, in house-preference order
    pub const ALL: [Self; 2] = [Self::MetabolicScore, Self::PhenoAge];

    /// Estimate biological age from a biomarker panel
    ///
    /// Returns `None` when the panel fails the shared precondition (every
    /// field finite and strictly positive). Absence of a result means
    /// "insufficient data" and is an expected, non-exceptional outcome;
    /// downstream consumers render a "not available" placeholder.
    ///
    /// Deterministic: identical panels produce bit-identical results, and
    /// concurrent calls never interact.
    #[must_use]
    pub fn estimate(self, panel: &BiomarkerPanel) -> Option<EstimationResult> {
        if !panel.is_complete() {
            debug!(
                algorithm = self.name(),
                "biomarker panel incomplete, no estimate produced"
            );
            return None;
        }

        match self {
            Self::MetabolicScore => metabolic::estimate(panel),
            Self::PhenoAge => phenoage::estimate(panel),
        }
    }

    /// Algorithm name for logging and debugging
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MetabolicScore => "metabolic_score",
            Self::PhenoAge => "phenoage",
        }
    }

    /// Algorithm description
    #[must_use]
    pub fn description(self) -> String {
        match self {
            Self::MetabolicScore => {
                "Metabolic Score (deviation from clinical optima, ±10y clamp)".to_owned()
            }
            Self::PhenoAge => "PhenoAge (NHANES z-scores, Levine et al. 2018, unclamped)".to_owned(),
        }
    }

    /// Get the formula as a string
    #[must_use]
    pub const fn formula(self) -> &'static str {
        match self {
            Self::MetabolicScore => {
                "delta = clamp(Σ weight × (value − optimal) / range × 2.8, −10, +10)"
            }
            Self::PhenoAge => "delta = Σ beta × (value − mean) / sd",
        }
    }

    /// Source publication, for models derived from the literature
    #[must_use]
    pub const fn citation(self) -> Option<&'static str> {
        match self {
            Self::MetabolicScore => None,
            Self::PhenoAge => Some(phenoage::CITATION),
        }
    }
}

impl FromStr for BioAgeAlgorithm {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metabolic_score" | "metabolic" => Ok(Self::MetabolicScore),
            "phenoage" | "pheno_age" | "levine" => Ok(Self::PhenoAge),
            other => Err(AppError::invalid_input(format!(
                "Unknown biological age algorithm: '{other}'. Valid options: metabolic_score, phenoage"
            ))),
        }
    }
}
