// ABOUTME: Biological-age estimation engine over fasting blood biomarker panels
// ABOUTME: Pure, deterministic scoring models (Metabolic Score and PhenoAge) with no I/O
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Bioage
//!
//! Biological-age estimation from a small fasting blood panel (glucose, HDL,
//! LDL, triglycerides, CRP) plus chronological age.
//!
//! Two independent scoring models implement the same contract:
//!
//! - **Metabolic Score**: weighted normalized deviations from clinical optima,
//!   scaled by a fixed factor and clamped to ±10 years.
//! - **`PhenoAge`**: population z-scores against NHANES-derived statistics with
//!   regression-style weights, unclamped. Simplified from
//!   Levine et al. (2018), *Aging Cell*.
//!
//! The engine is a leaf computation: no persistence, no network, no shared
//! mutable state. Every call is synchronous, deterministic, and safe to run
//! concurrently with any other call. Invalid input (missing, non-finite, zero
//! or negative fields) produces *no estimate* rather than an error; callers
//! branch on `Option`/emptiness and render "not available".
//!
//! # Example
//!
//! ```rust
//! use bioage::{BioAgeAlgorithm, BiomarkerPanel};
//!
//! let panel = BiomarkerPanel {
//!     chronological_age: 40.0,
//!     glucose: 90.0,
//!     hdl: 60.0,
//!     ldl: 100.0,
//!     triglycerides: 100.0,
//!     crp: 1.0,
//! };
//!
//! let result = BioAgeAlgorithm::MetabolicScore.estimate(&panel);
//! assert_eq!(result.map(|r| r.biological_age), Some(40));
//! ```

pub mod algorithms;
pub mod assessment;
pub mod errors;
pub mod models;
pub mod reference_values;

pub use algorithms::BioAgeAlgorithm;
pub use assessment::BioAgeAssessment;
pub use errors::{AppError, AppResult};
pub use models::{Biomarker, BiomarkerPanel, EstimationResult};
