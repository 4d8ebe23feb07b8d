//! # framebudget
//!
//! Estimate the peak disk usage of producing side-by-side (SBS) stereoscopic
//! video with two strategies.
//!
//! - **Naive** — extract every frame, build every SBS frame, then clean up.
//! - **Chunked** — process fixed-size batches of frames, keeping one batch of
//!   intermediates plus the encoded chunk videos until final assembly.
//!
//! Nothing is extracted or encoded: every figure comes from a closed-form
//! cost model configured through [`EstimatorOptions`].
//!
//! ## Quick Start
//!
//! ### Estimate One Video
//!
//! ```
//! use framebudget::{ChunkingParameters, VideoProfile, chunked, naive};
//!
//! let profile = VideoProfile::new(3840, 2160, 60.0, 600.0)?;
//! let old = naive::estimate(&profile);
//! let new = chunked::estimate(&profile, ChunkingParameters::new(100)?);
//! assert!(new.total_peak_mb < old.total_peak_mb);
//! # Ok::<(), framebudget::EstimateError>(())
//! ```
//!
//! ### Print the Built-in Comparison
//!
//! ```no_run
//! use framebudget::{EstimatorOptions, default_scenarios, print_comparison};
//!
//! print_comparison(&default_scenarios(), &EstimatorOptions::new())?;
//! # Ok::<(), framebudget::EstimateError>(())
//! ```
//!
//! ## Features
//!
//! - **Naive estimate** — raw and SBS frame sets resident at once
//! - **Chunked estimate** — the larger of the per-chunk and assembly peaks
//! - **Comparison report** — text or JSON, with savings per chunk size
//! - **Scenario validation** — flags partial final chunks and odd inputs
//! - **Configurable cost model** — bytes per pixel, container overhead,
//!   chunk compression ratio, chunk sizes

pub mod chunked;
pub mod configuration;
pub mod error;
pub mod naive;
pub mod profile;
pub mod report;
pub mod scenario;
pub mod units;
pub mod validation;

pub use chunked::{ChunkedEstimator, ChunkedStorageEstimate};
pub use configuration::EstimatorOptions;
pub use error::EstimateError;
pub use naive::{NaiveEstimator, StorageEstimate};
pub use profile::{ChunkingParameters, VideoProfile};
pub use report::{ChunkedComparison, ComparisonReport, ScenarioComparison, print_comparison};
pub use scenario::{Scenario, default_scenarios};
pub use validation::{ValidationReport, validate_scenario};
