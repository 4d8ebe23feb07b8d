//! Scenario validation.
//!
//! [`validate_scenario`] inspects a profile against the configured chunk
//! sizes and returns a [`ValidationReport`] describing anything that makes
//! the estimate less meaningful, such as a final chunk that is only partly
//! filled.
//!
//! # Example
//!
//! ```
//! use framebudget::{EstimatorOptions, VideoProfile, validate_scenario};
//!
//! let profile = VideoProfile::new(1920, 1080, 29.97, 600.0)?;
//! let report = validate_scenario(&profile, &EstimatorOptions::new());
//! assert!(report.is_valid());
//! for warning in &report.warnings {
//!     println!("Warning: {warning}");
//! }
//! # Ok::<(), framebudget::EstimateError>(())
//! ```

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::configuration::EstimatorOptions;
use crate::profile::{ChunkingParameters, VideoProfile};
use crate::units::format_count;

const HIGH_FRAME_RATE: f64 = 240.0;

/// Summary of scenario validation.
///
/// Contains lists of informational notices, warnings, and errors.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// Informational notices (not problems).
    pub info: Vec<String>,
    /// Issues that make the estimate looser but still usable.
    pub warnings: Vec<String>,
    /// Issues that prevent an estimate.
    pub errors: Vec<String>,
}

impl ValidationReport {
    /// Returns `true` if no errors were found.
    ///
    /// Warnings do not affect this result.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Total number of issues (info + warnings + errors).
    pub fn issue_count(&self) -> usize {
        self.info.len() + self.warnings.len() + self.errors.len()
    }
}

impl Display for ValidationReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for item in &self.info {
            writeln!(f, "[INFO] {item}")?;
        }
        for item in &self.warnings {
            writeln!(f, "[WARN] {item}")?;
        }
        for item in &self.errors {
            writeln!(f, "[ERROR] {item}")?;
        }
        if self.issue_count() == 0 {
            writeln!(f, "No issues found.")?;
        }
        Ok(())
    }
}

/// Check `profile` against the options and chunk sizes in `options`.
pub fn validate_scenario(profile: &VideoProfile, options: &EstimatorOptions) -> ValidationReport {
    let mut report = ValidationReport::default();

    if let Err(error) = options.validate() {
        report.errors.push(error.to_string());
    }

    let total_frames = profile.total_frames();

    // ── Profile ────────────────────────────────────────────────────
    report.info.push(format!(
        "Video: {}×{} @ {:.2} fps, {:.1}s, {} frames",
        profile.width(),
        profile.height(),
        profile.frames_per_second(),
        profile.duration_seconds(),
        format_count(total_frames),
    ));

    if total_frames == 0 {
        report
            .errors
            .push("Frame count is zero (duration is shorter than one frame)".to_string());
    }

    if profile.frames_per_second() > HIGH_FRAME_RATE {
        report.warnings.push(format!(
            "Unusually high frame rate ({:.1} fps)",
            profile.frames_per_second(),
        ));
    }

    // ── Chunking ───────────────────────────────────────────────────
    for &size in options.chunk_sizes() {
        let Ok(chunking) = ChunkingParameters::new(size) else {
            continue;
        };

        if total_frames > 0 && size > total_frames {
            report.warnings.push(format!(
                "Chunk size {size} exceeds the {total_frames} frames in the video; a single partial chunk is costed as full",
            ));
        } else if let Some(tail) = chunking.partial_tail(total_frames) {
            report.warnings.push(format!(
                "Chunk size {size}: final chunk holds {tail} of {size} frames; estimate is an upper bound",
            ));
        } else if total_frames > 0 {
            report.info.push(format!(
                "Chunk size {size}: {} full chunks",
                format_count(chunking.chunk_count(total_frames)),
            ));
        }
    }

    for warning in &report.warnings {
        log::warn!("{warning}");
    }

    report
}
