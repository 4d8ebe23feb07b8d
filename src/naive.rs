//! Peak storage of the extract-everything strategy.
//!
//! The naive pipeline writes every frame of the source as a still image, then
//! writes a double-width side-by-side (SBS) copy of every frame, and only
//! cleans up once both sets are complete. Its peak is therefore both full
//! sets resident at once.
//!
//! # Example
//!
//! ```
//! use framebudget::{NaiveEstimator, VideoProfile};
//!
//! let profile = VideoProfile::new(1920, 1080, 30.0, 600.0)?;
//! let estimate = NaiveEstimator::default().estimate(&profile);
//! assert_eq!(estimate.total_frames, 18_000);
//! println!("peak: {:.1} MB", estimate.total_peak_mb);
//! # Ok::<(), framebudget::EstimateError>(())
//! ```

use serde::Serialize;

use crate::configuration::EstimatorOptions;
use crate::error::EstimateError;
use crate::profile::VideoProfile;

/// Peak storage breakdown for the naive strategy. All sizes in megabytes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[must_use]
pub struct StorageEstimate {
    /// Frames in the source video.
    pub total_frames: u64,
    /// Size of one extracted raw frame.
    pub frame_size_mb: f64,
    /// All raw frames resident at once.
    pub extracted_frames_mb: f64,
    /// All SBS frames resident at once.
    pub sbs_frames_mb: f64,
    /// Raw and SBS sets together.
    pub total_peak_mb: f64,
}

/// Estimator for the extract-everything strategy.
#[derive(Debug, Clone, Default)]
pub struct NaiveEstimator {
    options: EstimatorOptions,
}

impl NaiveEstimator {
    /// Create an estimator using the given cost model.
    ///
    /// # Errors
    ///
    /// Returns the error from [`EstimatorOptions::validate`] when any option
    /// is out of range.
    pub fn new(options: EstimatorOptions) -> Result<Self, EstimateError> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Estimate peak storage for `profile`.
    pub fn estimate(&self, profile: &VideoProfile) -> StorageEstimate {
        let total_frames = profile.total_frames();
        let frame_size_mb = self.options.frame_size_mb(profile.pixel_count());

        let extracted_frames_mb = frame_size_mb * total_frames as f64;
        let sbs_frames_mb = (frame_size_mb * 2.0) * total_frames as f64;
        let total_peak_mb = extracted_frames_mb + sbs_frames_mb;

        log::debug!(
            "Naive estimate for {}x{} ({} frames): {:.1} MB peak",
            profile.width(),
            profile.height(),
            total_frames,
            total_peak_mb,
        );

        StorageEstimate {
            total_frames,
            frame_size_mb,
            extracted_frames_mb,
            sbs_frames_mb,
            total_peak_mb,
        }
    }
}

/// Estimate with the stock cost model.
pub fn estimate(profile: &VideoProfile) -> StorageEstimate {
    NaiveEstimator::default().estimate(profile)
}
