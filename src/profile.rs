//! Video profile and chunking inputs.
//!
//! A [`VideoProfile`] describes the source video being costed and a
//! [`ChunkingParameters`] the batch size used by the chunked strategy. Both
//! validate on construction, so every value that reaches an estimator is
//! strictly positive.
//!
//! # Example
//!
//! ```
//! use framebudget::{ChunkingParameters, VideoProfile};
//!
//! let profile = VideoProfile::new(1920, 1080, 30.0, 600.0)?;
//! assert_eq!(profile.total_frames(), 18_000);
//!
//! let chunking = ChunkingParameters::new(100)?;
//! assert_eq!(chunking.chunk_count(profile.total_frames()), 180);
//! # Ok::<(), framebudget::EstimateError>(())
//! ```

use serde::Serialize;

use crate::error::EstimateError;

/// Dimensions, frame rate and length of a video.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[must_use]
pub struct VideoProfile {
    width: u32,
    height: u32,
    frames_per_second: f64,
    duration_seconds: f64,
}

impl VideoProfile {
    /// Create a profile, rejecting zero, negative or non-finite values.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::InvalidDimension`] naming the first field that
    /// is not strictly positive.
    pub fn new(
        width: u32,
        height: u32,
        frames_per_second: f64,
        duration_seconds: f64,
    ) -> Result<Self, EstimateError> {
        if width == 0 {
            return Err(invalid("width", width));
        }
        if height == 0 {
            return Err(invalid("height", height));
        }
        if !(frames_per_second.is_finite() && frames_per_second > 0.0) {
            return Err(invalid("frame rate", frames_per_second));
        }
        if !(duration_seconds.is_finite() && duration_seconds > 0.0) {
            return Err(invalid("duration", duration_seconds));
        }

        Ok(Self::from_parts(width, height, frames_per_second, duration_seconds))
    }

    /// Build from values already known to be strictly positive.
    pub(crate) const fn from_parts(
        width: u32,
        height: u32,
        frames_per_second: f64,
        duration_seconds: f64,
    ) -> Self {
        Self {
            width,
            height,
            frames_per_second,
            duration_seconds,
        }
    }

    /// Frame width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Frames per second.
    pub fn frames_per_second(&self) -> f64 {
        self.frames_per_second
    }

    /// Length of the video in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.duration_seconds
    }

    /// Total number of frames, truncated toward zero.
    pub fn total_frames(&self) -> u64 {
        (self.frames_per_second * self.duration_seconds) as u64
    }

    /// Number of pixels in one frame.
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

fn invalid(field: &'static str, value: impl ToString) -> EstimateError {
    EstimateError::InvalidDimension {
        field,
        value: value.to_string(),
    }
}

/// Batch size for the chunked strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChunkingParameters {
    chunk_size: u64,
}

impl ChunkingParameters {
    /// Create chunking parameters.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::InvalidChunkSize`] when `chunk_size` is zero.
    pub fn new(chunk_size: u64) -> Result<Self, EstimateError> {
        if chunk_size == 0 {
            return Err(EstimateError::InvalidChunkSize(chunk_size));
        }
        Ok(Self { chunk_size })
    }

    /// Frames per chunk. Always at least 1.
    pub fn chunk_size(&self) -> u64 {
        self.chunk_size
    }

    /// Number of chunks needed to cover `total_frames` (ceiling division).
    pub fn chunk_count(&self, total_frames: u64) -> u64 {
        total_frames.div_ceil(self.chunk_size)
    }

    /// Frames in the final chunk, or `None` when every chunk is full.
    pub fn partial_tail(&self, total_frames: u64) -> Option<u64> {
        match total_frames % self.chunk_size {
            0 => None,
            remainder => Some(remainder),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ChunkingParameters, VideoProfile};
    use crate::EstimateError;

    #[test]
    fn total_frames_truncates() {
        let profile = VideoProfile::new(640, 480, 29.97, 10.0).unwrap();
        assert_eq!(profile.total_frames(), 299);
    }

    #[test]
    fn rejects_each_field() {
        for (width, height, fps, duration, field) in [
            (0, 1080, 30.0, 600.0, "width"),
            (1920, 0, 30.0, 600.0, "height"),
            (1920, 1080, 0.0, 600.0, "frame rate"),
            (1920, 1080, -1.0, 600.0, "frame rate"),
            (1920, 1080, f64::NAN, 600.0, "frame rate"),
            (1920, 1080, 30.0, 0.0, "duration"),
            (1920, 1080, 30.0, f64::INFINITY, "duration"),
        ] {
            match VideoProfile::new(width, height, fps, duration) {
                Err(EstimateError::InvalidDimension { field: got, .. }) => assert_eq!(got, field),
                other => panic!("expected InvalidDimension for {field}, got {other:?}"),
            }
        }
    }

    #[test]
    fn zero_chunk_size_rejected() {
        assert!(matches!(
            ChunkingParameters::new(0),
            Err(EstimateError::InvalidChunkSize(0))
        ));
    }

    #[test]
    fn partial_tail() {
        let chunking = ChunkingParameters::new(100).unwrap();
        assert_eq!(chunking.partial_tail(18_000), None);
        assert_eq!(chunking.partial_tail(18_050), Some(50));
        assert_eq!(chunking.chunk_count(18_050), 181);
        assert_eq!(chunking.chunk_count(0), 0);
    }
}
