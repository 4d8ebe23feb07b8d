//! Estimator configuration.
//!
//! [`EstimatorOptions`] is a builder carrying the cost-model constants and the
//! chunk sizes the comparison report evaluates. A default-constructed value
//! reproduces the stock model: 3 bytes per pixel, a 1.2× still-image overhead,
//! 10:1 chunk compression, and chunk sizes of 100 and 50 frames.
//!
//! # Example
//!
//! ```
//! use framebudget::EstimatorOptions;
//!
//! let options = EstimatorOptions::new()
//!     .with_bytes_per_pixel(4)
//!     .with_chunk_sizes(vec![200, 100, 25]);
//! options.validate()?;
//! # Ok::<(), framebudget::EstimateError>(())
//! ```

use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::error::EstimateError;
use crate::profile::ChunkingParameters;
use crate::units::BYTES_PER_MB;

/// Default bytes stored per pixel for an intermediate still frame (RGB).
pub const DEFAULT_BYTES_PER_PIXEL: u32 = 3;

/// Default size multiplier for the still-image container.
pub const DEFAULT_OVERHEAD_FACTOR: f64 = 1.2;

/// Default encoded-to-raw size ratio for a chunk video.
pub const DEFAULT_COMPRESSION_RATIO: f64 = 0.1;

/// Default chunk sizes compared against the naive strategy, in report order.
pub const DEFAULT_CHUNK_SIZES: [u64; 2] = [100, 50];

/// Cost-model settings shared by both estimators and the report.
#[derive(Clone, PartialEq)]
pub struct EstimatorOptions {
    pub(crate) bytes_per_pixel: u32,
    pub(crate) overhead_factor: f64,
    pub(crate) compression_ratio: f64,
    pub(crate) chunk_sizes: Vec<u64>,
}

impl Debug for EstimatorOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("EstimatorOptions")
            .field("bytes_per_pixel", &self.bytes_per_pixel)
            .field("overhead_factor", &self.overhead_factor)
            .field("compression_ratio", &self.compression_ratio)
            .field("chunk_sizes", &self.chunk_sizes)
            .finish()
    }
}

impl Default for EstimatorOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl EstimatorOptions {
    /// Create options with the stock cost model.
    pub fn new() -> Self {
        Self {
            bytes_per_pixel: DEFAULT_BYTES_PER_PIXEL,
            overhead_factor: DEFAULT_OVERHEAD_FACTOR,
            compression_ratio: DEFAULT_COMPRESSION_RATIO,
            chunk_sizes: DEFAULT_CHUNK_SIZES.to_vec(),
        }
    }

    /// Set the bytes stored per pixel of a raw frame.
    #[must_use]
    pub fn with_bytes_per_pixel(mut self, bytes: u32) -> Self {
        self.bytes_per_pixel = bytes;
        self
    }

    /// Set the still-image container overhead multiplier.
    #[must_use]
    pub fn with_overhead_factor(mut self, factor: f64) -> Self {
        self.overhead_factor = factor;
        self
    }

    /// Set the size of an encoded chunk relative to its SBS frames.
    ///
    /// `0.1` means a 10:1 compression ratio.
    #[must_use]
    pub fn with_compression_ratio(mut self, ratio: f64) -> Self {
        self.compression_ratio = ratio;
        self
    }

    /// Replace the chunk sizes evaluated by the comparison report.
    #[must_use]
    pub fn with_chunk_sizes(mut self, sizes: Vec<u64>) -> Self {
        self.chunk_sizes = sizes;
        self
    }

    /// Bytes stored per pixel of a raw frame.
    pub fn bytes_per_pixel(&self) -> u32 {
        self.bytes_per_pixel
    }

    /// Still-image container overhead multiplier.
    pub fn overhead_factor(&self) -> f64 {
        self.overhead_factor
    }

    /// Encoded chunk size relative to its SBS frames.
    pub fn compression_ratio(&self) -> f64 {
        self.compression_ratio
    }

    /// Chunk sizes evaluated by the comparison report, in report order.
    pub fn chunk_sizes(&self) -> &[u64] {
        &self.chunk_sizes
    }

    /// Check every setting.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::InvalidOption`] for a zero byte count, a
    /// non-positive overhead, or a compression ratio outside `(0, 1]`, and
    /// [`EstimateError::InvalidChunkSize`] for a zero chunk size.
    pub fn validate(&self) -> Result<(), EstimateError> {
        if self.bytes_per_pixel == 0 {
            return Err(EstimateError::InvalidOption {
                name: "bytes per pixel",
                value: self.bytes_per_pixel.to_string(),
            });
        }
        if !(self.overhead_factor.is_finite() && self.overhead_factor > 0.0) {
            return Err(EstimateError::InvalidOption {
                name: "overhead factor",
                value: self.overhead_factor.to_string(),
            });
        }
        if !(self.compression_ratio > 0.0 && self.compression_ratio <= 1.0) {
            return Err(EstimateError::InvalidOption {
                name: "compression ratio",
                value: self.compression_ratio.to_string(),
            });
        }
        self.chunking()?;
        Ok(())
    }

    /// The configured chunk sizes as validated [`ChunkingParameters`].
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::InvalidChunkSize`] for the first zero size.
    pub fn chunking(&self) -> Result<Vec<ChunkingParameters>, EstimateError> {
        self.chunk_sizes
            .iter()
            .map(|&size| ChunkingParameters::new(size))
            .collect()
    }

    /// Size in megabytes of one stored raw frame of `pixel_count` pixels.
    pub(crate) fn frame_size_mb(&self, pixel_count: u64) -> f64 {
        pixel_count as f64 * f64::from(self.bytes_per_pixel) * self.overhead_factor / BYTES_PER_MB
    }
}
