//! Peak storage of the chunked strategy.
//!
//! The chunked pipeline extracts a fixed-size batch of frames, builds their
//! SBS frames, encodes the batch to a compressed chunk video and deletes the
//! intermediates before moving on. Encoded chunks are kept until the final
//! assembly, which writes an output about as large as all chunks together.
//!
//! The peak is whichever phase costs more: one chunk mid-pipeline, or final
//! assembly with every chunk video plus the output on disk. The two phases
//! never overlap.
//!
//! Every chunk is costed as full-sized, including a shorter final chunk, so
//! the result is an upper bound.

use serde::Serialize;

use crate::configuration::EstimatorOptions;
use crate::error::EstimateError;
use crate::profile::{ChunkingParameters, VideoProfile};

/// Peak storage breakdown for the chunked strategy. All sizes in megabytes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[must_use]
pub struct ChunkedStorageEstimate {
    /// Frames in the source video.
    pub total_frames: u64,
    /// Chunks needed to cover every frame.
    pub total_chunks: u64,
    /// Frames per chunk.
    pub chunk_size: u64,
    /// Size of one extracted raw frame.
    pub frame_size_mb: f64,
    /// Raw frames, SBS frames and encoded video of a single chunk.
    pub peak_chunk_mb: f64,
    /// Every encoded chunk video retained for assembly.
    pub max_chunk_videos_mb: f64,
    /// The larger of the processing and assembly peaks.
    pub total_peak_mb: f64,
}

/// Estimator for the chunked strategy.
#[derive(Debug, Clone, Default)]
pub struct ChunkedEstimator {
    options: EstimatorOptions,
}

impl ChunkedEstimator {
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

    /// Estimate peak storage for `profile` processed in `chunking`-sized
    /// batches.
    pub fn estimate(
        &self,
        profile: &VideoProfile,
        chunking: ChunkingParameters,
    ) -> ChunkedStorageEstimate {
        let chunk_size = chunking.chunk_size();
        let total_frames = profile.total_frames();
        let total_chunks = chunking.chunk_count(total_frames);
        let frame_size_mb = self.options.frame_size_mb(profile.pixel_count());

        let chunk_extracted_mb = frame_size_mb * chunk_size as f64;
        let chunk_sbs_mb = (frame_size_mb * 2.0) * chunk_size as f64;
        let chunk_video_mb = chunk_sbs_mb * self.options.compression_ratio;

        let peak_chunk_mb = chunk_extracted_mb + chunk_sbs_mb + chunk_video_mb;

        let max_chunk_videos_mb = chunk_video_mb * total_chunks as f64;
        let final_video_mb = max_chunk_videos_mb;
        let assembly_mb = max_chunk_videos_mb + final_video_mb;

        let total_peak_mb = peak_chunk_mb.max(assembly_mb);

        log::debug!(
            "Chunked estimate for {}x{} ({} frames, {} chunks of {}): processing {:.1} MB, assembly {:.1} MB",
            profile.width(),
            profile.height(),
            total_frames,
            total_chunks,
            chunk_size,
            peak_chunk_mb,
            assembly_mb,
        );

        ChunkedStorageEstimate {
            total_frames,
            total_chunks,
            chunk_size,
            frame_size_mb,
            peak_chunk_mb,
            max_chunk_videos_mb,
            total_peak_mb,
        }
    }
}

/// Estimate with the stock cost model.
pub fn estimate(profile: &VideoProfile, chunking: ChunkingParameters) -> ChunkedStorageEstimate {
    ChunkedEstimator::default().estimate(profile, chunking)
}
