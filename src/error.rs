//! Error types for the `framebudget` crate.
//!
//! This module defines [`EstimateError`], the unified error type returned by
//! every fallible operation in the crate. The estimators themselves are total;
//! errors come from constructing inputs and from writing reports.

use std::io::Error as IoError;

use serde_json::Error as JsonError;
use thiserror::Error;

/// The unified error type for all `framebudget` operations.
///
/// Validation errors are raised when a [`VideoProfile`](crate::VideoProfile),
/// [`ChunkingParameters`](crate::ChunkingParameters) or
/// [`EstimatorOptions`](crate::EstimatorOptions) is built, so an estimate is
/// never computed from degenerate input.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EstimateError {
    /// A profile dimension was zero, negative, or not finite.
    #[error("Invalid {field}: {value} (must be greater than zero)")]
    InvalidDimension {
        /// Which profile field was rejected (`"width"`, `"frame rate"`, ...).
        field: &'static str,
        /// The rejected value, rendered as text.
        value: String,
    },

    /// A chunk size of zero was provided.
    #[error("Invalid chunk size: {0} (must be at least 1)")]
    InvalidChunkSize(u64),

    /// An estimator option was outside its accepted range.
    #[error("Invalid option {name}: {value}")]
    InvalidOption {
        /// Option name.
        name: &'static str,
        /// The rejected value, rendered as text.
        value: String,
    },

    /// A comparison was requested over an empty scenario list.
    #[error("No scenarios to compare")]
    NoScenarios,

    /// An I/O error occurred while writing a report.
    #[error("I/O error: {0}")]
    IoError(#[from] IoError),

    /// A report could not be serialised to JSON.
    #[error("JSON error: {0}")]
    JsonError(#[from] JsonError),
}
