//! Named scenarios fed to the comparison report.

use serde::Serialize;

use crate::error::EstimateError;
use crate::profile::VideoProfile;

/// A [`VideoProfile`] with a display name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scenario {
    /// Label printed in the report (e.g. `"4K 60fps 10min"`).
    pub name: String,
    /// The video being costed.
    pub profile: VideoProfile,
}

impl Scenario {
    /// Build a scenario, validating the profile.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::InvalidDimension`] if any profile field is not
    /// strictly positive.
    pub fn new(
        name: impl Into<String>,
        width: u32,
        height: u32,
        frames_per_second: f64,
        duration_seconds: f64,
    ) -> Result<Self, EstimateError> {
        Ok(Self {
            name: name.into(),
            profile: VideoProfile::new(width, height, frames_per_second, duration_seconds)?,
        })
    }
}

// (name, width, height, fps, seconds)
const DEFAULT_SCENARIOS: [(&str, u32, u32, f64, f64); 4] = [
    ("1080p 30fps 10min", 1920, 1080, 30.0, 600.0),
    ("4K 30fps 10min", 3840, 2160, 30.0, 600.0),
    ("4K 60fps 10min", 3840, 2160, 60.0, 600.0),
    ("1080p 30fps 1hour", 1920, 1080, 30.0, 3600.0),
];

/// The built-in scenario list the tool reports on when run without input.
pub fn default_scenarios() -> Vec<Scenario> {
    DEFAULT_SCENARIOS
        .iter()
        .map(|&(name, width, height, fps, seconds)| Scenario {
            name: name.to_string(),
            profile: VideoProfile::from_parts(width, height, fps, seconds),
        })
        .collect()
}
