//! Side-by-side comparison of the naive and chunked strategies.
//!
//! [`ComparisonReport::build`] runs the naive estimator and the chunked
//! estimator (once per configured chunk size) over each scenario, in order,
//! and records the savings of each chunked run. The report renders as plain
//! text through [`Display`] or as JSON through [`ComparisonReport::to_json`].
//!
//! # Example
//!
//! ```
//! use framebudget::{ComparisonReport, EstimatorOptions, default_scenarios};
//!
//! let report = ComparisonReport::build(&default_scenarios(), &EstimatorOptions::new())?;
//! for comparison in &report.comparisons {
//!     for run in &comparison.chunked {
//!         assert!(run.savings_percent > 0.0);
//!     }
//! }
//! print!("{report}");
//! # Ok::<(), framebudget::EstimateError>(())
//! ```

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::io::{self, Write};

use serde::Serialize;

use crate::chunked::{ChunkedEstimator, ChunkedStorageEstimate};
use crate::configuration::EstimatorOptions;
use crate::error::EstimateError;
use crate::naive::{NaiveEstimator, StorageEstimate};
use crate::scenario::Scenario;
use crate::units::{format_count, format_decimal, mb_to_gb, savings_percent};

const REPORT_TITLE: &str = "Storage Efficiency Comparison";
const SECTION_RULE_WIDTH: usize = 70;
const SCENARIO_RULE_WIDTH: usize = 50;

/// One chunked run and how it compares with the naive baseline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChunkedComparison {
    /// The chunked estimate.
    pub estimate: ChunkedStorageEstimate,
    /// `(naive − chunked) / naive × 100`.
    pub savings_percent: f64,
}

/// Every estimate produced for one scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioComparison {
    /// The scenario that was costed.
    pub scenario: Scenario,
    /// Naive baseline.
    pub naive: StorageEstimate,
    /// Chunked runs, in configured chunk-size order.
    pub chunked: Vec<ChunkedComparison>,
}

impl ScenarioComparison {
    /// Run both estimators for one scenario.
    ///
    /// # Errors
    ///
    /// Returns the error from [`EstimatorOptions::validate`] if any option or
    /// configured chunk size is out of range.
    pub fn compute(scenario: &Scenario, options: &EstimatorOptions) -> Result<Self, EstimateError> {
        let naive = NaiveEstimator::new(options.clone())?.estimate(&scenario.profile);
        let chunked_estimator = ChunkedEstimator::new(options.clone())?;

        let chunked = options
            .chunking()?
            .into_iter()
            .map(|chunking| {
                let estimate = chunked_estimator.estimate(&scenario.profile, chunking);
                ChunkedComparison {
                    savings_percent: savings_percent(naive.total_peak_mb, estimate.total_peak_mb),
                    estimate,
                }
            })
            .collect();

        Ok(Self {
            scenario: scenario.clone(),
            naive,
            chunked,
        })
    }
}

/// Comparison results for an ordered list of scenarios.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[must_use]
pub struct ComparisonReport {
    /// One entry per input scenario, in input order.
    pub comparisons: Vec<ScenarioComparison>,
}

impl ComparisonReport {
    /// Estimate every scenario with every configured chunk size.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::NoScenarios`] for an empty list, or the error
    /// from [`EstimatorOptions::validate`] if the options are out of range.
    pub fn build(scenarios: &[Scenario], options: &EstimatorOptions) -> Result<Self, EstimateError> {
        if scenarios.is_empty() {
            return Err(EstimateError::NoScenarios);
        }
        options.validate()?;

        log::info!(
            "Building comparison for {} scenario(s) with chunk sizes {:?}",
            scenarios.len(),
            options.chunk_sizes(),
        );

        let comparisons = scenarios
            .iter()
            .map(|scenario| ScenarioComparison::compute(scenario, options))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { comparisons })
    }

    /// Write the plain-text report to `sink`.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::IoError`] if writing fails.
    pub fn write_text<W: Write>(&self, sink: &mut W) -> Result<(), EstimateError> {
        write!(sink, "{self}")?;
        sink.flush()?;
        Ok(())
    }

    /// Serialise the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::JsonError`] if serialisation fails.
    pub fn to_json(&self) -> Result<String, EstimateError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Display for ComparisonReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let section_rule = "=".repeat(SECTION_RULE_WIDTH);
        let scenario_rule = "-".repeat(SCENARIO_RULE_WIDTH);

        writeln!(f, "{REPORT_TITLE}")?;
        writeln!(f, "{section_rule}")?;
        writeln!(f)?;

        for comparison in &self.comparisons {
            let naive = &comparison.naive;

            writeln!(f, "Scenario: {}", comparison.scenario.name)?;
            writeln!(f, "{scenario_rule}")?;
            writeln!(f, "Total frames: {}", format_count(naive.total_frames))?;
            writeln!(f, "Frame size: {} MB", format_decimal(naive.frame_size_mb, 2))?;
            writeln!(f)?;

            writeln!(f, "OLD APPROACH (extract all frames):")?;
            writeln!(f, "  Peak storage: {}", peak(naive.total_peak_mb))?;
            writeln!(f)?;

            for run in &comparison.chunked {
                writeln!(
                    f,
                    "NEW CHUNKED APPROACH (chunk_size={}):",
                    run.estimate.chunk_size
                )?;
                writeln!(f, "  Peak storage: {}", peak(run.estimate.total_peak_mb))?;
                writeln!(f, "  Storage savings: {:.1}%", run.savings_percent)?;
                writeln!(f)?;
            }

            writeln!(f, "{section_rule}")?;
            writeln!(f)?;
        }

        Ok(())
    }
}

fn peak(megabytes: f64) -> String {
    format!(
        "{} MB ({:.1} GB)",
        format_decimal(megabytes, 1),
        mb_to_gb(megabytes)
    )
}

/// Build the report for `scenarios` and print it to standard output.
///
/// # Errors
///
/// Propagates errors from [`ComparisonReport::build`] and from writing to
/// stdout.
pub fn print_comparison(
    scenarios: &[Scenario],
    options: &EstimatorOptions,
) -> Result<(), EstimateError> {
    let report = ComparisonReport::build(scenarios, options)?;
    report.write_text(&mut io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use super::{ComparisonReport, ScenarioComparison};
    use crate::{EstimateError, EstimatorOptions, Scenario, default_scenarios};

    #[test]
    fn empty_scenarios_rejected() {
        assert!(matches!(
            ComparisonReport::build(&[], &EstimatorOptions::new()),
            Err(EstimateError::NoScenarios)
        ));
    }

    #[test]
    fn compute_rejects_out_of_range_options() {
        let scenario = &default_scenarios()[0];
        let options = EstimatorOptions::new().with_compression_ratio(-1.0);
        assert!(matches!(
            ScenarioComparison::compute(scenario, &options),
            Err(EstimateError::InvalidOption { .. })
        ));
    }

    #[test]
    fn text_layout() {
        let scenario = Scenario::new("1080p 30fps 10min", 1920, 1080, 30.0, 600.0).unwrap();
        let report = ComparisonReport::build(&[scenario], &EstimatorOptions::new()).unwrap();
        let text = report.to_string();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Storage Efficiency Comparison");
        assert_eq!(lines[1], "=".repeat(70));
        assert_eq!(lines[3], "Scenario: 1080p 30fps 10min");
        assert_eq!(lines[4], "-".repeat(50));
        assert_eq!(lines[5], "Total frames: 18,000");
        assert_eq!(lines[6], "Frame size: 7.12 MB");
        assert!(text.contains("NEW CHUNKED APPROACH (chunk_size=100):"));
        assert!(text.contains("NEW CHUNKED APPROACH (chunk_size=50):"));
        assert!(text.contains("Storage savings: 86.7%"));
    }

    #[test]
    fn write_text_matches_display() {
        let report =
            ComparisonReport::build(&default_scenarios(), &EstimatorOptions::new()).unwrap();
        let mut buffer = Vec::new();
        report.write_text(&mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), report.to_string());
    }
}
