//! Input validation and error reporting.

use framebudget::{
    ChunkedEstimator, ChunkingParameters, ComparisonReport, EstimateError, EstimatorOptions,
    NaiveEstimator, Scenario, VideoProfile, default_scenarios, validate_scenario,
};

#[test]
fn invalid_dimension_message() {
    let error = VideoProfile::new(1920, 1080, 30.0, -5.0).unwrap_err();
    assert!(matches!(
        error,
        EstimateError::InvalidDimension { field: "duration", .. }
    ));
    assert_eq!(error.to_string(), "Invalid duration: -5 (must be greater than zero)");
}

#[test]
fn invalid_chunk_size_message() {
    let error = ChunkingParameters::new(0).unwrap_err();
    assert_eq!(error.to_string(), "Invalid chunk size: 0 (must be at least 1)");
}

#[test]
fn scenario_propagates_profile_error() {
    let result = Scenario::new("bad", 0, 1080, 30.0, 600.0);
    assert!(matches!(
        result,
        Err(EstimateError::InvalidDimension { field: "width", .. })
    ));
}

#[test]
fn report_rejects_bad_options() {
    let options = EstimatorOptions::new().with_chunk_sizes(vec![0]);
    let result = ComparisonReport::build(&default_scenarios(), &options);
    assert!(matches!(result, Err(EstimateError::InvalidChunkSize(0))));

    let options = EstimatorOptions::new().with_overhead_factor(-1.0);
    let result = ComparisonReport::build(&default_scenarios(), &options);
    assert!(matches!(result, Err(EstimateError::InvalidOption { .. })));
}

#[test]
fn report_rejects_empty_scenarios() {
    let error = ComparisonReport::build(&[], &EstimatorOptions::new()).unwrap_err();
    assert_eq!(error.to_string(), "No scenarios to compare");
}

#[test]
fn validation_reports_option_errors() {
    let profile = VideoProfile::new(1920, 1080, 30.0, 600.0).unwrap();
    let report = validate_scenario(
        &profile,
        &EstimatorOptions::new().with_compression_ratio(2.0),
    );
    assert!(!report.is_valid());
    assert!(report.errors[0].contains("compression ratio"));
}

#[test]
fn validation_flags_oversized_chunk() {
    let profile = VideoProfile::new(1920, 1080, 30.0, 1.0).unwrap();
    let report = validate_scenario(&profile, &EstimatorOptions::new());
    assert!(report.is_valid());
    assert!(
        report
            .warnings
            .iter()
            .any(|warning| warning.contains("Chunk size 100 exceeds"))
    );
}

// ── Construction is the only way in ────────────────────────────────

#[test]
fn zero_chunk_size_only_available_as_error() {
    for size in [0_u64, 1, 50] {
        match ChunkingParameters::new(size) {
            Ok(chunking) => {
                assert!(size > 0);
                assert_eq!(chunking.chunk_size(), size);
                assert!(chunking.chunk_count(101) >= 1);
            }
            Err(error) => {
                assert_eq!(size, 0);
                assert!(matches!(error, EstimateError::InvalidChunkSize(0)));
            }
        }
    }
}

#[test]
fn negative_frame_rate_never_becomes_a_profile() {
    let result = VideoProfile::new(1920, 1080, -30.0, 600.0);
    assert!(matches!(
        result,
        Err(EstimateError::InvalidDimension { field: "frame rate", .. })
    ));
}

#[test]
fn default_scenarios_pass_profile_validation() {
    for scenario in default_scenarios() {
        let p = scenario.profile;
        assert!(
            VideoProfile::new(
                p.width(),
                p.height(),
                p.frames_per_second(),
                p.duration_seconds()
            )
            .is_ok()
        );
    }
}

// ── Estimators refuse out-of-range cost models ─────────────────────

#[test]
fn estimators_reject_out_of_range_options() {
    let negative_ratio = EstimatorOptions::new().with_compression_ratio(-1.0);
    assert!(matches!(
        ChunkedEstimator::new(negative_ratio),
        Err(EstimateError::InvalidOption { name: "compression ratio", .. })
    ));

    let negative_overhead = EstimatorOptions::new().with_overhead_factor(-1.2);
    assert!(matches!(
        NaiveEstimator::new(negative_overhead),
        Err(EstimateError::InvalidOption { name: "overhead factor", .. })
    ));

    let zero_bytes = EstimatorOptions::new().with_bytes_per_pixel(0);
    assert!(NaiveEstimator::new(zero_bytes.clone()).is_err());
    assert!(ChunkedEstimator::new(zero_bytes).is_err());
}

#[test]
fn valid_options_never_yield_negative_estimates() {
    let options = EstimatorOptions::new()
        .with_bytes_per_pixel(4)
        .with_overhead_factor(1.0)
        .with_compression_ratio(1.0);
    let profile = VideoProfile::new(1280, 720, 24.0, 60.0).unwrap();

    let naive = NaiveEstimator::new(options.clone()).unwrap().estimate(&profile);
    assert!(naive.total_peak_mb > 0.0);

    let chunked = ChunkedEstimator::new(options)
        .unwrap()
        .estimate(&profile, ChunkingParameters::new(10).unwrap());
    assert!(chunked.total_peak_mb > 0.0);
    assert!(chunked.max_chunk_videos_mb > 0.0);
}
