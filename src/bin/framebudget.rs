use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use colored::Colorize;
use env_logger::Env;
use framebudget::{
    ComparisonReport, EstimatorOptions, Scenario, ScenarioComparison, default_scenarios,
    units::{format_count, format_decimal, mb_to_gb},
    validate_scenario,
};

const CLI_AFTER_HELP: &str = "Examples:\n  framebudget\n  framebudget compare --json\n  framebudget --chunk-size 200 --chunk-size 25 compare --width 3840 --height 2160 --fps 24 --duration 1:30:00\n  framebudget estimate --width 1920 --height 1080 --fps 30 --duration 600\n  framebudget validate --width 1920 --height 1080 --fps 29.97 --duration 00:10:00\n  framebudget completions zsh > _framebudget";

#[derive(Debug, Parser)]
#[command(
    name = "framebudget",
    version,
    about = "Estimate peak disk usage of naive versus chunked SBS video processing",
    after_help = CLI_AFTER_HELP
)]
struct Cli {
    #[command(flatten)]
    global: GlobalOptions,

    /// Defaults to `compare` over the built-in scenarios.
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Parser, Clone, Default)]
struct GlobalOptions {
    /// Show debug logging output.
    #[arg(long, global = true)]
    verbose: bool,

    /// Output machine-readable JSON where supported.
    #[arg(long, global = true)]
    json: bool,

    /// Disable coloured output.
    #[arg(long, global = true)]
    no_color: bool,

    /// Bytes stored per pixel of an extracted frame (default 3).
    #[arg(long, global = true)]
    bytes_per_pixel: Option<u32>,

    /// Still-image container overhead multiplier (default 1.2).
    #[arg(long, global = true)]
    overhead: Option<f64>,

    /// Encoded chunk size relative to its SBS frames (default 0.1).
    #[arg(long, global = true)]
    compression_ratio: Option<f64>,

    /// Chunk size to compare; repeat for several (default 100 and 50).
    #[arg(long = "chunk-size", global = true)]
    chunk_sizes: Vec<u64>,
}

/// A single video described on the command line.
#[derive(Debug, Args, Clone, Default)]
struct ProfileArgs {
    /// Label used in the report.
    #[arg(long)]
    name: Option<String>,
    /// Frame width in pixels.
    #[arg(long)]
    width: Option<u32>,
    /// Frame height in pixels.
    #[arg(long)]
    height: Option<u32>,
    /// Frames per second.
    #[arg(long)]
    fps: Option<f64>,
    /// Duration in seconds, MM:SS, or HH:MM:SS.
    #[arg(long)]
    duration: Option<String>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare naive and chunked peak storage.
    #[command(
        about = "Print the storage comparison report",
        after_help = "Examples:\n  framebudget compare\n  framebudget compare --name clip --width 1280 --height 720 --fps 25 --duration 90"
    )]
    Compare {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Print the full estimate breakdown for one video.
    #[command(
        about = "Estimate one video",
        after_help = "Examples:\n  framebudget estimate --width 1920 --height 1080 --fps 30 --duration 600"
    )]
    Estimate {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Check a video against the configured chunk sizes.
    #[command(
        about = "Validate scenario inputs",
        after_help = "Examples:\n  framebudget validate\n  framebudget validate --width 1920 --height 1080 --fps 29.97 --duration 600"
    )]
    Validate {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Generate shell completion scripts.
    #[command(about = "Generate shell completions")]
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn parse_duration_seconds(value: &str) -> Result<f64, Box<dyn std::error::Error>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("duration cannot be empty".into());
    }

    if let Ok(seconds) = trimmed.parse::<f64>() {
        return Ok(seconds);
    }

    let parts: Vec<&str> = trimmed.split(':').collect();
    if parts.len() < 2 || parts.len() > 3 {
        return Err(format!("invalid duration format: {trimmed}").into());
    }

    let (hours, minutes, seconds_str) = if parts.len() == 3 {
        (parts[0].parse::<u64>()?, parts[1].parse::<u64>()?, parts[2])
    } else {
        (0_u64, parts[0].parse::<u64>()?, parts[1])
    };

    if minutes >= 60 {
        return Err(format!("minutes out of range in duration: {trimmed}").into());
    }
    let seconds = seconds_str.parse::<f64>()?;
    if !(0.0..60.0).contains(&seconds) {
        return Err(format!("seconds out of range in duration: {trimmed}").into());
    }
    Ok((hours as f64 * 3600.0) + (minutes as f64 * 60.0) + seconds)
}

/// Resolve the scenario list: the one described by `args`, or the built-in
/// list when no profile flag was given.
fn resolve_scenarios(args: &ProfileArgs) -> Result<Vec<Scenario>, Box<dyn std::error::Error>> {
    match (args.width, args.height, args.fps, &args.duration) {
        (None, None, None, None) if args.name.is_some() => {
            Err("--name requires --width, --height, --fps and --duration".into())
        }
        (None, None, None, None) => Ok(default_scenarios()),
        (Some(width), Some(height), Some(fps), Some(duration)) => {
            let seconds = parse_duration_seconds(duration)?;
            let name = args
                .name
                .clone()
                .unwrap_or_else(|| format!("{width}x{height} {fps}fps {seconds}s"));
            Ok(vec![Scenario::new(name, width, height, fps, seconds)?])
        }
        _ => Err("provide all of --width, --height, --fps and --duration, or none".into()),
    }
}

fn estimator_options(global: &GlobalOptions) -> EstimatorOptions {
    let mut options = EstimatorOptions::new();

    if let Some(bytes) = global.bytes_per_pixel {
        options = options.with_bytes_per_pixel(bytes);
    }
    if let Some(overhead) = global.overhead {
        options = options.with_overhead_factor(overhead);
    }
    if let Some(ratio) = global.compression_ratio {
        options = options.with_compression_ratio(ratio);
    }
    if !global.chunk_sizes.is_empty() {
        options = options.with_chunk_sizes(global.chunk_sizes.clone());
    }

    options
}

fn apply_global_options(global: &GlobalOptions) {
    let default_level = if global.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    if global.no_color {
        colored::control::set_override(false);
    }
}

fn print_estimate(comparison: &ScenarioComparison) {
    let profile = &comparison.scenario.profile;
    let naive = &comparison.naive;

    println!("{}", comparison.scenario.name.bold());
    println!(
        "Video: {}x{} @ {:.2} fps, {:.1}s",
        profile.width(),
        profile.height(),
        profile.frames_per_second(),
        profile.duration_seconds(),
    );
    println!("Total frames: {}", format_count(naive.total_frames));
    println!("Frame size: {} MB", format_decimal(naive.frame_size_mb, 2));
    println!();

    println!("{}", "Naive (extract all frames)".cyan().bold());
    println!("  Extracted frames: {} MB", format_decimal(naive.extracted_frames_mb, 1));
    println!("  SBS frames: {} MB", format_decimal(naive.sbs_frames_mb, 1));
    println!(
        "  Peak storage: {} MB ({:.1} GB)",
        format_decimal(naive.total_peak_mb, 1),
        mb_to_gb(naive.total_peak_mb),
    );

    for run in &comparison.chunked {
        let estimate = &run.estimate;
        println!();
        println!(
            "{}",
            format!("Chunked (chunk_size={})", estimate.chunk_size)
                .cyan()
                .bold()
        );
        println!("  Chunks: {}", format_count(estimate.total_chunks));
        println!("  Peak per chunk: {} MB", format_decimal(estimate.peak_chunk_mb, 1));
        println!(
            "  Chunk videos: {} MB",
            format_decimal(estimate.max_chunk_videos_mb, 1)
        );
        println!(
            "  Peak storage: {} MB ({:.1} GB)",
            format_decimal(estimate.total_peak_mb, 1),
            mb_to_gb(estimate.total_peak_mb),
        );
        let savings = format!("{:.1}%", run.savings_percent);
        let savings = if run.savings_percent > 0.0 {
            savings.green()
        } else {
            savings.red()
        };
        println!("  Storage savings: {savings}");
    }
}

/// Running without a subcommand compares the built-in scenarios.
fn resolve_command(command: Option<Commands>) -> Commands {
    command.unwrap_or(Commands::Compare {
        profile: ProfileArgs::default(),
    })
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    apply_global_options(&cli.global);

    match resolve_command(cli.command) {
        Commands::Compare { profile } => {
            let options = estimator_options(&cli.global);
            let scenarios = resolve_scenarios(&profile)?;
            let report = ComparisonReport::build(&scenarios, &options)?;
            if cli.global.json {
                println!("{}", report.to_json()?);
            } else {
                report.write_text(&mut std::io::stdout().lock())?;
            }
        }
        Commands::Estimate { profile } => {
            let options = estimator_options(&cli.global);
            options.validate()?;
            let scenarios = resolve_scenarios(&profile)?;
            let comparisons = scenarios
                .iter()
                .map(|scenario| ScenarioComparison::compute(scenario, &options))
                .collect::<Result<Vec<_>, _>>()?;

            if cli.global.json {
                println!("{}", serde_json::to_string_pretty(&comparisons)?);
            } else {
                for (index, comparison) in comparisons.iter().enumerate() {
                    if index > 0 {
                        println!();
                    }
                    print_estimate(comparison);
                }
            }
        }
        Commands::Validate { profile } => {
            let options = estimator_options(&cli.global);
            let scenarios = resolve_scenarios(&profile)?;

            let mut all_valid = true;
            for scenario in &scenarios {
                let report = validate_scenario(&scenario.profile, &options);
                all_valid &= report.is_valid();
                println!("{}", scenario.name.bold());
                print!("{report}");
            }

            if !all_valid {
                return Err("validation found errors".into());
            }
            println!(
                "{} {}",
                "success:".green().bold(),
                format!("{} scenario(s) valid", scenarios.len()).green()
            );
        }
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "framebudget", &mut std::io::stdout());
        }
    }

    Ok(())
}

fn main() {
    if let Err(error) = run() {
        eprintln!("{} {error}", "error:".red().bold());
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{
        Cli, Commands, ProfileArgs, parse_duration_seconds, resolve_command, resolve_scenarios,
    };
    use clap::{CommandFactory, Parser};
    use framebudget::default_scenarios;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_duration_formats() {
        assert_eq!(parse_duration_seconds("600").unwrap(), 600.0);
        assert_eq!(parse_duration_seconds("10:00").unwrap(), 600.0);
        assert_eq!(parse_duration_seconds("01:00:00").unwrap(), 3600.0);
        assert_eq!(parse_duration_seconds("00:01:15.5").unwrap(), 75.5);
        assert!(parse_duration_seconds("").is_err());
        assert!(parse_duration_seconds("1:2:3:4").is_err());
    }

    #[test]
    fn duration_components_out_of_range_rejected() {
        assert!(parse_duration_seconds("1:-5").is_err());
        assert!(parse_duration_seconds("1:60").is_err());
        assert!(parse_duration_seconds("0:01:75").is_err());
        assert!(parse_duration_seconds("1:60:00").is_err());
        assert!(parse_duration_seconds("-1:30").is_err());
        assert!(parse_duration_seconds("90:00").is_err());
        assert_eq!(parse_duration_seconds("1:59:59.5").unwrap(), 7199.5);
    }

    #[test]
    fn no_arguments_compares_default_scenarios() {
        let cli = Cli::try_parse_from(["framebudget"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.global.json);
        assert!(cli.global.chunk_sizes.is_empty());

        let Commands::Compare { profile } = resolve_command(cli.command) else {
            panic!("expected the compare command");
        };
        assert_eq!(resolve_scenarios(&profile).unwrap(), default_scenarios());
    }

    #[test]
    fn name_without_profile_rejected() {
        let args = ProfileArgs {
            name: Some("clip".to_string()),
            ..ProfileArgs::default()
        };
        assert!(resolve_scenarios(&args).is_err());
    }

    #[test]
    fn no_profile_flags_uses_defaults() {
        let scenarios = resolve_scenarios(&ProfileArgs::default()).unwrap();
        assert_eq!(scenarios.len(), 4);
    }

    #[test]
    fn partial_profile_flags_rejected() {
        let args = ProfileArgs {
            width: Some(1920),
            ..ProfileArgs::default()
        };
        assert!(resolve_scenarios(&args).is_err());
    }

    #[test]
    fn custom_profile_named() {
        let args = ProfileArgs {
            name: None,
            width: Some(1280),
            height: Some(720),
            fps: Some(25.0),
            duration: Some("1:30".to_string()),
        };
        let scenarios = resolve_scenarios(&args).unwrap();
        assert_eq!(scenarios[0].name, "1280x720 25fps 90s");
        assert_eq!(scenarios[0].profile.total_frames(), 2250);
    }
}
