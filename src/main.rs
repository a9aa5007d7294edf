//! Measures a display's per-channel response with the calibration toolkit
//! and writes gamma correction tables.
//!
//! - `measure` (default): prompt for parameters, run the patch generator,
//!   reset the display, measure, then fit and write tables.
//! - `analyze`: fit and write tables from an existing `.ti3` file.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use photometer_gamma_rs::calibration::{
    CalibrationConfig, CalibrationPipeline, CalibrationReport, PatchCounts, PresetSource, RunLayout,
    TerminalSource,
};
use photometer_gamma_rs::logger;
use tracing::{error, info};

/// Display gamma calibration driver
#[derive(Parser, Debug)]
#[command(name = "photometer-gamma")]
#[command(about = "Measure display gamma with the calibration toolkit and build correction tables")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(flatten)]
    output: OutputArgs,

    /// Measurement options when no subcommand is given
    #[command(flatten)]
    measure: MeasureArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args, Debug, Clone)]
struct OutputArgs {
    /// Decimal places in the correction tables
    #[arg(long, global = true, default_value_t = 6)]
    precision: usize,

    /// Skip the diagnostic plot
    #[arg(long, global = true)]
    no_plot: bool,

    /// Default log filter when RUST_LOG is unset
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
}

#[derive(Args, Debug, Clone)]
struct MeasureArgs {
    /// Directory in which the run directory is created
    #[arg(long, default_value = ".")]
    output_root: PathBuf,

    /// Directory containing targen, dispwin and dispread
    #[arg(long)]
    tool_dir: Option<PathBuf>,

    /// Display type passed to dispread as -y<type>
    #[arg(long, default_value = "l")]
    display_type: String,

    /// Base name for the calibration files (prompted if omitted)
    #[arg(long)]
    base_name: Option<String>,

    /// Display number as listed by dispwin (prompted if omitted)
    #[arg(long)]
    display: Option<u32>,

    #[command(flatten)]
    counts: CountArgs,
}

#[derive(Args, Debug, Clone, Default)]
struct CountArgs {
    /// Grayscale patches, 0 to skip
    #[arg(long, requires = "color")]
    gray: Option<u32>,

    /// Single-channel color patches per channel, 0 to skip
    #[arg(long, requires = "gray")]
    color: Option<u32>,
}

impl CountArgs {
    fn patch_counts(&self) -> Option<PatchCounts> {
        Some(PatchCounts {
            grayscale: self.gray?,
            color: self.color?,
        })
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the full measurement and fit (default)
    Measure(MeasureArgs),

    /// Fit an existing measurement file; outputs are written next to it
    Analyze {
        /// Measurement file produced by dispread
        ti3: PathBuf,

        #[command(flatten)]
        counts: CountArgs,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init(&cli.output.log_level);

    let result = match cli.command {
        Some(Command::Analyze { ti3, counts }) => analyze(ti3, &counts, &cli.output),
        Some(Command::Measure(args)) => measure(args, &cli.output),
        None => measure(cli.measure, &cli.output),
    };

    match result {
        Ok(report) => {
            summarize(&report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Calibration failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn measure(args: MeasureArgs, output: &OutputArgs) -> Result<CalibrationReport> {
    info!("Starting display gamma calibration");

    let config = CalibrationConfig::builder()
        .output_root(args.output_root)
        .tool_dir(args.tool_dir)
        .display_type(args.display_type)
        .table_precision(output.precision)
        .plot(!output.no_plot)
        .build();

    let params = PresetSource::new(TerminalSource::stdio())
        .with_base_name(args.base_name)
        .with_display(args.display)
        .with_patch_counts(args.counts.patch_counts());

    let mut pipeline = CalibrationPipeline::new(params, config);
    Ok(pipeline.run()?)
}

fn analyze(ti3: PathBuf, counts: &CountArgs, output: &OutputArgs) -> Result<CalibrationReport> {
    let Some(counts) = counts.patch_counts() else {
        bail!("analyze needs --gray and --color to know which patch families were measured");
    };
    let counts = PatchCounts::new(counts.grayscale, counts.color)?;
    let layout = RunLayout::from_measurement_file(&ti3)
        .with_context(|| format!("{} is not a usable measurement file name", ti3.display()))?;

    info!(file = %ti3.display(), "Analyzing existing measurement");

    let config = CalibrationConfig::builder()
        .table_precision(output.precision)
        .plot(!output.no_plot)
        .build();
    let pipeline = CalibrationPipeline::new(PresetSource::new(TerminalSource::stdio()), config);
    Ok(pipeline.analyze(&layout, counts.selection())?)
}

fn summarize(report: &CalibrationReport) {
    info!(run = report.layout.name(), dir = %report.layout.dir().display(), "Calibration complete");
    for path in [&report.rgb_table, &report.gray_table, &report.plot].into_iter().flatten() {
        info!("  {}", path.display());
    }
}
