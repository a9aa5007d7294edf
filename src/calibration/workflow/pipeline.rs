use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::calibration::{
    common::error::{CalibrationError, Result},
    gamma::{ChannelGammas, LookupTable, TableWriter, TextTableWriter},
    measurement::{Channel, PatchSelection, Ti3Reader},
    params::ParameterSource,
    plot::{GammaPlotter, PngPlotter},
    toolkit::{CommandOutput, CommandRunner, DisplayDevice, SystemCommandRunner, ToolCommands, ToolInvocation, parse_display_list},
    workflow::{CalibrationConfig, CalibrationReport, RunLayout, StageTimings, Timer},
};

pub struct CalibrationPipeline<P: ParameterSource, C: CommandRunner, W: TableWriter, G: GammaPlotter> {
    params: P,
    runner: C,
    writer: W,
    plotter: G,
    commands: ToolCommands,
    config: CalibrationConfig,
}

impl<P: ParameterSource> CalibrationPipeline<P, SystemCommandRunner, TextTableWriter, PngPlotter> {
    pub fn new(params: P, config: CalibrationConfig) -> Self {
        let writer = TextTableWriter::new(config.table_precision);
        let (width, height) = config.plot_size;
        Self::with_custom(params, SystemCommandRunner, writer, PngPlotter::new(width, height), config)
    }
}

impl<P: ParameterSource, C: CommandRunner, W: TableWriter, G: GammaPlotter> CalibrationPipeline<P, C, W, G> {
    pub fn with_custom(params: P, runner: C, writer: W, plotter: G, config: CalibrationConfig) -> Self {
        Self {
            params,
            runner,
            writer,
            plotter,
            commands: ToolCommands::new(config.tool_dir.clone(), config.display_type.clone()),
            config,
        }
    }

    /// Runs every stage: parameters, patch generation, display reset,
    /// measurement and analysis. Any failing stage ends the run.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<CalibrationReport> {
        let mut timings = StageTimings::new();

        std::fs::create_dir_all(&self.config.output_root).map_err(|e| {
            CalibrationError::OutputWriteError(format!("{}: {}", self.config.output_root.display(), e))
        })?;

        let base_name = self.params.base_name()?;

        let timer = Timer::start("list_displays");
        let displays = self.detect_displays()?;
        timings.record(timer);

        let display = self.params.select_display(&displays)?;
        let layout = RunLayout::for_display(&self.config.output_root, &base_name, display);
        std::fs::create_dir_all(layout.dir()).map_err(|e| {
            CalibrationError::OutputWriteError(format!("{}: {}", layout.dir().display(), e))
        })?;
        info!(run = layout.name(), dir = %layout.dir().display(), "Prepared run directory");

        let counts = self.params.patch_counts()?;
        info!(grayscale = counts.grayscale, color = counts.color, "Patch counts");

        let stages = [
            ("generate_patches", self.commands.generate_patches(counts, layout.name())),
            ("reset_display", self.commands.reset_display(display)),
            ("measure_patches", self.commands.measure_patches(display, layout.name())),
        ];
        for (name, invocation) in &stages {
            let timer = Timer::start(*name);
            self.run_checked(invocation, layout.dir())?;
            timings.record(timer);
        }

        let report = self.analyze_with_timings(&layout, counts.selection(), timings)?;
        report.timings.log_summary();
        Ok(report)
    }

    /// Fits gammas from the run's measurement file and writes tables and plot.
    #[instrument(skip(self, layout), fields(run = layout.name()))]
    pub fn analyze(&self, layout: &RunLayout, selection: PatchSelection) -> Result<CalibrationReport> {
        self.analyze_with_timings(layout, selection, StageTimings::new())
    }

    fn analyze_with_timings(
        &self,
        layout: &RunLayout,
        selection: PatchSelection,
        mut timings: StageTimings,
    ) -> Result<CalibrationReport> {
        let timer = Timer::start("parse_measurements");
        let measurements = Ti3Reader.read_file(layout.measurement_path(), selection)?;
        timings.record(timer);

        let timer = Timer::start("fit_gamma");
        let gammas = ChannelGammas::from_measurements(&measurements);
        timings.record(timer);
        log_gammas(&gammas, selection);

        let timer = Timer::start("write_tables");
        let rgb_table = match LookupTable::rgb_for(&gammas) {
            Some(table) => Some(self.write_table_file(&table, layout.rgb_table_path(), "RGB")?),
            None => None,
        };
        let gray_table = match LookupTable::gray_for(&gammas) {
            Some(table) => Some(self.write_table_file(&table, layout.gray_table_path(), "Grayscale")?),
            None => None,
        };
        timings.record(timer);

        let plot = if !self.config.plot {
            None
        } else if !gammas.any_defined() {
            warn!("No channel could be fitted, skipping plot");
            None
        } else {
            let timer = Timer::start("plot");
            let path = layout.plot_path();
            self.plotter.plot(&measurements, &gammas, &path)?;
            timings.record(timer);
            info!("Gamma plot saved to {}", path.display());
            Some(path)
        };

        Ok(CalibrationReport {
            layout: layout.clone(),
            gammas,
            rgb_table,
            gray_table,
            plot,
            timings,
        })
    }

    fn detect_displays(&self) -> Result<Vec<DisplayDevice>> {
        let invocation = self.commands.list_displays();
        info!("=== {} ===", invocation.description);
        info!("Running command: {}", invocation);

        // The usage screen exits nonzero, only the listing matters.
        let output = self.runner.run(&invocation, &self.config.output_root)?;
        let displays = parse_display_list(&output.combined());
        if displays.is_empty() {
            return Err(CalibrationError::NoDisplays);
        }
        for device in &displays {
            debug!("Found {}", device);
        }
        Ok(displays)
    }

    fn run_checked(&self, invocation: &ToolInvocation, working_dir: &Path) -> Result<CommandOutput> {
        info!("=== {} ===", invocation.description);
        info!("Running command: {}", invocation);

        let output = self.runner.run(invocation, working_dir)?;
        if !output.success() {
            let stderr = output.stderr.trim();
            let detail = if stderr.is_empty() {
                output.status_description()
            } else {
                format!("{}: {}", output.status_description(), stderr)
            };
            return Err(CalibrationError::CommandFailed {
                command: invocation.to_string(),
                detail,
            });
        }
        Ok(output)
    }

    fn write_table_file(&self, table: &LookupTable, path: PathBuf, label: &str) -> Result<PathBuf> {
        let file = File::create(&path).map_err(|e| {
            CalibrationError::OutputWriteError(format!("{}: {}", path.display(), e))
        })?;
        let mut output = BufWriter::new(file);
        self.writer.write_table(table, &mut output)?;
        output.flush()?;

        info!("{} gamma table saved to {}", label, path.display());
        Ok(path)
    }
}

fn log_gammas(gammas: &ChannelGammas, selection: PatchSelection) {
    for channel in Channel::ALL {
        let requested = match channel {
            Channel::Gray => selection.grayscale,
            _ => selection.color,
        };
        match gammas.get(channel) {
            Some(fit) => {
                match channel {
                    Channel::Gray => info!("Grayscale gamma: {:.4}", fit.gamma),
                    _ => info!("{} channel gamma: {:.4}", channel, fit.gamma),
                }
                debug!(
                    %channel,
                    intercept = fit.intercept,
                    r_squared = fit.r_squared,
                    samples = fit.samples_used,
                    "Fit diagnostics"
                );
            }
            None if requested => warn!("{}: not enough valid samples for a gamma fit", channel),
            None => {}
        }
    }
}
