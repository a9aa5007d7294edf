//! Calibration run configuration types

use std::path::PathBuf;

/// Configuration for a calibration run
#[derive(Debug, Clone)]
pub struct CalibrationConfig {
    /// Directory in which the per-run directory is created
    pub output_root: PathBuf,
    /// Directory holding the toolkit executables; `None` searches `PATH`
    pub tool_dir: Option<PathBuf>,
    /// Measurement tool display type (`l` LCD, `c` CRT, ...)
    pub display_type: String,
    /// Decimal places written to the correction tables
    pub table_precision: usize,
    /// Whether to render the diagnostic plot
    pub plot: bool,
    /// Plot size in pixels
    pub plot_size: (u32, u32),
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from("."),
            tool_dir: None,
            display_type: "l".to_string(),
            table_precision: 6,
            plot: true,
            plot_size: (1024, 768),
        }
    }
}

impl CalibrationConfig {
    pub fn builder() -> CalibrationConfigBuilder {
        CalibrationConfigBuilder::default()
    }
}

/// Builder for CalibrationConfig
#[derive(Default)]
pub struct CalibrationConfigBuilder {
    output_root: Option<PathBuf>,
    tool_dir: Option<Option<PathBuf>>,
    display_type: Option<String>,
    table_precision: Option<usize>,
    plot: Option<bool>,
    plot_size: Option<(u32, u32)>,
}

impl CalibrationConfigBuilder {
    pub fn output_root(mut self, output_root: impl Into<PathBuf>) -> Self {
        self.output_root = Some(output_root.into());
        self
    }

    pub fn tool_dir(mut self, tool_dir: Option<PathBuf>) -> Self {
        self.tool_dir = Some(tool_dir);
        self
    }

    pub fn display_type(mut self, display_type: impl Into<String>) -> Self {
        self.display_type = Some(display_type.into());
        self
    }

    pub fn table_precision(mut self, precision: usize) -> Self {
        self.table_precision = Some(precision);
        self
    }

    pub fn plot(mut self, enable: bool) -> Self {
        self.plot = Some(enable);
        self
    }

    pub fn plot_size(mut self, width: u32, height: u32) -> Self {
        self.plot_size = Some((width, height));
        self
    }

    pub fn build(self) -> CalibrationConfig {
        let default = CalibrationConfig::default();
        CalibrationConfig {
            output_root: self.output_root.unwrap_or(default.output_root),
            tool_dir: self.tool_dir.unwrap_or(default.tool_dir),
            display_type: self.display_type.unwrap_or(default.display_type),
            table_precision: self.table_precision.unwrap_or(default.table_precision),
            plot: self.plot.unwrap_or(default.plot),
            plot_size: self.plot_size.unwrap_or(default.plot_size),
        }
    }
}
