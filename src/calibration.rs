//! Display gamma calibration module
//!
//! This module drives the external measurement toolkit through a patch run,
//! then fits per-channel gamma exponents from the measured luminance and
//! writes the correction tables.

pub mod common;
pub mod measurement;
pub mod gamma;
pub mod toolkit;
pub mod params;
pub mod plot;
pub mod workflow;

pub use common::{
    CalibrationError,
    Result,
};

pub use measurement::{
    Channel,
    ChannelDataset,
    ChannelMeasurements,
    MeasurementReader,
    MeasurementSample,
    PatchSelection,
    Ti3Reader,
};

pub use gamma::{
    ChannelGammas,
    GammaFit,
    LookupTable,
    TableWriter,
    TextTableWriter,
    estimate_gamma,
};

pub use toolkit::{
    CommandOutput,
    CommandRunner,
    DisplayDevice,
    OutputMode,
    SystemCommandRunner,
    ToolCommands,
    ToolInvocation,
};

pub use params::{
    ParameterSource,
    PatchCounts,
    PresetSource,
    TerminalSource,
};

pub use plot::{
    GammaPlotter,
    PngPlotter,
};

pub use workflow::{
    CalibrationConfig,
    CalibrationConfigBuilder,
    CalibrationPipeline,
    CalibrationReport,
    RunLayout,
    StageTimings,
};
