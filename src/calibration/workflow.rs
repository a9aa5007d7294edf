//! Calibration workflow module
//!
//! This module orchestrates a complete run: parameter collection, the
//! external toolkit stages, and the analysis of the resulting measurements.

mod config;
mod layout;
mod pipeline;
mod report;
mod timing;


pub use config::{CalibrationConfig, CalibrationConfigBuilder};
pub use layout::RunLayout;
pub use pipeline::CalibrationPipeline;
pub use report::CalibrationReport;
pub use timing::{StageTimings, StageTiming, Timer};
