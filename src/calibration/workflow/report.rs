use std::path::PathBuf;

use crate::calibration::gamma::ChannelGammas;
use crate::calibration::workflow::layout::RunLayout;
use crate::calibration::workflow::timing::StageTimings;

/// What a finished run produced
#[derive(Debug, Clone)]
pub struct CalibrationReport {
    pub layout: RunLayout,
    pub gammas: ChannelGammas,
    pub rgb_table: Option<PathBuf>,
    pub gray_table: Option<PathBuf>,
    pub plot: Option<PathBuf>,
    pub timings: StageTimings,
}
