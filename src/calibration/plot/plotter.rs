use std::path::Path;
use crate::calibration::common::error::Result;
use crate::calibration::gamma::ChannelGammas;
use crate::calibration::measurement::ChannelMeasurements;

pub trait GammaPlotter {
    /// Draws measured points and fitted curves for every channel with a fit.
    fn plot(&self, measurements: &ChannelMeasurements, gammas: &ChannelGammas, path: &Path) -> Result<()>;
}
