use crate::calibration::common::error::Result;
use crate::calibration::params::types::PatchCounts;
use crate::calibration::toolkit::DisplayDevice;

pub trait ParameterSource {
    fn base_name(&mut self) -> Result<String>;
    /// Returns the chosen display's device number.
    fn select_display(&mut self, displays: &[DisplayDevice]) -> Result<u32>;
    fn patch_counts(&mut self) -> Result<PatchCounts>;
}
