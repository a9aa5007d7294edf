use tracing::info;

use crate::calibration::common::error::{CalibrationError, Result};
use crate::calibration::params::source::ParameterSource;
use crate::calibration::params::types::PatchCounts;
use crate::calibration::toolkit::DisplayDevice;

/// Answers from values fixed up front, asking `fallback` for the rest.
pub struct PresetSource<S: ParameterSource> {
    base_name: Option<String>,
    display: Option<u32>,
    patch_counts: Option<PatchCounts>,
    fallback: S,
}

impl<S: ParameterSource> PresetSource<S> {
    pub fn new(fallback: S) -> Self {
        Self {
            base_name: None,
            display: None,
            patch_counts: None,
            fallback,
        }
    }

    pub fn with_base_name(mut self, base_name: Option<String>) -> Self {
        self.base_name = base_name;
        self
    }

    pub fn with_display(mut self, display: Option<u32>) -> Self {
        self.display = display;
        self
    }

    pub fn with_patch_counts(mut self, patch_counts: Option<PatchCounts>) -> Self {
        self.patch_counts = patch_counts;
        self
    }
}

impl<S: ParameterSource> ParameterSource for PresetSource<S> {
    fn base_name(&mut self) -> Result<String> {
        match self.base_name.clone() {
            Some(name) => Ok(name),
            None => self.fallback.base_name(),
        }
    }

    fn select_display(&mut self, displays: &[DisplayDevice]) -> Result<u32> {
        let Some(number) = self.display else {
            return self.fallback.select_display(displays);
        };
        let device = displays
            .iter()
            .find(|d| d.number == number)
            .ok_or(CalibrationError::UnknownDisplay(number))?;
        info!("Using preset {}", device);
        Ok(number)
    }

    fn patch_counts(&mut self) -> Result<PatchCounts> {
        match self.patch_counts {
            Some(counts) => PatchCounts::new(counts.grayscale, counts.color),
            None => self.fallback.patch_counts(),
        }
    }
}
