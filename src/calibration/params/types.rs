//! Run parameter types

use crate::calibration::common::error::{CalibrationError, Result};
use crate::calibration::measurement::types::PatchSelection;

/// Patch counts handed to the patch generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchCounts {
    /// Grayscale ramp steps, 0 to skip
    pub grayscale: u32,
    /// Steps per primary ramp, 0 to skip
    pub color: u32,
}

impl PatchCounts {
    /// Rejects the empty patch set.
    pub fn new(grayscale: u32, color: u32) -> Result<Self> {
        if grayscale == 0 && color == 0 {
            return Err(CalibrationError::InvalidPatchCounts);
        }
        Ok(Self { grayscale, color })
    }

    pub fn selection(&self) -> PatchSelection {
        PatchSelection {
            grayscale: self.grayscale > 0,
            color: self.color > 0,
        }
    }
}
