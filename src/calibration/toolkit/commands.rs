use std::path::PathBuf;

use crate::calibration::params::types::PatchCounts;
use crate::calibration::toolkit::types::{OutputMode, ToolInvocation};

const TARGEN: &str = "targen";
const DISPWIN: &str = "dispwin";
const DISPREAD: &str = "dispread";

/// Builds the toolkit command lines used by a calibration run.
#[derive(Debug, Clone)]
pub struct ToolCommands {
    tool_dir: Option<PathBuf>,
    display_type: String,
}

impl ToolCommands {
    pub fn new(tool_dir: Option<PathBuf>, display_type: impl Into<String>) -> Self {
        Self {
            tool_dir,
            display_type: display_type.into(),
        }
    }

    fn program(&self, name: &str) -> PathBuf {
        match &self.tool_dir {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        }
    }

    /// Usage screen of `dispwin`, which ends with the list of displays.
    /// It exits nonzero, so the caller must not check the status.
    pub fn list_displays(&self) -> ToolInvocation {
        ToolInvocation {
            description: "Listing Display Devices",
            program: self.program(DISPWIN),
            args: vec!["-?".to_string()],
            mode: OutputMode::Capture,
        }
    }

    /// Grayscale ramp (`-g`) and per-primary ramps (`-s`), no other patches.
    pub fn generate_patches(&self, counts: PatchCounts, run_name: &str) -> ToolInvocation {
        let mut args = vec!["-v".to_string(), "-d3".to_string(), "-f0".to_string()];
        if counts.grayscale > 0 {
            args.push(format!("-g{}", counts.grayscale));
        }
        if counts.color > 0 {
            args.push(format!("-s{}", counts.color));
        }
        args.push(run_name.to_string());

        ToolInvocation {
            description: "Generating Test Patches",
            program: self.program(TARGEN),
            args,
            mode: OutputMode::Inherit,
        }
    }

    /// Clears any calibration loaded in the display's video LUT.
    pub fn reset_display(&self, display: u32) -> ToolInvocation {
        ToolInvocation {
            description: "Setting Display to Linear State",
            program: self.program(DISPWIN),
            args: vec![format!("-d{}", display), "-c".to_string()],
            mode: OutputMode::Inherit,
        }
    }

    pub fn measure_patches(&self, display: u32, run_name: &str) -> ToolInvocation {
        ToolInvocation {
            description: "Measuring Patches",
            program: self.program(DISPREAD),
            args: vec![
                "-v".to_string(),
                format!("-y{}", self.display_type),
                format!("-d{}", display),
                run_name.to_string(),
            ],
            mode: OutputMode::Inherit,
        }
    }
}
