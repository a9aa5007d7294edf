use std::path::Path;
use crate::calibration::common::error::Result;
use crate::calibration::toolkit::types::{CommandOutput, ToolInvocation};

pub trait CommandRunner {
    /// Runs `invocation` inside `working_dir` and waits for it to exit.
    ///
    /// A nonzero exit is reported through [`CommandOutput::status`], not as an
    /// error; only a failure to start the program is an `Err`.
    fn run(&self, invocation: &ToolInvocation, working_dir: &Path) -> Result<CommandOutput>;
}
