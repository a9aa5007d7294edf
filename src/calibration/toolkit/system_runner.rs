use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::calibration::common::error::{CalibrationError, Result};
use crate::calibration::toolkit::runner::CommandRunner;
use crate::calibration::toolkit::types::{CommandOutput, OutputMode, ToolInvocation};

/// Runs invocations as real child processes.
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, invocation: &ToolInvocation, working_dir: &Path) -> Result<CommandOutput> {
        debug!(
            cwd = %working_dir.display(),
            mode = ?invocation.mode,
            "Spawning {}",
            invocation
        );

        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args).current_dir(working_dir);

        let spawn_error = |source| CalibrationError::CommandSpawn {
            command: invocation.to_string(),
            source,
        };

        match invocation.mode {
            OutputMode::Inherit => {
                let status = command
                    .stdin(Stdio::inherit())
                    .stdout(Stdio::inherit())
                    .stderr(Stdio::inherit())
                    .status()
                    .map_err(spawn_error)?;
                Ok(CommandOutput {
                    status: status.code(),
                    ..CommandOutput::default()
                })
            }
            OutputMode::Capture => {
                let output = command.stdin(Stdio::null()).output().map_err(spawn_error)?;
                Ok(CommandOutput {
                    status: output.status.code(),
                    stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                    stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                })
            }
        }
    }
}
