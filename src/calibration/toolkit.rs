//! External toolkit module
//!
//! Patch generation, display control and measurement are delegated to the
//! calibration toolkit's command-line programs. This module describes those
//! invocations and runs them behind the [`CommandRunner`] seam.

mod runner;
mod system_runner;
mod commands;
mod displays;
pub mod types;

#[cfg(test)]
mod tests;

pub use runner::CommandRunner;
pub use system_runner::SystemCommandRunner;
pub use commands::ToolCommands;
pub use displays::{DisplayDevice, parse_display_list};
pub use types::{CommandOutput, OutputMode, ToolInvocation};
