//! Command invocation types

use std::fmt;
use std::path::PathBuf;

/// How a child process is attached to the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Child shares stdin/stdout/stderr (needed by the interactive measurement tool)
    Inherit,
    /// stdout and stderr are captured into the [`CommandOutput`]
    Capture,
}

/// One external program run
#[derive(Debug, Clone, PartialEq)]
pub struct ToolInvocation {
    /// Human readable stage name used in logs
    pub description: &'static str,
    pub program: PathBuf,
    pub args: Vec<String>,
    pub mode: OutputMode,
}

impl ToolInvocation {
    /// Bare program name, without any tool directory.
    pub fn program_name(&self) -> String {
        self.program
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.program.display().to_string())
    }
}

impl fmt::Display for ToolInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Outcome of a finished child process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when terminated by a signal
    pub status: Option<i32>,
    /// Captured stdout, empty in [`OutputMode::Inherit`]
    pub stdout: String,
    /// Captured stderr, empty in [`OutputMode::Inherit`]
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    /// stdout followed by stderr.
    pub fn combined(&self) -> String {
        format!("{}{}", self.stdout, self.stderr)
    }

    pub fn status_description(&self) -> String {
        match self.status {
            Some(code) => format!("exit status {}", code),
            None => "terminated by signal".to_string(),
        }
    }
}
