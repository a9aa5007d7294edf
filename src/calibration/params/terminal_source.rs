use std::io::{self, BufRead, StdinLock, Stdout, Write};

use tracing::debug;

use crate::calibration::common::error::{CalibrationError, Result};
use crate::calibration::params::source::ParameterSource;
use crate::calibration::params::types::PatchCounts;
use crate::calibration::toolkit::DisplayDevice;

/// Prompts for parameters on a line-oriented terminal.
///
/// Invalid answers are re-asked; end of input is an error.
pub struct TerminalSource<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl TerminalSource<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalSource<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| CalibrationError::InputReadError(e.to_string()))?;
        if read == 0 {
            return Err(CalibrationError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    fn ask_integer(&mut self, prompt: &str) -> Result<Option<i64>> {
        Ok(self.ask(prompt)?.parse().ok())
    }
}

impl<R: BufRead, W: Write> ParameterSource for TerminalSource<R, W> {
    fn base_name(&mut self) -> Result<String> {
        self.ask("Enter a base name for the calibration files (e.g., 'calibration'): ")
    }

    fn select_display(&mut self, displays: &[DisplayDevice]) -> Result<u32> {
        self.say("\nAvailable Display Devices:")?;
        for (index, display) in displays.iter().enumerate() {
            self.say(&format!("{}: {}", index + 1, display))?;
        }

        loop {
            let choice = match self.ask_integer("Select the display device by entering its number: ")? {
                Some(choice) => choice,
                None => {
                    self.say("Invalid input. Please enter a number.")?;
                    continue;
                }
            };

            match usize::try_from(choice).ok().and_then(|c| c.checked_sub(1)).and_then(|i| displays.get(i)) {
                Some(device) => {
                    debug!("Selected {}", device);
                    return Ok(device.number);
                }
                None => self.say("Invalid selection. Please try again.")?,
            }
        }
    }

    fn patch_counts(&mut self) -> Result<PatchCounts> {
        loop {
            let gray = self.ask_integer("Enter the number of grayscale patches (e.g., 64, or 0 to skip): ")?;
            let Some(gray) = gray else {
                self.say("Invalid input. Please enter integers.")?;
                continue;
            };
            let color = self.ask_integer(
                "Enter the number of single-channel color patches per channel (e.g., 64, or 0 to skip): ",
            )?;
            let Some(color) = color else {
                self.say("Invalid input. Please enter integers.")?;
                continue;
            };

            let (Ok(gray), Ok(color)) = (u32::try_from(gray), u32::try_from(color)) else {
                self.say("Please enter non-negative integers.")?;
                continue;
            };

            match PatchCounts::new(gray, color) {
                Ok(counts) => return Ok(counts),
                Err(_) => self.say("At least one of grayscale or color patches must be greater than zero.")?,
            }
        }
    }
}
