use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// `<number> = <description>` lines of the display listing.
static DISPLAY_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\s*=\s*(.+)$").expect("display line pattern is valid")
});

/// A display the toolkit can address with `-d<number>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayDevice {
    pub number: u32,
    pub description: String,
}

impl fmt::Display for DisplayDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Display {}: {}", self.number, self.description)
    }
}

/// Extracts the available displays from the toolkit's usage output.
pub fn parse_display_list(output: &str) -> Vec<DisplayDevice> {
    output
        .lines()
        .filter_map(|line| {
            let captures = DISPLAY_LINE.captures(line.trim())?;
            let number = captures[1].parse().ok()?;
            let description = captures[2].trim_matches('\'').to_string();
            Some(DisplayDevice { number, description })
        })
        .collect()
}
