//! Reader for the CGATS `.ti3` files written by the measurement tool.
//!
//! Only the parts of the format needed for a gamma fit are interpreted: the
//! column names between `BEGIN_DATA_FORMAT`/`END_DATA_FORMAT` and the rows
//! between `BEGIN_DATA`/`END_DATA`. The marker strings and column names must
//! match the tool's output exactly.

use tracing::debug;

use crate::calibration::common::error::{CalibrationError, Result};
use crate::calibration::measurement::reader::MeasurementReader;
use crate::calibration::measurement::types::{Channel, ChannelMeasurements, PatchSelection};

const BEGIN_DATA_FORMAT: &str = "BEGIN_DATA_FORMAT";
const END_DATA_FORMAT: &str = "END_DATA_FORMAT";
const BEGIN_DATA: &str = "BEGIN_DATA";
const END_DATA: &str = "END_DATA";

const COLUMN_RED: &str = "RGB_R";
const COLUMN_GREEN: &str = "RGB_G";
const COLUMN_BLUE: &str = "RGB_B";
const COLUMN_LUMINANCE: &str = "XYZ_Y";

/// Device values in the file are percentages.
const DEVICE_SCALE: f64 = 100.0;

pub struct Ti3Reader;

struct ColumnIndices {
    red: usize,
    green: usize,
    blue: usize,
    luminance: usize,
}

impl ColumnIndices {
    fn locate(headers: &[&str]) -> Result<Self> {
        let find = |name: &'static str| {
            headers
                .iter()
                .position(|h| *h == name)
                .ok_or(CalibrationError::MissingColumn(name))
        };
        Ok(Self {
            red: find(COLUMN_RED)?,
            green: find(COLUMN_GREEN)?,
            blue: find(COLUMN_BLUE)?,
            luminance: find(COLUMN_LUMINANCE)?,
        })
    }

    fn required_fields(&self) -> usize {
        self.red.max(self.green).max(self.blue).max(self.luminance) + 1
    }
}

fn find_marker(lines: &[&str], marker: &'static str) -> Result<usize> {
    lines
        .iter()
        .position(|line| *line == marker)
        .ok_or(CalibrationError::MissingMarker(marker))
}

fn parse_field(field: &str, line: usize) -> Result<f64> {
    field.parse::<f64>().map_err(|_| CalibrationError::InvalidValue {
        line,
        value: field.to_string(),
    })
}

/// Decides which bucket a patch with device values `r`, `g`, `b` (0–100)
/// belongs to, returning the channel and the normalized input.
///
/// Equal triples are grayscale, a single nonzero channel is a primary ramp,
/// everything else (and any family that was not requested) is discarded.
pub fn classify_patch(r: f64, g: f64, b: f64, selection: PatchSelection) -> Option<(Channel, f64)> {
    if r == g && g == b && selection.grayscale {
        return Some((Channel::Gray, r / DEVICE_SCALE));
    }
    if !selection.color {
        return None;
    }
    if r > 0.0 && g == 0.0 && b == 0.0 {
        Some((Channel::Red, r / DEVICE_SCALE))
    } else if g > 0.0 && r == 0.0 && b == 0.0 {
        Some((Channel::Green, g / DEVICE_SCALE))
    } else if b > 0.0 && r == 0.0 && g == 0.0 {
        Some((Channel::Blue, b / DEVICE_SCALE))
    } else {
        None
    }
}

impl MeasurementReader for Ti3Reader {
    fn read_measurements(&self, contents: &str, selection: PatchSelection) -> Result<ChannelMeasurements> {
        let lines: Vec<&str> = contents.lines().collect();

        let begin_format = find_marker(&lines, BEGIN_DATA_FORMAT)? + 1;
        let end_format = find_marker(&lines, END_DATA_FORMAT)?;
        let headers: Vec<&str> = lines
            .get(begin_format..end_format)
            .unwrap_or(&[])
            .iter()
            .flat_map(|line| line.split_whitespace())
            .collect();

        let columns = ColumnIndices::locate(&headers)?;
        let required = columns.required_fields();
        debug!(
            "Columns: R={} G={} B={} Y={} ({} headers)",
            columns.red, columns.green, columns.blue, columns.luminance, headers.len()
        );

        let begin_data = find_marker(&lines, BEGIN_DATA)? + 1;
        let end_data = find_marker(&lines, END_DATA)?;

        let mut measurements = ChannelMeasurements::default();
        let mut discarded = 0usize;

        for (offset, line) in lines.get(begin_data..end_data).unwrap_or(&[]).iter().enumerate() {
            let line_number = begin_data + offset + 1;
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() < required {
                continue;
            }

            let r = parse_field(fields[columns.red], line_number)?;
            let g = parse_field(fields[columns.green], line_number)?;
            let b = parse_field(fields[columns.blue], line_number)?;
            let luminance = parse_field(fields[columns.luminance], line_number)?;

            match classify_patch(r, g, b, selection) {
                Some((channel, input)) => measurements.get_mut(channel).push(input, luminance),
                None => discarded += 1,
            }
        }

        debug!(
            red = measurements.red.len(),
            green = measurements.green.len(),
            blue = measurements.blue.len(),
            gray = measurements.gray.len(),
            discarded,
            "Classified measurement rows"
        );

        Ok(measurements)
    }
}

impl Ti3Reader {
    /// Reads and parses a measurement file from disk.
    pub fn read_file<P: AsRef<std::path::Path>>(
        &self,
        path: P,
        selection: PatchSelection,
    ) -> Result<ChannelMeasurements> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            CalibrationError::InputReadError(format!("{}: {}", path.display(), e))
        })?;
        self.read_measurements(&contents, selection)
    }
}
