use std::io::Write;
use tracing::debug;
use crate::calibration::common::error::Result;
use crate::calibration::gamma::table::LookupTable;
use crate::calibration::gamma::writer::TableWriter;

/// Writes tables as space-separated fixed-point text, one row per line.
pub struct TextTableWriter {
    precision: usize,
}

impl TextTableWriter {
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }
}

impl Default for TextTableWriter {
    fn default() -> Self {
        Self::new(6)
    }
}

impl TableWriter for TextTableWriter {
    fn write_table(&self, table: &LookupTable, output: &mut dyn Write) -> Result<()> {
        debug!("Writing {} table rows at precision {}", table.len(), self.precision);

        let mut buffer = String::with_capacity(table.len() * (self.precision + 3) * 3);
        let precision = self.precision;
        for [a, b, c] in table.rows() {
            buffer.push_str(&format!("{a:.precision$} {b:.precision$} {c:.precision$}\n"));
        }

        output.write_all(buffer.as_bytes())?;
        Ok(())
    }
}
