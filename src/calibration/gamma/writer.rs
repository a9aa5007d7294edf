use std::io::Write;
use crate::calibration::common::error::Result;
use crate::calibration::gamma::table::LookupTable;

pub trait TableWriter {
    fn write_table(&self, table: &LookupTable, output: &mut dyn Write) -> Result<()>;
}
