use crate::calibration::common::error::Result;
use crate::calibration::measurement::types::{ChannelMeasurements, PatchSelection};

pub trait MeasurementReader {
    fn read_measurements(&self, contents: &str, selection: PatchSelection) -> Result<ChannelMeasurements>;
}
