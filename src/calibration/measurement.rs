//! Measurement file reading module
//!
//! This module turns the measurement tool's `.ti3` output into per-channel
//! sample sequences.

mod reader;
mod ti3_reader;
pub mod types;

#[cfg(test)]
mod tests;

pub use reader::MeasurementReader;
pub use ti3_reader::{Ti3Reader, classify_patch};
pub use types::{Channel, ChannelDataset, ChannelMeasurements, MeasurementSample, PatchSelection};
