//! Measurement data types

use std::fmt;

/// Channel a measured patch contributes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Gray,
}

impl Channel {
    pub const ALL: [Channel; 4] = [Channel::Red, Channel::Green, Channel::Blue, Channel::Gray];

    pub fn name(&self) -> &'static str {
        match self {
            Channel::Red => "Red",
            Channel::Green => "Green",
            Channel::Blue => "Blue",
            Channel::Gray => "Grayscale",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which patch families were requested from the patch generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PatchSelection {
    pub grayscale: bool,
    pub color: bool,
}

/// One measured patch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementSample {
    /// Device input normalized to [0, 1]
    pub input: f64,
    /// Measured luminance (XYZ Y)
    pub luminance: f64,
    pub channel: Channel,
}

/// Ordered samples of a single channel
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelDataset {
    channel: Channel,
    samples: Vec<MeasurementSample>,
}

impl ChannelDataset {
    pub fn new(channel: Channel) -> Self {
        Self {
            channel,
            samples: Vec::new(),
        }
    }

    pub fn push(&mut self, input: f64, luminance: f64) {
        self.samples.push(MeasurementSample {
            input,
            luminance,
            channel: self.channel,
        });
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    pub fn samples(&self) -> &[MeasurementSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// `(input, luminance)` pairs in file order.
    pub fn pairs(&self) -> Vec<(f64, f64)> {
        self.samples.iter().map(|s| (s.input, s.luminance)).collect()
    }

    pub fn max_luminance(&self) -> Option<f64> {
        self.samples
            .iter()
            .map(|s| s.luminance)
            .fold(None, |acc, l| Some(acc.map_or(l, |m: f64| m.max(l))))
    }
}

/// The four channel buckets produced from one measurement file
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelMeasurements {
    pub red: ChannelDataset,
    pub green: ChannelDataset,
    pub blue: ChannelDataset,
    pub gray: ChannelDataset,
}

impl Default for ChannelMeasurements {
    fn default() -> Self {
        Self {
            red: ChannelDataset::new(Channel::Red),
            green: ChannelDataset::new(Channel::Green),
            blue: ChannelDataset::new(Channel::Blue),
            gray: ChannelDataset::new(Channel::Gray),
        }
    }
}

impl ChannelMeasurements {
    pub fn get(&self, channel: Channel) -> &ChannelDataset {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
            Channel::Gray => &self.gray,
        }
    }

    pub fn get_mut(&mut self, channel: Channel) -> &mut ChannelDataset {
        match channel {
            Channel::Red => &mut self.red,
            Channel::Green => &mut self.green,
            Channel::Blue => &mut self.blue,
            Channel::Gray => &mut self.gray,
        }
    }

    pub fn total_samples(&self) -> usize {
        Channel::ALL.iter().map(|&c| self.get(c).len()).sum()
    }
}
