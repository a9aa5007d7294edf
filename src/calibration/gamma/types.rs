//! Gamma fit result types

use crate::calibration::measurement::types::{Channel, ChannelMeasurements};
use crate::calibration::gamma::estimator::estimate_gamma;

/// Result of fitting `L = V^γ` in log space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GammaFit {
    /// Regression slope, the gamma exponent
    pub gamma: f64,
    /// Regression intercept in log space (0 for a perfect power law)
    pub intercept: f64,
    /// Coefficient of determination of the log-log fit
    pub r_squared: f64,
    /// Samples left after the positivity filter
    pub samples_used: usize,
}

/// Per-channel fits, `None` where the channel had too few usable samples
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChannelGammas {
    pub red: Option<GammaFit>,
    pub green: Option<GammaFit>,
    pub blue: Option<GammaFit>,
    pub gray: Option<GammaFit>,
}

impl ChannelGammas {
    pub fn from_measurements(measurements: &ChannelMeasurements) -> Self {
        let fit = |channel: Channel| estimate_gamma(&measurements.get(channel).pairs());
        Self {
            red: fit(Channel::Red),
            green: fit(Channel::Green),
            blue: fit(Channel::Blue),
            gray: fit(Channel::Gray),
        }
    }

    pub fn get(&self, channel: Channel) -> Option<GammaFit> {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
            Channel::Gray => self.gray,
        }
    }

    /// Red, green and blue gammas, only when all three are defined.
    pub fn rgb(&self) -> Option<[f64; 3]> {
        Some([self.red?.gamma, self.green?.gamma, self.blue?.gamma])
    }

    pub fn any_defined(&self) -> bool {
        Channel::ALL.iter().any(|&c| self.get(c).is_some())
    }
}
