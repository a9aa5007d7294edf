use crate::calibration::gamma::types::ChannelGammas;

/// Number of input levels in a correction table
pub const TABLE_LEVELS: usize = 256;

/// Correction table: one row per input level, three output columns.
///
/// Each output is `V^(1/γ)`, the inverse of the measured response, so a
/// linear source driven through the table comes out linear on the display.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupTable {
    rows: Vec<[f64; 3]>,
}

/// Input levels evenly spaced over [0, 1], both ends included.
pub fn input_levels() -> impl Iterator<Item = f64> {
    (0..TABLE_LEVELS).map(|i| i as f64 / (TABLE_LEVELS - 1) as f64)
}

fn usable(gamma: f64) -> bool {
    gamma != 0.0 && gamma.is_finite()
}

impl LookupTable {
    /// Builds a table with an independent gamma per column.
    ///
    /// Returns `None` if any gamma cannot be inverted.
    pub fn from_rgb(gammas: [f64; 3]) -> Option<Self> {
        if !gammas.iter().all(|&g| usable(g)) {
            return None;
        }
        let rows = input_levels()
            .map(|v| gammas.map(|g| v.powf(1.0 / g)))
            .collect();
        Some(Self { rows })
    }

    /// Builds a table whose three columns share one gamma.
    pub fn from_gray(gamma: f64) -> Option<Self> {
        Self::from_rgb([gamma; 3])
    }

    /// RGB table, skipped unless all three channel fits exist.
    pub fn rgb_for(gammas: &ChannelGammas) -> Option<Self> {
        gammas.rgb().and_then(Self::from_rgb)
    }

    pub fn gray_for(gammas: &ChannelGammas) -> Option<Self> {
        gammas.gray.and_then(|fit| Self::from_gray(fit.gamma))
    }

    pub fn rows(&self) -> &[[f64; 3]] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
