//! Power-law gamma estimation
//!
//! The display response is modelled as `L = V^γ` with both quantities
//! normalized to [0, 1]. Taking logs gives `ln L = γ ln V`, so γ is the
//! ordinary least-squares slope of `ln L` against `ln V`. No outlier
//! rejection or goodness-of-fit threshold is applied.

use crate::calibration::gamma::types::GammaFit;

/// Minimum number of positive samples required for a fit
const MIN_SAMPLES: usize = 2;

/// Estimates the gamma exponent from `(input, luminance)` pairs.
///
/// Luminance is normalized by its maximum, then pairs with a non-positive
/// input or normalized luminance are dropped. Returns `None` when fewer than
/// two pairs survive or all surviving inputs are identical.
pub fn estimate_gamma(pairs: &[(f64, f64)]) -> Option<GammaFit> {
    let max_luminance = pairs
        .iter()
        .map(|&(_, l)| l)
        .fold(f64::NEG_INFINITY, f64::max);

    let log_points: Vec<(f64, f64)> = pairs
        .iter()
        .map(|&(v, l)| (v, l / max_luminance))
        .filter(|&(v, l)| v > 0.0 && l > 0.0 && l.is_finite())
        .map(|(v, l)| (v.ln(), l.ln()))
        .collect();

    if log_points.len() < MIN_SAMPLES {
        return None;
    }

    let n = log_points.len() as f64;
    let mean_x = log_points.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = log_points.iter().map(|p| p.1).sum::<f64>() / n;

    let (mut sxx, mut sxy, mut syy) = (0.0, 0.0, 0.0);
    for &(x, y) in &log_points {
        let dx = x - mean_x;
        let dy = y - mean_y;
        sxx += dx * dx;
        sxy += dx * dy;
        syy += dy * dy;
    }

    if sxx == 0.0 {
        return None;
    }

    let gamma = sxy / sxx;
    let intercept = mean_y - gamma * mean_x;
    // A flat response in log space is fully explained by the slope.
    let r_squared = if syy == 0.0 { 1.0 } else { (sxy * sxy) / (sxx * syy) };

    Some(GammaFit {
        gamma,
        intercept,
        r_squared,
        samples_used: log_points.len(),
    })
}
