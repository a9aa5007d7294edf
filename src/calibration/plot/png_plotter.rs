use std::path::Path;

use plotters::prelude::*;
use tracing::debug;

use crate::calibration::common::error::{CalibrationError, Result};
use crate::calibration::gamma::{ChannelGammas, input_levels};
use crate::calibration::measurement::{Channel, ChannelMeasurements};
use crate::calibration::plot::plotter::GammaPlotter;

const DARK_GREEN: RGBColor = RGBColor(0, 128, 0);

/// Renders the fit report as a PNG bitmap.
pub struct PngPlotter {
    width: u32,
    height: u32,
}

impl PngPlotter {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for PngPlotter {
    fn default() -> Self {
        Self::new(1024, 768)
    }
}

fn channel_color(channel: Channel) -> RGBColor {
    match channel {
        Channel::Red => RED,
        Channel::Green => DARK_GREEN,
        Channel::Blue => BLUE,
        Channel::Gray => BLACK,
    }
}

fn data_label(channel: Channel) -> String {
    match channel {
        Channel::Gray => "Grayscale Data".to_string(),
        other => format!("{} Channel Data", other),
    }
}

fn plot_error<E: std::fmt::Display>(e: E) -> CalibrationError {
    CalibrationError::PlotError(e.to_string())
}

impl GammaPlotter for PngPlotter {
    fn plot(&self, measurements: &ChannelMeasurements, gammas: &ChannelGammas, path: &Path) -> Result<()> {
        debug!("Rendering {}x{} plot to {}", self.width, self.height, path.display());

        let root = BitMapBackend::new(path, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE).map_err(plot_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption("Display Gamma Curves", ("sans-serif", 28).into_font().color(&BLACK))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(0.0f64..1.0f64, 0.0f64..1.05f64)
            .map_err(plot_error)?;

        chart
            .configure_mesh()
            .x_desc("Normalized Input (V_in)")
            .y_desc("Normalized Luminance (L)")
            .axis_desc_style(("sans-serif", 18))
            .draw()
            .map_err(plot_error)?;

        for channel in Channel::ALL {
            let Some(fit) = gammas.get(channel) else {
                continue;
            };
            let dataset = measurements.get(channel);
            let Some(peak) = dataset.max_luminance() else {
                continue;
            };
            let color = channel_color(channel);

            chart
                .draw_series(
                    dataset
                        .samples()
                        .iter()
                        .map(|s| Circle::new((s.input, s.luminance / peak), 4, color.filled())),
                )
                .map_err(plot_error)?
                .label(data_label(channel))
                .legend(move |(x, y)| Circle::new((x + 10, y), 4, color.filled()));

            chart
                .draw_series(LineSeries::new(
                    input_levels().map(|v| (v, v.powf(fit.gamma))),
                    color.stroke_width(2),
                ))
                .map_err(plot_error)?
                .label(format!("{} Fit (γ={:.4})", channel, fit.gamma))
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.9))
            .border_style(BLACK)
            .draw()
            .map_err(plot_error)?;

        root.present().map_err(plot_error)?;
        Ok(())
    }
}
