//! Diagnostic plot module

mod plotter;
mod png_plotter;


pub use plotter::GammaPlotter;
pub use png_plotter::PngPlotter;
