//! Gamma estimation and correction table module

mod estimator;
mod table;
mod writer;
mod text_table_writer;
pub mod types;


pub use estimator::estimate_gamma;
pub use table::{LookupTable, TABLE_LEVELS, input_levels};
pub use writer::TableWriter;
pub use text_table_writer::TextTableWriter;
pub use types::{ChannelGammas, GammaFit};
