//! Run parameter module
//!
//! Everything the user decides before a run (file naming, target display,
//! patch counts) comes through a [`ParameterSource`], so the pipeline never
//! touches the terminal directly.

mod source;
mod terminal_source;
mod preset_source;
pub mod types;


pub use source::ParameterSource;
pub use terminal_source::TerminalSource;
pub use preset_source::PresetSource;
pub use types::PatchCounts;
