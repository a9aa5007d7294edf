use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalibrationError {
    #[error("Command `{command}` failed: {detail}")]
    CommandFailed { command: String, detail: String },

    #[error("Failed to launch `{command}`: {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("No display devices found")]
    NoDisplays,

    #[error("Display {0} is not among the detected displays")]
    UnknownDisplay(u32),

    #[error("At least one of grayscale or color patches must be greater than zero")]
    InvalidPatchCounts,

    #[error("Input closed before a value was entered")]
    InputClosed,

    #[error("Failed to read input: {0}")]
    InputReadError(String),

    #[error("Measurement file is missing the `{0}` marker")]
    MissingMarker(&'static str),

    #[error("Measurement file has no `{0}` column")]
    MissingColumn(&'static str),

    #[error("Invalid number `{value}` on measurement line {line}")]
    InvalidValue { line: usize, value: String },

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to render plot: {0}")]
    PlotError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CalibrationError>;
