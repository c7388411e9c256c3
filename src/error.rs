use thiserror::Error;

/// Top-level error type for the footfit measurement engine.
#[derive(Debug, Error)]
pub enum FootfitError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Measurement(#[from] MeasurementError),

    #[error(transparent)]
    Calibration(#[from] CalibrationError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Errors related to the input point cloud and its transforms.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("point cloud contains no vertices")]
    EmptyCloud,

    #[error("vertex {index} has a non-finite coordinate")]
    NonFiniteVertex { index: usize },

    #[error("point cloud extent is not finite")]
    UnboundedExtent,

    #[error("degenerate transform: {0}")]
    DegenerateTransform(String),
}

/// Errors raised when measurements cannot support a classification.
#[derive(Debug, Error)]
pub enum MeasurementError {
    #[error("{dimension} = {value} cannot be used as a ratio denominator")]
    DegenerateExtent { dimension: &'static str, value: f64 },
}

/// Errors related to calibration profiles.
#[derive(Debug, Error)]
pub enum CalibrationError {
    #[error("invalid calibration band: {0}")]
    InvalidBand(String),
}

/// Errors related to the load/measure session lifecycle.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to decode geometry: {0}")]
    Decode(String),

    #[error("pass was cancelled by a newer load")]
    Cancelled,

    #[error("pass {pass} has been superseded by pass {latest}")]
    StalePass { pass: u64, latest: u64 },

    #[error("cannot apply {event} while {state}")]
    InvalidTransition {
        state: &'static str,
        event: &'static str,
    },
}

/// Convenience type alias for results using [`FootfitError`].
pub type Result<T> = std::result::Result<T, FootfitError>;
