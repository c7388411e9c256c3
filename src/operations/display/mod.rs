mod measurement_lines;

pub use measurement_lines::{BuildMeasurementLines, LineKind, MeasurementLine, Rgb};
