mod infer_unit;
mod locate_landmarks;
mod measure_foot;

pub use infer_unit::{InferUnit, UnitConfidence, UnitInference};
pub use locate_landmarks::{Landmarks, LocateLandmarks};
pub use measure_foot::{FootMeasurement, MeasureFoot, MeasurementState};
