use tracing::debug;

use crate::calibration::MeasurementBands;
use crate::cloud::VertexCloud;
use crate::math::Axis;

use super::{InferUnit, LocateLandmarks, UnitConfidence, UnitInference};

/// Length, width and height of a foot, in `unit`.
///
/// All three values are always populated together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FootMeasurement {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub unit: &'static str,
    pub confidence: UnitConfidence,
}

/// Either no measurement yet or a complete one.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum MeasurementState {
    #[default]
    Pending,
    Ready(FootMeasurement),
}

impl MeasurementState {
    /// Returns the measurement if one is available.
    #[must_use]
    pub fn ready(&self) -> Option<&FootMeasurement> {
        match self {
            Self::Pending => None,
            Self::Ready(m) => Some(m),
        }
    }
}

impl From<FootMeasurement> for MeasurementState {
    fn from(m: FootMeasurement) -> Self {
        Self::Ready(m)
    }
}

/// Measures foot length, width and height from a rotation-only cloud.
///
/// When a landmark region is empty the corresponding measurement falls back
/// to the whole cloud's extent on that axis.
pub struct MeasureFoot<'a> {
    cloud: &'a VertexCloud,
    unit: Option<UnitInference>,
    bands: MeasurementBands,
}

impl<'a> MeasureFoot<'a> {
    /// Creates a new `MeasureFoot` operation.
    ///
    /// The unit is inferred from the cloud unless set with
    /// [`with_unit`](Self::with_unit).
    #[must_use]
    pub fn new(cloud: &'a VertexCloud) -> Self {
        Self {
            cloud,
            unit: None,
            bands: MeasurementBands::default(),
        }
    }

    /// Uses a precomputed unit inference.
    #[must_use]
    pub fn with_unit(mut self, unit: UnitInference) -> Self {
        self.unit = Some(unit);
        self
    }

    /// Sets custom measurement bands.
    #[must_use]
    pub fn with_bands(mut self, bands: MeasurementBands) -> Self {
        self.bands = bands;
        self
    }

    /// Executes the measurement.
    #[must_use]
    pub fn execute(&self) -> FootMeasurement {
        let unit = self
            .unit
            .unwrap_or_else(|| InferUnit::new(self.cloud.bounds().max_extent()).execute());
        let landmarks = LocateLandmarks::new(self.cloud)
            .with_bands(self.bands)
            .execute();
        let bounds = self.cloud.bounds();

        let length = landmarks.sole.extent(Axis::Z).unwrap_or_else(|| {
            debug!("sole region empty, using full z extent for length");
            bounds.extent(Axis::Z)
        });

        let width = landmarks.ball.extent(Axis::X).unwrap_or_else(|| {
            debug!("ball region empty, using full x extent for width");
            bounds.extent(Axis::X)
        });

        let height = landmarks.instep.max_on(Axis::Y).map_or_else(
            || {
                debug!("instep region empty, using full y extent for height");
                bounds.extent(Axis::Y)
            },
            |top| top - bounds.min_on(Axis::Y),
        );

        debug!(
            sole = landmarks.sole.len(),
            ball = landmarks.ball.len(),
            instep = landmarks.instep.len(),
            multiplier = unit.multiplier,
            "measured landmark regions"
        );

        FootMeasurement {
            length: length * unit.multiplier,
            width: width * unit.multiplier,
            height: height * unit.multiplier,
            unit: unit.unit_label,
            confidence: unit.confidence,
        }
    }
}
