use crate::calibration::MeasurementBands;
use crate::cloud::{Region, RegionQuery, VertexCloud};

/// Regions of the foot located by percentile slicing. Any may be empty.
#[derive(Debug, Clone)]
pub struct Landmarks<'a> {
    /// Floor-contact points, heel to toe.
    pub sole: Region<'a>,
    /// Forefoot points near the metatarsal heads, close to the floor.
    pub ball: Region<'a>,
    /// Midfoot points at any height.
    pub instep: Region<'a>,
}

/// Locates the sole, ball and instep regions of a measurement cloud.
pub struct LocateLandmarks<'a> {
    cloud: &'a VertexCloud,
    bands: MeasurementBands,
}

impl<'a> LocateLandmarks<'a> {
    /// Creates a new `LocateLandmarks` query with default bands.
    #[must_use]
    pub fn new(cloud: &'a VertexCloud) -> Self {
        Self {
            cloud,
            bands: MeasurementBands::default(),
        }
    }

    /// Sets custom measurement bands.
    #[must_use]
    pub fn with_bands(mut self, bands: MeasurementBands) -> Self {
        self.bands = bands;
        self
    }

    /// Executes the query.
    ///
    /// Every band is resolved against the whole cloud's bounds.
    #[must_use]
    pub fn execute(&self) -> Landmarks<'a> {
        let b = &self.bands;
        Landmarks {
            sole: RegionQuery::sole(b.length_sole()).select(self.cloud),
            ball: RegionQuery::band(b.ball())
                .within_sole(b.width_sole())
                .select(self.cloud),
            instep: RegionQuery::band(b.instep()).select(self.cloud),
        }
    }
}
