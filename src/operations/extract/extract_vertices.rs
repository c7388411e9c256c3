use tracing::debug;

use crate::cloud::{DecodedGeometry, ModelTransform, VertexCloud};
use crate::error::Result;

/// The two views of one decoded cloud used by a measurement pass.
#[derive(Debug, Clone)]
pub struct ExtractedViews {
    /// Rotation only. Scale-independent, used for numeric measurement.
    pub measurement: VertexCloud,
    /// Rotation, scale and translation. Used for on-screen line placement.
    pub display: VertexCloud,
}

/// Produces the rotation-only and fully-transformed views of a decoded
/// cloud.
pub struct ExtractVertices<'a> {
    geometry: &'a DecodedGeometry,
    transform: ModelTransform,
}

impl<'a> ExtractVertices<'a> {
    /// Creates a new `ExtractVertices` operation.
    #[must_use]
    pub fn new(geometry: &'a DecodedGeometry, transform: ModelTransform) -> Self {
        Self {
            geometry,
            transform,
        }
    }

    /// Executes the extraction.
    ///
    /// Both views keep the decoder's vertex order.
    ///
    /// # Errors
    ///
    /// Returns an error if the geometry has no vertices or contains a
    /// non-finite coordinate.
    pub fn execute(&self) -> Result<ExtractedViews> {
        let source = VertexCloud::new(self.geometry.positions.clone())?;
        let measurement = source.transformed(&self.transform.rotation_matrix())?;
        let display = source.transformed(&self.transform.full_matrix())?;
        debug!(vertices = source.len(), "extracted measurement and display views");
        Ok(ExtractedViews {
            measurement,
            display,
        })
    }
}
