use std::f64::consts::FRAC_PI_2;

use nalgebra::Rotation3;
use tracing::debug;

use crate::cloud::{DecodedGeometry, ModelTransform, VertexCloud};
use crate::error::{GeometryError, Result};
use crate::math::{Vector3, TOLERANCE};

/// Parameters for placing a freshly loaded model in the host scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementParams {
    /// Size, in display units, of the model's largest dimension.
    pub display_size: f64,
}

impl Default for PlacementParams {
    fn default() -> Self {
        Self {
            display_size: 150.0,
        }
    }
}

/// Computes the scene transform for a decoded model.
///
/// The longest bounding-box axis is turned onto `Z`, the rotated box is
/// centered on the origin and the model is scaled uniformly so its largest
/// dimension equals [`PlacementParams::display_size`].
pub struct PlaceModel<'a> {
    geometry: &'a DecodedGeometry,
    params: PlacementParams,
}

impl<'a> PlaceModel<'a> {
    /// Creates a new `PlaceModel` operation with default parameters.
    #[must_use]
    pub fn new(geometry: &'a DecodedGeometry) -> Self {
        Self {
            geometry,
            params: PlacementParams::default(),
        }
    }

    /// Sets custom placement parameters.
    #[must_use]
    pub fn with_params(mut self, params: PlacementParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the placement, returning the model transform.
    ///
    /// # Errors
    ///
    /// Returns an error if the geometry is empty or non-finite, or if every
    /// vertex coincides so no scale can be derived.
    pub fn execute(&self) -> Result<ModelTransform> {
        let raw = VertexCloud::new(self.geometry.positions.clone())?;
        let size = raw.bounds().size();

        let rotation = if size.y > size.x && size.y > size.z {
            Rotation3::from_axis_angle(&Vector3::x_axis(), -FRAC_PI_2)
        } else if size.x > size.y && size.x > size.z {
            Rotation3::from_axis_angle(&Vector3::y_axis(), FRAC_PI_2)
        } else {
            Rotation3::identity()
        };

        let rotated = raw.transformed(&rotation.to_homogeneous())?;
        let max_dim = rotated.bounds().max_extent();
        if max_dim < TOLERANCE {
            return Err(GeometryError::DegenerateTransform(
                "all vertices coincide; cannot derive a display scale".to_owned(),
            )
            .into());
        }

        let scale = self.params.display_size / max_dim;
        let center = rotated.bounds().center().coords;
        debug!(max_dim, scale, "placed model");

        Ok(ModelTransform::from_parts(rotation, scale, -center * scale))
    }
}
