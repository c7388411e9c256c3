mod region;
mod transform;

pub use region::{sole_threshold, LongitudinalBand, Region, RegionQuery};
pub use transform::ModelTransform;

use crate::error::{GeometryError, Result};
use crate::math::{transform_point, Aabb, Axis, Matrix4, Point3};

/// Point positions as produced by an external geometry-format loader.
///
/// Per-vertex colors are carried through for the host but never read by
/// the measurement code.
#[derive(Debug, Clone, Default)]
pub struct DecodedGeometry {
    /// Vertex positions in file order.
    pub positions: Vec<Point3>,
    /// Optional RGB colors, one per position.
    pub colors: Option<Vec<[f32; 3]>>,
}

impl DecodedGeometry {
    /// Creates decoded geometry from positions only.
    #[must_use]
    pub fn from_positions(positions: Vec<Point3>) -> Self {
        Self {
            positions,
            colors: None,
        }
    }
}

/// An immutable, non-empty, ordered cloud of finite vertices.
///
/// Order is preserved through every transform so that index `i` refers to
/// the same scanned sample in every view derived within one pass.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexCloud {
    vertices: Vec<Point3>,
    bounds: Aabb,
}

impl VertexCloud {
    /// Creates a cloud from a list of vertices.
    ///
    /// # Errors
    ///
    /// Returns an error if `vertices` is empty, any coordinate is NaN or
    /// infinite, or the bounding box is too large for its size to be
    /// finite.
    pub fn new(vertices: Vec<Point3>) -> Result<Self> {
        if let Some(index) = vertices
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite() && p.z.is_finite()))
        {
            return Err(GeometryError::NonFiniteVertex { index }.into());
        }
        let bounds = Aabb::from_points(&vertices).ok_or(GeometryError::EmptyCloud)?;
        let size = bounds.size();
        if !(size.x.is_finite() && size.y.is_finite() && size.z.is_finite()) {
            return Err(GeometryError::UnboundedExtent.into());
        }
        Ok(Self { vertices, bounds })
    }

    /// Returns the vertices in their original order.
    #[must_use]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false`; a `VertexCloud` cannot be constructed empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the bounding box of the whole cloud.
    #[must_use]
    pub fn bounds(&self) -> &Aabb {
        &self.bounds
    }

    /// Returns the extent of the whole cloud along `axis`.
    #[must_use]
    pub fn extent(&self, axis: Axis) -> f64 {
        self.bounds.extent(axis)
    }

    /// Returns a new cloud with every vertex mapped through `matrix`.
    ///
    /// # Errors
    ///
    /// Returns an error if the transform produces a non-finite coordinate.
    pub fn transformed(&self, matrix: &Matrix4) -> Result<Self> {
        Self::new(
            self.vertices
                .iter()
                .map(|p| transform_point(matrix, p))
                .collect(),
        )
    }
}
