mod aabb;

pub use aabb::Aabb;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 3x3 matrix.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// 4x4 transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// A coordinate axis of the foot frame.
///
/// `Z` runs heel to toe, `Y` is vertical (sole at the minimum) and `X` is
/// lateral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Returns the coordinate of `point` along this axis.
    #[must_use]
    pub fn of(self, point: &Point3) -> f64 {
        match self {
            Self::X => point.x,
            Self::Y => point.y,
            Self::Z => point.z,
        }
    }
}

/// Returns the `(min, max)` range of `points` along `axis`, or `None` when
/// the iterator is empty.
pub fn axis_range<'a, I>(points: I, axis: Axis) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = &'a Point3>,
{
    points.into_iter().fold(None, |range, p| {
        let v = axis.of(p);
        Some(match range {
            None => (v, v),
            Some((lo, hi)) => (lo.min(v), hi.max(v)),
        })
    })
}

/// Transforms a point by a 4x4 matrix (homogeneous coordinates).
#[must_use]
pub fn transform_point(matrix: &Matrix4, point: &Point3) -> Point3 {
    let v = matrix * nalgebra::Vector4::new(point.x, point.y, point.z, 1.0);
    Point3::new(v.x, v.y, v.z)
}
