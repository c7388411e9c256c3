use nalgebra::Rotation3;

use crate::error::{GeometryError, Result};
use crate::math::{Matrix3, Matrix4, Vector3, TOLERANCE};

/// A host-scene affine transform split into rotation, per-axis scale and
/// translation.
///
/// The composed matrix is `T * R * S`: scale first, then rotate, then
/// translate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelTransform {
    rotation: Rotation3<f64>,
    scale: Vector3,
    translation: Vector3,
}

impl Default for ModelTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl ModelTransform {
    /// The identity transform.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            rotation: Rotation3::identity(),
            scale: Vector3::new(1.0, 1.0, 1.0),
            translation: Vector3::zeros(),
        }
    }

    /// Creates a transform from its parts with a uniform scale.
    #[must_use]
    pub fn from_parts(rotation: Rotation3<f64>, scale: f64, translation: Vector3) -> Self {
        Self {
            rotation,
            scale: Vector3::new(scale, scale, scale),
            translation,
        }
    }

    /// Decomposes a 4x4 affine matrix.
    ///
    /// The per-axis scale is the norm of each linear column; the rotation
    /// is the closest proper rotation to the normalized columns. A
    /// reflection is folded into a negative `X` scale.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix has a non-finite entry or a linear
    /// column of (near) zero length.
    pub fn from_matrix(matrix: &Matrix4) -> Result<Self> {
        if matrix.iter().any(|v| !v.is_finite()) {
            return Err(GeometryError::DegenerateTransform(
                "matrix contains a non-finite entry".to_owned(),
            )
            .into());
        }

        let linear: Matrix3 = matrix.fixed_view::<3, 3>(0, 0).into_owned();
        let translation = Vector3::new(matrix[(0, 3)], matrix[(1, 3)], matrix[(2, 3)]);

        let mut scale = Vector3::zeros();
        let mut columns = linear;
        for i in 0..3 {
            let norm = linear.column(i).norm();
            if norm < TOLERANCE {
                return Err(GeometryError::DegenerateTransform(format!(
                    "linear column {i} has zero length"
                ))
                .into());
            }
            scale[i] = norm;
            columns.set_column(i, &(linear.column(i) / norm));
        }

        if columns.determinant() < 0.0 {
            scale.x = -scale.x;
            let flipped = -columns.column(0).into_owned();
            columns.set_column(0, &flipped);
        }

        Ok(Self {
            rotation: Rotation3::from_matrix(&columns),
            scale,
            translation,
        })
    }

    /// Returns the rotation component.
    #[must_use]
    pub fn rotation(&self) -> &Rotation3<f64> {
        &self.rotation
    }

    /// Returns the per-axis scale.
    #[must_use]
    pub fn scale(&self) -> &Vector3 {
        &self.scale
    }

    /// Returns the translation component.
    #[must_use]
    pub fn translation(&self) -> &Vector3 {
        &self.translation
    }

    /// Returns the rotation alone as a homogeneous matrix.
    #[must_use]
    pub fn rotation_matrix(&self) -> Matrix4 {
        self.rotation.to_homogeneous()
    }

    /// Returns the full `T * R * S` matrix.
    #[must_use]
    pub fn full_matrix(&self) -> Matrix4 {
        Matrix4::new_translation(&self.translation)
            * self.rotation.to_homogeneous()
            * Matrix4::new_nonuniform_scaling(&self.scale)
    }
}
