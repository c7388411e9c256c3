use super::{Axis, Point3, Vector3};

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Computes the bounding box of a set of points.
    ///
    /// Returns `None` if `points` is empty.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point3>,
    {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        let mut aabb = Self {
            min: first,
            max: first,
        };
        for p in iter {
            aabb.expand_with_point(p);
        }
        Some(aabb)
    }

    /// Grows the box to contain `point`.
    pub fn expand_with_point(&mut self, point: &Point3) {
        self.min = self.min.inf(point);
        self.max = self.max.sup(point);
    }

    /// Returns the per-axis size of the box.
    #[must_use]
    pub fn size(&self) -> Vector3 {
        self.max - self.min
    }

    /// Returns the center of the box.
    #[must_use]
    pub fn center(&self) -> Point3 {
        nalgebra::center(&self.min, &self.max)
    }

    /// Returns the largest extent over all three axes.
    #[must_use]
    pub fn max_extent(&self) -> f64 {
        self.size().max()
    }

    /// Returns the minimum coordinate along `axis`.
    #[must_use]
    pub fn min_on(&self, axis: Axis) -> f64 {
        axis.of(&self.min)
    }

    /// Returns the maximum coordinate along `axis`.
    #[must_use]
    pub fn max_on(&self, axis: Axis) -> f64 {
        axis.of(&self.max)
    }

    /// Returns the extent along `axis`.
    #[must_use]
    pub fn extent(&self, axis: Axis) -> f64 {
        self.max_on(axis) - self.min_on(axis)
    }
}
