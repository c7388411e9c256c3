use crate::math::{axis_range, Aabb, Axis, Point3};

use super::VertexCloud;

/// A slab of the cloud along the heel-to-toe (`Z`) axis.
///
/// Positions are fractions of the whole cloud's `Z` extent, measured from
/// its minimum (the heel).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LongitudinalBand {
    /// Closed window `[min_z + start * L, min_z + end * L]`.
    Window { start: f64, end: f64 },
    /// Open band `|z - (min_z + center * L)| < half_width * L`.
    Around { center: f64, half_width: f64 },
}

impl LongitudinalBand {
    /// Returns `true` if `z` falls in the band for a cloud starting at
    /// `min_z` with extent `length`.
    #[must_use]
    pub fn contains(&self, z: f64, min_z: f64, length: f64) -> bool {
        match *self {
            Self::Window { start, end } => {
                z >= min_z + length * start && z <= min_z + length * end
            }
            Self::Around { center, half_width } => {
                (z - (min_z + length * center)).abs() < length * half_width
            }
        }
    }

    /// Returns the representative `Z` of the band: the window midpoint or
    /// the band center.
    #[must_use]
    pub fn anchor_z(&self, min_z: f64, length: f64) -> f64 {
        match *self {
            Self::Window { start, end } => min_z + length * (start + end) * 0.5,
            Self::Around { center, .. } => min_z + length * center,
        }
    }
}

/// Returns the vertical cutoff `min_y + fraction * (max_y - min_y)`.
#[must_use]
pub fn sole_threshold(bounds: &Aabb, fraction: f64) -> f64 {
    bounds.min_on(Axis::Y) + bounds.extent(Axis::Y) * fraction
}

/// A percentile-based spatial filter over a [`VertexCloud`].
///
/// All thresholds are resolved against the bounding box of the cloud being
/// filtered, never against a previously selected subset.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RegionQuery {
    band: Option<LongitudinalBand>,
    sole_fraction: Option<f64>,
}

impl RegionQuery {
    /// Selects points at or below the sole threshold for `fraction`.
    #[must_use]
    pub fn sole(fraction: f64) -> Self {
        Self {
            band: None,
            sole_fraction: Some(fraction),
        }
    }

    /// Selects points inside a longitudinal band, at any height.
    #[must_use]
    pub fn band(band: LongitudinalBand) -> Self {
        Self {
            band: Some(band),
            sole_fraction: None,
        }
    }

    /// Additionally restricts the selection to the sole threshold for
    /// `fraction`.
    #[must_use]
    pub fn within_sole(mut self, fraction: f64) -> Self {
        self.sole_fraction = Some(fraction);
        self
    }

    /// Applies the filter, preserving cloud order.
    #[must_use]
    pub fn select<'a>(&self, cloud: &'a VertexCloud) -> Region<'a> {
        let bounds = cloud.bounds();
        let min_z = bounds.min_on(Axis::Z);
        let length = bounds.extent(Axis::Z);
        let max_y = self.sole_fraction.map(|f| sole_threshold(bounds, f));

        let points = cloud
            .vertices()
            .iter()
            .filter(|p| max_y.is_none_or(|t| p.y <= t))
            .filter(|p| {
                self.band
                    .is_none_or(|band| band.contains(p.z, min_z, length))
            })
            .collect();

        Region { points }
    }
}

/// A filtered subset of a [`VertexCloud`]. May be empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Region<'a> {
    points: Vec<&'a Point3>,
}

impl Region<'_> {
    /// Returns the selected points in cloud order.
    #[must_use]
    pub fn points(&self) -> &[&Point3] {
        &self.points
    }

    /// Returns the number of selected points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the filter matched nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the `(min, max)` range along `axis`, or `None` if empty.
    #[must_use]
    pub fn range(&self, axis: Axis) -> Option<(f64, f64)> {
        axis_range(self.points.iter().copied(), axis)
    }

    /// Returns `max - min` along `axis`, or `None` if empty.
    #[must_use]
    pub fn extent(&self, axis: Axis) -> Option<f64> {
        self.range(axis).map(|(lo, hi)| hi - lo)
    }

    /// Returns the maximum coordinate along `axis`, or `None` if empty.
    #[must_use]
    pub fn max_on(&self, axis: Axis) -> Option<f64> {
        self.range(axis).map(|(_, hi)| hi)
    }
}
