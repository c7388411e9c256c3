use std::fmt;

use crate::calibration::DisplayBands;
use crate::cloud::{RegionQuery, VertexCloud};
use crate::math::{Axis, Point3};

/// A packed `0xRRGGBB` color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u32);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

/// Which measurement a line illustrates.
///
/// Hosts key highlight and blink interactions on this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Length,
    Width,
    Height,
}

impl LineKind {
    /// The color a line of this kind is drawn with.
    #[must_use]
    pub fn color(self) -> Rgb {
        match self {
            Self::Length => Rgb(0x00ff_0000),
            Self::Width => Rgb(0x00ff_ff00),
            Self::Height => Rgb(0x00ff_00ff),
        }
    }

    /// Lowercase tag used by hosts.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Width => "width",
            Self::Height => "height",
        }
    }
}

/// A labeled segment that visually justifies one measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementLine {
    pub kind: LineKind,
    pub start: Point3,
    pub end: Point3,
    pub color: Rgb,
}

impl MeasurementLine {
    fn new(kind: LineKind, start: Point3, end: Point3) -> Self {
        Self {
            kind,
            start,
            end,
            color: kind.color(),
        }
    }
}

/// Builds up to three measurement lines on the display cloud.
///
/// Bands are re-derived from [`DisplayBands`], independently of the bands
/// used for numeric measurement. A line whose band is empty is omitted
/// without affecting the others.
pub struct BuildMeasurementLines<'a> {
    cloud: &'a VertexCloud,
    bands: DisplayBands,
}

impl<'a> BuildMeasurementLines<'a> {
    /// Creates a new `BuildMeasurementLines` operation with default bands.
    #[must_use]
    pub fn new(cloud: &'a VertexCloud) -> Self {
        Self {
            cloud,
            bands: DisplayBands::default(),
        }
    }

    /// Sets custom display bands.
    #[must_use]
    pub fn with_bands(mut self, bands: DisplayBands) -> Self {
        self.bands = bands;
        self
    }

    /// Executes the operation, returning lines in length, width, height
    /// order.
    #[must_use]
    pub fn execute(&self) -> Vec<MeasurementLine> {
        [self.length_line(), self.width_line(), self.height_line()]
            .into_iter()
            .flatten()
            .collect()
    }

    fn center_x(&self) -> f64 {
        self.cloud.bounds().center().x
    }

    fn min_y(&self) -> f64 {
        self.cloud.bounds().min_on(Axis::Y)
    }

    fn length_line(&self) -> Option<MeasurementLine> {
        let sole = RegionQuery::sole(self.bands.sole()).select(self.cloud);
        let (heel_z, toe_z) = sole.range(Axis::Z)?;
        let x = self.center_x();
        let y = self.min_y() - self.bands.length_drop();
        Some(MeasurementLine::new(
            LineKind::Length,
            Point3::new(x, y, heel_z),
            Point3::new(x, y, toe_z),
        ))
    }

    fn width_line(&self) -> Option<MeasurementLine> {
        let band = self.bands.ball();
        let ball = RegionQuery::band(band)
            .within_sole(self.bands.sole())
            .select(self.cloud);
        let (left_x, right_x) = ball.range(Axis::X)?;
        let bounds = self.cloud.bounds();
        let z = band.anchor_z(bounds.min_on(Axis::Z), bounds.extent(Axis::Z));
        let y = self.min_y() - self.bands.width_drop();
        Some(MeasurementLine::new(
            LineKind::Width,
            Point3::new(left_x, y, z),
            Point3::new(right_x, y, z),
        ))
    }

    fn height_line(&self) -> Option<MeasurementLine> {
        let band = self.bands.instep();
        let instep = RegionQuery::band(band).select(self.cloud);
        let top_y = instep.max_on(Axis::Y)?;
        let bounds = self.cloud.bounds();
        let z = band.anchor_z(bounds.min_on(Axis::Z), bounds.extent(Axis::Z));
        let x = self.center_x() + self.bands.height_lateral_offset();
        Some(MeasurementLine::new(
            LineKind::Height,
            Point3::new(x, self.min_y(), z),
            Point3::new(x, top_y, z),
        ))
    }
}
