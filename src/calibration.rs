//! Calibration constants for landmark localization.
//!
//! Numeric measurement and on-screen line placement intentionally use two
//! independent constant sets; they locate similar anatomical regions with
//! different windows and must not be unified.

use crate::cloud::LongitudinalBand;
use crate::error::{CalibrationError, Result};

/// Bands used to compute numeric measurements on the rotation-only cloud.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementBands {
    length_sole: f64,
    width_sole: f64,
    ball: (f64, f64),
    instep: (f64, f64),
}

impl Default for MeasurementBands {
    fn default() -> Self {
        Self {
            length_sole: 0.15,
            width_sole: 0.20,
            ball: (0.60, 0.75),
            instep: (0.30, 0.70),
        }
    }
}

impl MeasurementBands {
    /// Creates a measurement band set.
    ///
    /// `ball` and `instep` are `(start, end)` fractions of foot length.
    ///
    /// # Errors
    ///
    /// Returns an error if any fraction lies outside `[0, 1]` or a window
    /// starts after it ends.
    pub fn new(
        length_sole: f64,
        width_sole: f64,
        ball: (f64, f64),
        instep: (f64, f64),
    ) -> Result<Self> {
        check_fraction("length_sole", length_sole)?;
        check_fraction("width_sole", width_sole)?;
        check_window("ball", ball)?;
        check_window("instep", instep)?;
        Ok(Self {
            length_sole,
            width_sole,
            ball,
            instep,
        })
    }

    /// Sole fraction for the length subset.
    #[must_use]
    pub fn length_sole(&self) -> f64 {
        self.length_sole
    }

    /// Sole fraction for the ball (width) subset.
    #[must_use]
    pub fn width_sole(&self) -> f64 {
        self.width_sole
    }

    /// Longitudinal window of the ball region.
    #[must_use]
    pub fn ball(&self) -> LongitudinalBand {
        LongitudinalBand::Window {
            start: self.ball.0,
            end: self.ball.1,
        }
    }

    /// Longitudinal window of the instep region.
    #[must_use]
    pub fn instep(&self) -> LongitudinalBand {
        LongitudinalBand::Window {
            start: self.instep.0,
            end: self.instep.1,
        }
    }
}

/// Bands and offsets used to place measurement lines on the display cloud.
///
/// Band positions are fractions of foot length; offsets are in display
/// units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayBands {
    sole: f64,
    ball: (f64, f64),
    instep: (f64, f64),
    length_drop: f64,
    width_drop: f64,
    height_lateral_offset: f64,
}

impl Default for DisplayBands {
    fn default() -> Self {
        Self {
            sole: 0.15,
            ball: (0.67, 0.10),
            instep: (0.50, 0.10),
            length_drop: 5.0,
            width_drop: 3.0,
            height_lateral_offset: 15.0,
        }
    }
}

impl DisplayBands {
    /// Creates a display band set with the default line offsets.
    ///
    /// `ball` and `instep` are `(center, half_width)` fractions of foot
    /// length.
    ///
    /// # Errors
    ///
    /// Returns an error if any fraction lies outside `[0, 1]`.
    pub fn new(sole: f64, ball: (f64, f64), instep: (f64, f64)) -> Result<Self> {
        check_fraction("sole", sole)?;
        check_fraction("ball_center", ball.0)?;
        check_fraction("ball_half_width", ball.1)?;
        check_fraction("instep_center", instep.0)?;
        check_fraction("instep_half_width", instep.1)?;
        Ok(Self {
            sole,
            ball,
            instep,
            ..Self::default()
        })
    }

    /// Replaces the line offsets.
    ///
    /// # Errors
    ///
    /// Returns an error if an offset is not finite.
    pub fn with_offsets(
        mut self,
        length_drop: f64,
        width_drop: f64,
        height_lateral_offset: f64,
    ) -> Result<Self> {
        for (name, value) in [
            ("length_drop", length_drop),
            ("width_drop", width_drop),
            ("height_lateral_offset", height_lateral_offset),
        ] {
            if !value.is_finite() {
                return Err(CalibrationError::InvalidBand(format!(
                    "{name} = {value} is not finite"
                ))
                .into());
            }
        }
        self.length_drop = length_drop;
        self.width_drop = width_drop;
        self.height_lateral_offset = height_lateral_offset;
        Ok(self)
    }

    /// Sole fraction shared by the length and width lines.
    #[must_use]
    pub fn sole(&self) -> f64 {
        self.sole
    }

    /// Distance the length line sits below the lowest point.
    #[must_use]
    pub fn length_drop(&self) -> f64 {
        self.length_drop
    }

    /// Distance the width line sits below the lowest point.
    #[must_use]
    pub fn width_drop(&self) -> f64 {
        self.width_drop
    }

    /// Lateral offset of the height line from the cloud's center.
    #[must_use]
    pub fn height_lateral_offset(&self) -> f64 {
        self.height_lateral_offset
    }

    /// Open band around the ball center.
    #[must_use]
    pub fn ball(&self) -> LongitudinalBand {
        LongitudinalBand::Around {
            center: self.ball.0,
            half_width: self.ball.1,
        }
    }

    /// Open band around the instep center.
    #[must_use]
    pub fn instep(&self) -> LongitudinalBand {
        LongitudinalBand::Around {
            center: self.instep.0,
            half_width: self.instep.1,
        }
    }
}

/// A complete, swappable scan-quality profile.
///
/// Both halves are validated when they are built, so a profile is always
/// usable as is.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CalibrationProfile {
    measurement: MeasurementBands,
    display: DisplayBands,
}

impl CalibrationProfile {
    /// Creates a profile from both band sets.
    #[must_use]
    pub fn new(measurement: MeasurementBands, display: DisplayBands) -> Self {
        Self {
            measurement,
            display,
        }
    }

    /// Bands for numeric measurement.
    #[must_use]
    pub fn measurement(&self) -> MeasurementBands {
        self.measurement
    }

    /// Bands for display line placement.
    #[must_use]
    pub fn display(&self) -> DisplayBands {
        self.display
    }
}

fn check_fraction(name: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(CalibrationError::InvalidBand(format!("{name} = {value} is outside [0, 1]")).into())
    }
}

fn check_window(name: &str, (start, end): (f64, f64)) -> Result<()> {
    check_fraction(name, start)?;
    check_fraction(name, end)?;
    if start > end {
        return Err(CalibrationError::InvalidBand(format!(
            "{name} window starts at {start} after it ends at {end}"
        ))
        .into());
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn measurement_defaults_are_pinned() {
        let bands = MeasurementBands::default();
        assert_eq!(bands.length_sole(), 0.15);
        assert_eq!(bands.width_sole(), 0.20);
        assert_eq!(
            bands.ball(),
            LongitudinalBand::Window {
                start: 0.60,
                end: 0.75
            }
        );
        assert_eq!(
            bands.instep(),
            LongitudinalBand::Window {
                start: 0.30,
                end: 0.70
            }
        );
    }

    #[test]
    fn display_defaults_are_pinned() {
        let bands = DisplayBands::default();
        assert_eq!(bands.sole(), 0.15);
        assert_eq!(
            bands.ball(),
            LongitudinalBand::Around {
                center: 0.67,
                half_width: 0.10
            }
        );
        assert_eq!(
            bands.instep(),
            LongitudinalBand::Around {
                center: 0.50,
                half_width: 0.10
            }
        );
        assert_eq!(bands.length_drop(), 5.0);
        assert_eq!(bands.width_drop(), 3.0);
        assert_eq!(bands.height_lateral_offset(), 15.0);
    }

    #[test]
    fn default_profile_halves() {
        let profile = CalibrationProfile::new(MeasurementBands::default(), DisplayBands::default());
        assert_eq!(profile, CalibrationProfile::default());
        assert_eq!(profile.measurement(), MeasurementBands::default());
        assert_eq!(profile.display(), DisplayBands::default());
    }

    #[test]
    fn inverted_window_is_rejected() {
        assert!(MeasurementBands::new(0.15, 0.2, (0.75, 0.6), (0.3, 0.7)).is_err());
    }

    #[test]
    fn out_of_range_fraction_is_rejected() {
        assert!(MeasurementBands::new(1.5, 0.2, (0.6, 0.75), (0.3, 0.7)).is_err());
        assert!(MeasurementBands::new(f64::NAN, 0.2, (0.6, 0.75), (0.3, 0.7)).is_err());
    }

    #[test]
    fn invalid_display_fraction_is_rejected() {
        assert!(DisplayBands::new(f64::NAN, (0.67, 0.1), (0.5, 0.1)).is_err());
        assert!(DisplayBands::new(0.15, (0.67, -0.1), (0.5, 0.1)).is_err());
        assert!(DisplayBands::new(0.15, (0.67, 0.1), (1.2, 0.1)).is_err());
    }

    #[test]
    fn custom_display_bands_keep_default_offsets() {
        let bands = DisplayBands::new(0.1, (0.7, 0.05), (0.45, 0.2)).unwrap();
        assert_eq!(bands.sole(), 0.1);
        assert_eq!(
            bands.ball(),
            LongitudinalBand::Around {
                center: 0.7,
                half_width: 0.05
            }
        );
        assert_eq!(bands.length_drop(), 5.0);
    }

    #[test]
    fn non_finite_display_offset_is_rejected() {
        let result = DisplayBands::default().with_offsets(5.0, f64::INFINITY, 15.0);
        assert!(result.is_err());
        let bands = DisplayBands::default().with_offsets(1.0, 2.0, -4.0).unwrap();
        assert_eq!(bands.height_lateral_offset(), -4.0);
    }
}
