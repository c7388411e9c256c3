use crate::error::{MeasurementError, Result};
use crate::operations::measure::{FootMeasurement, MeasurementState};

use super::Locale;

/// Length-to-width ratio above which a foot is classified as long.
pub const LONG_FOOT_RATIO: f64 = 2.6;

/// Length-to-width ratio below which a foot is classified as wide.
pub const WIDE_FOOT_RATIO: f64 = 2.2;

/// Height-to-length ratio above which an arch is classified as high.
pub const HIGH_ARCH_RATIO: f64 = 0.25;

/// Height-to-length ratio below which an arch is classified as low.
pub const LOW_ARCH_RATIO: f64 = 0.18;

/// Overall foot shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FootType {
    Long,
    Wide,
    Normal,
    Pending,
}

impl FootType {
    /// Buckets a length-to-width ratio. Boundaries fall into `Normal`.
    #[must_use]
    pub fn from_length_width_ratio(ratio: f64) -> Self {
        if ratio > LONG_FOOT_RATIO {
            Self::Long
        } else if ratio < WIDE_FOOT_RATIO {
            Self::Wide
        } else {
            Self::Normal
        }
    }
}

/// Arch height category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchType {
    High,
    Low,
    Normal,
    Pending,
}

impl ArchType {
    /// Buckets a height-to-length ratio. Boundaries fall into `Normal`.
    #[must_use]
    pub fn from_height_length_ratio(ratio: f64) -> Self {
        if ratio > HIGH_ARCH_RATIO {
            Self::High
        } else if ratio < LOW_ARCH_RATIO {
            Self::Low
        } else {
            Self::Normal
        }
    }
}

/// The ratios that drive classification and recommendations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FootRatios {
    /// `length / width`.
    pub length_width: f64,
    /// `height / length`.
    pub height_length: f64,
}

impl Default for FootRatios {
    /// The fallback pair used when measurements are unavailable.
    fn default() -> Self {
        Self {
            length_width: 2.4,
            height_length: 0.2,
        }
    }
}

impl FootRatios {
    /// Computes both ratios from a measurement.
    ///
    /// # Errors
    ///
    /// Returns an error if length or width is zero, negative or non-finite,
    /// since either would make a ratio meaningless.
    pub fn from_measurement(m: &FootMeasurement) -> Result<Self> {
        for (dimension, value) in [("length", m.length), ("width", m.width)] {
            if !is_usable(value) {
                return Err(MeasurementError::DegenerateExtent { dimension, value }.into());
            }
        }
        Ok(Self {
            length_width: m.length / m.width,
            height_length: m.height / m.length,
        })
    }

    /// Computes ratios for recommendations, substituting the default for
    /// each ratio whose inputs are unavailable.
    #[must_use]
    pub fn or_default(state: &MeasurementState) -> Self {
        let fallback = Self::default();
        let Some(m) = state.ready() else {
            return fallback;
        };
        Self {
            length_width: if is_usable(m.length) && is_usable(m.width) {
                m.length / m.width
            } else {
                fallback.length_width
            },
            height_length: if is_usable(m.height) && is_usable(m.length) {
                m.height / m.length
            } else {
                fallback.height_length
            },
        }
    }
}

/// Result of classifying a foot.
#[derive(Debug, Clone, PartialEq)]
pub struct FootTypeClassification {
    pub foot_type: FootType,
    pub arch_type: ArchType,
    pub description: String,
}

impl FootTypeClassification {
    /// The sentinel returned when measurements are incomplete.
    #[must_use]
    pub fn pending(locale: Locale) -> Self {
        Self {
            foot_type: FootType::Pending,
            arch_type: ArchType::Pending,
            description: locale.description(FootType::Pending).to_owned(),
        }
    }
}

/// Classifies foot shape and arch height from a measurement.
pub struct ClassifyFoot<'a> {
    state: &'a MeasurementState,
    locale: Locale,
}

impl<'a> ClassifyFoot<'a> {
    /// Creates a new `ClassifyFoot` query with English text.
    #[must_use]
    pub fn new(state: &'a MeasurementState) -> Self {
        Self {
            state,
            locale: Locale::default(),
        }
    }

    /// Sets the locale of the description.
    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Executes the classification.
    ///
    /// Returns the pending sentinel if the measurement is pending or any of
    /// length, width and height is zero or non-finite.
    #[must_use]
    pub fn execute(&self) -> FootTypeClassification {
        let Some(m) = self.state.ready() else {
            return FootTypeClassification::pending(self.locale);
        };
        if ![m.length, m.width, m.height].into_iter().all(is_usable) {
            return FootTypeClassification::pending(self.locale);
        }

        let foot_type = FootType::from_length_width_ratio(m.length / m.width);
        let arch_type = ArchType::from_height_length_ratio(m.height / m.length);
        FootTypeClassification {
            foot_type,
            arch_type,
            description: self.locale.description(foot_type).to_owned(),
        }
    }
}

fn is_usable(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
