use tracing::{debug, info};

use crate::calibration::CalibrationProfile;
use crate::cloud::{DecodedGeometry, ModelTransform};
use crate::error::Result;
use crate::report::{FootAnalysis, FootReport};

use super::classify::{ClassifyFoot, FootRatios, Locale, Recommend};
use super::display::BuildMeasurementLines;
use super::extract::ExtractVertices;
use super::measure::{InferUnit, MeasureFoot, MeasurementState};

/// Runs one complete, side-effect-free measurement pass.
///
/// extract -> infer unit -> measure -> classify -> recommend, with display
/// lines built from the fully-transformed view.
pub struct AnalyzeFoot<'a> {
    geometry: &'a DecodedGeometry,
    transform: ModelTransform,
    profile: CalibrationProfile,
    locale: Locale,
}

impl<'a> AnalyzeFoot<'a> {
    /// Creates a new `AnalyzeFoot` operation with the default profile and
    /// English text.
    #[must_use]
    pub fn new(geometry: &'a DecodedGeometry, transform: ModelTransform) -> Self {
        Self {
            geometry,
            transform,
            profile: CalibrationProfile::default(),
            locale: Locale::default(),
        }
    }

    /// Sets a custom calibration profile.
    #[must_use]
    pub fn with_profile(mut self, profile: CalibrationProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Sets the locale of descriptions and recommendations.
    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Executes the pass.
    ///
    /// # Errors
    ///
    /// Returns an error if the geometry is empty or non-finite, or if the
    /// measured length or width is zero.
    pub fn execute(&self) -> Result<FootAnalysis> {
        let views = ExtractVertices::new(self.geometry, self.transform).execute()?;

        let max_dim = views.measurement.bounds().max_extent();
        let unit = InferUnit::new(max_dim).execute();
        debug!(max_dim, multiplier = unit.multiplier, confidence = %unit.confidence, "inferred unit");

        let measurement = MeasureFoot::new(&views.measurement)
            .with_unit(unit)
            .with_bands(self.profile.measurement())
            .execute();
        let ratios = FootRatios::from_measurement(&measurement)?;
        let state = MeasurementState::Ready(measurement);

        let classification = ClassifyFoot::new(&state)
            .with_locale(self.locale)
            .execute();
        let recommendations = Recommend::new(FootRatios::or_default(&state))
            .with_locale(self.locale)
            .execute();
        let lines = BuildMeasurementLines::new(&views.display)
            .with_bands(self.profile.display())
            .execute();

        info!(
            length = measurement.length,
            width = measurement.width,
            height = measurement.height,
            foot_type = ?classification.foot_type,
            arch_type = ?classification.arch_type,
            lines = lines.len(),
            "measurement complete"
        );

        Ok(FootAnalysis {
            report: FootReport {
                length: measurement.length,
                width: measurement.width,
                height: measurement.height,
                unit: measurement.unit,
                confidence: measurement.confidence,
                foot_type: classification.foot_type,
                arch_type: classification.arch_type,
                description: classification.description,
                recommendations,
                length_width_ratio: ratios.length_width,
                height_length_ratio: ratios.height_length,
            },
            lines,
        })
    }
}
