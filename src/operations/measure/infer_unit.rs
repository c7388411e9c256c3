use std::fmt;

/// How sure the unit inference is about the source scale.
///
/// A qualitative label, not a probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitConfidence {
    HighMeterDetected,
    HighMillimeterDetected,
    MediumMillimeterAssumed,
    MediumCentimeterAssumed,
}

impl UnitConfidence {
    /// Human-readable label used in reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::HighMeterDetected => "High (meter units detected)",
            Self::HighMillimeterDetected => "High (mm units detected)",
            Self::MediumMillimeterAssumed => "Medium (mm units assumed)",
            Self::MediumCentimeterAssumed => "Medium (cm units assumed)",
        }
    }
}

impl fmt::Display for UnitConfidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The inferred source unit of a scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitInference {
    /// Factor converting source coordinates to millimeters.
    pub multiplier: f64,
    /// Unit of the scaled measurements.
    pub unit_label: &'static str,
    pub confidence: UnitConfidence,
}

/// Infers the source unit of a scan from its largest bounding-box
/// dimension.
///
/// Adult foot lengths of roughly 180 to 300 mm anchor the thresholds.
pub struct InferUnit {
    max_dim: f64,
}

impl InferUnit {
    /// Creates a new `InferUnit` query from the rotation-only cloud's
    /// largest extent.
    #[must_use]
    pub fn new(max_dim: f64) -> Self {
        Self { max_dim }
    }

    /// Executes the inference. Total over all inputs.
    #[must_use]
    pub fn execute(&self) -> UnitInference {
        let (multiplier, confidence) = if self.max_dim < 1.0 {
            (1000.0, UnitConfidence::HighMeterDetected)
        } else if self.max_dim > 500.0 {
            (1.0, UnitConfidence::HighMillimeterDetected)
        } else if self.max_dim > 50.0 {
            (1.0, UnitConfidence::MediumMillimeterAssumed)
        } else {
            (10.0, UnitConfidence::MediumCentimeterAssumed)
        };
        UnitInference {
            multiplier,
            unit_label: "mm",
            confidence,
        }
    }
}
