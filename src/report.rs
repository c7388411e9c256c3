//! The output record consumed by UI and report collaborators.

use crate::operations::classify::{ArchType, FootType, Locale};
use crate::operations::display::MeasurementLine;
use crate::operations::measure::UnitConfidence;

/// Measurements, classification and advice for one scanned foot.
///
/// All lengths are in `unit`.
#[derive(Debug, Clone, PartialEq)]
pub struct FootReport {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub unit: &'static str,
    pub confidence: UnitConfidence,
    pub foot_type: FootType,
    pub arch_type: ArchType,
    pub description: String,
    /// Width-fit advice followed by arch-support advice.
    pub recommendations: Vec<String>,
    pub length_width_ratio: f64,
    pub height_length_ratio: f64,
}

impl FootReport {
    /// Formats the report's headline values for display in `locale`.
    ///
    /// Lengths have one decimal, the length/width ratio two and the
    /// height/length ratio is a percentage with one decimal.
    #[must_use]
    pub fn summary_lines(&self, locale: Locale) -> Vec<String> {
        let [length, width, height, confidence, lw, hl, shape, arch] = locale.summary_headings();
        let unit = self.unit;
        vec![
            format!("{length}: {:.1} {unit}", self.length),
            format!("{width}: {:.1} {unit}", self.width),
            format!("{height}: {:.1} {unit}", self.height),
            format!("{confidence}: {}", locale.confidence_label(self.confidence)),
            format!("{lw}: {:.2}", self.length_width_ratio),
            format!("{hl}: {:.1}%", self.height_length_ratio * 100.0),
            format!("{shape}: {}", locale.foot_type_label(self.foot_type)),
            format!("{arch}: {}", locale.arch_type_label(self.arch_type)),
        ]
    }
}

/// Everything produced by one measurement pass.
#[derive(Debug, Clone, PartialEq)]
pub struct FootAnalysis {
    pub report: FootReport,
    /// Zero to three display lines.
    pub lines: Vec<MeasurementLine>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> FootReport {
        FootReport {
            length: 250.0,
            width: 90.0,
            height: 50.0,
            unit: "mm",
            confidence: UnitConfidence::MediumMillimeterAssumed,
            foot_type: FootType::Long,
            arch_type: ArchType::Normal,
            description: String::new(),
            recommendations: Vec::new(),
            length_width_ratio: 250.0 / 90.0,
            height_length_ratio: 0.2,
        }
    }

    #[test]
    fn summary_formatting() {
        let lines = report().summary_lines(Locale::English);
        assert_eq!(
            lines,
            vec![
                "Foot Length: 250.0 mm",
                "Foot Width: 90.0 mm",
                "Foot Height: 50.0 mm",
                "Confidence: Medium (mm units assumed)",
                "Length/Width Ratio: 2.78",
                "Height/Length Ratio: 20.0%",
                "Foot Shape: Long Foot Type",
                "Arch Type: Normal Arch",
            ]
        );
    }

    #[test]
    fn korean_summary_is_fully_localized() {
        let lines = report().summary_lines(Locale::Korean);
        assert_eq!(
            lines,
            vec![
                "발 길이: 250.0 mm",
                "발 너비: 90.0 mm",
                "발 높이: 50.0 mm",
                "신뢰도: 보통 (mm 단위로 가정)",
                "길이/너비 비율: 2.78",
                "높이/길이 비율: 20.0%",
                "발 형태: 긴 발형",
                "아치 유형: 정상 아치",
            ]
        );
    }
}
