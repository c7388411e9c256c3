use super::{ArchType, FootType};
use crate::operations::measure::UnitConfidence;

/// Text table used for labels, descriptions and recommendations.
///
/// Every locale is indexed by the same [`FootType`] and [`ArchType`]
/// buckets, so switching locale never changes which advice is selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    English,
    Korean,
}

impl Locale {
    /// Shoe-width advice for a foot-shape bucket.
    #[must_use]
    pub fn width_advice(self, foot_type: FootType) -> &'static [&'static str] {
        match (self, foot_type) {
            (Self::English, FootType::Long) => &[
                "Choose shoes with spacious toe box for comfort",
                "Consider regular or wide width fittings",
            ],
            (Self::English, FootType::Wide) => &[
                "Look for wide-fitting shoes to accommodate broad forefoot",
                "Avoid shoes with narrow or pointed toe designs",
            ],
            (Self::English, FootType::Normal) => &[
                "Standard width shoes should fit comfortably",
                "Most regular shoe designs will work well",
            ],
            (Self::Korean, FootType::Long) => &[
                "앞코가 여유로운 신발을 선택하세요",
                "좁은 신발보다는 일반 폭 이상을 권장합니다",
            ],
            (Self::Korean, FootType::Wide) => &[
                "와이드 피팅 신발을 고려해보세요",
                "발볼 부위 압박이 적은 디자인이 좋습니다",
            ],
            (Self::Korean, FootType::Normal) => &[
                "표준 폭 신발이 편안하게 맞습니다",
                "대부분의 일반적인 신발 디자인이 잘 맞습니다",
            ],
            (_, FootType::Pending) => &[],
        }
    }

    /// Arch-support advice for an arch bucket.
    #[must_use]
    pub fn arch_advice(self, arch_type: ArchType) -> &'static [&'static str] {
        match (self, arch_type) {
            (Self::English, ArchType::High) => &[
                "Use insoles with strong arch support",
                "Choose shoes with excellent shock absorption",
                "Look for shoes with good lateral stability",
            ],
            (Self::English, ArchType::Low) => &[
                "Consider motion control shoes for overpronation",
                "Look for shoes with firm heel counters",
                "Avoid shoes with excessive cushioning",
            ],
            (Self::English, ArchType::Normal) => &[
                "Regular running or walking shoes are suitable",
                "Choose shoes with moderate cushioning and stability",
            ],
            (Self::Korean, ArchType::High) => &[
                "아치 서포트가 강한 깔창을 사용하세요",
                "충격 흡수 기능이 뛰어난 신발을 선택하세요",
                "측면 안정성이 좋은 신발이 적합합니다",
            ],
            (Self::Korean, ArchType::Low) => &[
                "모션 컨트롤 기능이 있는 신발을 권장합니다",
                "오버프로네이션 방지 기능을 확인하세요",
                "단단한 뒤꿈치 지지대가 있는 신발이 좋습니다",
            ],
            (Self::Korean, ArchType::Normal) => &[
                "일반적인 러닝화나 워킹화가 적합합니다",
                "적당한 쿠셔닝과 안정성을 제공하는 신발을 선택하세요",
            ],
            (_, ArchType::Pending) => &[],
        }
    }

    /// Display name of a foot-shape bucket.
    #[must_use]
    pub fn foot_type_label(self, foot_type: FootType) -> &'static str {
        match (self, foot_type) {
            (Self::English, FootType::Long) => "Long Foot Type",
            (Self::English, FootType::Wide) => "Wide Foot Type",
            (Self::English, FootType::Normal) => "Normal Foot Type",
            (Self::English, FootType::Pending) => "Analysis Pending",
            (Self::Korean, FootType::Long) => "긴 발형",
            (Self::Korean, FootType::Wide) => "넓은 발형",
            (Self::Korean, FootType::Normal) => "표준 발형",
            (Self::Korean, FootType::Pending) => "분석 대기",
        }
    }

    /// Display name of an arch bucket.
    #[must_use]
    pub fn arch_type_label(self, arch_type: ArchType) -> &'static str {
        match (self, arch_type) {
            (Self::English, ArchType::High) => "High Arch",
            (Self::English, ArchType::Low) => "Low Arch / Flat Foot",
            (Self::English, ArchType::Normal) => "Normal Arch",
            (Self::English, ArchType::Pending) => "Analysis Pending",
            (Self::Korean, ArchType::High) => "높은 아치",
            (Self::Korean, ArchType::Low) => "낮은 아치",
            (Self::Korean, ArchType::Normal) => "정상 아치",
            (Self::Korean, ArchType::Pending) => "분석 대기",
        }
    }

    /// One-sentence description of a foot-shape bucket.
    #[must_use]
    pub fn description(self, foot_type: FootType) -> &'static str {
        match (self, foot_type) {
            (Self::English, FootType::Long) => {
                "Elongated foot shape with longer toes and narrow profile"
            }
            (Self::English, FootType::Wide) => "Broader foot shape with wider forefoot area",
            (Self::English, FootType::Normal) => {
                "Well-balanced foot proportions with standard dimensions"
            }
            (Self::English, FootType::Pending) => "Insufficient data for comprehensive analysis",
            (Self::Korean, FootType::Long) => "발가락이 길고 전체적으로 세련된 형태입니다.",
            (Self::Korean, FootType::Wide) => "발볼이 넓고 안정적인 형태입니다.",
            (Self::Korean, FootType::Normal) => "균형잡힌 비례를 가진 표준적인 발 형태입니다.",
            (Self::Korean, FootType::Pending) => "종합 분석을 위한 데이터가 부족합니다.",
        }
    }

    /// Headings of the report summary, in display order: length, width,
    /// height, confidence, length/width ratio, height/length ratio, foot
    /// shape and arch type.
    #[must_use]
    pub fn summary_headings(self) -> [&'static str; 8] {
        match self {
            Self::English => [
                "Foot Length",
                "Foot Width",
                "Foot Height",
                "Confidence",
                "Length/Width Ratio",
                "Height/Length Ratio",
                "Foot Shape",
                "Arch Type",
            ],
            Self::Korean => [
                "발 길이",
                "발 너비",
                "발 높이",
                "신뢰도",
                "길이/너비 비율",
                "높이/길이 비율",
                "발 형태",
                "아치 유형",
            ],
        }
    }

    /// Display text for a unit-inference confidence.
    #[must_use]
    pub fn confidence_label(self, confidence: UnitConfidence) -> &'static str {
        match (self, confidence) {
            (Self::English, _) => confidence.label(),
            (Self::Korean, UnitConfidence::HighMeterDetected) => "높음 (미터 단위 감지)",
            (Self::Korean, UnitConfidence::HighMillimeterDetected) => "높음 (mm 단위 감지)",
            (Self::Korean, UnitConfidence::MediumMillimeterAssumed) => "보통 (mm 단위로 가정)",
            (Self::Korean, UnitConfidence::MediumCentimeterAssumed) => "보통 (cm 단위로 가정)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOCALES: [Locale; 2] = [Locale::English, Locale::Korean];

    #[test]
    fn every_bucket_has_advice_in_every_locale() {
        for locale in LOCALES {
            for foot in [FootType::Long, FootType::Wide, FootType::Normal] {
                assert!(!locale.width_advice(foot).is_empty(), "{locale:?} {foot:?}");
            }
            for arch in [ArchType::High, ArchType::Low, ArchType::Normal] {
                assert!(!locale.arch_advice(arch).is_empty(), "{locale:?} {arch:?}");
            }
        }
    }

    #[test]
    fn locales_have_matching_bucket_sizes() {
        for foot in [FootType::Long, FootType::Wide, FootType::Normal, FootType::Pending] {
            assert_eq!(
                Locale::English.width_advice(foot).len(),
                Locale::Korean.width_advice(foot).len()
            );
        }
        for arch in [ArchType::High, ArchType::Low, ArchType::Normal, ArchType::Pending] {
            assert_eq!(
                Locale::English.arch_advice(arch).len(),
                Locale::Korean.arch_advice(arch).len()
            );
        }
    }

    #[test]
    fn pending_has_no_advice() {
        assert!(Locale::English.width_advice(FootType::Pending).is_empty());
        assert!(Locale::Korean.arch_advice(ArchType::Pending).is_empty());
    }

    #[test]
    fn english_confidence_matches_unit_label() {
        assert_eq!(
            Locale::English.confidence_label(UnitConfidence::HighMeterDetected),
            "High (meter units detected)"
        );
        assert_ne!(
            Locale::Korean.confidence_label(UnitConfidence::HighMeterDetected),
            UnitConfidence::HighMeterDetected.label()
        );
    }

    #[test]
    fn labels() {
        assert_eq!(Locale::English.foot_type_label(FootType::Long), "Long Foot Type");
        assert_eq!(Locale::English.arch_type_label(ArchType::Low), "Low Arch / Flat Foot");
        assert_eq!(Locale::Korean.arch_type_label(ArchType::High), "높은 아치");
    }
}
