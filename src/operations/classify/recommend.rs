use super::{ArchType, FootRatios, FootType, Locale};

/// Builds the ordered shoe recommendations for a pair of ratios.
///
/// Width-fit advice always precedes arch-support advice.
pub struct Recommend {
    ratios: FootRatios,
    locale: Locale,
}

impl Recommend {
    /// Creates a new `Recommend` query with English text.
    #[must_use]
    pub fn new(ratios: FootRatios) -> Self {
        Self {
            ratios,
            locale: Locale::default(),
        }
    }

    /// Sets the locale of the recommendation text.
    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> Vec<String> {
        let foot = FootType::from_length_width_ratio(self.ratios.length_width);
        let arch = ArchType::from_height_length_ratio(self.ratios.height_length);
        self.locale
            .width_advice(foot)
            .iter()
            .chain(self.locale.arch_advice(arch))
            .map(|s| (*s).to_owned())
            .collect()
    }
}
