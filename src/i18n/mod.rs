//! Translated labels for reports and CLI output
//!
//! English (en) and Hindi (hi). "auto" picks the language from the
//! usual locale environment variables.

mod en;
mod hi;

use crate::core::{AdditionalFeature, EstimationError, ProjectKind, QualityTier};
use std::collections::HashMap;

/// Label lookup for one language
pub struct I18n {
    current_lang: String,
    translations: HashMap<String, String>,
}

impl I18n {
    pub fn new(lang: &str) -> Self {
        let mut i18n = Self {
            current_lang: String::new(),
            translations: HashMap::new(),
        };
        i18n.set_language(lang);
        i18n
    }

    /// Accepts "auto", a language code or a locale such as `hi-IN`
    pub fn set_language(&mut self, lang: &str) {
        let code = if lang == "auto" {
            detect_system_language()
        } else {
            language_from_locale(lang)
        };

        self.translations = match code {
            "hi" => hi::get_translations(),
            _ => en::get_translations(),
        };
        self.current_lang = code.to_string();

        log::debug!("Language set to: {}", self.current_lang);
    }

    /// Whether `lang` resolves to a translated language rather than the fallback
    pub fn is_supported(lang: &str) -> bool {
        lang == "auto" || supported_code(lang).is_some()
    }

    /// Translated string, or the key itself when there is no entry
    pub fn get(&self, key: &str) -> String {
        self.translations
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    pub fn current_language(&self) -> &str {
        &self.current_lang
    }

    pub fn available_languages() -> Vec<(&'static str, &'static str)> {
        vec![("en", "English"), ("hi", "\u{0939}\u{093F}\u{0928}\u{094D}\u{0926}\u{0940}")]
    }

    pub fn kind_label(&self, kind: ProjectKind) -> String {
        self.get(&format!("kind.{}", kind.as_str()))
    }

    pub fn tier_label(&self, tier: QualityTier) -> String {
        self.get(&format!("tier.{}", tier.as_str()))
    }

    pub fn feature_label(&self, feature: AdditionalFeature) -> String {
        self.get(&format!("feature.{}", feature.as_str()))
    }

    /// Neutral message plus a hint on what to fix
    pub fn estimation_error(&self, err: &EstimationError) -> String {
        let hint = match err {
            EstimationError::UnknownProjectKind(_) => "error.hint.kind",
            EstimationError::UnknownQualityTier(_) => "error.hint.tier",
            EstimationError::InvalidArea(_) => "error.hint.area",
            EstimationError::InvalidFloors(_) => "error.hint.floors",
        };
        format!("{}: {}", self.get("error.unable_to_calculate"), self.get(hint))
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new("auto")
    }
}

fn detect_system_language() -> &'static str {
    let lang_env = std::env::var("LC_ALL")
        .or_else(|_| std::env::var("LC_MESSAGES"))
        .or_else(|_| std::env::var("LANG"))
        .unwrap_or_default();
    language_from_locale(&lang_env)
}

/// Map a locale such as `hi_IN.UTF-8` to a supported language code
fn language_from_locale(locale: &str) -> &'static str {
    supported_code(locale).unwrap_or("en")
}

fn supported_code(locale: &str) -> Option<&'static str> {
    let code = locale
        .split(['_', '.', '-'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();

    I18n::available_languages()
        .into_iter()
        .map(|(supported, _)| supported)
        .find(|supported| *supported == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_detection() {
        assert_eq!(language_from_locale("hi_IN.UTF-8"), "hi");
        assert_eq!(language_from_locale("HI"), "hi");
        assert_eq!(language_from_locale("en_GB.UTF-8"), "en");
        assert_eq!(language_from_locale("fr-FR"), "en");
        assert_eq!(language_from_locale(""), "en");
    }

    #[test]
    fn test_explicit_locale_selects_language() {
        for lang in ["hi-IN", "hi_IN.UTF-8", "hi"] {
            let i18n = I18n::new(lang);
            assert_eq!(i18n.current_language(), "hi", "{}", lang);
            assert_eq!(i18n.get("report.total_cost"), "\u{0915}\u{0941}\u{0932} \u{0932}\u{093E}\u{0917}\u{0924}");
        }
        assert_eq!(I18n::new("en-GB").current_language(), "en");
    }

    #[test]
    fn test_supported_languages() {
        assert!(I18n::is_supported("auto"));
        assert!(I18n::is_supported("en"));
        assert!(I18n::is_supported("hi-IN"));
        assert!(!I18n::is_supported("de"));
        assert!(!I18n::is_supported(""));
    }

    #[test]
    fn test_missing_key_falls_back_to_key() {
        let i18n = I18n::new("en");
        assert_eq!(i18n.get("no.such.key"), "no.such.key");
    }

    #[test]
    fn test_unsupported_language_uses_english() {
        let i18n = I18n::new("de");
        assert_eq!(i18n.current_language(), "en");
        assert_eq!(i18n.get("report.total_cost"), "Total Cost");
    }

    #[test]
    fn test_every_label_is_translated() {
        for lang in ["en", "hi"] {
            let i18n = I18n::new(lang);
            for kind in ProjectKind::ALL {
                assert!(!i18n.kind_label(kind).starts_with("kind."), "{} {}", lang, kind);
            }
            for tier in QualityTier::ALL {
                assert!(!i18n.tier_label(tier).starts_with("tier."), "{} {}", lang, tier);
            }
            for feature in AdditionalFeature::ALL {
                assert!(!i18n.feature_label(feature).starts_with("feature."), "{} {}", lang, feature);
            }
        }
    }

    #[test]
    fn test_estimation_error_message() {
        let i18n = I18n::new("en");
        assert_eq!(
            i18n.estimation_error(&EstimationError::InvalidArea(0.0)),
            "Unable to calculate an estimate: Enter a valid area"
        );
    }

    #[test]
    fn test_languages_share_keys() {
        let en = en::get_translations();
        let hi = hi::get_translations();
        for key in en.keys() {
            assert!(hi.contains_key(key), "missing hi translation for {}", key);
        }
    }
}
