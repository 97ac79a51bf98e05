use lingua::{Language, LanguageDetector, LanguageDetectorBuilder};

/// Languages the detector chooses between.
/// Latin-script input can only come out as English.
const DETECTABLE_LANGUAGES: [Language; 9] = [
    Language::English,
    Language::Hindi,
    Language::Bengali,
    Language::Gujarati,
    Language::Marathi,
    Language::Punjabi,
    Language::Tamil,
    Language::Telugu,
    Language::Urdu,
];

pub fn build_detector() -> LanguageDetector {
    LanguageDetectorBuilder::from_languages(&DETECTABLE_LANGUAGES).build()
}

/// ISO 639-1 code, matching the translation providers' code space
pub fn iso_code(language: Language) -> &'static str {
    match language {
        Language::English => "en",
        Language::Hindi => "hi",
        Language::Bengali => "bn",
        Language::Gujarati => "gu",
        Language::Marathi => "mr",
        Language::Punjabi => "pa",
        Language::Tamil => "ta",
        Language::Telugu => "te",
        Language::Urdu => "ur",
    }
}

/// Detect the language of `text`, `None` when the detector cannot decide
pub fn detect_language_code(detector: &LanguageDetector, text: &str) -> Option<&'static str> {
    detector.detect_language_of(text).map(iso_code)
}
