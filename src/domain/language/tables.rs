//! Built-in language catalogue.
//!
//! Names match the labels the front-end sends ("Bishnupriya Manipuri", not
//! "bishnupriya_manipuri").

use super::{LanguageTables, Provider, ResolutionTable};

pub const ENGLISH: &str = "en";

/// Whisper detects the spoken language itself when given no hint
pub const AUTO_DETECT: &str = "auto";

const GOOGLE_TRANSLATE_DIRECT: &[(&str, &str)] = &[
    ("English", "en"),
    ("Hindi", "hi"),
    ("Tamil", "ta"),
    ("Telugu", "te"),
    ("Kannada", "kn"),
    ("Malayalam", "ml"),
    ("Bengali", "bn"),
    ("Gujarati", "gu"),
    ("Marathi", "mr"),
    ("Punjabi", "pa"),
    ("Urdu", "ur"),
    ("Odia", "or"),
    ("Assamese", "as"),
    ("Nepali", "ne"),
    ("Sindhi", "sd"),
    ("Sanskrit", "sa"),
    ("Konkani", "gom"),
    ("Maithili", "mai"),
    ("Bhojpuri", "bho"),
    ("Dogri", "doi"),
    ("Mizo", "lus"),
    ("Lushai", "lus"),
    ("Tulu", "tcy"),
    // Ol Chiki and Meetei Mayek output is unreliable, see the fallbacks below
    ("Santali", "sat"),
    ("Manipuri", "mni-Mtei"),
    ("Meitei", "mni-Mtei"),
];

const GOOGLE_TRANSLATE_SCRIPT_FALLBACK: &[(&str, &str)] = &[
    // Devanagari
    ("Bodo", "hi"),
    ("Sanskrit", "hi"),
    // Bengali script
    ("Manipuri", "bn"),
    ("Meitei", "bn"),
    ("Santali", "bn"),
    ("Kokborok", "bn"),
    ("Chakma", "bn"),
    ("Bishnupriya Manipuri", "bn"),
    ("Hajong", "bn"),
    ("Koch", "bn"),
    ("Rabha", "bn"),
    // Assamese
    ("Mishing", "as"),
    ("Tiwa", "as"),
    ("Deori", "as"),
    ("Dimasa", "as"),
    // Perso-Arabic
    ("Kashmiri", "ur"),
    // Roman-script languages read better as English than in a foreign script
    ("Khasi", "en"),
    ("Garo", "en"),
    ("Naga", "en"),
    ("Angami", "en"),
    ("Ao", "en"),
    ("Lotha", "en"),
    ("Sumi", "en"),
];

const LIBRE_TRANSLATE_DIRECT: &[(&str, &str)] = &[
    ("English", "en"),
    ("Hindi", "hi"),
    ("Bengali", "bn"),
    ("Urdu", "ur"),
];

const AZURE_NEURAL_VOICES: &[(&str, &str)] = &[
    ("English", "en-IN-NeerjaNeural"),
    ("Hindi", "hi-IN-SwaraNeural"),
    ("Tamil", "ta-IN-PallaviNeural"),
    ("Telugu", "te-IN-MohanNeural"),
    ("Kannada", "kn-IN-GaganNeural"),
    ("Malayalam", "ml-IN-SobhanaNeural"),
    ("Bengali", "bn-IN-BashkarNeural"),
    ("Gujarati", "gu-IN-DhwaniNeural"),
    ("Marathi", "mr-IN-ManoharNeural"),
    ("Urdu", "ur-IN-GulNeural"),
    ("Nepali", "ne-NP-HemkalaNeural"),
    ("Assamese", "as-IN-YashicaNeural"),
    ("Odia", "or-IN-SubhasiniNeural"),
];

const GOOGLE_TTS_DIRECT: &[(&str, &str)] = &[
    ("English", "en"),
    ("Hindi", "hi"),
    ("Tamil", "ta"),
    ("Telugu", "te"),
    ("Kannada", "kn"),
    ("Malayalam", "ml"),
    ("Bengali", "bn"),
    ("Gujarati", "gu"),
    ("Marathi", "mr"),
    ("Punjabi", "pa"),
    ("Urdu", "ur"),
    ("Nepali", "ne"),
];

const GOOGLE_TTS_SCRIPT_FALLBACK: &[(&str, &str)] = &[
    ("Assamese", "bn"),
    ("Odia", "bn"),
    ("Sindhi", "ur"),
    ("Kashmiri", "ur"),
    ("Manipuri", "bn"),
    ("Meitei", "bn"),
    ("Sanskrit", "hi"),
    ("Santali", "bn"),
    ("Maithili", "hi"),
    ("Dogri", "hi"),
    ("Konkani", "mr"),
    ("Bodo", "hi"),
];

const WHISPER_DIRECT: &[(&str, &str)] = &[
    ("English", "en"),
    ("Hindi", "hi"),
    ("Tamil", "ta"),
    ("Telugu", "te"),
    ("Kannada", "kn"),
    ("Malayalam", "ml"),
    ("Bengali", "bn"),
    ("Gujarati", "gu"),
    ("Marathi", "mr"),
    ("Punjabi", "pa"),
    ("Urdu", "ur"),
    ("Nepali", "ne"),
    ("Assamese", "as"),
    ("Sanskrit", "sa"),
    ("Sindhi", "sd"),
];

const WHISPER_SCRIPT_FALLBACK: &[(&str, &str)] = &[
    ("Bodo", "hi"),
    ("Dogri", "hi"),
    ("Maithili", "hi"),
    ("Bhojpuri", "hi"),
    ("Konkani", "mr"),
    ("Kashmiri", "ur"),
    ("Odia", "bn"),
    ("Manipuri", "bn"),
    ("Meitei", "bn"),
    ("Santali", "bn"),
];

impl LanguageTables {
    /// Tables for every provider the service knows about
    pub fn builtin() -> Self {
        LanguageTables::new()
            .with_table(
                Provider::GoogleTranslate,
                ResolutionTable::new(ENGLISH)
                    .with_direct(GOOGLE_TRANSLATE_DIRECT)
                    .with_script_fallback(GOOGLE_TRANSLATE_SCRIPT_FALLBACK),
            )
            .with_table(
                Provider::LibreTranslate,
                ResolutionTable::new(ENGLISH).with_direct(LIBRE_TRANSLATE_DIRECT),
            )
            .with_table(
                Provider::AzureNeuralTts,
                ResolutionTable::new("en-IN-NeerjaNeural").with_direct(AZURE_NEURAL_VOICES),
            )
            .with_table(
                Provider::GoogleTts,
                ResolutionTable::new(ENGLISH)
                    .with_direct(GOOGLE_TTS_DIRECT)
                    .with_script_fallback(GOOGLE_TTS_SCRIPT_FALLBACK),
            )
            .with_table(
                Provider::Whisper,
                ResolutionTable::new(AUTO_DETECT)
                    .with_direct(WHISPER_DIRECT)
                    .with_script_fallback(WHISPER_SCRIPT_FALLBACK),
            )
    }
}
