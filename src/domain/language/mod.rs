pub mod detection;
pub mod resolver;
pub mod tables;

use serde::{Deserialize, Serialize};

pub use resolver::{LanguageTables, Resolution, ResolutionTable};

/// External engines that own a language code space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    GoogleTranslate,
    LibreTranslate,
    AzureNeuralTts,
    GoogleTts,
    Whisper,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::GoogleTranslate => "google_translate",
            Provider::LibreTranslate => "libre_translate",
            Provider::AzureNeuralTts => "azure_neural_tts",
            Provider::GoogleTts => "google_tts",
            Provider::Whisper => "whisper",
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Priority tier a provider code was resolved from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// The provider supports the language natively
    Direct,
    /// A script or linguistically related language stands in
    ScriptFallback,
    /// Universal baseline (English, or auto-detect for transcription)
    HardDefault,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Direct => "direct",
            Tier::ScriptFallback => "script_fallback",
            Tier::HardDefault => "hard_default",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
