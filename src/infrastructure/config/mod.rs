use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    pub provider_timeout_secs: u64,
    pub min_audio_bytes: usize,
    pub max_text_chars: usize,
    // Translation
    pub google_translate_url: String,
    pub libretranslate_url: Option<String>,
    pub libretranslate_api_key: Option<String>,
    // Speech synthesis
    pub azure_speech_key: Option<String>,
    pub azure_speech_region: String,
    pub azure_tts_url: Option<String>,
    pub google_tts_url: String,
    // Transcription
    pub openai_api_key: Option<String>,
    pub openai_api_base: String,
    pub stt_model: String,
    // Image captioning
    pub hf_api_token: Option<String>,
    pub hf_inference_url: String,
    pub caption_model: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()?,
            environment: match env::var("ENVIRONMENT").as_deref() {
                Ok("production") => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT").as_deref() {
                Ok("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            provider_timeout_secs: env::var("PROVIDER_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()?,
            min_audio_bytes: env::var("MIN_AUDIO_BYTES")
                .unwrap_or_else(|_| "1000".to_string())
                .parse()?,
            max_text_chars: env::var("MAX_TEXT_CHARS")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()?,
            google_translate_url: env::var("GOOGLE_TRANSLATE_URL")
                .unwrap_or_else(|_| "https://translate.googleapis.com".to_string()),
            libretranslate_url: optional_var("LIBRETRANSLATE_URL"),
            libretranslate_api_key: optional_var("LIBRETRANSLATE_API_KEY"),
            azure_speech_key: optional_var("AZURE_SPEECH_KEY"),
            azure_speech_region: env::var("AZURE_SPEECH_REGION")
                .unwrap_or_else(|_| "centralindia".to_string()),
            azure_tts_url: optional_var("AZURE_TTS_URL"),
            google_tts_url: env::var("GOOGLE_TTS_URL")
                .unwrap_or_else(|_| "https://translate.google.com".to_string()),
            openai_api_key: optional_var("OPENAI_API_KEY"),
            openai_api_base: env::var("OPENAI_API_BASE")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            stt_model: env::var("STT_MODEL").unwrap_or_else(|_| "whisper-1".to_string()),
            hf_api_token: optional_var("HF_API_TOKEN"),
            hf_inference_url: env::var("HF_INFERENCE_URL")
                .unwrap_or_else(|_| "https://api-inference.huggingface.co".to_string()),
            caption_model: env::var("CAPTION_MODEL")
                .unwrap_or_else(|_| "Salesforce/blip-image-captioning-base".to_string()),
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    pub fn provider_timeout(&self) -> Duration {
        Duration::from_secs(self.provider_timeout_secs)
    }

    /// Neural TTS endpoint, derived from the region unless overridden
    pub fn azure_tts_endpoint(&self) -> String {
        self.azure_tts_url.clone().unwrap_or_else(|| {
            format!(
                "https://{}.tts.speech.microsoft.com/cognitiveservices/v1",
                self.azure_speech_region
            )
        })
    }
}

/// Unset and blank values both count as absent
fn optional_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
