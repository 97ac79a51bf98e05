pub mod error;
pub mod service;

use serde::{Deserialize, Serialize};

pub use error::TtsServiceError;
pub use service::{SynthesisResult, TtsService, TtsServiceApi, TTS_PLAN};

/// Request for POST /tts and POST /tts/audio
#[derive(Debug, Serialize, Deserialize)]
pub struct TtsRequest {
    pub text: String,
    pub lang: String,
}
