pub mod error;
pub mod service;

use serde::{Deserialize, Serialize};

pub use error::TranslationServiceError;
pub use service::{TranslationResult, TranslationService, TranslationServiceApi, TRANSLATION_PLAN};

/// Request for POST /translate
#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub target_lang: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_lang: Option<String>,
}
