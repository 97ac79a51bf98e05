use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    controllers::validate_text_length,
    domain::{
        language::{Provider, Tier},
        translation::{TranslateRequest, TranslationService, TranslationServiceApi},
    },
    error::AppResult,
};

/// Response for POST /translate
#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub translated_text: String,
    /// Code of the stage that produced the text; absent when every stage failed
    pub language_code: Option<String>,
    pub tier: Option<Tier>,
    pub provider: Option<Provider>,
    pub degraded: bool,
}

pub struct TranslateController {
    translation_service: Arc<TranslationService>,
    max_text_chars: usize,
}

impl TranslateController {
    pub fn new(translation_service: Arc<TranslationService>, max_text_chars: usize) -> Self {
        Self {
            translation_service,
            max_text_chars,
        }
    }

    /// POST /translate - Translate text into a target language
    pub async fn translate(
        State(controller): State<Arc<TranslateController>>,
        Json(request): Json<TranslateRequest>,
    ) -> AppResult<Json<TranslateResponse>> {
        validate_text_length(&request.text, controller.max_text_chars)?;

        let result = controller
            .translation_service
            .translate(
                &request.text,
                &request.target_lang,
                request.source_lang.as_deref(),
            )
            .await?;

        let degraded = result.is_degraded();
        let (language_code, tier, provider) = match result.stage {
            Some(stage) => (Some(stage.code), Some(stage.tier), Some(stage.provider)),
            None => (None, None, None),
        };

        Ok(Json(TranslateResponse {
            translated_text: result.text,
            language_code,
            tier,
            provider,
            degraded,
        }))
    }
}
