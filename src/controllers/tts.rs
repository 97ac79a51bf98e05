use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    Json,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    controllers::validate_text_length,
    domain::{
        language::{Provider, Tier},
        tts::{TtsRequest, TtsService, TtsServiceApi},
    },
    error::{AppError, AppResult},
};

/// Response for POST /tts
#[derive(Debug, Serialize, Deserialize)]
pub struct TtsResponse {
    /// Base64 MP3, empty when every provider failed
    pub audio_data: String,
    pub language_code: Option<String>,
    pub tier: Option<Tier>,
    pub provider: Option<Provider>,
}

pub struct TtsController {
    tts_service: Arc<TtsService>,
    max_text_chars: usize,
}

impl TtsController {
    pub fn new(tts_service: Arc<TtsService>, max_text_chars: usize) -> Self {
        Self {
            tts_service,
            max_text_chars,
        }
    }

    /// POST /tts - Convert text to speech, returned as base64 JSON
    pub async fn synthesize(
        State(controller): State<Arc<TtsController>>,
        Json(request): Json<TtsRequest>,
    ) -> AppResult<Json<TtsResponse>> {
        validate_text_length(&request.text, controller.max_text_chars)?;

        let result = controller
            .tts_service
            .synthesize(&request.text, &request.lang)
            .await?;

        let (language_code, tier, provider) = match result.stage {
            Some(stage) => (Some(stage.code), Some(stage.tier), Some(stage.provider)),
            None => (None, None, None),
        };

        Ok(Json(TtsResponse {
            audio_data: STANDARD.encode(&result.audio_data),
            language_code,
            tier,
            provider,
        }))
    }

    /// POST /tts/audio - Convert text to speech, returned as raw MP3
    pub async fn synthesize_audio(
        State(controller): State<Arc<TtsController>>,
        Json(request): Json<TtsRequest>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        validate_text_length(&request.text, controller.max_text_chars)?;

        let result = controller
            .tts_service
            .synthesize(&request.text, &request.lang)
            .await?;

        let stage = result.stage.ok_or_else(|| {
            AppError::ServiceUnavailable(format!(
                "No speech provider could synthesize '{}'",
                request.lang
            ))
        })?;

        let voice = HeaderValue::from_str(&stage.code)
            .map_err(|e| AppError::Internal(format!("Invalid voice header: {}", e)))?;

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("audio/mpeg"));
        headers.insert("x-voice-used", voice);
        headers.insert("x-language-tier", HeaderValue::from_static(stage.tier.as_str()));
        headers.insert("x-provider", HeaderValue::from_static(stage.provider.as_str()));
        headers.insert("x-character-count", HeaderValue::from(result.char_count));

        Ok((StatusCode::OK, headers, Body::from(result.audio_data)))
    }
}
