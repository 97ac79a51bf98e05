use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::domain::{
    caption::CaptionService, stt::SttService, translation::TranslationService, tts::TtsService,
};

pub struct HealthController {
    translation_service: Arc<TranslationService>,
    tts_service: Arc<TtsService>,
    stt_service: Arc<SttService>,
    caption_service: Arc<CaptionService>,
}

impl HealthController {
    pub fn new(
        translation_service: Arc<TranslationService>,
        tts_service: Arc<TtsService>,
        stt_service: Arc<SttService>,
        caption_service: Arc<CaptionService>,
    ) -> Self {
        Self {
            translation_service,
            tts_service,
            stt_service,
            caption_service,
        }
    }
}

pub async fn root() -> impl IntoResponse {
    Json(json!({ "message": "AI services ready" }))
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Ready when translation and speech synthesis each have a provider.
/// Transcription and captioning are reported but optional.
pub async fn health_ready(State(controller): State<Arc<HealthController>>) -> impl IntoResponse {
    let translation = controller.translation_service.configured_providers();
    let tts = controller.tts_service.configured_providers();
    let stt = controller.stt_service.configured_providers();
    let ready = !translation.is_empty() && !tts.is_empty();

    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(json!({
            "status": if ready { "ready" } else { "not_ready" },
            "translation": translation,
            "tts": tts,
            "stt": stt,
            "captioning": {
                "model_loaded": controller.caption_service.is_loaded()
            }
        })),
    )
}
