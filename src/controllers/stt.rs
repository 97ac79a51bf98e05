use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    controllers::upload::read_upload,
    domain::stt::{SttService, SttServiceApi},
    error::AppResult,
};

const DEFAULT_LANGUAGE: &str = "English";

/// Response for POST /stt
#[derive(Debug, Serialize, Deserialize)]
pub struct SttResponse {
    pub transcript: String,
}

pub struct SttController {
    stt_service: Arc<SttService>,
}

impl SttController {
    pub fn new(stt_service: Arc<SttService>) -> Self {
        Self { stt_service }
    }

    /// POST /stt - Transcribe an uploaded audio file
    pub async fn transcribe(
        State(controller): State<Arc<SttController>>,
        multipart: Multipart,
    ) -> AppResult<Json<SttResponse>> {
        let upload = read_upload(multipart).await?;
        let language = upload.field("language").unwrap_or(DEFAULT_LANGUAGE);

        let result = controller
            .stt_service
            .transcribe(&upload.bytes, &upload.filename, language)
            .await?;

        Ok(Json(SttResponse {
            transcript: result.transcript,
        }))
    }
}
