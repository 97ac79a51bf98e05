use super::stt_repository::SttRepository;
use crate::domain::language::tables::AUTO_DETECT;
use async_openai::{
    config::OpenAIConfig,
    types::{AudioInput, CreateTranscriptionRequestArgs},
    Client,
};
use async_trait::async_trait;
use std::sync::Arc;

/// Whisper infers the container format from the file extension
const DEFAULT_FILENAME: &str = "audio.wav";

/// OpenAI Whisper transcription
pub struct OpenAiSttRepository {
    client: Arc<Client<OpenAIConfig>>,
    model: String,
}

impl OpenAiSttRepository {
    pub fn new(client: Arc<Client<OpenAIConfig>>, model: String) -> Self {
        Self { client, model }
    }
}

#[async_trait]
impl SttRepository for OpenAiSttRepository {
    async fn transcribe(&self, audio: &[u8], filename: &str, code: &str) -> Result<String, String> {
        let start_time = std::time::Instant::now();

        let filename = if filename.contains('.') {
            filename
        } else {
            DEFAULT_FILENAME
        };

        let mut args = CreateTranscriptionRequestArgs::default();
        args.file(AudioInput::from_vec_u8(filename.to_string(), audio.to_vec()))
            .model(self.model.clone());
        if code != AUTO_DETECT {
            args.language(code);
        }
        let request = args
            .build()
            .map_err(|e| format!("Invalid transcription request: {}", e))?;

        let response = self
            .client
            .audio()
            .transcribe(request)
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    model = %self.model,
                    language_hint = code,
                    "OpenAI transcription call failed"
                );
                format!("OpenAI transcription error: {}", e)
            })?;

        tracing::info!(
            provider = "whisper",
            model = %self.model,
            language_hint = code,
            latency_ms = start_time.elapsed().as_millis(),
            audio_size_bytes = audio.len(),
            transcript_length = response.text.len(),
            "Transcription completed"
        );

        Ok(response.text)
    }
}
