use crate::domain::fallback::{ChainOutcome, FallbackChain, StagePlan, StageReport};
use crate::domain::language::{LanguageTables, Provider, Tier};
use crate::error::AppError;
use crate::infrastructure::repositories::SttRepository;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// The hard default for Whisper is "no hint", which lets it detect the language
pub const STT_PLAN: &[StagePlan] = &[
    StagePlan::new(Provider::Whisper, Tier::Direct),
    StagePlan::new(Provider::Whisper, Tier::ScriptFallback),
    StagePlan::new(Provider::Whisper, Tier::HardDefault),
];

#[derive(Debug, thiserror::Error)]
pub enum SttServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("transcription unavailable: {0}")]
    Exhausted(String),
}

impl From<SttServiceError> for AppError {
    fn from(err: SttServiceError) -> Self {
        match err {
            SttServiceError::Invalid(msg) => AppError::BadRequest(msg),
            SttServiceError::Exhausted(msg) => AppError::ServiceUnavailable(msg),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TranscriptionResult {
    pub transcript: String,
    pub stage: StageReport,
}

pub struct SttService {
    tables: Arc<LanguageTables>,
    transcribers: HashMap<Provider, Arc<dyn SttRepository>>,
    timeout: Duration,
}

impl SttService {
    pub fn new(
        tables: Arc<LanguageTables>,
        transcribers: HashMap<Provider, Arc<dyn SttRepository>>,
        timeout: Duration,
    ) -> Self {
        Self {
            tables,
            transcribers,
            timeout,
        }
    }

    pub fn is_available(&self) -> bool {
        !self.transcribers.is_empty()
    }

    pub fn configured_providers(&self) -> Vec<Provider> {
        let mut providers: Vec<Provider> = self.transcribers.keys().copied().collect();
        providers.sort_by_key(|p| p.as_str());
        providers
    }
}

#[async_trait]
pub trait SttServiceApi: Send + Sync {
    /// Transcribe uploaded audio spoken in the named language
    async fn transcribe(
        &self,
        audio: &[u8],
        filename: &str,
        language: &str,
    ) -> Result<TranscriptionResult, SttServiceError>;
}

#[async_trait]
impl SttServiceApi for SttService {
    async fn transcribe(
        &self,
        audio: &[u8],
        filename: &str,
        language: &str,
    ) -> Result<TranscriptionResult, SttServiceError> {
        if audio.is_empty() {
            return Err(SttServiceError::Invalid("Audio file is empty".to_string()));
        }

        tracing::info!(
            language = %language,
            filename = %filename,
            audio_size_bytes = audio.len(),
            "Transcription request"
        );

        let chain = FallbackChain::build(
            language,
            STT_PLAN,
            &self.tables,
            &self.transcribers,
            self.timeout,
        );

        let outcome = chain
            .run(
                |stage| async move { stage.client.transcribe(audio, filename, &stage.code).await },
                |_, transcript: &String| {
                    if transcript.trim().is_empty() {
                        Err("empty transcript".to_string())
                    } else {
                        Ok(())
                    }
                },
            )
            .await;

        match outcome {
            ChainOutcome::Accepted { value, report, .. } => Ok(TranscriptionResult {
                transcript: value.trim().to_string(),
                stage: report,
            }),
            ChainOutcome::Exhausted(exhaustion) => {
                Err(SttServiceError::Exhausted(exhaustion.summary()))
            }
        }
    }
}
