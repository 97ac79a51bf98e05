use super::error::TtsServiceError;
use crate::domain::fallback::{ChainOutcome, FallbackChain, StagePlan, StageReport};
use crate::domain::language::{LanguageTables, Provider, Tier};
use crate::infrastructure::repositories::TtsRepository;
use async_trait::async_trait;
use regex::Regex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

pub const TTS_PLAN: &[StagePlan] = &[
    StagePlan::new(Provider::AzureNeuralTts, Tier::Direct),
    StagePlan::new(Provider::GoogleTts, Tier::Direct),
    StagePlan::new(Provider::GoogleTts, Tier::ScriptFallback),
    StagePlan::new(Provider::GoogleTts, Tier::HardDefault),
];

#[derive(Debug, Clone)]
pub struct SynthesisResult {
    /// MP3 bytes, empty when every stage failed
    pub audio_data: Vec<u8>,
    pub stage: Option<StageReport>,
    pub char_count: usize,
}

impl SynthesisResult {
    pub fn is_exhausted(&self) -> bool {
        self.stage.is_none()
    }
}

pub struct TtsService {
    tables: Arc<LanguageTables>,
    synthesizers: HashMap<Provider, Arc<dyn TtsRepository>>,
    min_audio_bytes: usize,
    timeout: Duration,
    whitespace: Regex,
}

impl TtsService {
    pub fn new(
        tables: Arc<LanguageTables>,
        synthesizers: HashMap<Provider, Arc<dyn TtsRepository>>,
        min_audio_bytes: usize,
        timeout: Duration,
    ) -> Self {
        Self {
            tables,
            synthesizers,
            min_audio_bytes,
            timeout,
            whitespace: Regex::new(r"\s+").expect("static regex is valid"),
        }
    }

    pub fn configured_providers(&self) -> Vec<Provider> {
        let mut providers: Vec<Provider> = self.synthesizers.keys().copied().collect();
        providers.sort_by_key(|p| p.as_str());
        providers
    }

    /// Collapse runs of whitespace and trim
    fn normalize_text(&self, text: &str) -> String {
        self.whitespace.replace_all(text, " ").trim().to_string()
    }
}

#[async_trait]
pub trait TtsServiceApi: Send + Sync {
    /// Synthesize text in the named language.
    ///
    /// Providers are tried in `TTS_PLAN` order; audio at or below the minimum
    /// size counts as a failed stage. When every stage fails the result holds
    /// empty audio rather than an error.
    async fn synthesize(&self, text: &str, language: &str)
        -> Result<SynthesisResult, TtsServiceError>;
}

#[async_trait]
impl TtsServiceApi for TtsService {
    async fn synthesize(
        &self,
        text: &str,
        language: &str,
    ) -> Result<SynthesisResult, TtsServiceError> {
        let normalized = self.normalize_text(text);
        if normalized.is_empty() {
            return Err(TtsServiceError::Invalid("Text cannot be empty".to_string()));
        }

        let char_count = normalized.chars().count();

        tracing::info!(
            language = %language,
            original_length = text.len(),
            char_count = char_count,
            "TTS synthesis request"
        );

        let chain = FallbackChain::build(
            language,
            TTS_PLAN,
            &self.tables,
            &self.synthesizers,
            self.timeout,
        );

        let min_audio_bytes = self.min_audio_bytes;
        let normalized = normalized.as_str();

        let outcome = chain
            .run(
                |stage| async move { stage.client.synthesize(normalized, &stage.code).await },
                |_, audio: &Vec<u8>| {
                    if audio.len() > min_audio_bytes {
                        Ok(())
                    } else {
                        Err(format!(
                            "audio too small ({} bytes, need more than {})",
                            audio.len(),
                            min_audio_bytes
                        ))
                    }
                },
            )
            .await;

        let result = match outcome {
            ChainOutcome::Accepted { value, report, .. } => {
                tracing::info!(
                    language = %language,
                    provider = %report.provider,
                    code = %report.code,
                    tier = %report.tier,
                    audio_size_bytes = value.len(),
                    "TTS synthesis completed"
                );
                SynthesisResult {
                    audio_data: value,
                    stage: Some(report),
                    char_count,
                }
            }
            ChainOutcome::Exhausted(exhaustion) => {
                tracing::error!(
                    language = %language,
                    failures = %exhaustion.summary(),
                    "TTS synthesis exhausted every provider"
                );
                SynthesisResult {
                    audio_data: Vec::new(),
                    stage: None,
                    char_count,
                }
            }
        };

        Ok(result)
    }
}
