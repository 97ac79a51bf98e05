use super::error::TranslationServiceError;
use crate::domain::fallback::{ChainOutcome, FallbackChain, StagePlan, StageReport};
use crate::domain::language::detection::{build_detector, detect_language_code};
use crate::domain::language::resolver::DEFAULT_CODE;
use crate::domain::language::{LanguageTables, Provider, Tier};
use crate::infrastructure::repositories::TranslationRepository;
use async_trait::async_trait;
use lingua::LanguageDetector;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// Prefix of the value returned when every stage failed
pub const EXHAUSTED_PREFIX: &str = "Error: Could not translate.";

const AUTO_SOURCE: &str = "auto";

pub const TRANSLATION_PLAN: &[StagePlan] = &[
    StagePlan::new(Provider::GoogleTranslate, Tier::Direct),
    StagePlan::new(Provider::LibreTranslate, Tier::Direct),
    StagePlan::new(Provider::GoogleTranslate, Tier::ScriptFallback),
    StagePlan::new(Provider::GoogleTranslate, Tier::HardDefault),
];

#[derive(Debug, Clone)]
pub struct TranslationResult {
    /// Translated text, or an error-tagged message when `stage` is `None`
    pub text: String,
    pub stage: Option<StageReport>,
}

impl TranslationResult {
    pub fn is_exhausted(&self) -> bool {
        self.stage.is_none()
    }

    /// Anything other than a direct-tier translation
    pub fn is_degraded(&self) -> bool {
        self.stage
            .as_ref()
            .map(|s| s.tier != Tier::Direct)
            .unwrap_or(true)
    }
}

pub struct TranslationService {
    tables: Arc<LanguageTables>,
    translators: HashMap<Provider, Arc<dyn TranslationRepository>>,
    language_detector: LanguageDetector,
    timeout: Duration,
}

impl TranslationService {
    pub fn new(
        tables: Arc<LanguageTables>,
        translators: HashMap<Provider, Arc<dyn TranslationRepository>>,
        timeout: Duration,
    ) -> Self {
        Self {
            tables,
            translators,
            language_detector: build_detector(),
            timeout,
        }
    }

    pub fn configured_providers(&self) -> Vec<Provider> {
        let mut providers: Vec<Provider> = self.translators.keys().copied().collect();
        providers.sort_by_key(|p| p.as_str());
        providers
    }
}

#[async_trait]
pub trait TranslationServiceApi: Send + Sync {
    /// Translate text into the named target language.
    ///
    /// Providers are tried in `TRANSLATION_PLAN` order. Provider failures never
    /// surface as errors: when every stage fails the result carries an
    /// error-tagged text instead. Only invalid input is an error.
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
        source_language: Option<&str>,
    ) -> Result<TranslationResult, TranslationServiceError>;
}

#[async_trait]
impl TranslationServiceApi for TranslationService {
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
        source_language: Option<&str>,
    ) -> Result<TranslationResult, TranslationServiceError> {
        if text.trim().is_empty() {
            return Err(TranslationServiceError::Invalid(
                "Text cannot be empty".to_string(),
            ));
        }

        let source_code = self.source_language_code(text, source_language);

        tracing::info!(
            target_language = %target_language,
            source_language = ?source_language,
            source_code = ?source_code,
            text_length = text.len(),
            "Translation request"
        );

        let chain = FallbackChain::build(
            target_language,
            TRANSLATION_PLAN,
            &self.tables,
            &self.translators,
            self.timeout,
        );

        let outcome = chain
            .run(
                |stage| {
                    let source = source_language
                        .and_then(|name| self.tables.code_for(name, stage.provider, Tier::Direct))
                        .unwrap_or(AUTO_SOURCE)
                        .to_string();
                    async move {
                        stage
                            .client
                            .translate(text, &source, &stage.code)
                            .await
                    }
                },
                |stage, translated: &String| {
                    validate_translation(text, translated, &stage.code, source_code)
                },
            )
            .await;

        let result = match outcome {
            ChainOutcome::Accepted { value, report, .. } => TranslationResult {
                text: value,
                stage: Some(report),
            },
            ChainOutcome::Exhausted(exhaustion) => TranslationResult {
                text: format!("{} ({})", EXHAUSTED_PREFIX, exhaustion.summary()),
                stage: None,
            },
        };

        Ok(result)
    }
}

impl TranslationService {
    /// Explicit source language if it maps to a code, otherwise detection
    fn source_language_code(&self, text: &str, source_language: Option<&str>) -> Option<&str> {
        if let Some(code) = source_language
            .and_then(|name| self.tables.code_for(name, Provider::GoogleTranslate, Tier::Direct))
        {
            return Some(code);
        }

        detect_language_code(&self.language_detector, text)
    }
}

/// Reject empty output, and output equal to the input unless the text is
/// already in the target language. Text with no detectable language (numbers,
/// URLs) may come back unchanged from the default English code.
///
/// A provider that cannot handle a language often answers with the input
/// unchanged. The check cannot tell that apart from a genuine translation
/// that happens to be identical (loanwords, names), which it rejects too.
fn validate_translation(
    input: &str,
    translated: &str,
    target_code: &str,
    source_code: Option<&str>,
) -> Result<(), String> {
    if translated.trim().is_empty() {
        return Err("empty translation".to_string());
    }

    let echoed = translated.trim().to_lowercase() == input.trim().to_lowercase();
    let language_neutral = source_code.is_none() && target_code == DEFAULT_CODE;
    if echoed && source_code != Some(target_code) && !language_neutral {
        return Err(format!("input echoed unchanged for target '{}'", target_code));
    }

    Ok(())
}
