use async_trait::async_trait;

/// Repository for text translation.
/// Abstracts the underlying provider (Google web translate, LibreTranslate, ...)
///
/// Codes are in the provider's own code space; `source` may be `"auto"`.
#[async_trait]
pub trait TranslationRepository: Send + Sync {
    /// Translate `text` from `source` to `target`
    ///
    /// # Errors
    /// Returns a description of the failure if the provider is unreachable,
    /// answers with an error status or sends an unreadable body
    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, String>;
}
