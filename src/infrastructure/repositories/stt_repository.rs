use async_trait::async_trait;

/// Repository for speech transcription.
#[async_trait]
pub trait SttRepository: Send + Sync {
    /// Transcribe an uploaded audio file.
    ///
    /// `code` is a language hint in the provider's code space; `"auto"` lets
    /// the provider detect the spoken language itself.
    async fn transcribe(&self, audio: &[u8], filename: &str, code: &str) -> Result<String, String>;
}
