use async_trait::async_trait;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CaptionError {
    /// The model is not loaded yet or cannot be reached
    #[error("model unavailable: {0}")]
    Unavailable(String),
    #[error("captioning failed: {0}")]
    Failed(String),
}

/// A loaded image captioning model
#[async_trait]
pub trait CaptionRepository: Send + Sync {
    async fn caption(&self, image: &[u8]) -> Result<String, CaptionError>;
}

/// Loads the captioning model. Called at most once per process unless
/// loading fails.
#[async_trait]
pub trait CaptionModelLoader: Send + Sync {
    async fn load(&self) -> Result<Arc<dyn CaptionRepository>, CaptionError>;
}
