use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::{CaptionError, CaptionModelLoader, CaptionRepository};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;

pub const MODEL_UNAVAILABLE: &str =
    "AI analysis is currently unavailable (model downloading or error).";
pub const CAPTION_FAILED: &str = "Could not generate description.";

pub struct CaptionService {
    loader: Arc<dyn CaptionModelLoader>,
    model: OnceCell<Arc<dyn CaptionRepository>>,
    timeout: Duration,
}

impl CaptionService {
    pub fn new(loader: Arc<dyn CaptionModelLoader>, timeout: Duration) -> Self {
        Self {
            loader,
            model: OnceCell::new(),
            timeout,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.model.initialized()
    }

    /// Describe an image in one sentence.
    ///
    /// Model and provider failures degrade to a fixed message; only an empty
    /// upload is an error.
    pub async fn describe(&self, image: &[u8]) -> AppResult<String> {
        if image.is_empty() {
            return Err(AppError::BadRequest("Image file is empty".to_string()));
        }

        // Concurrent first requests wait on a single load; a failed load
        // leaves the cell empty so the next request retries.
        let model = match self
            .model
            .get_or_try_init(|| async {
                tracing::info!("Initializing image captioning model");
                match tokio::time::timeout(self.timeout, self.loader.load()).await {
                    Ok(loaded) => loaded,
                    Err(_) => Err(CaptionError::Unavailable(format!(
                        "model load timed out after {}ms",
                        self.timeout.as_millis()
                    ))),
                }
            })
            .await
        {
            Ok(model) => model,
            Err(e) => {
                tracing::error!(error = %e, "Captioning model initialization failed");
                return Ok(MODEL_UNAVAILABLE.to_string());
            }
        };

        let description = match tokio::time::timeout(self.timeout, model.caption(image)).await {
            Ok(Ok(caption)) if !caption.trim().is_empty() => to_sentence(&caption),
            Ok(Ok(_)) => {
                tracing::warn!("Captioning model returned an empty caption");
                CAPTION_FAILED.to_string()
            }
            Ok(Err(CaptionError::Unavailable(reason))) => {
                tracing::warn!(reason = %reason, "Captioning model unavailable");
                MODEL_UNAVAILABLE.to_string()
            }
            Ok(Err(CaptionError::Failed(reason))) => {
                tracing::error!(reason = %reason, "Error generating caption");
                CAPTION_FAILED.to_string()
            }
            Err(_) => {
                tracing::error!(timeout_ms = self.timeout.as_millis(), "Captioning timed out");
                CAPTION_FAILED.to_string()
            }
        };

        Ok(description)
    }
}

/// Capitalise and terminate with exactly one period
fn to_sentence(caption: &str) -> String {
    let trimmed = caption.trim().trim_end_matches('.');
    let mut chars = trimmed.chars();
    let mut sentence = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
    };
    sentence.push('.');
    sentence.replace("..", ".")
}
