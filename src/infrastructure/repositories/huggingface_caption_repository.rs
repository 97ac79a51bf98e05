use super::caption_repository::{CaptionError, CaptionModelLoader, CaptionRepository};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct GeneratedCaption {
    generated_text: String,
}

/// BLIP image captioning through the Hugging Face inference API
pub struct HuggingFaceCaptionRepository {
    model_url: String,
    api_token: Option<String>,
    http_client: reqwest::Client,
}

impl HuggingFaceCaptionRepository {
    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[async_trait]
impl CaptionRepository for HuggingFaceCaptionRepository {
    async fn caption(&self, image: &[u8]) -> Result<String, CaptionError> {
        let start_time = std::time::Instant::now();

        let response = self
            .authorized(self.http_client.post(&self.model_url))
            .header("Content-Type", "application/octet-stream")
            .body(image.to_vec())
            .send()
            .await
            .map_err(|e| CaptionError::Unavailable(format!("request failed: {}", e)))?;

        let status = response.status();
        if status == StatusCode::SERVICE_UNAVAILABLE {
            // The inference API answers 503 while the model weights load
            return Err(CaptionError::Unavailable("model is loading".to_string()));
        }
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(CaptionError::Failed(format!("{}: {}", status, error_text)));
        }

        let captions: Vec<GeneratedCaption> = response
            .json()
            .await
            .map_err(|e| CaptionError::Failed(format!("unreadable response: {}", e)))?;

        let caption = captions
            .into_iter()
            .next()
            .map(|c| c.generated_text)
            .ok_or_else(|| CaptionError::Failed("no caption generated".to_string()))?;

        tracing::info!(
            provider = "huggingface",
            latency_ms = start_time.elapsed().as_millis(),
            image_size_bytes = image.len(),
            "Caption generated"
        );

        Ok(caption)
    }
}

/// Checks the model status endpoint before handing out a repository
pub struct HuggingFaceCaptionLoader {
    base_url: String,
    model: String,
    api_token: Option<String>,
    http_client: reqwest::Client,
}

impl HuggingFaceCaptionLoader {
    pub fn new(
        base_url: String,
        model: String,
        api_token: Option<String>,
        http_client: reqwest::Client,
    ) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            api_token,
            http_client,
        }
    }
}

#[async_trait]
impl CaptionModelLoader for HuggingFaceCaptionLoader {
    async fn load(&self) -> Result<Arc<dyn CaptionRepository>, CaptionError> {
        let repository = HuggingFaceCaptionRepository {
            model_url: format!("{}/models/{}", self.base_url, self.model),
            api_token: self.api_token.clone(),
            http_client: self.http_client.clone(),
        };

        let response = repository
            .authorized(
                self.http_client
                    .get(format!("{}/status/{}", self.base_url, self.model)),
            )
            .send()
            .await
            .map_err(|e| CaptionError::Unavailable(format!("status check failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(CaptionError::Unavailable(format!(
                "model '{}' status returned {}",
                self.model,
                response.status()
            )));
        }

        tracing::info!(model = %self.model, "Image captioning model ready");

        Ok(Arc::new(repository))
    }
}
