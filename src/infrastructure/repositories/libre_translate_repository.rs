use super::translation_repository::TranslationRepository;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct LibreTranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LibreTranslateResponse {
    translated_text: String,
}

/// Self-hostable LibreTranslate server
pub struct LibreTranslateRepository {
    base_url: String,
    api_key: Option<String>,
    http_client: reqwest::Client,
}

impl LibreTranslateRepository {
    pub fn new(base_url: String, api_key: Option<String>, http_client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            http_client,
        }
    }
}

#[async_trait]
impl TranslationRepository for LibreTranslateRepository {
    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, String> {
        let request = LibreTranslateRequest {
            q: text,
            source,
            target,
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        let response = self
            .http_client
            .post(format!("{}/translate", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("LibreTranslate request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(format!("LibreTranslate returned {}: {}", status, error_text));
        }

        let body: LibreTranslateResponse = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse LibreTranslate response: {}", e))?;

        Ok(body.translated_text)
    }
}
