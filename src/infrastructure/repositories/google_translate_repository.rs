use super::translation_repository::TranslationRepository;
use async_trait::async_trait;
use serde_json::Value;

/// Google's public web translation endpoint (the one browser widgets use).
/// Needs no key and accepts the supplementary codes (`sat`, `mni-Mtei`, ...).
pub struct GoogleTranslateRepository {
    base_url: String,
    http_client: reqwest::Client,
}

impl GoogleTranslateRepository {
    pub fn new(base_url: String, http_client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
        }
    }
}

/// The body is `[[["segment", "source", ...], ...], ...]`; the translation is
/// the concatenation of every segment's first element.
fn parse_segments(body: &Value) -> Result<String, String> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| "unexpected response shape: missing segment list".to_string())?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    Ok(translated)
}

#[async_trait]
impl TranslationRepository for GoogleTranslateRepository {
    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, String> {
        let start_time = std::time::Instant::now();

        let response = self
            .http_client
            .get(format!("{}/translate_a/single", self.base_url))
            .query(&[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| format!("Google Translate request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(format!("Google Translate returned {}: {}", status, error_text));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse Google Translate response: {}", e))?;

        let translated = parse_segments(&body)?;

        tracing::debug!(
            provider = "google_translate",
            source = source,
            target = target,
            latency_ms = start_time.elapsed().as_millis(),
            text_length = text.len(),
            translated_length = translated.len(),
            "Translation received"
        );

        Ok(translated)
    }
}
