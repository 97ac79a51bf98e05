use super::tts_repository::TtsRepository;
use async_trait::async_trait;

const OUTPUT_FORMAT: &str = "audio-24khz-48kbitrate-mono-mp3";

/// Azure Cognitive Services neural voices. Codes are voice names such as
/// `hi-IN-SwaraNeural`.
pub struct AzureTtsRepository {
    endpoint: String,
    subscription_key: String,
    http_client: reqwest::Client,
}

impl AzureTtsRepository {
    pub fn new(endpoint: String, subscription_key: String, http_client: reqwest::Client) -> Self {
        Self {
            endpoint,
            subscription_key,
            http_client,
        }
    }
}

/// `hi-IN-SwaraNeural` -> `hi-IN`
fn voice_locale(voice: &str) -> &str {
    let mut dashes = voice.match_indices('-').map(|(i, _)| i);
    match (dashes.next(), dashes.next()) {
        (Some(_), Some(second)) => &voice[..second],
        _ => voice,
    }
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn build_ssml(text: &str, voice: &str) -> String {
    format!(
        "<speak version='1.0' xml:lang='{locale}'><voice name='{voice}'>{text}</voice></speak>",
        locale = voice_locale(voice),
        voice = escape_xml(voice),
        text = escape_xml(text),
    )
}

#[async_trait]
impl TtsRepository for AzureTtsRepository {
    async fn synthesize(&self, text: &str, code: &str) -> Result<Vec<u8>, String> {
        let start_time = std::time::Instant::now();

        let response = self
            .http_client
            .post(&self.endpoint)
            .header("Ocp-Apim-Subscription-Key", &self.subscription_key)
            .header("Content-Type", "application/ssml+xml")
            .header("X-Microsoft-OutputFormat", OUTPUT_FORMAT)
            .header("User-Agent", "bhasha-ai-services")
            .body(build_ssml(text, code))
            .send()
            .await
            .map_err(|e| format!("Azure TTS request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(format!("Azure TTS returned {}: {}", status, error_text));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| format!("Failed to read Azure TTS audio: {}", e))?
            .to_vec();

        tracing::info!(
            provider = "azure_neural_tts",
            voice = code,
            latency_ms = start_time.elapsed().as_millis(),
            characters_count = text.chars().count(),
            audio_size_bytes = audio.len(),
            "TTS synthesis completed"
        );

        Ok(audio)
    }
}
