use super::tts_repository::TtsRepository;
use async_trait::async_trait;
use futures::stream::{self, StreamExt, TryStreamExt};
use regex::Regex;

/// Google's translate_tts endpoint rejects longer inputs
const MAX_BATCH_CHARS: usize = 100;

/// Batches in flight at once; long texts must fit in one stage timeout
const MAX_CONCURRENT_BATCHES: usize = 8;

/// Google web TTS (the engine behind gTTS). Codes are plain language codes.
pub struct GoogleTtsRepository {
    base_url: String,
    http_client: reqwest::Client,
    sentence_end: Regex,
}

impl GoogleTtsRepository {
    pub fn new(base_url: String, http_client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
            // Latin punctuation plus the danda used by Devanagari and Bengali scripts
            sentence_end: Regex::new(r"[.!?।॥]+\s+").expect("static regex is valid"),
        }
    }

    /// Split text into batches of at most MAX_BATCH_CHARS characters,
    /// preferring sentence boundaries, then word boundaries, then raw
    /// characters for words that are longer than a batch.
    fn split_into_batches(&self, text: &str) -> Vec<String> {
        if char_len(text) <= MAX_BATCH_CHARS {
            return vec![text.to_string()];
        }

        let mut sentences = Vec::new();
        let mut last_end = 0;
        for mat in self.sentence_end.find_iter(text) {
            sentences.push(text[last_end..mat.end()].trim());
            last_end = mat.end();
        }
        if last_end < text.len() {
            sentences.push(text[last_end..].trim());
        }

        let mut units: Vec<String> = Vec::new();
        for sentence in sentences.into_iter().filter(|s| !s.is_empty()) {
            if char_len(sentence) <= MAX_BATCH_CHARS {
                units.push(sentence.to_string());
                continue;
            }
            for word in sentence.split_whitespace() {
                if char_len(word) <= MAX_BATCH_CHARS {
                    units.push(word.to_string());
                } else {
                    let chars: Vec<char> = word.chars().collect();
                    for chunk in chars.chunks(MAX_BATCH_CHARS) {
                        units.push(chunk.iter().collect());
                    }
                }
            }
        }

        let mut batches = Vec::new();
        let mut current_batch = String::new();
        for unit in units {
            if !current_batch.is_empty()
                && char_len(&current_batch) + 1 + char_len(&unit) > MAX_BATCH_CHARS
            {
                batches.push(std::mem::take(&mut current_batch));
            }
            if !current_batch.is_empty() {
                current_batch.push(' ');
            }
            current_batch.push_str(&unit);
        }
        if !current_batch.is_empty() {
            batches.push(current_batch);
        }

        batches
    }

    async fn fetch_batch(
        &self,
        batch: &str,
        code: &str,
        index: usize,
        total: usize,
    ) -> Result<Vec<u8>, String> {
        let total = total.to_string();
        let index = index.to_string();
        let text_len = char_len(batch).to_string();

        let response = self
            .http_client
            .get(format!("{}/translate_tts", self.base_url))
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", code),
                ("q", batch),
                ("total", total.as_str()),
                ("idx", index.as_str()),
                ("textlen", text_len.as_str()),
            ])
            .send()
            .await
            .map_err(|e| format!("Google TTS request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("Google TTS returned {} for language '{}'", status, code));
        }

        response
            .bytes()
            .await
            .map(|bytes| bytes.to_vec())
            .map_err(|e| format!("Failed to read Google TTS audio: {}", e))
    }
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

#[async_trait]
impl TtsRepository for GoogleTtsRepository {
    async fn synthesize(&self, text: &str, code: &str) -> Result<Vec<u8>, String> {
        let start_time = std::time::Instant::now();

        let batches = self.split_into_batches(text);
        tracing::debug!(
            batch_count = batches.len(),
            characters_count = char_len(text),
            "Text split into batches"
        );

        // Fetched concurrently but kept in order; MP3 frames concatenate as-is
        let batch_count = batches.len();
        let chunks: Vec<Vec<u8>> = stream::iter(0..batch_count)
            .map(|index| self.fetch_batch(&batches[index], code, index, batch_count))
            .buffered(MAX_CONCURRENT_BATCHES)
            .try_collect()
            .await?;
        let merged_audio = chunks.concat();

        tracing::info!(
            provider = "google_tts",
            code = code,
            latency_ms = start_time.elapsed().as_millis(),
            batch_count = batches.len(),
            audio_size_bytes = merged_audio.len(),
            "TTS synthesis completed"
        );

        Ok(merged_audio)
    }
}
