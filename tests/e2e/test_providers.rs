//! Provider clients against wiremock servers that imitate each upstream API.

use async_openai::{config::OpenAIConfig, Client as OpenAiClient};
use bhasha_ai_services::infrastructure::repositories::{
    AzureTtsRepository, CaptionError, CaptionModelLoader, GoogleTranslateRepository,
    GoogleTtsRepository, HuggingFaceCaptionLoader, LibreTranslateRepository,
    OpenAiSttRepository, SttRepository, TranslationRepository, TtsRepository,
};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{
    body_partial_json, body_string_contains, header, method, path, query_param,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CAPTION_MODEL: &str = "Salesforce/blip-image-captioning-base";

#[tokio::test]
async fn google_translate_joins_segments() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/translate_a/single"))
        .and(query_param("client", "gtx"))
        .and(query_param("sl", "auto"))
        .and(query_param("tl", "hi"))
        .and(query_param("q", "Hello. How are you?"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            [
                ["नमस्ते। ", "Hello. ", null, null, 10],
                ["आप कैसे हैं?", "How are you?", null, null, 10]
            ],
            null,
            "en"
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let repository = GoogleTranslateRepository::new(server.uri(), reqwest::Client::new());
    let translated = repository
        .translate("Hello. How are you?", "auto", "hi")
        .await
        .unwrap();

    assert_eq!(translated, "नमस्ते। आप कैसे हैं?");
}

#[tokio::test]
async fn google_translate_reports_error_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/translate_a/single"))
        .respond_with(ResponseTemplate::new(429).set_body_string("Too Many Requests"))
        .mount(&server)
        .await;

    let repository = GoogleTranslateRepository::new(server.uri(), reqwest::Client::new());
    let err = repository.translate("Hello", "auto", "hi").await.unwrap_err();

    assert!(err.contains("429"), "{}", err);
}

#[tokio::test]
async fn libre_translate_sends_api_key() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/translate"))
        .and(body_partial_json(json!({
            "q": "Hello",
            "source": "auto",
            "target": "bn",
            "format": "text",
            "api_key": "libre-key"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "translatedText": "হ্যালো"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let repository = LibreTranslateRepository::new(
        format!("{}/", server.uri()),
        Some("libre-key".to_string()),
        reqwest::Client::new(),
    );
    let translated = repository.translate("Hello", "auto", "bn").await.unwrap();

    assert_eq!(translated, "হ্যালো");
}

#[tokio::test]
async fn azure_tts_posts_ssml_for_voice() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/cognitiveservices/v1"))
        .and(header("Ocp-Apim-Subscription-Key", "azure-key"))
        .and(header("Content-Type", "application/ssml+xml"))
        .and(header(
            "X-Microsoft-OutputFormat",
            "audio-24khz-48kbitrate-mono-mp3",
        ))
        .and(body_string_contains("xml:lang='hi-IN'"))
        .and(body_string_contains("<voice name='hi-IN-SwaraNeural'>"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0x49; 3000]))
        .expect(1)
        .mount(&server)
        .await;

    let repository = AzureTtsRepository::new(
        format!("{}/cognitiveservices/v1", server.uri()),
        "azure-key".to_string(),
        reqwest::Client::new(),
    );
    let audio = repository
        .synthesize("नमस्ते", "hi-IN-SwaraNeural")
        .await
        .unwrap();

    assert_eq!(audio.len(), 3000);
}

#[tokio::test]
async fn azure_tts_reports_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let repository = AzureTtsRepository::new(
        format!("{}/cognitiveservices/v1", server.uri()),
        "wrong-key".to_string(),
        reqwest::Client::new(),
    );

    assert!(repository.synthesize("Hello", "en-IN-NeerjaNeural").await.is_err());
}

#[tokio::test]
async fn google_tts_requests_each_batch_and_concatenates_audio() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/translate_tts"))
        .and(query_param("client", "tw-ob"))
        .and(query_param("tl", "hi"))
        .and(query_param("total", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xFF; 600]))
        .expect(3)
        .mount(&server)
        .await;

    let sentence = format!("{}.", "क".repeat(79));
    let text = vec![sentence.as_str(); 3].join(" ");

    let repository = GoogleTtsRepository::new(server.uri(), reqwest::Client::new());
    let audio = repository.synthesize(&text, "hi").await.unwrap();

    assert_eq!(audio.len(), 1800);
}

#[tokio::test]
async fn google_tts_fetches_long_text_concurrently_in_order() {
    let server = MockServer::start().await;

    for index in 0..16u8 {
        Mock::given(method("GET"))
            .and(path("/translate_tts"))
            .and(query_param("total", "16"))
            .and(query_param("idx", index.to_string()))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_bytes(vec![index; 10])
                    .set_delay(Duration::from_millis(250)),
            )
            .expect(1)
            .mount(&server)
            .await;
    }

    let sentence = format!("{}.", "क".repeat(79));
    let text = vec![sentence.as_str(); 16].join(" ");

    // One batch at a time would take at least 4s
    let repository = GoogleTtsRepository::new(server.uri(), reqwest::Client::new());
    let audio = tokio::time::timeout(Duration::from_secs(2), repository.synthesize(&text, "hi"))
        .await
        .expect("batches should be fetched concurrently")
        .unwrap();

    let expected: Vec<u8> = (0..16u8).flat_map(|index| vec![index; 10]).collect();
    assert_eq!(audio, expected);
}

#[tokio::test]
async fn google_tts_fails_when_any_batch_fails() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/translate_tts"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let repository = GoogleTtsRepository::new(server.uri(), reqwest::Client::new());
    let err = repository.synthesize("ᱡᱚᱦᱟᱨ", "sat").await.unwrap_err();

    assert!(err.contains("404"), "{}", err);
}

#[tokio::test]
async fn whisper_transcribes_with_language_hint() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/audio/transcriptions"))
        .and(header("Authorization", "Bearer openai-key"))
        .and(body_string_contains("whisper-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "text": "नमस्ते" })))
        .expect(1)
        .mount(&server)
        .await;

    let config = OpenAIConfig::new()
        .with_api_key("openai-key")
        .with_api_base(format!("{}/v1", server.uri()));
    let repository = OpenAiSttRepository::new(
        Arc::new(OpenAiClient::with_config(config)),
        "whisper-1".to_string(),
    );

    let transcript = repository
        .transcribe(b"RIFF....WAVE", "clip.wav", "hi")
        .await
        .unwrap();

    assert_eq!(transcript, "नमस्ते");
}

async fn mount_caption_status(server: &MockServer, status: u16) {
    Mock::given(method("GET"))
        .and(path(format!("/status/{}", CAPTION_MODEL)))
        .respond_with(ResponseTemplate::new(status).set_body_json(json!({ "loaded": true })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn huggingface_caption_returns_generated_text() {
    let server = MockServer::start().await;
    mount_caption_status(&server, 200).await;

    Mock::given(method("POST"))
        .and(path(format!("/models/{}", CAPTION_MODEL)))
        .and(header("Authorization", "Bearer hf-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "generated_text": "a man riding a horse" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let loader = HuggingFaceCaptionLoader::new(
        server.uri(),
        CAPTION_MODEL.to_string(),
        Some("hf-token".to_string()),
        reqwest::Client::new(),
    );
    let model = loader.load().await.unwrap();

    assert_eq!(model.caption(b"\x89PNG").await.unwrap(), "a man riding a horse");
}

#[tokio::test]
async fn huggingface_caption_maps_loading_model_to_unavailable() {
    let server = MockServer::start().await;
    mount_caption_status(&server, 200).await;

    Mock::given(method("POST"))
        .and(path(format!("/models/{}", CAPTION_MODEL)))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "error": "Model is currently loading",
            "estimated_time": 20.0
        })))
        .mount(&server)
        .await;

    let loader = HuggingFaceCaptionLoader::new(
        server.uri(),
        CAPTION_MODEL.to_string(),
        None,
        reqwest::Client::new(),
    );
    let model = loader.load().await.unwrap();

    assert!(matches!(
        model.caption(b"\x89PNG").await,
        Err(CaptionError::Unavailable(_))
    ));
}

#[tokio::test]
async fn huggingface_loader_fails_for_missing_model() {
    let server = MockServer::start().await;
    mount_caption_status(&server, 404).await;

    let loader = HuggingFaceCaptionLoader::new(
        server.uri(),
        CAPTION_MODEL.to_string(),
        None,
        reqwest::Client::new(),
    );

    assert!(matches!(
        loader.load().await,
        Err(CaptionError::Unavailable(_))
    ));
}
