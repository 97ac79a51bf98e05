use crate::e2e::helpers;

use bhasha_ai_services::domain::caption::MODEL_UNAVAILABLE;
use helpers::api_client::FilePart;
use helpers::fakes::FakeCaptionLoader;
use helpers::{FakeProviders, TestContext};
use hyper::StatusCode;
use test_context::test_context;

const WAV: &[u8] = b"RIFF\x24\x00\x00\x00WAVEfmt ";
const PNG: &[u8] = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR";

fn audio() -> FilePart<'static> {
    FilePart {
        filename: "clip.wav",
        content_type: "audio/wav",
        bytes: WAV,
    }
}

fn image() -> FilePart<'static> {
    FilePart {
        filename: "photo.png",
        content_type: "image/png",
        bytes: PNG,
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_transcribe_with_language_hint(ctx: &TestContext) {
    let response = ctx
        .client
        .post_multipart("/stt", &[("language", "Hindi")], Some(audio()))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.field("transcript"), Some("नमस्ते"));

    let whisper = ctx.providers.whisper.as_ref().unwrap();
    assert_eq!(whisper.calls(), vec!["hi"]);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_default_to_english_and_fall_back_to_detection(ctx: &TestContext) {
    let response = ctx
        .client
        .post_multipart("/stt", &[], Some(audio()))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.field("transcript"), Some("hello"));

    let whisper = ctx.providers.whisper.as_ref().unwrap();
    assert_eq!(whisper.calls(), vec!["en", "auto"]);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_transcribe_dogri_through_hindi(ctx: &TestContext) {
    let response = ctx
        .client
        .post_multipart("/stt", &[("language", "Dogri")], Some(audio()))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.field("transcript"), Some("नमस्ते"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_upload_without_file(ctx: &TestContext) {
    let response = ctx
        .client
        .post_multipart("/stt", &[("language", "Hindi")], None)
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("Missing 'file' upload");
}

#[tokio::test]
async fn it_should_be_unavailable_without_transcription_provider() {
    let ctx = TestContext::with_providers(FakeProviders {
        whisper: None,
        ..FakeProviders::default()
    })
    .await;

    let response = ctx
        .client
        .post_multipart("/stt", &[("language", "Hindi")], Some(audio()))
        .await
        .unwrap();

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_describe_image(ctx: &TestContext) {
    let response = ctx
        .client
        .post_multipart("/describe-image", &[], Some(image()))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.field("description"), Some("A temple on a hill."));

    let response = ctx.client.get("/health/ready").await.unwrap();
    assert_eq!(response.body.as_ref().unwrap()["captioning"]["model_loaded"], true);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_load_caption_model_once(ctx: &TestContext) {
    for _ in 0..3 {
        ctx.client
            .post_multipart("/describe-image", &[], Some(image()))
            .await
            .unwrap()
            .assert_status(StatusCode::OK);
    }

    assert_eq!(ctx.providers.caption_loader.loads(), 1);
}

#[tokio::test]
async fn it_should_degrade_when_caption_model_is_unavailable() {
    let loader = FakeCaptionLoader::unavailable();
    let ctx = TestContext::with_providers(FakeProviders {
        caption_loader: loader.clone(),
        ..FakeProviders::default()
    })
    .await;

    for _ in 0..2 {
        let response = ctx
            .client
            .post_multipart("/describe-image", &[], Some(image()))
            .await
            .unwrap();

        response.assert_status(StatusCode::OK);
        assert_eq!(response.field("description"), Some(MODEL_UNAVAILABLE));
    }

    // Failed loads are retried on the next request
    assert_eq!(loader.loads(), 2);
}
