use async_openai::{config::OpenAIConfig, Client as OpenAiClient};
use bhasha_ai_services::controllers::{
    caption::CaptionController, health::HealthController, stt::SttController,
    translate::TranslateController, tts::TtsController,
};
use bhasha_ai_services::domain::{
    caption::CaptionService,
    language::{LanguageTables, Provider},
    stt::SttService,
    translation::TranslationService,
    tts::TtsService,
};
use bhasha_ai_services::infrastructure::config::{Config, LogFormat};
use bhasha_ai_services::infrastructure::http::{start_http_server, Controllers};
use bhasha_ai_services::infrastructure::repositories::{
    AzureTtsRepository, GoogleTranslateRepository, GoogleTtsRepository,
    HuggingFaceCaptionLoader, LibreTranslateRepository, OpenAiSttRepository, SttRepository,
    TranslationRepository, TtsRepository,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Bhasha AI services on {}:{}",
        config.host,
        config.port
    );

    let config = Arc::new(config);
    let tables = Arc::new(LanguageTables::builtin());
    let http_client = reqwest::Client::builder()
        .timeout(config.provider_timeout())
        .build()?;
    let timeout = config.provider_timeout();

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate provider repositories; unconfigured providers are left out
    tracing::info!("Instantiating provider repositories...");
    let mut translators: HashMap<Provider, Arc<dyn TranslationRepository>> = HashMap::new();
    translators.insert(
        Provider::GoogleTranslate,
        Arc::new(GoogleTranslateRepository::new(
            config.google_translate_url.clone(),
            http_client.clone(),
        )),
    );
    match &config.libretranslate_url {
        Some(url) => {
            translators.insert(
                Provider::LibreTranslate,
                Arc::new(LibreTranslateRepository::new(
                    url.clone(),
                    config.libretranslate_api_key.clone(),
                    http_client.clone(),
                )),
            );
        }
        None => tracing::warn!("LIBRETRANSLATE_URL not set, secondary translator disabled"),
    }

    let mut synthesizers: HashMap<Provider, Arc<dyn TtsRepository>> = HashMap::new();
    match &config.azure_speech_key {
        Some(key) => {
            synthesizers.insert(
                Provider::AzureNeuralTts,
                Arc::new(AzureTtsRepository::new(
                    config.azure_tts_endpoint(),
                    key.clone(),
                    http_client.clone(),
                )),
            );
        }
        None => tracing::warn!("AZURE_SPEECH_KEY not set, neural voices disabled"),
    }
    synthesizers.insert(
        Provider::GoogleTts,
        Arc::new(GoogleTtsRepository::new(
            config.google_tts_url.clone(),
            http_client.clone(),
        )),
    );

    let mut transcribers: HashMap<Provider, Arc<dyn SttRepository>> = HashMap::new();
    match &config.openai_api_key {
        Some(key) => {
            let openai_config = OpenAIConfig::new()
                .with_api_key(key.clone())
                .with_api_base(config.openai_api_base.clone());
            transcribers.insert(
                Provider::Whisper,
                Arc::new(OpenAiSttRepository::new(
                    Arc::new(OpenAiClient::with_config(openai_config)),
                    config.stt_model.clone(),
                )),
            );
        }
        None => tracing::warn!("OPENAI_API_KEY not set, speech-to-text disabled"),
    }

    let caption_loader = Arc::new(HuggingFaceCaptionLoader::new(
        config.hf_inference_url.clone(),
        config.caption_model.clone(),
        config.hf_api_token.clone(),
        http_client.clone(),
    ));

    // 2. Instantiate services (inject repositories)
    tracing::info!("Instantiating services...");
    let translation_service = Arc::new(TranslationService::new(
        tables.clone(),
        translators,
        timeout,
    ));
    let tts_service = Arc::new(TtsService::new(
        tables.clone(),
        synthesizers,
        config.min_audio_bytes,
        timeout,
    ));
    let stt_service = Arc::new(SttService::new(tables.clone(), transcribers, timeout));
    let caption_service = Arc::new(CaptionService::new(caption_loader, timeout));

    // 3. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let controllers = Controllers {
        health: Arc::new(HealthController::new(
            translation_service.clone(),
            tts_service.clone(),
            stt_service.clone(),
            caption_service.clone(),
        )),
        translate: Arc::new(TranslateController::new(
            translation_service,
            config.max_text_chars,
        )),
        tts: Arc::new(TtsController::new(tts_service, config.max_text_chars)),
        stt: Arc::new(SttController::new(stt_service)),
        caption: Arc::new(CaptionController::new(caption_service)),
    };

    // Start HTTP server with all routes
    start_http_server(config, tables, controllers).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let default_filter = if config.is_development() {
        "bhasha_ai_services=debug,tower_http=debug"
    } else {
        "bhasha_ai_services=info,tower_http=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
