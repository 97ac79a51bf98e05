pub mod request_id;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers::{
    self,
    caption::CaptionController, health, health::HealthController, languages,
    stt::SttController, translate::TranslateController, tts::TtsController,
};
use crate::domain::language::LanguageTables;
use crate::infrastructure::config::Config;

pub use request_id::{request_id_middleware, X_REQUEST_ID};

/// Whisper's upload limit
const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Controllers served by the router
pub struct Controllers {
    pub health: Arc<HealthController>,
    pub translate: Arc<TranslateController>,
    pub tts: Arc<TtsController>,
    pub stt: Arc<SttController>,
    pub caption: Arc<CaptionController>,
}

/// Build the application router with every route and middleware layer
pub fn create_router(tables: Arc<LanguageTables>, controllers: Controllers) -> Router {
    let health_routes = Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(controllers.health);

    let language_routes = Router::new()
        .route("/languages", get(languages::list_languages))
        .with_state(tables);

    let translate_routes = Router::new()
        .route("/translate", post(TranslateController::translate))
        .with_state(controllers.translate);

    let tts_routes = Router::new()
        .route("/tts", post(TtsController::synthesize))
        .route("/tts/audio", post(TtsController::synthesize_audio))
        .with_state(controllers.tts);

    let stt_routes = Router::new()
        .route("/stt", post(SttController::transcribe))
        .with_state(controllers.stt)
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES));

    let caption_routes = Router::new()
        .route("/describe-image", post(CaptionController::describe_image))
        .with_state(controllers.caption)
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES));

    Router::new()
        .merge(health_routes)
        .merge(language_routes)
        .merge(translate_routes)
        .merge(tts_routes)
        .merge(stt_routes)
        .merge(caption_routes)
        .fallback(controllers::not_found)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    tables: Arc<LanguageTables>,
    controllers: Controllers,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(tables, controllers);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
