pub mod caption;
pub mod health;
pub mod languages;
pub mod stt;
pub mod translate;
pub mod tts;
pub mod upload;

use axum::http::Uri;

use crate::error::{AppError, AppResult};

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

/// Reject blank text and text over the configured limit before any provider
/// is called
pub(crate) fn validate_text_length(text: &str, max_chars: usize) -> AppResult<()> {
    if text.trim().is_empty() {
        return Err(AppError::BadRequest("Text cannot be empty".to_string()));
    }

    let char_count = text.chars().count();
    if char_count > max_chars {
        return Err(AppError::PayloadTooLarge(format!(
            "Text must be {} characters or less, got {}",
            max_chars, char_count
        )));
    }

    Ok(())
}
