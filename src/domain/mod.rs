pub mod caption;
pub mod fallback;
pub mod language;
pub mod stt;
pub mod translation;
pub mod tts;
