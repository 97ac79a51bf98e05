pub mod azure_tts_repository;
pub mod caption_repository;
pub mod google_translate_repository;
pub mod google_tts_repository;
pub mod huggingface_caption_repository;
pub mod libre_translate_repository;
pub mod openai_stt_repository;
pub mod stt_repository;
pub mod translation_repository;
pub mod tts_repository;

pub use azure_tts_repository::AzureTtsRepository;
pub use caption_repository::{CaptionError, CaptionModelLoader, CaptionRepository};
pub use google_translate_repository::GoogleTranslateRepository;
pub use google_tts_repository::GoogleTtsRepository;
pub use huggingface_caption_repository::HuggingFaceCaptionLoader;
pub use libre_translate_repository::LibreTranslateRepository;
pub use openai_stt_repository::OpenAiSttRepository;
pub use stt_repository::SttRepository;
pub use translation_repository::TranslationRepository;
pub use tts_repository::TtsRepository;
