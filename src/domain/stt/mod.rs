pub mod service;

pub use service::{SttService, SttServiceApi, SttServiceError, TranscriptionResult, STT_PLAN};
