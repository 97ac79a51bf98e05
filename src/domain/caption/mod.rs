pub mod service;

pub use service::{CaptionService, CAPTION_FAILED, MODEL_UNAVAILABLE};
