use crate::domain::language::{Provider, Tier};
use std::time::Duration;

/// Why a single stage of a fallback chain did not produce a result
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StageError {
    /// Network, HTTP status or decoding failure reported by the provider client
    #[error("provider call failed: {0}")]
    Transport(String),
    /// The provider answered, but the answer is unusable
    #[error("result rejected: {0}")]
    Rejected(String),
    #[error("timed out after {}ms", .0.as_millis())]
    TimedOut(Duration),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StageFailure {
    pub provider: Provider,
    pub code: String,
    pub tier: Tier,
    pub error: StageError,
}

impl std::fmt::Display for StageFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}, {}]: {}",
            self.provider, self.code, self.tier, self.error
        )
    }
}
