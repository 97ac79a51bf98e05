pub mod chain;
pub mod error;

pub use chain::{ChainOutcome, Exhaustion, FallbackChain, Stage, StagePlan, StageReport};
pub use error::{StageError, StageFailure};
