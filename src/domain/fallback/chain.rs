use super::error::{StageError, StageFailure};
use crate::domain::language::{LanguageTables, Provider, Resolution, Tier};
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Stage descriptor: which provider to call and which tier of its table
/// supplies the language code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StagePlan {
    pub provider: Provider,
    pub tier: Tier,
}

impl StagePlan {
    pub const fn new(provider: Provider, tier: Tier) -> Self {
        Self { provider, tier }
    }
}

/// A planned stage bound to a concrete provider client and code
pub struct Stage<P: ?Sized> {
    pub provider: Provider,
    pub client: Arc<P>,
    pub code: String,
    pub tier: Tier,
}

impl<P: ?Sized> Clone for Stage<P> {
    fn clone(&self) -> Self {
        Self {
            provider: self.provider,
            client: self.client.clone(),
            code: self.code.clone(),
            tier: self.tier,
        }
    }
}

/// Which stage produced the accepted result
#[derive(Debug, Clone, PartialEq)]
pub struct StageReport {
    pub provider: Provider,
    pub code: String,
    pub tier: Tier,
    /// 1-based position of the stage in the chain
    pub position: usize,
}

/// Every stage failed
#[derive(Debug, Clone, PartialEq)]
pub struct Exhaustion {
    pub failures: Vec<StageFailure>,
}

impl Exhaustion {
    pub fn summary(&self) -> String {
        if self.failures.is_empty() {
            return "no provider available".to_string();
        }

        self.failures
            .iter()
            .map(|f| f.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug)]
pub enum ChainOutcome<T> {
    Accepted {
        value: T,
        report: StageReport,
        /// Stages that failed before the accepted one
        failures: Vec<StageFailure>,
    },
    Exhausted(Exhaustion),
}

/// Ordered provider attempts for one request.
///
/// Stages run strictly in order and the first validated result wins. A stage
/// that errors, times out or is rejected by the validator only advances the
/// chain; nothing escapes `run` except the outcome.
pub struct FallbackChain<P: ?Sized> {
    language: String,
    stages: Vec<Stage<P>>,
    timeout: Duration,
}

impl<P: ?Sized + Send + Sync> FallbackChain<P> {
    /// Bind a plan to the configured clients.
    ///
    /// Steps are skipped when the provider is not configured or its table has
    /// no code for the requested tier. A step repeating an earlier
    /// (provider, code) pair is skipped as well since it would get the same
    /// answer.
    pub fn build(
        language: &str,
        plan: &[StagePlan],
        tables: &LanguageTables,
        clients: &HashMap<Provider, Arc<P>>,
        timeout: Duration,
    ) -> Self {
        let mut stages: Vec<Stage<P>> = Vec::with_capacity(plan.len());

        for step in plan {
            let Some(client) = clients.get(&step.provider) else {
                tracing::debug!(provider = %step.provider, "Provider not configured, skipping stage");
                continue;
            };

            let Some(code) = tables.code_for(language, step.provider, step.tier) else {
                continue;
            };

            if stages
                .iter()
                .any(|s| s.provider == step.provider && s.code == code)
            {
                continue;
            }

            stages.push(Stage {
                provider: step.provider,
                client: client.clone(),
                code: code.to_string(),
                tier: step.tier,
            });
        }

        if let Some(resolution) = primary_resolution(language, plan, &stages, tables) {
            if resolution.is_degraded() {
                tracing::info!(
                    language = %language,
                    code = %resolution.code,
                    tier = %resolution.tier,
                    "No direct support for language, using degraded match"
                );
            }
        }

        Self {
            language: language.to_string(),
            stages,
            timeout,
        }
    }

    pub fn stages(&self) -> &[Stage<P>] {
        &self.stages
    }

    /// Run stages until one produces a value the validator accepts
    pub async fn run<T, F, Fut, V>(&self, attempt: F, validate: V) -> ChainOutcome<T>
    where
        F: Fn(Stage<P>) -> Fut,
        Fut: Future<Output = Result<T, String>>,
        V: Fn(&Stage<P>, &T) -> Result<(), String>,
    {
        let mut failures = Vec::new();

        for (index, stage) in self.stages.iter().enumerate() {
            let start_time = Instant::now();

            tracing::debug!(
                language = %self.language,
                provider = %stage.provider,
                code = %stage.code,
                tier = %stage.tier,
                position = index + 1,
                "Attempting stage"
            );

            let error = match tokio::time::timeout(self.timeout, attempt(stage.clone())).await {
                Err(_) => StageError::TimedOut(self.timeout),
                Ok(Err(reason)) => StageError::Transport(reason),
                Ok(Ok(value)) => match validate(stage, &value) {
                    Ok(()) => {
                        tracing::info!(
                            language = %self.language,
                            provider = %stage.provider,
                            code = %stage.code,
                            tier = %stage.tier,
                            position = index + 1,
                            latency_ms = start_time.elapsed().as_millis(),
                            "Stage accepted"
                        );

                        return ChainOutcome::Accepted {
                            value,
                            report: StageReport {
                                provider: stage.provider,
                                code: stage.code.clone(),
                                tier: stage.tier,
                                position: index + 1,
                            },
                            failures,
                        };
                    }
                    Err(reason) => StageError::Rejected(reason),
                },
            };

            tracing::warn!(
                language = %self.language,
                provider = %stage.provider,
                code = %stage.code,
                tier = %stage.tier,
                error = %error,
                latency_ms = start_time.elapsed().as_millis(),
                "Stage failed, trying next"
            );

            failures.push(StageFailure {
                provider: stage.provider,
                code: stage.code.clone(),
                tier: stage.tier,
                error,
            });
        }

        tracing::error!(
            language = %self.language,
            attempts = failures.len(),
            "All stages failed"
        );

        ChainOutcome::Exhausted(Exhaustion { failures })
    }
}

/// How the chain's leading provider resolves the language: the first bound
/// stage's provider, or the plan's first provider when nothing is bound.
fn primary_resolution<P: ?Sized>(
    language: &str,
    plan: &[StagePlan],
    stages: &[Stage<P>],
    tables: &LanguageTables,
) -> Option<Resolution> {
    let provider = stages
        .first()
        .map(|s| s.provider)
        .or_else(|| plan.first().map(|s| s.provider))?;

    Some(tables.resolve(language, provider))
}
