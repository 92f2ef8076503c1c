use crate::config::ScoringOverrides;
use crate::consts::DEFAULT_BATCH_CONCURRENCY;
use crate::ending::AnalysisEngine;
use crate::error::{VdResult, VerdictError};
use crate::quiz::{Quiz, QuizResponse};
use crate::scorer::{AnalysisResult, Analyzer};
use rayon::prelude::*;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Upper bound on simultaneously running analyses.
    pub concurrency: usize,
    /// Overrides applied to every item in the batch.
    pub overrides: Option<ScoringOverrides>,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_BATCH_CONCURRENCY,
            overrides: None,
        }
    }
}

#[derive(Debug)]
pub struct BatchFailure {
    pub response_id: String,
    pub error: VerdictError,
}

#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub results: Vec<AnalysisResult>,
    pub failures: Vec<BatchFailure>,
}

impl BatchOutcome {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.len() + self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Analyzes every response against one prepared engine/quiz pair on a pool
/// bounded by `options.concurrency`. One item's failure lands in
/// `failures` and never aborts the rest; every item stays traceable through
/// its response id.
pub fn run(
    analyzer: &Analyzer,
    responses: &[QuizResponse],
    options: &BatchOptions,
) -> VdResult<BatchOutcome> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(options.concurrency.max(1))
        .build()
        .map_err(|e| VerdictError::Config(format!("batch worker pool: {e}")))?;

    let items: Vec<Result<AnalysisResult, BatchFailure>> = pool.install(|| {
        responses
            .par_iter()
            .map(|response| {
                analyzer
                    .analyze(response, options.overrides.as_ref())
                    .map_err(|error| BatchFailure {
                        response_id: response.id.clone(),
                        error,
                    })
            })
            .collect()
    });

    let mut outcome = BatchOutcome::default();
    for item in items {
        match item {
            Ok(result) => outcome.results.push(result),
            Err(failure) => outcome.failures.push(failure),
        }
    }

    if !outcome.is_clean() {
        warn!(
            "Batch finished with {} failed of {} responses",
            outcome.failures.len(),
            responses.len()
        );
    }
    Ok(outcome)
}

/// Convenience wrapper for callers holding bare entities: builds the
/// analyzer and runs with default options.
pub fn batch_analyze(
    engine: &AnalysisEngine,
    quiz: &Quiz,
    responses: &[QuizResponse],
) -> VdResult<BatchOutcome> {
    let analyzer = Analyzer::new(engine.clone(), quiz.clone())?;
    run(&analyzer, responses, &BatchOptions::default())
}
