use crate::batch::{self, BatchFailure, BatchOptions, BatchOutcome};
use crate::config::{ScoringConfig, ScoringOverrides};
use crate::ending::AnalysisEngine;
use crate::error::VdResult;
use crate::quiz::{Quiz, QuizResponse};
use crate::scorer::{AnalysisResult, Analyzer};
use tracing::info;

/// Lookup seams supplied by the host application. Each fails with a typed
/// not-found error when the id is unknown.
pub trait QuizLookup {
    fn find_by_id(&self, quiz_id: &str) -> VdResult<Quiz>;
}

pub trait EngineLookup {
    fn find_by_id(&self, engine_id: &str) -> VdResult<AnalysisEngine>;
}

pub trait ResponseLookup {
    fn find_by_id(&self, response_id: &str) -> VdResult<QuizResponse>;
}

/// Persists results and assigns their ids; the engine never mints ids.
pub trait ResultStore {
    fn create(&self, result: AnalysisResult) -> VdResult<AnalysisResult>;
}

/// Wires the analysis core to its collaborators: entity lookups in front,
/// the result store behind. Lookup failures propagate unchanged.
pub struct AnalysisService<Q, E, R, S> {
    quizzes: Q,
    engines: E,
    responses: R,
    results: S,
}

impl<Q, E, R, S> AnalysisService<Q, E, R, S>
where
    Q: QuizLookup,
    E: EngineLookup,
    R: ResponseLookup,
    S: ResultStore,
{
    pub fn new(quizzes: Q, engines: E, responses: R, results: S) -> Self {
        Self {
            quizzes,
            engines,
            responses,
            results,
        }
    }

    /// Loads the engine, its quiz, and the response, runs one analysis, and
    /// persists the outcome. Re-running never mutates an earlier result;
    /// the store creates a fresh record every time.
    pub fn analyze_response(
        &self,
        engine_id: &str,
        response_id: &str,
        overrides: Option<&ScoringOverrides>,
    ) -> VdResult<AnalysisResult> {
        let engine = self.engines.find_by_id(engine_id)?;
        let quiz = self.quizzes.find_by_id(&engine.quiz_id)?;
        let response = self.responses.find_by_id(response_id)?;

        let analyzer = Analyzer::new(engine, quiz)?;
        let result = analyzer.analyze(&response, overrides)?;
        info!(
            "Analyzed response '{}' under engine '{}' v{}",
            response_id, result.engine_id, result.engine_version
        );
        self.results.create(result)
    }

    /// Batch variant. Responses that fail to load are reported per item,
    /// alongside per-item analysis and persistence failures, without
    /// aborting the batch.
    pub fn analyze_batch(
        &self,
        engine_id: &str,
        response_ids: &[String],
        options: &BatchOptions,
    ) -> VdResult<BatchOutcome> {
        let engine = self.engines.find_by_id(engine_id)?;
        let quiz = self.quizzes.find_by_id(&engine.quiz_id)?;
        let analyzer = Analyzer::new(engine, quiz)?;

        let mut loaded = Vec::with_capacity(response_ids.len());
        let mut load_failures = Vec::new();
        for id in response_ids {
            match self.responses.find_by_id(id) {
                Ok(response) => loaded.push(response),
                Err(error) => load_failures.push(BatchFailure {
                    response_id: id.clone(),
                    error,
                }),
            }
        }

        let mut outcome = batch::run(&analyzer, &loaded, options)?;

        let computed = std::mem::take(&mut outcome.results);
        for result in computed {
            let response_id = result.response_id.clone();
            match self.results.create(result) {
                Ok(stored) => outcome.results.push(stored),
                Err(error) => outcome.failures.push(BatchFailure { response_id, error }),
            }
        }

        outcome.failures.extend(load_failures);
        info!(
            "Batch for engine '{}': {} stored, {} failed",
            engine_id,
            outcome.results.len(),
            outcome.failures.len()
        );
        Ok(outcome)
    }

    /// Pure helper for interactive tuning panels: resolves overrides
    /// against an engine's stored config without running an analysis.
    pub fn resolve_config(
        &self,
        engine_id: &str,
        overrides: Option<&ScoringOverrides>,
    ) -> VdResult<ScoringConfig> {
        let engine = self.engines.find_by_id(engine_id)?;
        engine.scoring_config.resolve(overrides)
    }
}
