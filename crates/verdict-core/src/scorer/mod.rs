pub mod accumulate;
pub mod distance;
pub mod normalize;
pub mod types;

pub use self::types::{AnalysisResult, EndingResult, RuleContribution};

use crate::config::ScoringOverrides;
use crate::ending::AnalysisEngine;
use crate::error::{VdResult, VerdictError};
use crate::fingerprint::ConfigFingerprint;
use crate::quiz::{Quiz, QuizResponse};
use accumulate::AnswerIndex;
use chrono::{DateTime, Utc};
use itertools::Itertools;
use std::collections::HashSet;
use tracing::warn;

/// Scores responses against one engine/quiz pair. Built once per pair, then
/// shared freely: analysis is pure arithmetic over the prepared lookups, so
/// an `Analyzer` can serve any number of concurrent callers.
#[derive(Debug)]
pub struct Analyzer {
    engine: AnalysisEngine,
    quiz: Quiz,
    /// Question ids that can ever score: the quiz's rating questions.
    scoreable: HashSet<String>,
    /// Per ending: rule indices in evaluation order (ascending question id,
    /// then declaration order). The fixed order keeps float accumulation
    /// bit-identical across runs.
    rule_order: Vec<Vec<usize>>,
}

impl Analyzer {
    pub fn new(engine: AnalysisEngine, quiz: Quiz) -> VdResult<Self> {
        if engine.quiz_id != quiz.id {
            return Err(VerdictError::EngineQuizMismatch {
                engine_id: engine.id.clone(),
                expected: engine.quiz_id.clone(),
                actual: quiz.id.clone(),
            });
        }

        let scoreable: HashSet<String> =
            quiz.rating_question_ids().map(str::to_owned).collect();

        let mut rule_order = Vec::with_capacity(engine.endings.len());
        for ending in &engine.endings {
            // Authoring defects are reported once here; scoring silently
            // skips the affected rules.
            for rule in &ending.rules {
                if rule.ideal_answers.is_empty() {
                    warn!(
                        "Ending '{}': rule for question '{}' has no ideal answers and will never score",
                        ending.ending_id, rule.question_id
                    );
                } else if !scoreable.contains(&rule.question_id) {
                    match quiz.question(&rule.question_id) {
                        Some(q) => warn!(
                            "Ending '{}': rule targets {} question '{}', which cannot score",
                            ending.ending_id, q.data, rule.question_id
                        ),
                        None => warn!(
                            "Ending '{}': rule targets '{}', which is not on quiz '{}'",
                            ending.ending_id, rule.question_id, quiz.id
                        ),
                    }
                }
            }

            let order: Vec<usize> = (0..ending.rules.len())
                .sorted_by_key(|&i| (ending.rules[i].question_id.clone(), i))
                .collect();
            rule_order.push(order);
        }

        Ok(Self {
            engine,
            quiz,
            scoreable,
            rule_order,
        })
    }

    pub fn engine(&self) -> &AnalysisEngine {
        &self.engine
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    /// Runs one full analysis, stamped with the current time.
    pub fn analyze(
        &self,
        response: &QuizResponse,
        overrides: Option<&ScoringOverrides>,
    ) -> VdResult<AnalysisResult> {
        self.analyze_at(response, overrides, Utc::now())
    }

    /// Same computation with a caller-supplied timestamp. Given identical
    /// inputs and timestamp, the output is bit-identical.
    pub fn analyze_at(
        &self,
        response: &QuizResponse,
        overrides: Option<&ScoringOverrides>,
        analyzed_at: DateTime<Utc>,
    ) -> VdResult<AnalysisResult> {
        if response.quiz_id != self.quiz.id {
            return Err(VerdictError::ResponseQuizMismatch {
                response_id: response.id.clone(),
                expected: self.quiz.id.clone(),
                actual: response.quiz_id.clone(),
            });
        }

        let config = self.engine.scoring_config.resolve(overrides)?;
        let answers = self.index_answers(response);

        let mut breakdown = config.enable_question_breakdown.then(Vec::new);
        let mut raw_scores = Vec::with_capacity(self.engine.endings.len());
        for (ending, order) in self.engine.endings.iter().zip(&self.rule_order) {
            raw_scores.push(accumulate::score_ending(
                ending,
                order,
                &answers,
                &config,
                &mut breakdown,
            ));
        }

        let ending_results = normalize::normalize(&raw_scores, &config);
        let fingerprint = ConfigFingerprint::from_parts(&self.engine, &config);

        Ok(AnalysisResult {
            id: None,
            engine_id: self.engine.id.clone(),
            engine_version: self.engine.version.clone(),
            response_id: response.id.clone(),
            ending_results,
            analyzed_at,
            config_fingerprint: fingerprint.hash,
            question_breakdown: breakdown,
        })
    }

    /// Numeric answers to scoreable questions. A later answer to the same
    /// question overwrites an earlier one.
    fn index_answers(&self, response: &QuizResponse) -> AnswerIndex {
        let mut index = AnswerIndex::new();
        for answer in &response.answers {
            if !self.scoreable.contains(&answer.question_id) {
                continue;
            }
            if let Some(value) = answer.value.as_number() {
                index.insert(answer.question_id.clone(), value);
            }
        }
        index
    }
}

/// One-shot analysis for callers that do not hold a prepared [`Analyzer`].
pub fn analyze(
    engine: &AnalysisEngine,
    quiz: &Quiz,
    response: &QuizResponse,
    overrides: Option<&ScoringOverrides>,
) -> VdResult<AnalysisResult> {
    Analyzer::new(engine.clone(), quiz.clone())?.analyze(response, overrides)
}
