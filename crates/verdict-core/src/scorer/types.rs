use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One ending's share of the final classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndingResult {
    pub ending_id: String,
    /// Raw accumulated score.
    pub points: f64,
    /// Share of the full, unfiltered distribution, 0-100.
    pub percentage: f64,
}

impl EndingResult {
    /// Percentage rounded to one decimal. For display only; the pipeline
    /// always carries full precision.
    pub fn display_percentage(&self) -> f64 {
        (self.percentage * 10.0).round() / 10.0
    }
}

/// One rule's evaluated contribution, retained when the engine runs with
/// `enableQuestionBreakdown`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleContribution {
    pub ending_id: String,
    pub question_id: String,
    pub is_primary: bool,
    pub distance: f64,
    pub points: f64,
}

/// The output of one analysis invocation. Created once per run and never
/// mutated; re-analysis produces a fresh record (audit trail).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Assigned by the result store on persist, never by the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub engine_id: String,
    /// Pinned at analysis time; results are never re-interpreted under a
    /// newer engine.
    pub engine_version: String,
    pub response_id: String,
    pub ending_results: Vec<EndingResult>,
    pub analyzed_at: DateTime<Utc>,
    pub config_fingerprint: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_breakdown: Option<Vec<RuleContribution>>,
}

impl AnalysisResult {
    /// The winning ending, if any survived threshold filtering.
    pub fn top_ending(&self) -> Option<&EndingResult> {
        self.ending_results.first()
    }
}

/// Per-ending tallies prior to normalization, split by weight class so the
/// min-points floors apply per class.
#[derive(Debug, Clone, Default)]
pub struct RawEndingScore {
    pub ending_id: String,
    pub primary_points: f64,
    pub secondary_points: f64,
}

impl RawEndingScore {
    pub fn total(&self) -> f64 {
        self.primary_points + self.secondary_points
    }
}
