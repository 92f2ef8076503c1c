use crate::config::ScoringConfig;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Ties one question to the answers a category considers "correct".
/// Multiple rules may reference the same question under different endings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRule {
    #[builder(setter(into))]
    pub question_id: String,
    pub ideal_answers: Vec<f64>,
    #[builder(default = true)]
    pub is_primary: bool,
}

/// One classification outcome a response can be scored against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct EndingDefinition {
    #[builder(setter(into))]
    pub ending_id: String,
    #[builder(setter(into))]
    pub name: String,
    #[builder(default)]
    pub rules: Vec<QuestionRule>,
}

/// The full scoring definition for one quiz: ending rule sets plus the
/// tunable configuration. Versioned and immutable once published; the
/// repository upstream guarantees at most one published engine per quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisEngine {
    #[builder(setter(into))]
    pub id: String,
    #[builder(setter(into))]
    pub version: String,
    #[builder(setter(into))]
    pub name: String,
    #[builder(setter(into))]
    pub quiz_id: String,
    #[builder(default)]
    pub scoring_config: ScoringConfig,
    pub endings: Vec<EndingDefinition>,
    #[serde(default)]
    #[builder(default)]
    pub is_published: bool,
    #[serde(default)]
    #[builder(default)]
    pub is_active: bool,
}

impl AnalysisEngine {
    pub fn ending(&self, ending_id: &str) -> Option<&EndingDefinition> {
        self.endings.iter().find(|e| e.ending_id == ending_id)
    }
}
