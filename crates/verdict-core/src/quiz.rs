use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// The question payload variants a quiz can carry. Only `Rating` answers are
/// ever scored; the other variants are structurally present on a quiz but
/// invisible to the analysis engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Display)]
#[serde(tag = "type", rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum QuestionData {
    #[serde(rename_all = "camelCase")]
    Rating { min_rating: i32, max_rating: i32 },
    #[serde(rename_all = "camelCase")]
    MultipleChoice { choices: Vec<String> },
    Text,
    Email,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub order: u32,
    #[serde(flatten)]
    pub data: QuestionData,
}

/// An immutable snapshot of a published quiz version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: String,
    pub version: String,
    pub title: String,
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn question(&self, question_id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }

    /// Ids of the rating questions, the only kind the engine scores.
    pub fn rating_question_ids(&self) -> impl Iterator<Item = &str> {
        self.questions
            .iter()
            .filter(|q| matches!(q.data, QuestionData::Rating { .. }))
            .map(|q| q.id.as_str())
    }
}

/// A respondent's answer value. Free-text answers are carried through but
/// never scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Number(f64),
    Text(String),
}

impl AnswerValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AnswerValue::Number(n) => Some(*n),
            AnswerValue::Text(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponse {
    pub question_id: String,
    pub value: AnswerValue,
    /// Time the respondent spent on the question. Ignored by scoring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elapsed_ms: Option<u64>,
}

/// One respondent's full submission. Immutable once created; may be
/// re-analyzed any number of times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResponse {
    pub id: String,
    pub quiz_id: String,
    pub answers: Vec<QuestionResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
}
