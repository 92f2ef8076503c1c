#![allow(dead_code)] // Not every test binary uses every helper

use verdict_core::config::ScoringConfig;
use verdict_core::ending::{AnalysisEngine, EndingDefinition, QuestionRule};
use verdict_core::quiz::{
    AnswerValue, Question, QuestionData, QuestionResponse, Quiz, QuizResponse,
};

pub fn rating_question(id: &str, order: u32) -> Question {
    Question {
        id: id.to_string(),
        order,
        data: QuestionData::Rating {
            min_rating: 0,
            max_rating: 5,
        },
    }
}

pub fn text_question(id: &str, order: u32) -> Question {
    Question {
        id: id.to_string(),
        order,
        data: QuestionData::Text,
    }
}

/// Two rating questions on a 0-5 scale plus one unscoreable text question.
pub fn sample_quiz() -> Quiz {
    Quiz {
        id: "quiz-artists".to_string(),
        version: "1.0.0".to_string(),
        title: "Which artist are you?".to_string(),
        questions: vec![
            rating_question("q1", 1),
            rating_question("q2", 2),
            text_question("q3", 3),
        ],
    }
}

pub fn rule(question_id: &str, ideal: &[f64], is_primary: bool) -> QuestionRule {
    QuestionRule::builder()
        .question_id(question_id)
        .ideal_answers(ideal.to_vec())
        .is_primary(is_primary)
        .build()
}

pub fn ending(ending_id: &str, name: &str, rules: Vec<QuestionRule>) -> EndingDefinition {
    EndingDefinition::builder()
        .ending_id(ending_id)
        .name(name)
        .rules(rules)
        .build()
}

/// The canonical two-ending engine: "the-bold-painter" holds a primary rule
/// on q1 (ideal 5) and a secondary rule on q2 (ideal 5);
/// "the-quiet-sculptor" holds a primary rule on q1 (ideal 0).
pub fn sample_engine() -> AnalysisEngine {
    engine_with_config(ScoringConfig::default())
}

pub fn engine_with_config(config: ScoringConfig) -> AnalysisEngine {
    AnalysisEngine::builder()
        .id("engine-artists")
        .version("2.1.0")
        .name("Artist archetypes")
        .quiz_id("quiz-artists")
        .scoring_config(config)
        .endings(vec![
            ending(
                "the-bold-painter",
                "The Bold Painter",
                vec![rule("q1", &[5.0], true), rule("q2", &[5.0], false)],
            ),
            ending(
                "the-quiet-sculptor",
                "The Quiet Sculptor",
                vec![rule("q1", &[0.0], true)],
            ),
        ])
        .is_published(true)
        .is_active(true)
        .build()
}

pub fn response(id: &str, quiz_id: &str, answers: &[(&str, f64)]) -> QuizResponse {
    QuizResponse {
        id: id.to_string(),
        quiz_id: quiz_id.to_string(),
        answers: answers
            .iter()
            .map(|(question_id, value)| QuestionResponse {
                question_id: question_id.to_string(),
                value: AnswerValue::Number(*value),
                elapsed_ms: None,
            })
            .collect(),
        session_id: None,
        submitted_at: None,
    }
}

pub fn text_answer(question_id: &str, value: &str) -> QuestionResponse {
    QuestionResponse {
        question_id: question_id.to_string(),
        value: AnswerValue::Text(value.to_string()),
        elapsed_ms: None,
    }
}
