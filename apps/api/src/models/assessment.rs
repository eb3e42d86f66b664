use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::riasec::TraitAxis;

pub const LIKERT_MIN: u8 = 1;
pub const LIKERT_MAX: u8 = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    #[serde(rename = "type")]
    pub axis: TraitAxis,
    #[serde(default = "default_weight")]
    pub weight: f64,
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_weight() -> f64 {
    1.0
}

fn default_category() -> String {
    "interests".to_string()
}

/// The content-managed question bank; doubles as the question → (axis, weight) table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionBank {
    pub questions: Vec<Question>,
}

impl QuestionBank {
    pub fn by_category(&self, category: &str) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|q| q.category == category)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// One item per question in bank order, carrying the session's answer if any.
    /// Answers to ids not in the bank are ignored here; see `progress::validate_responses`.
    pub fn response_items(&self, session: &AssessmentSession) -> Vec<ResponseItem> {
        self.questions
            .iter()
            .map(|q| ResponseItem {
                question_id: q.id,
                axis: q.axis,
                weight: q.weight,
                value: session.answer(q.id),
            })
            .collect()
    }
}

/// One answered (or skipped) question ready for scoring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResponseItem {
    pub question_id: u32,
    pub axis: TraitAxis,
    pub weight: f64,
    /// Likert value 1–5; `None` when unanswered.
    pub value: Option<u8>,
}

/// Answers collected so far, owned by the caller and passed into every operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssessmentSession {
    answers: BTreeMap<u32, u8>,
}

impl AssessmentSession {
    pub fn answer(&self, question_id: u32) -> Option<u8> {
        self.answers.get(&question_id).copied()
    }

    pub fn answers(&self) -> &BTreeMap<u32, u8> {
        &self.answers
    }
}

impl FromIterator<(u32, u8)> for AssessmentSession {
    /// Collects raw answers without range checks so that validation can report them.
    fn from_iter<T: IntoIterator<Item = (u32, u8)>>(iter: T) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}
