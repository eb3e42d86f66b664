use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::models::assessment::{AssessmentSession, QuestionBank, LIKERT_MAX, LIKERT_MIN};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryProgress {
    pub total: usize,
    pub answered: usize,
    pub percentage: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentProgress {
    pub total_questions: usize,
    pub answered_questions: usize,
    pub percentage_complete: u32,
    pub category_progress: BTreeMap<String, CategoryProgress>,
    pub is_complete: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResponseValidation {
    pub is_valid: bool,
    pub missing_question_ids: Vec<u32>,
    pub unknown_question_ids: Vec<u32>,
    pub errors: Vec<String>,
}

fn percentage(answered: usize, total: usize) -> u32 {
    if total == 0 {
        0
    } else {
        (answered as f64 / total as f64 * 100.0).round() as u32
    }
}

/// Progress through the bank. Answers to unknown question ids do not count.
pub fn compute_progress(bank: &QuestionBank, session: &AssessmentSession) -> AssessmentProgress {
    let mut category_progress: BTreeMap<String, CategoryProgress> = BTreeMap::new();
    let mut answered_questions = 0;

    for question in &bank.questions {
        let answered = session.answer(question.id).is_some();
        if answered {
            answered_questions += 1;
        }
        let entry = category_progress
            .entry(question.category.clone())
            .or_insert(CategoryProgress {
                total: 0,
                answered: 0,
                percentage: 0,
            });
        entry.total += 1;
        if answered {
            entry.answered += 1;
        }
    }

    for progress in category_progress.values_mut() {
        progress.percentage = percentage(progress.answered, progress.total);
    }

    let total_questions = bank.len();
    AssessmentProgress {
        total_questions,
        answered_questions,
        percentage_complete: percentage(answered_questions, total_questions),
        category_progress,
        is_complete: total_questions > 0 && answered_questions >= total_questions,
    }
}

/// Checks an answer set for missing questions, out-of-range values and unknown ids.
pub fn validate_responses(bank: &QuestionBank, session: &AssessmentSession) -> ResponseValidation {
    let known: BTreeSet<u32> = bank.questions.iter().map(|q| q.id).collect();
    let answered: BTreeSet<u32> = session.answers().keys().copied().collect();

    let missing_question_ids: Vec<u32> = known.difference(&answered).copied().collect();
    let unknown_question_ids: Vec<u32> = answered.difference(&known).copied().collect();

    let mut errors = Vec::new();
    if !missing_question_ids.is_empty() {
        errors.push(format!(
            "Missing responses for questions: {missing_question_ids:?}"
        ));
    }
    for (question_id, value) in session.answers() {
        if !(LIKERT_MIN..=LIKERT_MAX).contains(value) {
            errors.push(format!(
                "Invalid response value for question {question_id}: {value}"
            ));
        }
    }
    if !unknown_question_ids.is_empty() {
        errors.push(format!(
            "Invalid question IDs in responses: {unknown_question_ids:?}"
        ));
    }

    ResponseValidation {
        is_valid: errors.is_empty(),
        missing_question_ids,
        unknown_question_ids,
        errors,
    }
}
