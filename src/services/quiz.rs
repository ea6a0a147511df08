// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Quiz scoring.

use crate::models::QuizQuestion;
use std::collections::HashMap;

/// Percentage of questions answered correctly, rounded to a whole number.
///
/// `answers` maps question ID (as a string, the JSON object key) to the chosen
/// option index. Unanswered questions count as wrong. Returns `None` for an
/// empty question bank.
pub fn score_quiz(questions: &[QuizQuestion], answers: &HashMap<String, i64>) -> Option<f64> {
    if questions.is_empty() {
        return None;
    }

    let correct = questions
        .iter()
        .filter(|q| {
            answers
                .get(&q.id.to_string())
                .is_some_and(|&choice| usize::try_from(choice).ok() == Some(q.correct))
        })
        .count();

    Some((correct as f64 / questions.len() as f64 * 100.0).round())
}
