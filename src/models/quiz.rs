// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Financial-literacy quiz questions.

use serde::{Deserialize, Serialize};

/// A multiple-choice question from the static bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: u32,
    /// Prompt text
    #[serde(default)]
    pub question: String,
    /// Answer options, in display order
    #[serde(default)]
    pub options: Vec<String>,
    /// Index into `options` of the correct answer
    pub correct: usize,
}
