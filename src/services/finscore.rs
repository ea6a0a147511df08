// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! FinScore: the weighted composite of a user's four metrics.

use crate::models::User;

pub const BUDGET_WEIGHT: f64 = 0.3;
pub const SAVING_WEIGHT: f64 = 0.3;
pub const INVESTMENT_WEIGHT: f64 = 0.2;
pub const QUIZ_WEIGHT: f64 = 0.2;

/// Weighted sum of the four 0-100 metrics, unrounded.
pub fn calculate_fin_score(
    budget_adherence: f64,
    saving_progress: f64,
    investment_performance: f64,
    quiz_score: f64,
) -> f64 {
    budget_adherence * BUDGET_WEIGHT
        + saving_progress * SAVING_WEIGHT
        + investment_performance * INVESTMENT_WEIGHT
        + quiz_score * QUIZ_WEIGHT
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A user's FinScore as reported by the API (two decimals).
pub fn fin_score(user: &User) -> f64 {
    round2(calculate_fin_score(
        user.budget_adherence,
        user.saving_progress,
        user.investment_performance,
        user.quiz_score,
    ))
}

/// Clamp a submitted metric to the 0-100 range.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}
