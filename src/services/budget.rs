// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Metrics derived from a user's expense log.
//!
//! - budget adherence falls linearly with the share of the monthly budget spent
//! - saving progress loses up to 50 points as impulse buys dominate
//! - investment performance is the share of planned purchases

use crate::models::Expense;
use crate::services::rewards::MetricsUpdate;

/// Default monthly budget when none is configured.
pub const DEFAULT_MONTHLY_BUDGET: f64 = 2000.0;

/// Metrics computed from expenses, each rounded to a whole percentage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedMetrics {
    pub budget_adherence: f64,
    pub saving_progress: f64,
    pub investment_performance: f64,
}

impl From<DerivedMetrics> for MetricsUpdate {
    fn from(m: DerivedMetrics) -> Self {
        MetricsUpdate {
            budget_adherence: Some(m.budget_adherence),
            saving_progress: Some(m.saving_progress),
            investment_performance: Some(m.investment_performance),
        }
    }
}

pub fn derive_metrics(expenses: &[Expense], monthly_budget: f64) -> DerivedMetrics {
    if expenses.is_empty() {
        return DerivedMetrics {
            budget_adherence: 100.0,
            saving_progress: 100.0,
            investment_performance: 100.0,
        };
    }

    let total_spending: f64 = expenses.iter().map(|e| e.amount).sum();
    let budget_used = if monthly_budget > 0.0 {
        total_spending / monthly_budget * 100.0
    } else {
        100.0
    };
    let budget_adherence = (100.0 - budget_used).max(0.0);

    let total = expenses.len() as f64;
    let impulse = expenses.iter().filter(|e| e.is_impulse).count() as f64;
    let impulse_ratio = impulse / total;
    let planned_ratio = (total - impulse) / total;

    DerivedMetrics {
        budget_adherence: budget_adherence.round(),
        saving_progress: (100.0 - impulse_ratio * 50.0).max(0.0).round(),
        investment_performance: (planned_ratio * 100.0).min(100.0).round(),
    }
}
