// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Logged expenses ("ingredients" on the shelf page).

use serde::{Deserialize, Serialize};

/// Spending category. Unknown categories are stored as `Other`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Food,
    Transport,
    Entertainment,
    Shopping,
    Bills,
    Health,
    #[default]
    #[serde(other)]
    Other,
}

impl ExpenseCategory {
    pub fn parse_lenient(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "food" => Self::Food,
            "transport" => Self::Transport,
            "entertainment" => Self::Entertainment,
            "shopping" => Self::Shopping,
            "bills" => Self::Bills,
            "health" => Self::Health,
            _ => Self::Other,
        }
    }
}

/// A single logged expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    #[serde(default)]
    pub id: u64,
    /// Calendar date (YYYY-MM-DD, UTC)
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: ExpenseCategory,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub is_impulse: bool,
}
