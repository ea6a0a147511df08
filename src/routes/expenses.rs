// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Expense log routes.
//!
//! Every change to the log re-derives the user's budget, saving and
//! investment metrics and applies them like a metrics update, awards
//! included.

use crate::error::{AppError, Result};
use crate::middleware::Identity;
use crate::models::{Expense, ExpenseCategory, IngredientAward, Ingredients, User};
use crate::routes::users::{path_user_key, path_user_mut};
use crate::services::budget::derive_metrics;
use crate::services::finscore::fin_score;
use crate::services::rewards::{apply_metrics_update, MetricsUpdate};
use crate::time_utils::today_utc_date;
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/user/{id}/expenses",
            get(list_expenses).post(add_expense),
        )
        .route(
            "/api/user/{id}/expenses/{expense_id}",
            delete(delete_expense),
        )
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MetricsView {
    budget_adherence: f64,
    saving_progress: f64,
    investment_performance: f64,
}

/// Result of changing the expense log.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExpenseChange {
    #[serde(skip_serializing_if = "Option::is_none")]
    expense: Option<Expense>,
    metrics: MetricsView,
    fin_score: f64,
    ingredients_awarded: IngredientAward,
    ingredients: Ingredients,
}

/// Re-derive metrics from the log and apply them.
fn refresh_metrics(user: &mut User, monthly_budget: f64, expense: Option<Expense>) -> ExpenseChange {
    let derived = derive_metrics(&user.expenses, monthly_budget);
    let ingredients_awarded = apply_metrics_update(user, &MetricsUpdate::from(derived));

    ExpenseChange {
        expense,
        metrics: MetricsView {
            budget_adherence: user.budget_adherence,
            saving_progress: user.saving_progress,
            investment_performance: user.investment_performance,
        },
        fin_score: fin_score(user),
        ingredients_awarded,
        ingredients: user.ingredients,
    }
}

async fn list_expenses(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Expense>>> {
    let data = state.store.read().await?;
    let user = data
        .find_user(&path_user_key(&identity, &id))
        .ok_or_else(AppError::user_not_found)?;
    Ok(Json(user.expenses.clone()))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewExpense {
    description: Option<String>,
    amount: Option<f64>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    is_impulse: bool,
}

async fn add_expense(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
    Json(body): Json<NewExpense>,
) -> Result<Json<ExpenseChange>> {
    let description = body
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .ok_or_else(|| AppError::BadRequest("Description required".to_string()))?
        .to_string();

    let amount = body
        .amount
        .filter(|a| a.is_finite() && *a > 0.0)
        .ok_or_else(|| AppError::BadRequest("Amount must be a positive number".to_string()))?;

    let category = body
        .category
        .as_deref()
        .map(ExpenseCategory::parse_lenient)
        .unwrap_or_default();

    let monthly_budget = state.config.monthly_budget;

    let change = state
        .store
        .update(|data| {
            let user = path_user_mut(data, &identity, &id)?;

            let expense = Expense {
                id: user.expenses.iter().map(|e| e.id).max().unwrap_or(0) + 1,
                date: today_utc_date(),
                description,
                category,
                amount,
                is_impulse: body.is_impulse,
            };
            user.expenses.push(expense.clone());

            tracing::info!(
                user_id = %user.id,
                expense_id = expense.id,
                amount,
                is_impulse = expense.is_impulse,
                "Expense added"
            );

            Ok::<_, AppError>(refresh_metrics(user, monthly_budget, Some(expense)))
        })
        .await?;

    Ok(Json(change))
}

async fn delete_expense(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Path((id, expense_id)): Path<(String, u64)>,
) -> Result<Json<ExpenseChange>> {
    let monthly_budget = state.config.monthly_budget;

    let change = state
        .store
        .update(|data| {
            let user = path_user_mut(data, &identity, &id)?;

            let index = user
                .expenses
                .iter()
                .position(|e| e.id == expense_id)
                .ok_or_else(|| AppError::NotFound("Expense not found".to_string()))?;
            user.expenses.remove(index);

            tracing::info!(user_id = %user.id, expense_id, "Expense deleted");

            Ok::<_, AppError>(refresh_metrics(user, monthly_budget, None))
        })
        .await?;

    Ok(Json(change))
}
