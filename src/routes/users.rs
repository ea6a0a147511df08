// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User profile, leaderboard and metric routes.

use crate::error::{AppError, Result};
use crate::middleware::Identity;
use crate::models::{BrewData, User};
use crate::services::rewards::{apply_metrics_update, MetricsUpdate};
use crate::services::{rank_users, ScoredUser};
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, put},
    Extension, Json, Router,
};
use std::sync::Arc;

/// Path segment that names the calling user.
const ME: &str = "me";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/user/me", get(get_me))
        .route("/api/user/{id}", get(get_user))
        .route("/api/users", get(list_users))
        .route("/api/user/{id}/metrics", put(update_metrics))
}

// ─── Shared lookups ──────────────────────────────────────────

/// Key for a `{id}` path segment; `me` resolves to the caller.
pub(crate) fn path_user_key(identity: &Identity, id: &str) -> String {
    if id == ME {
        identity.user_key(None, None)
    } else {
        id.to_string()
    }
}

/// Find the user named by a `{id}` path segment.
pub(crate) fn path_user_mut<'a>(
    data: &'a mut BrewData,
    identity: &Identity,
    id: &str,
) -> Result<&'a mut User> {
    data.find_user_mut(&path_user_key(identity, id))
        .ok_or_else(AppError::user_not_found)
}

/// The caller's own record. Firebase callers seen for the first time get a
/// fresh user; trusted callers must name an existing one.
pub(crate) fn caller_user_mut<'a>(
    data: &'a mut BrewData,
    identity: &Identity,
    body_user_id: Option<&str>,
) -> Result<&'a mut User> {
    match identity {
        Identity::Firebase { uid, email } => {
            Ok(data.get_or_create_firebase_user(uid, email.as_deref()))
        }
        Identity::Trusted { .. } => data
            .find_user_mut(&identity.user_key(body_user_id, None))
            .ok_or_else(AppError::user_not_found),
    }
}

/// Load the caller's record, only writing when a Firebase user must be created.
async fn current_user(state: &AppState, identity: &Identity) -> Result<User> {
    let data = state.store.read().await?;

    if let Identity::Firebase { uid, .. } = identity {
        if let Some(user) = data.find_by_firebase_uid(uid) {
            return Ok(user.clone());
        }
        return state
            .store
            .update(|data| Ok::<_, AppError>(caller_user_mut(data, identity, None)?.clone()))
            .await;
    }

    data.find_user(&identity.user_key(None, None))
        .cloned()
        .ok_or_else(AppError::user_not_found)
}

// ─── Handlers ────────────────────────────────────────────────

/// Current user with FinScore.
async fn get_me(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<ScoredUser>> {
    let user = current_user(&state, &identity).await?;
    Ok(Json(user.into()))
}

/// User by ID or Firebase UID, with FinScore.
async fn get_user(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
) -> Result<Json<ScoredUser>> {
    if id == ME {
        return get_me(State(state), Extension(identity)).await;
    }

    let data = state.store.read().await?;
    let user = data
        .find_user(&id)
        .cloned()
        .ok_or_else(AppError::user_not_found)?;

    Ok(Json(user.into()))
}

/// Leaderboard: every user, best FinScore first.
async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<ScoredUser>>> {
    let data = state.store.read().await?;
    Ok(Json(rank_users(&data.users)))
}

/// Update self-reported metrics, paying awards for strong values.
async fn update_metrics(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
    Json(update): Json<MetricsUpdate>,
) -> Result<Json<ScoredUser>> {
    let user = state
        .store
        .update(|data| {
            let user = path_user_mut(data, &identity, &id)?;
            let awarded = apply_metrics_update(user, &update);

            tracing::info!(
                user_id = %user.id,
                budget_adherence = user.budget_adherence,
                saving_progress = user.saving_progress,
                investment_performance = user.investment_performance,
                awarded = awarded.values().sum::<u32>(),
                "Metrics updated"
            );

            Ok::<_, AppError>(user.clone())
        })
        .await?;

    Ok(Json(user.into()))
}
