// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Team routes.

use crate::error::{AppError, Result};
use crate::middleware::Identity;
use crate::models::{Team, TeamDetail, TeamSummary};
use crate::routes::users::path_user_key;
use crate::services::teams::{join_team, leave_team, summarize_teams, team_detail, unique_join_code};
use crate::time_utils::now_millis;
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/teams", get(list_teams).post(create_team))
        .route("/api/teams/join", post(join))
        .route("/api/teams/leave", post(leave))
        .route("/api/user/{id}/team", get(get_user_team))
}

/// User a team request acts on: the body's `userId`, else the caller's own
/// identity. Trusted callers that name nobody get `None`.
fn team_user_id(identity: &Identity, body_user_id: Option<String>) -> Option<String> {
    body_user_id
        .filter(|id| !id.trim().is_empty())
        .or_else(|| match identity {
            Identity::Firebase { uid, .. } => Some(uid.clone()),
            Identity::Trusted { user_id } => user_id.clone(),
        })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Team leaderboard.
async fn list_teams(State(state): State<Arc<AppState>>) -> Result<Json<Vec<TeamSummary>>> {
    let data = state.store.read().await?;
    Ok(Json(summarize_teams(&data)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateTeamRequest {
    name: Option<String>,
    user_id: Option<String>,
}

/// Create a team with a fresh join code; the creator joins it if they exist.
async fn create_team(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Json(body): Json<CreateTeamRequest>,
) -> Result<Json<Team>> {
    let (Some(name), Some(user_id)) = (
        non_empty(body.name),
        team_user_id(&identity, body.user_id),
    ) else {
        return Err(AppError::BadRequest(
            "Team name and user ID required".to_string(),
        ));
    };

    let team = state
        .store
        .update(|data| {
            let team = Team {
                id: data.next_team_id(),
                name,
                code: unique_join_code(&state.rng, data)?,
                created_at: now_millis(),
            };
            data.teams.push(team.clone());

            match data.find_user_mut(&user_id) {
                Some(user) => join_team(user, &team),
                None => tracing::warn!(user_id = %user_id, "Team creator not found"),
            }

            tracing::info!(team_id = %team.id, code = %team.code, "Team created");
            Ok::<_, AppError>(team)
        })
        .await?;

    Ok(Json(team))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JoinTeamRequest {
    code: Option<String>,
    user_id: Option<String>,
}

#[derive(Debug, Serialize)]
struct JoinTeamResponse {
    success: bool,
    team: Team,
}

/// Join a team by code. Codes are matched case-insensitively.
async fn join(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Json(body): Json<JoinTeamRequest>,
) -> Result<Json<JoinTeamResponse>> {
    let (Some(code), Some(user_id)) = (
        non_empty(body.code),
        team_user_id(&identity, body.user_id),
    ) else {
        return Err(AppError::BadRequest(
            "Team code and user ID required".to_string(),
        ));
    };

    let team = state
        .store
        .update(|data| {
            let team = data
                .find_team_by_code(&code)
                .cloned()
                .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;
            let user = data
                .find_user_mut(&user_id)
                .ok_or_else(AppError::user_not_found)?;

            join_team(user, &team);
            tracing::info!(user_id = %user.id, team_id = %team.id, "Joined team");
            Ok::<_, AppError>(team)
        })
        .await?;

    Ok(Json(JoinTeamResponse {
        success: true,
        team,
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LeaveTeamRequest {
    user_id: Option<String>,
}

#[derive(Debug, Serialize)]
struct SuccessResponse {
    success: bool,
}

async fn leave(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Json(body): Json<LeaveTeamRequest>,
) -> Result<Json<SuccessResponse>> {
    let user_id = team_user_id(&identity, body.user_id)
        .ok_or_else(|| AppError::BadRequest("User ID required".to_string()))?;

    state
        .store
        .update(|data| {
            let user = data
                .find_user_mut(&user_id)
                .ok_or_else(AppError::user_not_found)?;
            leave_team(user);
            tracing::info!(user_id = %user.id, "Left team");
            Ok::<_, AppError>(())
        })
        .await?;

    Ok(Json(SuccessResponse { success: true }))
}

#[derive(Debug, Serialize)]
struct UserTeamResponse {
    team: Option<TeamDetail>,
}

/// The user's team with its roster. Unknown users and dangling team
/// references read as no team.
async fn get_user_team(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
) -> Result<Json<UserTeamResponse>> {
    let data = state.store.read().await?;

    let team = data
        .find_user(&path_user_key(&identity, &id))
        .and_then(|user| user.team_id.as_deref())
        .and_then(|team_id| data.find_team(team_id))
        .map(|team| team_detail(&data, team));

    Ok(Json(UserTeamResponse { team }))
}
