// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Ingredient, activity and potion routes.

use crate::error::{AppError, Result};
use crate::middleware::Identity;
use crate::models::{Ingredient, IngredientAward, Ingredients, Potion, PotionType, RECIPES};
use crate::routes::users::{path_user_key, path_user_mut};
use crate::services::brewing::{brew, prune_expired};
use crate::services::rewards::record_activity;
use crate::time_utils::now_millis;
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/user/{id}/ingredients",
            get(get_ingredients).post(set_ingredients),
        )
        .route("/api/user/{id}/activity", post(record_user_activity))
        .route("/api/user/{id}/potions", get(list_potions))
        .route("/api/user/{id}/potions/brew", post(brew_potion))
        .route("/api/potions/recipes", get(list_recipes))
}

// ─── Ingredients ─────────────────────────────────────────────

async fn get_ingredients(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
) -> Result<Json<Ingredients>> {
    let data = state.store.read().await?;
    let user = data
        .find_user(&path_user_key(&identity, &id))
        .ok_or_else(AppError::user_not_found)?;
    Ok(Json(user.ingredients))
}

#[derive(Debug, Deserialize)]
struct SetIngredientsRequest {
    #[serde(default)]
    ingredients: HashMap<String, i64>,
}

/// Overwrite ingredient counters. Negative values store as zero and unknown
/// ingredient names are ignored.
async fn set_ingredients(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
    Json(body): Json<SetIngredientsRequest>,
) -> Result<Json<Ingredients>> {
    let ingredients = state
        .store
        .update(|data| {
            let user = path_user_mut(data, &identity, &id)?;
            for (name, &value) in &body.ingredients {
                if let Some(ingredient) = Ingredient::parse(name) {
                    *user.ingredients.get_mut(ingredient) =
                        value.clamp(0, i64::from(u32::MAX)) as u32;
                }
            }
            Ok::<_, AppError>(user.ingredients)
        })
        .await?;

    Ok(Json(ingredients))
}

// ─── Activities ──────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ActivityRequest {
    activity_type: Option<String>,
    score: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ActivityResponse {
    ingredients: Ingredients,
    ingredients_awarded: IngredientAward,
}

/// Log an activity and pay its award. Unknown activity types are logged
/// but earn nothing.
async fn record_user_activity(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
    Json(body): Json<ActivityRequest>,
) -> Result<Json<ActivityResponse>> {
    let (Some(activity_type), Some(score)) = (body.activity_type, body.score) else {
        return Err(AppError::BadRequest(
            "Activity type and score required".to_string(),
        ));
    };

    let response = state
        .store
        .update(|data| {
            let user = path_user_mut(data, &identity, &id)?;
            let ingredients_awarded = record_activity(user, &activity_type, score, now_millis());

            tracing::info!(
                user_id = %user.id,
                activity_type = %activity_type,
                score,
                "Activity recorded"
            );

            Ok::<_, AppError>(ActivityResponse {
                ingredients: user.ingredients,
                ingredients_awarded,
            })
        })
        .await?;

    Ok(Json(response))
}

// ─── Potions ─────────────────────────────────────────────────

/// Active potions. Expired ones are dropped from the stored list.
async fn list_potions(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Potion>>> {
    let potions = state
        .store
        .update(|data| {
            let user = path_user_mut(data, &identity, &id)?;
            let pruned = prune_expired(user, now_millis());
            if pruned > 0 {
                tracing::debug!(user_id = %user.id, pruned, "Pruned expired potions");
            }
            Ok::<_, AppError>(user.active_potions.clone())
        })
        .await?;

    Ok(Json(potions))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BrewRequest {
    potion_type: Option<String>,
}

#[derive(Debug, Serialize)]
struct BrewResponse {
    success: bool,
    potion: Potion,
    ingredients: Ingredients,
}

async fn brew_potion(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
    Json(body): Json<BrewRequest>,
) -> Result<Json<BrewResponse>> {
    let response = state
        .store
        .update(|data| {
            let user = path_user_mut(data, &identity, &id)?;
            let potion_type = body
                .potion_type
                .as_deref()
                .and_then(PotionType::parse)
                .ok_or_else(|| AppError::BadRequest("Invalid potion type".to_string()))?;

            let potion = brew(user, potion_type, now_millis())?;

            Ok::<_, AppError>(BrewResponse {
                success: true,
                potion,
                ingredients: user.ingredients,
            })
        })
        .await?;

    Ok(Json(response))
}

// ─── Recipe catalog ──────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RecipeView {
    #[serde(rename = "type")]
    potion_type: PotionType,
    name: &'static str,
    icon: &'static str,
    effect: &'static str,
    requirements: Vec<RequirementView>,
    duration_days: i64,
}

#[derive(Debug, Serialize)]
struct RequirementView {
    ingredient: Ingredient,
    amount: u32,
}

/// Every brewable recipe with its costs, in checking order.
async fn list_recipes() -> Json<Vec<RecipeView>> {
    let recipes = RECIPES
        .iter()
        .map(|recipe| RecipeView {
            potion_type: recipe.potion_type,
            name: recipe.name,
            icon: recipe.icon,
            effect: recipe.effect,
            requirements: recipe
                .requirements
                .iter()
                .map(|&(ingredient, amount)| RequirementView { ingredient, amount })
                .collect(),
            duration_days: recipe.duration_days,
        })
        .collect();

    Json(recipes)
}
