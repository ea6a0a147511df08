// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Ingredient award rules and metric updates.
//!
//! Awards depend only on the activity type and a score bucket
//! (>= 80, >= 60, below), so the same activity always pays the same.

use crate::models::ingredient::merge_awards;
use crate::models::{ActivityRecord, Ingredient, IngredientAward, User};
use crate::services::finscore::clamp_percent;
use serde::Deserialize;

/// Budget adherence at or above this earns a `budget` award on metric updates.
pub const BUDGET_AWARD_THRESHOLD: f64 = 80.0;
/// Saving progress at or above this earns a `savings` award on metric updates.
pub const SAVING_AWARD_THRESHOLD: f64 = 70.0;
/// Investment performance at or above this earns an `investment` award.
pub const INVESTMENT_AWARD_THRESHOLD: f64 = 70.0;

/// Activity types with an award rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Quiz,
    Budget,
    Savings,
    Investment,
}

impl ActivityKind {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "quiz" => Some(Self::Quiz),
            "budget" => Some(Self::Budget),
            "savings" => Some(Self::Savings),
            "investment" => Some(Self::Investment),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Quiz => "quiz",
            Self::Budget => "budget",
            Self::Savings => "savings",
            Self::Investment => "investment",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bucket {
    High,
    Mid,
    Low,
}

fn bucket(score: f64) -> Bucket {
    if score >= 80.0 {
        Bucket::High
    } else if score >= 60.0 {
        Bucket::Mid
    } else {
        Bucket::Low
    }
}

fn tiered(score: f64, high: u32, mid: u32, low: u32) -> u32 {
    match bucket(score) {
        Bucket::High => high,
        Bucket::Mid => mid,
        Bucket::Low => low,
    }
}

/// Ingredients earned for an activity of `kind` with `score`.
pub fn award_for(kind: ActivityKind, score: f64) -> IngredientAward {
    match kind {
        ActivityKind::Quiz => IngredientAward::from([
            (Ingredient::Knowledge, (score / 20.0).floor().max(0.0) as u32),
            (Ingredient::Savings, tiered(score, 2, 1, 0)),
        ]),
        ActivityKind::Budget => IngredientAward::from([
            (Ingredient::Budget, tiered(score, 3, 2, 1)),
            (Ingredient::Savings, tiered(score, 1, 0, 0)),
        ]),
        ActivityKind::Savings => {
            IngredientAward::from([(Ingredient::Savings, tiered(score, 3, 2, 1))])
        }
        ActivityKind::Investment => {
            IngredientAward::from([(Ingredient::Investment, tiered(score, 3, 2, 1))])
        }
    }
}

/// Award ingredients for an activity by wire name. Unknown types earn nothing.
pub fn award_for_type(activity_type: &str, score: f64) -> IngredientAward {
    ActivityKind::parse(activity_type)
        .map(|kind| award_for(kind, score))
        .unwrap_or_default()
}

/// Credit the award for an activity and append it to the user's log.
pub fn record_activity(
    user: &mut User,
    activity_type: &str,
    score: f64,
    now_millis: i64,
) -> IngredientAward {
    let award = award_for_type(activity_type, score);
    user.ingredients.add_award(&award);
    user.activities.push(ActivityRecord {
        kind: activity_type.to_string(),
        score,
        timestamp: now_millis,
        ingredients_awarded: award.clone(),
    });
    award
}

/// Partial update of the self-reported metrics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsUpdate {
    pub budget_adherence: Option<f64>,
    pub saving_progress: Option<f64>,
    pub investment_performance: Option<f64>,
}

/// Apply a metrics update: clamp each provided value, and pay awards for
/// values at or above their thresholds (scored with the submitted value).
///
/// Returns everything awarded by this update.
pub fn apply_metrics_update(user: &mut User, update: &MetricsUpdate) -> IngredientAward {
    let mut total = IngredientAward::new();

    let mut pay = |user: &mut User, kind: ActivityKind, score: f64| {
        let award = award_for(kind, score);
        user.ingredients.add_award(&award);
        merge_awards(&mut total, &award);
    };

    if let Some(value) = update.budget_adherence {
        user.budget_adherence = clamp_percent(value);
        if value >= BUDGET_AWARD_THRESHOLD {
            pay(user, ActivityKind::Budget, value);
        }
    }

    if let Some(value) = update.saving_progress {
        user.saving_progress = clamp_percent(value);
        if value >= SAVING_AWARD_THRESHOLD {
            pay(user, ActivityKind::Savings, value);
        }
    }

    if let Some(value) = update.investment_performance {
        user.investment_performance = clamp_percent(value);
        if value >= INVESTMENT_AWARD_THRESHOLD {
            pay(user, ActivityKind::Investment, value);
        }
    }

    total
}
