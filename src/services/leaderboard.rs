// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User views carrying the computed FinScore, and the leaderboard ranking.

use crate::models::User;
use crate::services::finscore::fin_score;
use serde::Serialize;

/// A user record with its FinScore attached.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredUser {
    #[serde(flatten)]
    pub user: User,
    pub fin_score: f64,
}

impl From<User> for ScoredUser {
    fn from(user: User) -> Self {
        let fin_score = fin_score(&user);
        Self { user, fin_score }
    }
}

/// All users ordered by FinScore, highest first. Ties keep document order.
pub fn rank_users(users: &[User]) -> Vec<ScoredUser> {
    let mut ranked: Vec<ScoredUser> = users.iter().cloned().map(ScoredUser::from).collect();
    ranked.sort_by(|a, b| b.fin_score.total_cmp(&a.fin_score));
    ranked
}
