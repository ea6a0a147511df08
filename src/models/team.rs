// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Teams and their computed summaries.

use serde::{Deserialize, Serialize};

/// Stored team record. Scores and membership are derived on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Upper-case join code
    #[serde(default)]
    pub code: String,
    /// Unix epoch milliseconds
    #[serde(default)]
    pub created_at: i64,
}

/// Team row for the team leaderboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummary {
    pub id: String,
    pub name: String,
    pub code: String,
    pub average_score: f64,
    pub member_count: usize,
}

/// Team member as shown on the team page.
#[derive(Debug, Clone, Serialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
}

/// Full team view for a member.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamDetail {
    #[serde(flatten)]
    pub team: Team,
    pub average_score: f64,
    pub member_count: usize,
    pub members: Vec<TeamMember>,
}
