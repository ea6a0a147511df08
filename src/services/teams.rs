// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Team join codes, membership and computed team scores.

use crate::models::{BrewData, Team, TeamDetail, TeamMember, TeamSummary, User};
use crate::services::finscore::{fin_score, round2};
use ring::rand::SecureRandom;

/// Join codes are upper-case base-36.
const CODE_ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const CODE_LEN: usize = 6;
const MAX_CODE_ATTEMPTS: usize = 16;
/// Largest multiple of the alphabet size that fits in a byte; bytes at or
/// above it are rejected so every symbol is equally likely.
const REJECTION_LIMIT: u8 = 252;

/// Generate a random join code.
pub fn generate_join_code(rng: &dyn SecureRandom) -> anyhow::Result<String> {
    let mut code = String::with_capacity(CODE_LEN);
    let mut buf = [0u8; 16];

    while code.len() < CODE_LEN {
        rng.fill(&mut buf)
            .map_err(|_| anyhow::anyhow!("system random source failed"))?;
        for &byte in buf.iter().filter(|&&b| b < REJECTION_LIMIT) {
            if code.len() == CODE_LEN {
                break;
            }
            code.push(CODE_ALPHABET[(byte % 36) as usize] as char);
        }
    }

    Ok(code)
}

/// Generate a join code not used by any existing team.
pub fn unique_join_code(rng: &dyn SecureRandom, data: &BrewData) -> anyhow::Result<String> {
    for _ in 0..MAX_CODE_ATTEMPTS {
        let code = generate_join_code(rng)?;
        if data.find_team_by_code(&code).is_none() {
            return Ok(code);
        }
    }
    anyhow::bail!("could not find an unused team code")
}

/// Average FinScore (two decimals) and member count of a team.
pub fn team_score(data: &BrewData, team_id: &str) -> (f64, usize) {
    let (total, count) = data
        .team_members(team_id)
        .fold((0.0, 0usize), |(total, count), u| (total + fin_score(u), count + 1));

    if count == 0 {
        (0.0, 0)
    } else {
        (round2(total / count as f64), count)
    }
}

/// Team leaderboard, best average first.
pub fn summarize_teams(data: &BrewData) -> Vec<TeamSummary> {
    let mut summaries: Vec<TeamSummary> = data
        .teams
        .iter()
        .map(|team| {
            let (average_score, member_count) = team_score(data, &team.id);
            TeamSummary {
                id: team.id.clone(),
                name: team.name.clone(),
                code: team.code.clone(),
                average_score,
                member_count,
            }
        })
        .collect();

    summaries.sort_by(|a, b| b.average_score.total_cmp(&a.average_score));
    summaries
}

/// Team page for a member, including the roster.
pub fn team_detail(data: &BrewData, team: &Team) -> TeamDetail {
    let (average_score, member_count) = team_score(data, &team.id);
    let members = data
        .team_members(&team.id)
        .map(|u| TeamMember {
            id: u.id.clone(),
            name: u.display_name().to_string(),
        })
        .collect();

    TeamDetail {
        team: team.clone(),
        average_score,
        member_count,
        members,
    }
}

pub fn join_team(user: &mut User, team: &Team) {
    user.team_id = Some(team.id.clone());
    user.team_name = Some(team.name.clone());
}

pub fn leave_team(user: &mut User) {
    user.team_id = None;
    user.team_name = None;
}
