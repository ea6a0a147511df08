// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The whole BudgetBrew data document.
//!
//! Everything the service persists lives in one JSON document: users, the
//! quiz question bank and teams. It is read and rewritten as a unit.

use crate::models::{QuizQuestion, Team, User};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Root of the persisted JSON document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrewData {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub quiz_questions: Vec<QuizQuestion>,
    #[serde(default)]
    pub teams: Vec<Team>,
    /// Unknown top-level sections, carried through every rewrite
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BrewData {
    /// Find a user by application ID or Firebase UID.
    pub fn find_user(&self, key: &str) -> Option<&User> {
        self.users.iter().find(|u| u.matches(key))
    }

    pub fn find_user_mut(&mut self, key: &str) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.matches(key))
    }

    pub fn find_by_firebase_uid(&self, uid: &str) -> Option<&User> {
        self.users
            .iter()
            .find(|u| u.firebase_uid.as_deref() == Some(uid))
    }

    /// Return the user bound to a Firebase UID, creating one if needed.
    pub fn get_or_create_firebase_user(&mut self, uid: &str, email: Option<&str>) -> &mut User {
        let index = match self
            .users
            .iter()
            .position(|u| u.firebase_uid.as_deref() == Some(uid))
        {
            Some(index) => index,
            None => {
                let user = User::from_firebase(self.next_user_id(), uid, email);
                tracing::info!(
                    user_id = %user.id,
                    firebase_uid = uid,
                    name = %user.name,
                    "Created user for new Firebase identity"
                );
                self.users.push(user);
                self.users.len() - 1
            }
        };
        &mut self.users[index]
    }

    /// Next free numeric user ID.
    pub fn next_user_id(&self) -> String {
        next_numeric_id(self.users.iter().map(|u| u.id.as_str()))
    }

    /// Next free numeric team ID.
    pub fn next_team_id(&self) -> String {
        next_numeric_id(self.teams.iter().map(|t| t.id.as_str()))
    }

    pub fn find_team(&self, team_id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == team_id)
    }

    pub fn find_team_by_code(&self, code: &str) -> Option<&Team> {
        let code = code.trim().to_ascii_uppercase();
        self.teams.iter().find(|t| t.code == code)
    }

    /// Users whose `teamId` points at `team_id`.
    pub fn team_members<'a>(&'a self, team_id: &'a str) -> impl Iterator<Item = &'a User> + 'a {
        self.users
            .iter()
            .filter(move |u| u.team_id.as_deref() == Some(team_id))
    }
}

/// One past the largest numeric ID, or the count plus one if that is larger.
/// Non-numeric IDs are ignored.
fn next_numeric_id<'a>(ids: impl Iterator<Item = &'a str>) -> String {
    let mut count = 0u64;
    let mut max = 0u64;
    for id in ids {
        count += 1;
        if let Ok(n) = id.parse::<u64>() {
            max = max.max(n);
        }
    }
    (max.max(count) + 1).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str) -> User {
        User {
            id: id.to_string(),
            name: format!("User {id}"),
            ..Default::default()
        }
    }

    #[test]
    fn test_next_user_id_skips_gaps_and_names() {
        let data = BrewData {
            users: vec![user("1"), user("7"), user("guest")],
            ..Default::default()
        };
        assert_eq!(data.next_user_id(), "8");
        assert_eq!(BrewData::default().next_user_id(), "1");
    }

    #[test]
    fn test_get_or_create_firebase_user_is_stable() {
        let mut data = BrewData {
            users: vec![user("1")],
            ..Default::default()
        };

        let created_id = data
            .get_or_create_firebase_user("uid-1", Some("a@b.c"))
            .id
            .clone();
        let again_id = data.get_or_create_firebase_user("uid-1", None).id.clone();

        assert_eq!(created_id, "2");
        assert_eq!(again_id, created_id);
        assert_eq!(data.users.len(), 2);
        assert_eq!(data.find_user("uid-1").map(|u| u.name.as_str()), Some("a"));
    }

    #[test]
    fn test_find_team_by_code_ignores_case() {
        let data = BrewData {
            teams: vec![Team {
                id: "1".to_string(),
                name: "Cauldron Crew".to_string(),
                code: "AB12CD".to_string(),
                created_at: 0,
            }],
            ..Default::default()
        };
        assert!(data.find_team_by_code("ab12cd").is_some());
        assert!(data.find_team_by_code("zzzzzz").is_none());
    }
}
