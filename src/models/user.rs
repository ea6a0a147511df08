//! User model for storage and API.

use crate::models::expense::Expense;
use crate::models::ingredient::{IngredientAward, Ingredients};
use crate::models::potion::Potion;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// User record stored in the data document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Application user ID (also used in API paths)
    pub id: String,
    /// Firebase Auth UID, set for users created from a verified token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firebase_uid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub name: String,

    // ─── Metrics (percentages, 0-100) ───────────────────────────
    #[serde(default)]
    pub budget_adherence: f64,
    #[serde(default)]
    pub saving_progress: f64,
    #[serde(default)]
    pub investment_performance: f64,
    #[serde(default)]
    pub quiz_score: f64,

    // ─── Rewards ─────────────────────────────────────────────────
    #[serde(default)]
    pub ingredients: Ingredients,
    #[serde(default)]
    pub active_potions: Vec<Potion>,
    /// Append-only activity log
    #[serde(default)]
    pub activities: Vec<ActivityRecord>,

    // ─── Team ────────────────────────────────────────────────────
    #[serde(default)]
    pub team_id: Option<String>,
    #[serde(default)]
    pub team_name: Option<String>,

    // ─── Expense log ─────────────────────────────────────────────
    #[serde(default)]
    pub expenses: Vec<Expense>,

    /// Fields this version does not know about, kept so rewrites preserve them
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    /// Create a fresh user for a Firebase identity seen for the first time.
    ///
    /// The display name is the local part of the email, or "User".
    pub fn from_firebase(id: String, firebase_uid: &str, email: Option<&str>) -> Self {
        let name = email
            .and_then(|e| e.split('@').next())
            .filter(|local| !local.is_empty())
            .unwrap_or("User")
            .to_string();

        Self {
            id,
            firebase_uid: Some(firebase_uid.to_string()),
            email: email.map(str::to_string),
            name,
            ..Default::default()
        }
    }

    /// Whether `key` names this user, by application ID or Firebase UID.
    pub fn matches(&self, key: &str) -> bool {
        self.id == key || self.firebase_uid.as_deref() == Some(key)
    }

    /// Name shown to other users (falls back to email, then ID).
    pub fn display_name(&self) -> &str {
        if !self.name.is_empty() {
            &self.name
        } else {
            self.email.as_deref().unwrap_or(&self.id)
        }
    }
}

/// One entry of a user's activity log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    /// Activity type as submitted ("quiz", "budget", ...)
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub score: f64,
    /// Unix epoch milliseconds
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default)]
    pub ingredients_awarded: IngredientAward,
}
