// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Potions and the fixed recipe book.

use crate::models::ingredient::Ingredient;
use serde::{Deserialize, Serialize};

/// Milliseconds in one day, used for potion durations.
pub const DAY_MILLIS: i64 = 24 * 60 * 60 * 1000;

/// Kinds of potion that can be brewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PotionType {
    Challenge,
    Savings,
    Subscription,
    Knowledge,
    Investment,
    Budget,
}

impl PotionType {
    pub const ALL: [PotionType; 6] = [
        PotionType::Challenge,
        PotionType::Savings,
        PotionType::Subscription,
        PotionType::Knowledge,
        PotionType::Investment,
        PotionType::Budget,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PotionType::Challenge => "challenge",
            PotionType::Savings => "savings",
            PotionType::Subscription => "subscription",
            PotionType::Knowledge => "knowledge",
            PotionType::Investment => "investment",
            PotionType::Budget => "budget",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == name)
    }

    /// The recipe that brews this potion.
    pub fn recipe(self) -> &'static PotionRecipe {
        match self {
            PotionType::Challenge => &RECIPES[0],
            PotionType::Savings => &RECIPES[1],
            PotionType::Subscription => &RECIPES[2],
            PotionType::Knowledge => &RECIPES[3],
            PotionType::Investment => &RECIPES[4],
            PotionType::Budget => &RECIPES[5],
        }
    }
}

/// A fixed brewing recipe.
#[derive(Debug)]
pub struct PotionRecipe {
    pub potion_type: PotionType,
    pub name: &'static str,
    pub icon: &'static str,
    pub effect: &'static str,
    /// Ingredient costs, checked in this order.
    pub requirements: &'static [(Ingredient, u32)],
    pub duration_days: i64,
}

impl PotionRecipe {
    pub fn duration_millis(&self) -> i64 {
        self.duration_days * DAY_MILLIS
    }
}

pub static RECIPES: [PotionRecipe; 6] = [
    PotionRecipe {
        potion_type: PotionType::Challenge,
        name: "Challenge Potion",
        icon: "🛡",
        effect: "Reduces penalties and improves budget adherence",
        requirements: &[(Ingredient::Savings, 3), (Ingredient::Budget, 2)],
        duration_days: 7,
    },
    PotionRecipe {
        potion_type: PotionType::Savings,
        name: "Savings Elixir",
        icon: "💎",
        effect: "Boosts score multipliers and accelerates savings",
        requirements: &[(Ingredient::Savings, 5), (Ingredient::Investment, 2)],
        duration_days: 14,
    },
    PotionRecipe {
        potion_type: PotionType::Subscription,
        name: "Subscription Dissolver",
        icon: "🧹",
        effect: "AI suggests unused subscriptions to cancel",
        requirements: &[(Ingredient::Budget, 4), (Ingredient::Knowledge, 2)],
        duration_days: 30,
    },
    PotionRecipe {
        potion_type: PotionType::Knowledge,
        name: "Knowledge Boost",
        icon: "🧠",
        effect: "Unlocks advanced financial literacy modules",
        requirements: &[(Ingredient::Knowledge, 5), (Ingredient::Savings, 2)],
        duration_days: 30,
    },
    PotionRecipe {
        potion_type: PotionType::Investment,
        name: "Investment Catalyst",
        icon: "📈",
        effect: "Enhances investment performance insights",
        requirements: &[(Ingredient::Investment, 4), (Ingredient::Knowledge, 3)],
        duration_days: 14,
    },
    PotionRecipe {
        potion_type: PotionType::Budget,
        name: "Budget Stabilizer",
        icon: "⚖",
        effect: "Maintains consistent budget adherence",
        requirements: &[(Ingredient::Budget, 5), (Ingredient::Savings, 3)],
        duration_days: 7,
    },
];

/// A brewed potion. Timestamps are Unix epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Potion {
    #[serde(rename = "type")]
    pub potion_type: PotionType,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub effect: String,
    #[serde(default)]
    pub brewed_at: i64,
    /// Missing expiry reads as 0, so the potion is pruned on next access
    #[serde(default)]
    pub expires_at: i64,
}

impl Potion {
    /// A potion is active until its expiry instant, exclusive.
    pub fn is_active(&self, now_millis: i64) -> bool {
        self.expires_at > now_millis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_type_has_its_own_recipe() {
        for potion_type in PotionType::ALL {
            assert_eq!(potion_type.recipe().potion_type, potion_type);
        }
    }

    #[test]
    fn test_potion_type_wire_name() {
        let json = serde_json::to_value(PotionType::Subscription).unwrap();
        assert_eq!(json, "subscription");
        assert_eq!(PotionType::parse("elixir"), None);
    }

    #[test]
    fn test_is_active_boundary() {
        let potion = Potion {
            potion_type: PotionType::Budget,
            name: "Budget Stabilizer".to_string(),
            icon: "⚖".to_string(),
            effect: String::new(),
            brewed_at: 0,
            expires_at: 1_000,
        };
        assert!(potion.is_active(999));
        assert!(!potion.is_active(1_000));
    }
}
