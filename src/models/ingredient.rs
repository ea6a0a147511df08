// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Ingredient reward currency.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One of the four ingredient kinds a user can collect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ingredient {
    Savings,
    Budget,
    Knowledge,
    Investment,
}

impl Ingredient {
    pub const ALL: [Ingredient; 4] = [
        Ingredient::Savings,
        Ingredient::Budget,
        Ingredient::Knowledge,
        Ingredient::Investment,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Ingredient::Savings => "savings",
            Ingredient::Budget => "budget",
            Ingredient::Knowledge => "knowledge",
            Ingredient::Investment => "investment",
        }
    }

    /// Parse an ingredient from its wire name. Unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.as_str() == name)
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ingredients granted by a single activity, keyed by kind.
///
/// Zero entries are kept so clients see every ingredient the rule considered.
pub type IngredientAward = BTreeMap<Ingredient, u32>;

/// A user's ingredient balance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredients {
    #[serde(default)]
    pub savings: u32,
    #[serde(default)]
    pub budget: u32,
    #[serde(default)]
    pub knowledge: u32,
    #[serde(default)]
    pub investment: u32,
}

impl Ingredients {
    pub fn get(&self, ingredient: Ingredient) -> u32 {
        match ingredient {
            Ingredient::Savings => self.savings,
            Ingredient::Budget => self.budget,
            Ingredient::Knowledge => self.knowledge,
            Ingredient::Investment => self.investment,
        }
    }

    pub fn get_mut(&mut self, ingredient: Ingredient) -> &mut u32 {
        match ingredient {
            Ingredient::Savings => &mut self.savings,
            Ingredient::Budget => &mut self.budget,
            Ingredient::Knowledge => &mut self.knowledge,
            Ingredient::Investment => &mut self.investment,
        }
    }

    /// Credit every entry of an award to this balance.
    pub fn add_award(&mut self, award: &IngredientAward) {
        for (&ingredient, &amount) in award {
            let slot = self.get_mut(ingredient);
            *slot = slot.saturating_add(amount);
        }
    }
}

/// Merge `other` into `total`, summing amounts per ingredient.
pub fn merge_awards(total: &mut IngredientAward, other: &IngredientAward) {
    for (&ingredient, &amount) in other {
        let slot = total.entry(ingredient).or_insert(0);
        *slot = slot.saturating_add(amount);
    }
}
