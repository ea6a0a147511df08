// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod document;
pub mod expense;
pub mod ingredient;
pub mod potion;
pub mod quiz;
pub mod team;
pub mod user;

pub use document::BrewData;
pub use expense::{Expense, ExpenseCategory};
pub use ingredient::{Ingredient, IngredientAward, Ingredients};
pub use potion::{Potion, PotionRecipe, PotionType, RECIPES};
pub use quiz::QuizQuestion;
pub use team::{Team, TeamDetail, TeamMember, TeamSummary};
pub use user::{ActivityRecord, User};
