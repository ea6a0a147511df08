// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Potion brewing and expiry.

use crate::models::{Ingredient, Potion, PotionType, User};

/// Why a brew was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BrewError {
    #[error("Not enough {ingredient} ingredients")]
    Insufficient {
        ingredient: Ingredient,
        required: u32,
        have: u32,
    },
}

/// Brew a potion for `user`, spending the recipe's ingredients.
///
/// Requirements are checked in recipe order and nothing is spent unless all
/// of them are met. Repeated calls brew repeatedly.
pub fn brew(user: &mut User, potion_type: PotionType, now_millis: i64) -> Result<Potion, BrewError> {
    let recipe = potion_type.recipe();

    for &(ingredient, required) in recipe.requirements {
        let have = user.ingredients.get(ingredient);
        if have < required {
            return Err(BrewError::Insufficient {
                ingredient,
                required,
                have,
            });
        }
    }

    for &(ingredient, required) in recipe.requirements {
        *user.ingredients.get_mut(ingredient) -= required;
    }

    let potion = Potion {
        potion_type,
        name: recipe.name.to_string(),
        icon: recipe.icon.to_string(),
        effect: recipe.effect.to_string(),
        brewed_at: now_millis,
        expires_at: now_millis + recipe.duration_millis(),
    };

    tracing::info!(
        user_id = %user.id,
        potion = potion_type.as_str(),
        expires_at = potion.expires_at,
        "Potion brewed"
    );

    user.active_potions.push(potion.clone());
    Ok(potion)
}

/// Drop expired potions. Returns how many were removed.
pub fn prune_expired(user: &mut User, now_millis: i64) -> usize {
    let before = user.active_potions.len();
    user.active_potions.retain(|p| p.is_active(now_millis));
    before - user.active_potions.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::potion::DAY_MILLIS;
    use crate::models::Ingredients;

    fn user_with(ingredients: Ingredients) -> User {
        User {
            id: "1".to_string(),
            ingredients,
            ..Default::default()
        }
    }

    #[test]
    fn test_brew_spends_ingredients_and_sets_expiry() {
        let mut user = user_with(Ingredients {
            savings: 4,
            budget: 2,
            knowledge: 0,
            investment: 0,
        });

        let potion = brew(&mut user, PotionType::Challenge, 1_000).unwrap();

        assert_eq!(potion.name, "Challenge Potion");
        assert_eq!(potion.brewed_at, 1_000);
        assert_eq!(potion.expires_at, 1_000 + 7 * DAY_MILLIS);
        assert_eq!(user.ingredients.savings, 1);
        assert_eq!(user.ingredients.budget, 0);
        assert_eq!(user.active_potions, vec![potion]);
    }

    #[test]
    fn test_brew_reports_first_missing_requirement_without_spending() {
        let mut user = user_with(Ingredients {
            savings: 1,
            budget: 0,
            knowledge: 0,
            investment: 0,
        });

        let err = brew(&mut user, PotionType::Challenge, 0).unwrap_err();

        assert_eq!(
            err,
            BrewError::Insufficient {
                ingredient: Ingredient::Savings,
                required: 3,
                have: 1,
            }
        );
        assert_eq!(err.to_string(), "Not enough savings ingredients");
        assert_eq!(user.ingredients.savings, 1);
        assert!(user.active_potions.is_empty());
    }

    #[test]
    fn test_brew_second_requirement_short() {
        let mut user = user_with(Ingredients {
            savings: 10,
            budget: 0,
            knowledge: 0,
            investment: 1,
        });

        let err = brew(&mut user, PotionType::Savings, 0).unwrap_err();

        assert!(matches!(
            err,
            BrewError::Insufficient {
                ingredient: Ingredient::Investment,
                required: 2,
                have: 1
            }
        ));
        assert_eq!(user.ingredients.savings, 10);
    }

    #[test]
    fn test_prune_expired_keeps_active() {
        let mut user = user_with(Ingredients {
            savings: 6,
            budget: 4,
            knowledge: 0,
            investment: 0,
        });
        brew(&mut user, PotionType::Challenge, 0).unwrap();
        brew(&mut user, PotionType::Challenge, 5 * DAY_MILLIS).unwrap();

        let removed = prune_expired(&mut user, 7 * DAY_MILLIS);

        assert_eq!(removed, 1);
        assert_eq!(user.active_potions.len(), 1);
        assert_eq!(user.active_potions[0].brewed_at, 5 * DAY_MILLIS);
    }
}
