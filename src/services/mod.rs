// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod brewing;
pub mod budget;
pub mod finscore;
pub mod firebase;
pub mod leaderboard;
pub mod quiz;
pub mod rewards;
pub mod teams;

pub use firebase::{FirebaseAuthError, FirebaseUser, FirebaseVerifier};
pub use leaderboard::{rank_users, ScoredUser};
