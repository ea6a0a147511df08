// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! BudgetBrew: a gamified personal-finance tracker
//!
//! This crate provides the backend API: FinScore leaderboards, quizzes, the
//! ingredient and potion reward economy, expense tracking and teams, all kept
//! in a single JSON document.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::JsonStore;
use ring::rand::SystemRandom;
use services::FirebaseVerifier;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: JsonStore,
    /// Present when a Firebase project is configured.
    pub firebase: Option<FirebaseVerifier>,
    pub rng: SystemRandom,
}
