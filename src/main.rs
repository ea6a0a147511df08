// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! BudgetBrew API Server
//!
//! Serves the BudgetBrew REST API and static frontend, persisting everything
//! to a single JSON document.

use anyhow::Context;
use budgetbrew::{config::Config, db::JsonStore, services::FirebaseVerifier, AppState};
use ring::rand::SystemRandom;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured JSON logging
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(port = config.port, "Starting BudgetBrew API");

    let store = JsonStore::open(&config.data_path)
        .await
        .context("Failed to open data file")?;

    let firebase = match config.firebase_project_id.as_deref() {
        Some(project_id) => Some(
            FirebaseVerifier::new(project_id)
                .context("Failed to initialize Firebase verifier")?,
        ),
        None => {
            tracing::warn!(
                "FIREBASE_PROJECT_ID not set; requests are trusted to identify themselves with userId"
            );
            None
        }
    };

    tracing::info!(
        static_dir = %config.static_dir.display(),
        monthly_budget = config.monthly_budget,
        "Serving static frontend"
    );

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        store,
        firebase,
        rng: SystemRandom::new(),
    });

    // Build router
    let app = budgetbrew::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> anyhow::Result<()> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("budgetbrew=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();

    Ok(())
}
