// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use crate::db::StoreError;
use crate::models::Ingredient;
use crate::services::brewing::BrewError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Not enough {ingredient} ingredients")]
    InsufficientIngredients {
        ingredient: Ingredient,
        required: u32,
        have: u32,
    },

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn user_not_found() -> Self {
        AppError::NotFound("User not found".to_string())
    }
}

impl From<BrewError> for AppError {
    fn from(err: BrewError) -> Self {
        match err {
            BrewError::Insufficient {
                ingredient,
                required,
                have,
            } => AppError::InsufficientIngredients {
                ingredient,
                required,
                have,
            },
        }
    }
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    required: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    have: Option<u32>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidToken => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) | AppError::InsufficientIngredients { .. } => {
                StatusCode::BAD_REQUEST
            }
            AppError::Storage(err) => {
                tracing::error!(error = %err, "Storage error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let (required, have) = match &self {
            AppError::InsufficientIngredients { required, have, .. } => {
                (Some(*required), Some(*have))
            }
            _ => (None, None),
        };

        // Server-side failures never leak details to the client.
        let error = if status.is_server_error() {
            "Server error".to_string()
        } else {
            self.to_string()
        };

        let body = ErrorResponse {
            error,
            required,
            have,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
