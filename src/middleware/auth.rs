// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Optional Firebase authentication middleware.
//!
//! A request carrying `Authorization: Bearer <token>` is verified when a
//! Firebase project is configured and rejected with 401 if the token is bad.
//! Everything else runs as a trusted caller that names itself with `userId`.

use crate::error::AppError;
use crate::services::firebase::FirebaseAuthError;
use crate::AppState;
use axum::{
    extract::{Query, Request, State},
    http::{header, HeaderValue},
    middleware::Next,
    response::Response,
};
use serde::Deserialize;
use std::sync::Arc;

/// User assumed when a trusted caller names nobody.
pub const DEFAULT_USER_ID: &str = "1";

/// Who is making the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    /// Verified Firebase ID token.
    Firebase { uid: String, email: Option<String> },
    /// No verified token; `user_id` is the `userId` query parameter, if any.
    Trusted { user_id: Option<String> },
}

impl Identity {
    /// Key of the caller's user record.
    ///
    /// Firebase callers are always their UID. Trusted callers use the query
    /// `userId`, then `body_user_id`, then `path_id`, then the default user.
    pub fn user_key(&self, body_user_id: Option<&str>, path_id: Option<&str>) -> String {
        match self {
            Identity::Firebase { uid, .. } => uid.clone(),
            Identity::Trusted { user_id } => user_id
                .as_deref()
                .or(body_user_id)
                .or(path_id)
                .filter(|id| !id.is_empty())
                .unwrap_or(DEFAULT_USER_ID)
                .to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct IdentityQuery {
    #[serde(rename = "userId")]
    user_id: Option<String>,
}

/// Middleware that attaches an [`Identity`] to every request.
pub async fn optional_auth(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_bearer_token(request.headers().get(header::AUTHORIZATION));

    let identity = match (token, state.firebase.as_ref()) {
        (Some(token), Some(verifier)) => match verifier.verify_id_token(&token).await {
            Ok(user) => Identity::Firebase {
                uid: user.uid,
                email: user.email,
            },
            Err(FirebaseAuthError::InvalidToken(reason)) => {
                tracing::warn!(reason = %reason, "Rejected Firebase ID token");
                return Err(AppError::InvalidToken);
            }
            Err(err @ FirebaseAuthError::KeysUnavailable(_)) => {
                return Err(AppError::Internal(err.into()));
            }
        },
        _ => {
            let query = Query::<IdentityQuery>::try_from_uri(request.uri())
                .map(|Query(q)| q)
                .unwrap_or_default();
            Identity::Trusted {
                user_id: query.user_id.filter(|id| !id.is_empty()),
            }
        }
    };

    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}

/// Token from a `Bearer` authorization header. Other schemes are ignored.
fn extract_bearer_token(auth_header: Option<&HeaderValue>) -> Option<String> {
    auth_header
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_bearer_token_variants() {
        assert_eq!(extract_bearer_token(None), None);

        let basic = HeaderValue::from_static("Basic abc");
        assert_eq!(extract_bearer_token(Some(&basic)), None);

        let empty = HeaderValue::from_static("Bearer ");
        assert_eq!(extract_bearer_token(Some(&empty)), None);

        let good = HeaderValue::from_static("Bearer abc.def.ghi");
        assert_eq!(
            extract_bearer_token(Some(&good)).as_deref(),
            Some("abc.def.ghi")
        );
    }

    #[test]
    fn trusted_user_key_priority() {
        let from_query = Identity::Trusted {
            user_id: Some("7".to_string()),
        };
        assert_eq!(from_query.user_key(Some("8"), Some("9")), "7");

        let anonymous = Identity::Trusted { user_id: None };
        assert_eq!(anonymous.user_key(Some("8"), Some("9")), "8");
        assert_eq!(anonymous.user_key(None, Some("9")), "9");
        assert_eq!(anonymous.user_key(None, None), DEFAULT_USER_ID);
    }

    #[test]
    fn firebase_user_key_is_uid() {
        let identity = Identity::Firebase {
            uid: "abc".to_string(),
            email: None,
        };
        assert_eq!(identity.user_key(Some("8"), Some("9")), "abc");
    }
}
