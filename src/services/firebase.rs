// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firebase Auth ID token verification.
//!
//! ID tokens are RS256 JWTs signed by Google's `securetoken` service account.
//! Signing keys are fetched as a JWKS document and cached for as long as the
//! response's `Cache-Control: max-age` allows.

use anyhow::Context;
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use reqwest::header::CACHE_CONTROL;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};
use tokio::sync::{Mutex, RwLock};

const JWKS_URL: &str =
    "https://www.googleapis.com/service_accounts/v1/jwk/securetoken@system.gserviceaccount.com";
const ISSUER_PREFIX: &str = "https://securetoken.google.com/";
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(5);
const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(300);
const CLOCK_SKEW_SECS: u64 = 60;
/// Firebase UIDs are at most 128 characters.
const MAX_UID_LEN: usize = 128;

/// Identity extracted from a verified ID token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirebaseUser {
    pub uid: String,
    pub email: Option<String>,
}

/// Token verification failure categories.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FirebaseAuthError {
    /// The token is malformed, expired, or its claims do not match.
    #[error("invalid ID token: {0}")]
    InvalidToken(String),
    /// Signing keys could not be fetched.
    #[error("signing keys unavailable: {0}")]
    KeysUnavailable(String),
}

#[derive(Clone)]
enum KeySource {
    Google,
    Static {
        kid: String,
        algorithm: Algorithm,
        decoding_key: Arc<DecodingKey>,
    },
}

#[derive(Clone)]
struct JwksCacheEntry {
    keys_by_kid: HashMap<String, Arc<DecodingKey>>,
    expires_at: Instant,
}

/// Verifier for Firebase Auth ID tokens of a single project.
pub struct FirebaseVerifier {
    http_client: reqwest::Client,
    project_id: String,
    issuer: String,
    keys: KeySource,
    jwks_cache: RwLock<Option<JwksCacheEntry>>,
    refresh_lock: Mutex<()>,
}

impl FirebaseVerifier {
    /// Create a production verifier that fetches Google's signing keys.
    pub fn new(project_id: &str) -> anyhow::Result<Self> {
        let verifier = Self::with_key_source(project_id, KeySource::Google)?;

        tracing::info!(
            project_id = %verifier.project_id,
            issuer = %verifier.issuer,
            "Initialized Firebase ID token verifier"
        );

        Ok(verifier)
    }

    /// Create a verifier that trusts exactly one key.
    ///
    /// Intended for local and integration tests, where tokens are minted with
    /// a known key instead of by Firebase.
    pub fn new_with_static_key(
        project_id: &str,
        kid: impl Into<String>,
        algorithm: Algorithm,
        decoding_key: DecodingKey,
    ) -> anyhow::Result<Self> {
        let kid = kid.into();
        if kid.trim().is_empty() {
            anyhow::bail!("static key kid must not be empty");
        }

        Self::with_key_source(
            project_id,
            KeySource::Static {
                kid,
                algorithm,
                decoding_key: Arc::new(decoding_key),
            },
        )
    }

    fn with_key_source(project_id: &str, keys: KeySource) -> anyhow::Result<Self> {
        let project_id = project_id.trim();
        if project_id.is_empty() {
            anyhow::bail!("Firebase project ID must not be empty");
        }

        let http_client = reqwest::Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .context("failed building Firebase HTTP client")?;

        Ok(Self {
            http_client,
            project_id: project_id.to_string(),
            issuer: format!("{ISSUER_PREFIX}{project_id}"),
            keys,
            jwks_cache: RwLock::new(None),
            refresh_lock: Mutex::new(()),
        })
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Verify an ID token and return the identity it asserts.
    pub async fn verify_id_token(&self, token: &str) -> Result<FirebaseUser, FirebaseAuthError> {
        let header = decode_header(token)
            .map_err(|e| FirebaseAuthError::InvalidToken(format!("invalid JWT header: {e}")))?;

        let expected_alg = match &self.keys {
            KeySource::Google => Algorithm::RS256,
            KeySource::Static { algorithm, .. } => *algorithm,
        };
        if header.alg != expected_alg {
            return Err(FirebaseAuthError::InvalidToken(format!(
                "unexpected JWT alg: {:?}",
                header.alg
            )));
        }

        let kid = header
            .kid
            .ok_or_else(|| FirebaseAuthError::InvalidToken("missing JWT kid".to_string()))?;

        let decoding_key = self.decoding_key_for_kid(&kid).await?;

        let mut validation = Validation::new(expected_alg);
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);
        validation.set_issuer(&[self.issuer.as_str()]);
        validation.set_audience(&[self.project_id.as_str()]);
        validation.leeway = CLOCK_SKEW_SECS;

        let token_data = decode::<IdTokenClaims>(token, decoding_key.as_ref(), &validation)
            .map_err(|e| FirebaseAuthError::InvalidToken(format!("JWT validation failed: {e}")))?;

        let claims = token_data.claims;

        validate_not_in_future("iat", claims.iat)?;
        validate_not_in_future("auth_time", claims.auth_time)?;

        if claims.sub.is_empty() || claims.sub.len() > MAX_UID_LEN {
            return Err(FirebaseAuthError::InvalidToken(
                "sub claim must be a non-empty UID of at most 128 characters".to_string(),
            ));
        }

        tracing::debug!(
            uid = %claims.sub,
            email = claims.email.as_deref().unwrap_or("<missing>"),
            "Firebase ID token verified"
        );

        Ok(FirebaseUser {
            uid: claims.sub,
            email: claims.email,
        })
    }

    async fn decoding_key_for_kid(&self, kid: &str) -> Result<Arc<DecodingKey>, FirebaseAuthError> {
        if let KeySource::Static {
            kid: static_kid,
            decoding_key,
            ..
        } = &self.keys
        {
            if kid == static_kid {
                return Ok(decoding_key.clone());
            }
            return Err(FirebaseAuthError::InvalidToken(format!(
                "unknown JWT kid for static verifier: {kid}"
            )));
        }

        if let Some(key) = self.lookup_cached_key(kid).await {
            return Ok(key);
        }

        // Google rotates keys; an unknown kid may just mean the cache is stale.
        for force_refresh in [false, true] {
            self.refresh_jwks(force_refresh).await?;
            if let Some(key) = self.lookup_cached_key(kid).await {
                return Ok(key);
            }
        }

        Err(FirebaseAuthError::InvalidToken(format!(
            "JWT kid not found in JWKS after refresh: {kid}"
        )))
    }

    async fn lookup_cached_key(&self, kid: &str) -> Option<Arc<DecodingKey>> {
        let cache = self.jwks_cache.read().await;
        let now = Instant::now();
        cache
            .as_ref()
            .filter(|entry| entry.expires_at > now)
            .and_then(|entry| entry.keys_by_kid.get(kid))
            .cloned()
    }

    async fn refresh_jwks(&self, force_refresh: bool) -> Result<(), FirebaseAuthError> {
        let _guard = self.refresh_lock.lock().await;

        if !force_refresh {
            let cache = self.jwks_cache.read().await;
            if cache
                .as_ref()
                .is_some_and(|entry| entry.expires_at > Instant::now())
            {
                return Ok(());
            }
        }

        tracing::debug!(jwks_uri = JWKS_URL, "Refreshing Firebase JWKS cache");

        let response = self
            .http_client
            .get(JWKS_URL)
            .send()
            .await
            .map_err(|e| FirebaseAuthError::KeysUnavailable(format!("JWKS request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(FirebaseAuthError::KeysUnavailable(format!(
                "JWKS request returned status {}",
                response.status()
            )));
        }

        let ttl = cache_ttl_from_headers(response.headers(), DEFAULT_CACHE_TTL);

        let jwks: Jwks = response
            .json()
            .await
            .map_err(|e| FirebaseAuthError::KeysUnavailable(format!("invalid JWKS JSON: {e}")))?;

        let keys_by_kid = usable_keys(jwks);
        if keys_by_kid.is_empty() {
            return Err(FirebaseAuthError::KeysUnavailable(
                "JWKS response did not include any usable RSA keys".to_string(),
            ));
        }

        *self.jwks_cache.write().await = Some(JwksCacheEntry {
            keys_by_kid,
            expires_at: Instant::now() + ttl,
        });

        tracing::debug!(ttl_secs = ttl.as_secs(), "Firebase JWKS cache refreshed");
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct Jwks {
    keys: Vec<Jwk>,
}

#[derive(Debug, Deserialize)]
struct Jwk {
    kid: String,
    kty: String,
    alg: Option<String>,
    n: String,
    e: String,
    #[serde(rename = "use")]
    use_: Option<String>,
}

#[derive(Debug, Deserialize)]
struct IdTokenClaims {
    sub: String,
    iat: Option<u64>,
    auth_time: Option<u64>,
    email: Option<String>,
}

/// Keep RS256 signing keys, keyed by kid.
fn usable_keys(jwks: Jwks) -> HashMap<String, Arc<DecodingKey>> {
    let mut keys_by_kid = HashMap::new();

    for jwk in jwks.keys {
        if jwk.kty != "RSA" || jwk.kid.trim().is_empty() {
            continue;
        }
        if jwk.alg.as_deref().is_some_and(|alg| alg != "RS256") {
            continue;
        }
        if jwk.use_.as_deref().is_some_and(|u| u != "sig") {
            continue;
        }

        match DecodingKey::from_rsa_components(&jwk.n, &jwk.e) {
            Ok(key) => {
                keys_by_kid.insert(jwk.kid, Arc::new(key));
            }
            Err(e) => {
                tracing::warn!(error = %e, kid = %jwk.kid, "Skipping invalid RSA JWKS key");
            }
        }
    }

    keys_by_kid
}

fn validate_not_in_future(claim: &str, value: Option<u64>) -> Result<(), FirebaseAuthError> {
    let Some(value) = value else {
        return Err(FirebaseAuthError::InvalidToken(format!("missing {claim} claim")));
    };

    if value > now_unix_secs() + CLOCK_SKEW_SECS {
        return Err(FirebaseAuthError::InvalidToken(format!(
            "{claim} claim is in the future"
        )));
    }

    Ok(())
}

fn cache_ttl_from_headers(headers: &reqwest::header::HeaderMap, fallback: Duration) -> Duration {
    headers
        .get(CACHE_CONTROL)
        .and_then(|v| v.to_str().ok())
        .and_then(parse_cache_control_max_age)
        .map(Duration::from_secs)
        .unwrap_or(fallback)
}

fn parse_cache_control_max_age(value: &str) -> Option<u64> {
    value.split(',').find_map(|directive| {
        directive
            .trim()
            .strip_prefix("max-age=")
            .and_then(|raw| raw.trim_matches('"').parse::<u64>().ok())
    })
}

fn now_unix_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
