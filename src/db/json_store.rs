// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Single-file JSON document store.
//!
//! The whole document is read, modified and written back on every mutation.
//! A process-wide mutex serializes access so concurrent requests cannot lose
//! each other's writes. Writes go to a sibling temp file that is then renamed
//! over the data file.

use crate::models::BrewData;
use std::path::PathBuf;
use tokio::sync::Mutex;

/// Document written when the data file does not exist yet.
const SEED_DOCUMENT: &str = include_str!("../../data/seed.json");

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid data document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// JSON file holding the BudgetBrew document.
pub struct JsonStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonStore {
    /// Open the store, seeding the file if it is missing.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| StoreError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        let store = Self {
            path,
            lock: Mutex::new(()),
        };

        if tokio::fs::try_exists(&store.path)
            .await
            .map_err(|source| store.io_error(source))?
        {
            let data = store.load().await?;
            tracing::info!(
                path = %store.path.display(),
                users = data.users.len(),
                teams = data.teams.len(),
                "Opened data file"
            );
        } else {
            let seed: BrewData = serde_json::from_str(SEED_DOCUMENT)?;
            store.save(&seed).await?;
            tracing::info!(path = %store.path.display(), "Created data file from seed");
        }

        Ok(store)
    }

    /// Snapshot of the current document.
    pub async fn read(&self) -> Result<BrewData, StoreError> {
        let _guard = self.lock.lock().await;
        self.load().await
    }

    /// Apply `f` to the document and persist the result.
    ///
    /// The document is written only when `f` succeeds; an error leaves the
    /// file untouched.
    pub async fn update<T, E, F>(&self, f: F) -> Result<T, E>
    where
        E: From<StoreError>,
        F: FnOnce(&mut BrewData) -> Result<T, E>,
    {
        let _guard = self.lock.lock().await;
        let mut data = self.load().await?;
        let result = f(&mut data)?;
        self.save(&data).await?;
        Ok(result)
    }

    async fn load(&self) -> Result<BrewData, StoreError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| self.io_error(source))?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn save(&self, data: &BrewData) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(data)?;
        let tmp_path = self.path.with_extension("json.tmp");

        tokio::fs::write(&tmp_path, &json)
            .await
            .map_err(|source| StoreError::Io {
                path: tmp_path.clone(),
                source,
            })?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|source| self.io_error(source))?;

        tracing::debug!(path = %self.path.display(), bytes = json.len(), "Saved data file");
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Team;

    #[tokio::test]
    async fn test_open_creates_seed_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("data.json");

        let store = JsonStore::open(&path).await.unwrap();
        let data = store.read().await.unwrap();

        assert!(path.exists());
        assert_eq!(data.users.len(), 4);
        assert!(!data.quiz_questions.is_empty());
        assert!(data.teams.is_empty());
    }

    #[tokio::test]
    async fn test_update_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");

        let store = JsonStore::open(&path).await.unwrap();
        store
            .update(|data| {
                data.teams.push(Team {
                    id: "1".to_string(),
                    name: "Savers".to_string(),
                    code: "ABC123".to_string(),
                    created_at: 42,
                });
                Ok::<_, StoreError>(())
            })
            .await
            .unwrap();
        drop(store);

        let reopened = JsonStore::open(&path).await.unwrap();
        let data = reopened.read().await.unwrap();
        assert_eq!(data.teams.len(), 1);
        assert_eq!(data.teams[0].code, "ABC123");
    }

    #[tokio::test]
    async fn test_failed_update_is_not_saved() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path().join("data.json")).await.unwrap();
        let before = store.read().await.unwrap();

        let result: Result<(), anyhow::Error> = store
            .update(|data| {
                data.users.clear();
                anyhow::bail!("rejected")
            })
            .await;

        assert!(result.is_err());
        assert_eq!(store.read().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_round_trip_is_lossless() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path().join("data.json")).await.unwrap();

        let first = store.read().await.unwrap();
        store.update(|_| Ok::<_, StoreError>(())).await.unwrap();
        let second = store.read().await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_sparse_records_load_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        let document = serde_json::json!({
            "users": [{
                "id": "1",
                "name": "Legacy",
                "activities": [
                    { "type": "budget", "timestamp": 1, "ingredientsAwarded": {} },
                    { "type": "quiz", "score": 80 }
                ],
                "activePotions": [{ "type": "budget", "name": "Budget Stabilizer" }],
                "expenses": [{ "id": 1, "description": "Coffee" }]
            }],
            "teams": [{ "id": "1", "name": "Savers", "code": "ABC123" }]
        });
        std::fs::write(&path, document.to_string()).unwrap();

        let store = JsonStore::open(&path).await.unwrap();
        let data = store.read().await.unwrap();

        let user = data.find_user("1").unwrap();
        assert_eq!(user.activities[0].score, 0.0);
        assert_eq!(user.activities[1].timestamp, 0);
        assert_eq!(user.active_potions[0].expires_at, 0);
        assert_eq!(user.expenses[0].amount, 0.0);
        assert_eq!(data.teams[0].created_at, 0);
        assert!(data.quiz_questions.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_fields_survive_update() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        let document = serde_json::json!({
            "users": [{ "id": "1", "name": "Alex", "avatar": "wizard.png" }],
            "settings": { "theme": "dark" }
        });
        std::fs::write(&path, document.to_string()).unwrap();

        let store = JsonStore::open(&path).await.unwrap();
        store
            .update(|data| {
                data.find_user_mut("1").unwrap().quiz_score = 60.0;
                Ok::<_, StoreError>(())
            })
            .await
            .unwrap();

        let saved: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(saved["users"][0]["avatar"], "wizard.png");
        assert_eq!(saved["users"][0]["quizScore"], 60.0);
        assert_eq!(saved["settings"], serde_json::json!({ "theme": "dark" }));
    }

    #[tokio::test]
    async fn test_corrupt_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, b"{ not json").unwrap();

        assert!(matches!(
            JsonStore::open(&path).await,
            Err(StoreError::Parse(_))
        ));
    }
}
