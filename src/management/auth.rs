use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{client::CredentialProvider, config};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredToken {
    pub access_token: String,
    pub obtained_at: u64,
}

/// Persistent home of the access token issued by `login`.
///
/// The token is kept as JSON under the local data directory. There is no
/// expiry or refresh handling; a stale token is simply rejected by the backend.
pub struct TokenStore {
    path: PathBuf,
    token: Option<StoredToken>,
}

impl TokenStore {
    pub fn new(path: PathBuf) -> Self {
        TokenStore { path, token: None }
    }

    /// Reads the token file at `path`. A missing file yields an empty store.
    pub async fn load(path: PathBuf) -> Result<Self, String> {
        if !path.is_file() {
            return Ok(Self::new(path));
        }

        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| e.to_string())?;
        let token: StoredToken = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self {
            path,
            token: Some(token),
        })
    }

    /// Loads the store from its default location, see [`TokenStore::default_path`].
    pub async fn load_default() -> Result<Self, String> {
        Self::load(Self::default_path()).await
    }

    pub fn set(&mut self, access_token: impl Into<String>) {
        self.token = Some(StoredToken {
            access_token: access_token.into(),
            obtained_at: Utc::now().timestamp() as u64,
        });
    }

    pub async fn persist(&self) -> Result<(), String> {
        let Some(token) = &self.token else {
            return Err("no token to persist".to_string());
        };

        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(token).map_err(|e| e.to_string())?;
        async_fs::write(&self.path, json)
            .await
            .map_err(|e| e.to_string())
    }

    pub async fn clear(&mut self) -> Result<(), String> {
        self.token = None;
        if self.path.is_file() {
            async_fs::remove_file(&self.path)
                .await
                .map_err(|e| e.to_string())?;
        }
        Ok(())
    }

    pub fn current_token(&self) -> Option<&StoredToken> {
        self.token.as_ref()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn default_path() -> PathBuf {
        let mut path = config::data_dir();
        path.push("cache/token.json");
        path
    }
}

impl CredentialProvider for TokenStore {
    fn bearer_token(&self) -> Option<&str> {
        self.token.as_ref().map(|t| t.access_token.as_str())
    }
}
