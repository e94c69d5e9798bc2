//! Client-side session: the bearer token plus the signed-in user's display
//! fields, with an explicit load / save / clear lifecycle over a pluggable store.

use crate::error::ClientError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared::domain::responses::{TokenResponse, UserResponse};
use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};
use tracing::{debug, info};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    pub token: Option<String>,
    pub user: Option<UserResponse>,
}

pub type DynSessionStore = Arc<dyn SessionStore>;

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// An empty context when nothing has been saved.
    async fn load(&self) -> Result<SessionContext, ClientError>;
    async fn save(&self, context: &SessionContext) -> Result<(), ClientError>;
    async fn clear(&self) -> Result<(), ClientError>;
}

/// JSON file store, the terminal counterpart of browser local storage.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data dir>/pricelist/session.json`, or the working directory when the
    /// platform has no data dir.
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pricelist")
            .join("session.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> Result<SessionContext, ClientError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| ClientError::Session(format!("corrupt session file: {e}"))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(SessionContext::default()),
            Err(e) => Err(ClientError::Session(e.to_string())),
        }
    }

    async fn save(&self, context: &SessionContext) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| ClientError::Session(e.to_string()))?;
        }

        let bytes =
            serde_json::to_vec_pretty(context).map_err(|e| ClientError::Session(e.to_string()))?;
        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|e| ClientError::Session(e.to_string()))?;

        debug!("session saved to {}", self.path.display());
        Ok(())
    }

    async fn clear(&self) -> Result<(), ClientError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ClientError::Session(e.to_string())),
        }
    }
}

#[derive(Debug, Default)]
pub struct MemorySessionStore {
    context: Mutex<SessionContext>,
}

impl MemorySessionStore {
    fn lock(&self) -> Result<std::sync::MutexGuard<'_, SessionContext>, ClientError> {
        self.context
            .lock()
            .map_err(|e| ClientError::Session(e.to_string()))
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self) -> Result<SessionContext, ClientError> {
        Ok(self.lock()?.clone())
    }

    async fn save(&self, context: &SessionContext) -> Result<(), ClientError> {
        *self.lock()? = context.clone();
        Ok(())
    }

    async fn clear(&self) -> Result<(), ClientError> {
        *self.lock()? = SessionContext::default();
        Ok(())
    }
}

/// The session context handed to views.
pub struct Session {
    store: DynSessionStore,
    context: SessionContext,
}

impl Session {
    pub async fn load(store: DynSessionStore) -> Result<Self, ClientError> {
        let context = store.load().await?;
        Ok(Self { store, context })
    }

    pub fn token(&self) -> Option<&str> {
        self.context.token.as_deref()
    }

    pub fn user(&self) -> Option<&UserResponse> {
        self.context.user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.context.token.is_some()
    }

    pub async fn sign_in(&mut self, response: TokenResponse) -> Result<(), ClientError> {
        let context = SessionContext {
            token: Some(response.token),
            user: Some(response.user),
        };
        self.store.save(&context).await?;
        self.context = context;

        if let Some(user) = &self.context.user {
            info!("signed in as {}", user.username);
        }
        Ok(())
    }

    pub async fn sign_out(&mut self) -> Result<(), ClientError> {
        self.store.clear().await?;
        self.context = SessionContext::default();
        Ok(())
    }
}
