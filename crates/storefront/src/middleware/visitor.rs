//! Visitor storage extractor.
//!
//! Adapts the visitor's session to the core [`KeyValueStore`] trait. The
//! stores are synchronous while sessions are async, so the extractor loads a
//! snapshot up front and handlers write it back with
//! [`VisitorStorage::commit`] once they are done mutating.

use axum::{extract::FromRequestParts, http::request::Parts};
use clothing_co_core::{KeyValueStore, MemoryStore, StorageError};
use tower_sessions::Session;

use super::session::VISITOR_STORAGE_KEY;
use crate::error::AppError;

/// The visitor's key-value storage for the duration of one request.
pub struct VisitorStorage {
    session: Session,
    snapshot: MemoryStore,
    dirty: bool,
}

impl VisitorStorage {
    /// Load the snapshot stored in `session`.
    ///
    /// An unreadable snapshot is discarded rather than failing the request.
    pub async fn load(session: Session) -> Self {
        let snapshot = match session.get::<MemoryStore>(VISITOR_STORAGE_KEY).await {
            Ok(snapshot) => snapshot.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unreadable visitor storage");
                MemoryStore::new()
            }
        };

        Self {
            session,
            snapshot,
            dirty: false,
        }
    }

    /// Write the snapshot back to the session if anything changed.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Session` if the session store rejects the write.
    pub async fn commit(self) -> Result<(), AppError> {
        if self.dirty {
            self.session
                .insert(VISITOR_STORAGE_KEY, &self.snapshot)
                .await?;
        }
        Ok(())
    }
}

impl KeyValueStore for VisitorStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.snapshot.get(key)
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        self.dirty = true;
        self.snapshot.set(key, value)
    }
}

impl<S> FromRequestParts<S> for VisitorStorage
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Set by SessionManagerLayer
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or_else(|| AppError::Internal("session layer missing".to_string()))?;

        Ok(Self::load(session).await)
    }
}
