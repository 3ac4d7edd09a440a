//! Application state shared across handlers.

use std::sync::Arc;

use clothing_co_core::Catalogue;

use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Holds only read-only data: per-visitor state
/// (cart, dark mode) lives in the visitor's session, never here.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalogue: &'static Catalogue,
}

impl AppState {
    /// Create application state selling from the built-in catalogue.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalogue: Catalogue::builtin(),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get the catalogue products are resolved against.
    #[must_use]
    pub fn catalogue(&self) -> &'static Catalogue {
        self.inner.catalogue
    }
}
