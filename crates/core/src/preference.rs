//! Dark-mode preference.

use tracing::warn;

use crate::storage::{DARK_MODE_KEY, KeyValueStore, StorageError};

/// Colour scheme chosen by the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse the persisted flag. Anything other than `"1"` is light.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("1") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// The value persisted under [`DARK_MODE_KEY`].
    #[must_use]
    pub const fn as_stored(self) -> &'static str {
        match self {
            Self::Light => "0",
            Self::Dark => "1",
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon shown on the dark-mode toggle: the sun switches back to light.
    #[must_use]
    pub const fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "\u{1F319}",
            Self::Dark => "\u{2600}\u{FE0F}",
        }
    }
}

/// The dark-mode flag bound to its storage.
#[derive(Debug)]
pub struct PreferenceStore<S> {
    storage: S,
    theme: Theme,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    /// Read the persisted preference; absent means light.
    #[must_use]
    pub fn restore(storage: S) -> Self {
        let theme = Theme::from_stored(storage.get(DARK_MODE_KEY).as_deref());
        Self { storage, theme }
    }

    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub const fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    /// Flip the preference, persist it and return whether dark mode is now on.
    pub fn toggle(&mut self) -> bool {
        self.theme = self.theme.toggled();
        if let Err(e) = self.persist() {
            warn!(error = %e, "Failed to persist dark-mode preference");
        }
        self.theme.is_dark()
    }

    /// Write the current preference to storage.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write fails.
    pub fn persist(&mut self) -> Result<(), StorageError> {
        self.storage
            .set(DARK_MODE_KEY, self.theme.as_stored().to_string())
    }
}
