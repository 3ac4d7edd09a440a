//! Dark-mode preference commands.

use std::io::Write;

use clothing_co_core::{KeyValueStore, PreferenceStore, Theme};

use crate::error::CliError;

/// Print whether dark mode is on.
///
/// # Errors
///
/// Returns `CliError::Io` if writing the output fails.
pub fn show(storage: impl KeyValueStore, out: &mut impl Write) -> Result<(), CliError> {
    let prefs = PreferenceStore::restore(storage);
    write_theme(out, prefs.theme())
}

/// Flip dark mode and print the new state.
///
/// # Errors
///
/// Returns `CliError::Io` if writing the output fails.
pub fn toggle(storage: impl KeyValueStore, out: &mut impl Write) -> Result<(), CliError> {
    let mut prefs = PreferenceStore::restore(storage);
    let dark = prefs.toggle();
    tracing::debug!(dark, "Dark mode toggled");
    write_theme(out, prefs.theme())
}

fn write_theme(out: &mut impl Write, theme: Theme) -> Result<(), CliError> {
    let state = if theme.is_dark() { "on" } else { "off" };
    writeln!(out, "Dark mode: {state} {}", theme.toggle_icon())?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clothing_co_core::MemoryStore;
    use clothing_co_core::storage::DARK_MODE_KEY;

    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let mut storage = MemoryStore::new();
        let mut out = Vec::new();

        show(&mut storage, &mut out).unwrap();
        toggle(&mut storage, &mut out).unwrap();
        assert_eq!(storage.get(DARK_MODE_KEY).as_deref(), Some("1"));
        show(&mut storage, &mut out).unwrap();
        toggle(&mut storage, &mut out).unwrap();
        assert_eq!(storage.get(DARK_MODE_KEY).as_deref(), Some("0"));

        let text = String::from_utf8(out).unwrap();
        let states: Vec<&str> = text
            .lines()
            .filter_map(|line| line.split_whitespace().nth(2))
            .collect();
        assert_eq!(states, ["off", "on", "on", "off"]);
    }
}
