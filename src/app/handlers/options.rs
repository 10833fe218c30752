//! Handler für das Speichern der Optionen.

use crate::app::AppState;

/// Speichert die aktuellen Optionen nach `state.options_path`.
pub fn save(state: &mut AppState) -> anyhow::Result<()> {
    state.options.save_to_file(&state.options_path)
}
