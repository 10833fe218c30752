//! Keyboard-Shortcuts.
//!
//! Verarbeitet globale Tasten und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (modifiers, key_c_pressed, key_s_pressed) = ui.input(|i| {
        (
            i.modifiers,
            key_pressed_once(i, egui::Key::C),
            key_pressed_once(i, egui::Key::S),
        )
    });

    // C (ohne Ctrl/Cmd, sonst Kopieren) → Kollaps
    if key_c_pressed && !modifiers.command {
        events.push(AppIntent::CollapseRequested);
    }

    // Ctrl+S → Optionen speichern
    if modifiers.command && key_s_pressed {
        events.push(AppIntent::SaveOptionsRequested);
    }

    events
}

/// Wie `key_pressed`, aber ohne Auto-Repeat-Events gehaltener Tasten.
fn key_pressed_once(input: &egui::InputState, key: egui::Key) -> bool {
    input.events.iter().any(|event| {
        matches!(
            event,
            egui::Event::Key {
                key: k,
                pressed: true,
                repeat: false,
                ..
            } if *k == key
        )
    })
}
