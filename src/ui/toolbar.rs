//! Toolbar mit Kollaps-Button und Optionen.

use crate::app::{AppIntent, AppState};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let animating = state.collapse.is_animating();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            // Neustart während laufender Animation ist erlaubt (setzt Countdown zurück)
            let collapse_btn = egui::Button::new("Collapse lines (C)").selected(animating);
            if ui.add(collapse_btn).clicked() {
                events.push(AppIntent::CollapseRequested);
            }

            ui.separator();

            if ui
                .button("💾 Optionen speichern")
                .on_hover_text(state.options_path.display().to_string())
                .clicked()
            {
                events.push(AppIntent::SaveOptionsRequested);
            }

            if state.drawing.is_drawing() {
                ui.separator();
                ui.label("Ziehen… Loslassen übernimmt die Linie");
            }
        });
    });

    events
}
