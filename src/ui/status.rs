//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use crate::core::CollapseState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Linien: {} | Schnittpunkte: {}",
                state.segment_count(),
                state.marker_count()
            ));

            ui.separator();

            let collapse_text = match state.collapse.state() {
                CollapseState::Idle => "Kollaps: bereit".to_string(),
                CollapseState::Animating { frames_remaining } => {
                    format!("Kollaps: läuft ({} Frames)", frames_remaining)
                }
            };
            ui.label(collapse_text);

            ui.separator();

            let [width, height] = state.surface.size();
            ui.label(format!("Canvas: {:.0}×{:.0}", width, height));

            ui.separator();

            ui.label(state.command_log.summary());

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
