//! Handler für die Kollaps-Animation.

use crate::app::AppState;
use crate::core::CollapseStep;
use crate::render;
use std::time::Instant;

/// Startet den Kollaps (bzw. startet ihn neu) und führt den ersten Frame sofort aus.
pub fn start(state: &mut AppState, now: Instant) {
    if state.collapse.start() {
        log::debug!("Kollaps neu gestartet, Countdown zurückgesetzt");
    } else {
        log::info!(
            "Kollaps gestartet: {} Segmente, {} Frames",
            state.drawing.segment_count(),
            state.collapse.frame_budget()
        );
    }
    tick(state, now);
}

/// Führt einen Kollaps-Frame aus, zeichnet neu und plant den nächsten.
pub fn tick(state: &mut AppState, now: Instant) {
    match state.collapse.tick(&mut state.drawing.segments) {
        CollapseStep::Idle => {
            state.scheduler.disarm();
            return;
        }
        CollapseStep::Continue { .. } => state.scheduler.arm(now),
        CollapseStep::Finished => {
            state.scheduler.disarm();
            log::info!("Kollaps abgeschlossen, alle Segmente entfernt");
        }
    }

    let segments = state.drawing.visible_segments();
    render::redraw(&mut state.surface, &segments);
}
