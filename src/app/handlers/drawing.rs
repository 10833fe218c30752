//! Handler für das Zeichnen von Segmenten (Pointer-Down/-Move/-Up).

use crate::app::AppState;
use crate::render;

/// Beginnt ein neues Segment an `pos`.
pub fn start_segment(state: &mut AppState, pos: glam::Vec2) {
    state.drawing.start_segment(pos);
    log::debug!("Segment gestartet bei ({:.1}, {:.1})", pos.x, pos.y);
}

/// Verschiebt das Ende des laufenden Segments und zeichnet alles neu.
pub fn update_segment(state: &mut AppState, pos: glam::Vec2) {
    if !state.drawing.update_segment(pos) {
        return;
    }
    let segments = state.drawing.visible_segments();
    render::redraw(&mut state.surface, &segments);
}

/// Übernimmt das laufende Segment in die Liste (ohne Redraw).
pub fn commit_segment(state: &mut AppState) {
    if let Some(segment) = state.drawing.commit_segment() {
        log::debug!(
            "Segment übernommen: ({:.1}, {:.1}) → ({:.1}, {:.1}), {} gesamt",
            segment.start.x,
            segment.start.y,
            segment.end.x,
            segment.end.y,
            state.drawing.segment_count()
        );
    }
}
