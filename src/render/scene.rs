//! Redraw einer Segmentliste inklusive Schnittpunkt-Markern.

use super::Surface;
use crate::core::{marker_positions, Segment};
use crate::shared::options::MARKER_RADIUS;
use glam::Vec2;

/// Zeichnet alle Segmente als Linien.
pub fn render_lines(surface: &mut Surface, segments: &[Segment]) {
    for segment in segments {
        surface.stroke_line(segment.start, segment.end);
    }
}

/// Zeichnet einen Marker mit festem Radius an jedem Punkt.
pub fn render_markers(surface: &mut Surface, points: &[Vec2]) {
    for &point in points {
        surface.fill_marker(point, MARKER_RADIUS);
    }
}

/// Löscht die Fläche und zeichnet `segments` samt Schnittpunkten neu.
///
/// Gibt die Anzahl gezeichneter Marker zurück.
pub fn redraw(surface: &mut Surface, segments: &[Segment]) -> usize {
    surface.clear();
    render_lines(surface, segments);

    let points = marker_positions(segments);
    render_markers(surface, &points);
    points.len()
}
