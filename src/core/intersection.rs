//! Schnittpunkt-Berechnung zwischen Liniensegmenten.
//!
//! Paarweiser O(n²)-Test über alle Segmente, wird bei jedem Redraw
//! komplett neu berechnet und nie gespeichert.

use super::Segment;
use glam::Vec2;

/// Schnittpunkt zweier unendlicher Geraden, klassifiziert nach Segment-Lage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionPoint {
    /// Schnittpunkt, auf ganze Pixel gerundet
    pub position: Vec2,
    /// Parameter `ua` liegt in [0, 1] (Punkt liegt auf dem ersten Segment)
    pub within_first: bool,
    /// Parameter `ub` liegt in [0, 1] (Punkt liegt auf dem zweiten Segment)
    pub within_second: bool,
}

impl IntersectionPoint {
    /// Echter Segment-Segment-Schnitt (nicht nur Verlängerung der Geraden).
    pub fn is_on_both_segments(&self) -> bool {
        self.within_first && self.within_second
    }
}

/// Rundet auf ganze Pixel, `.5` wird Richtung +∞ gerundet.
fn round_half_up(value: f32) -> f32 {
    (value + 0.5).floor()
}

/// Schneidet die Geraden durch `a` und `b` (parametrische Form).
///
/// Gibt `None` zurück wenn die Geraden parallel oder identisch sind
/// (`denom == 0`). Überlappende kollineare Segmente werden dadurch nie
/// gemeldet.
pub fn find_intersection(a: &Segment, b: &Segment) -> Option<IntersectionPoint> {
    let (x1, y1, x2, y2) = (a.start.x, a.start.y, a.end.x, a.end.y);
    let (x3, y3, x4, y4) = (b.start.x, b.start.y, b.end.x, b.end.y);

    let denom = (y4 - y3) * (x2 - x1) - (x4 - x3) * (y2 - y1);
    if denom == 0.0 {
        return None;
    }

    let ua = ((x4 - x3) * (y1 - y3) - (y4 - y3) * (x1 - x3)) / denom;
    let ub = ((x2 - x1) * (y1 - y3) - (y2 - y1) * (x1 - x3)) / denom;

    Some(IntersectionPoint {
        position: Vec2::new(
            round_half_up(x1 + ua * (x2 - x1)),
            round_half_up(y1 + ua * (y2 - y1)),
        ),
        within_first: (0.0..=1.0).contains(&ua),
        within_second: (0.0..=1.0).contains(&ub),
    })
}

/// Berechnet die Schnittpunkte aller ungeordneten Paare `(i, j)` mit `i < j`.
///
/// Parallele Paare werden übersprungen, alle anderen werden unabhängig von
/// ihrer Klassifizierung geliefert.
pub fn compute_intersections(segments: &[Segment]) -> Vec<IntersectionPoint> {
    let mut points = Vec::new();
    for (i, first) in segments.iter().enumerate() {
        for second in &segments[i + 1..] {
            if let Some(point) = find_intersection(first, second) {
                points.push(point);
            }
        }
    }
    points
}

/// Positionen aller echten Segment-Schnitte (Marker-Positionen).
pub fn marker_positions(segments: &[Segment]) -> Vec<Vec2> {
    compute_intersections(segments)
        .into_iter()
        .filter(IntersectionPoint::is_on_both_segments)
        .map(|point| point.position)
        .collect()
}
