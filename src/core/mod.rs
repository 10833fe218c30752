//! Core-Domänentypen: Segmente, Schnittpunkte, Zeichenzustand, Kollaps-Animation.

pub mod collapse;
pub mod drawing;
/// Reine Geometrie ohne egui-Abhängigkeit
///
/// - Segment: Linie zwischen zwei Canvas-Positionen
/// - IntersectionPoint: klassifizierter Geradenschnitt
pub mod intersection;
pub mod segment;

pub use collapse::{CollapseAnimation, CollapseState, CollapseStep, COLLAPSE_FRAME_BUDGET};
pub use drawing::DrawingState;
pub use intersection::{compute_intersections, find_intersection, marker_positions, IntersectionPoint};
pub use segment::{find_midpoint, Segment, CONTRACTION_ITERATIONS};
