//! Zeichenzustand der Canvas: laufendes Segment und übernommene Segmente.

use super::Segment;
use glam::Vec2;

/// Zustand der Zeichenfläche.
///
/// Pointer-Down startet ein Segment, Pointer-Move verschiebt dessen Ende,
/// Pointer-Up übernimmt es in die Liste.
#[derive(Debug, Clone, Default)]
pub struct DrawingState {
    is_drawing: bool,
    start: Vec2,
    end: Vec2,
    /// Übernommene Segmente in Zeichenreihenfolge
    pub segments: Vec<Segment>,
}

impl DrawingState {
    /// Erstellt einen leeren Zeichenzustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt zurück, ob gerade ein Segment gezogen wird.
    pub fn is_drawing(&self) -> bool {
        self.is_drawing
    }

    /// Beginnt ein neues Segment mit Start = Ende = `point`.
    pub fn start_segment(&mut self, point: Vec2) {
        self.start = point;
        self.end = point;
        self.is_drawing = true;
    }

    /// Setzt das Ende des laufenden Segments.
    ///
    /// Gibt `false` zurück (ohne Änderung) wenn nicht gezeichnet wird.
    pub fn update_segment(&mut self, point: Vec2) -> bool {
        if !self.is_drawing {
            return false;
        }
        self.end = point;
        true
    }

    /// Beendet das laufende Segment und hängt es an die Liste an.
    ///
    /// Ohne laufendes Segment passiert nichts.
    pub fn commit_segment(&mut self) -> Option<Segment> {
        if !self.is_drawing {
            return None;
        }
        self.is_drawing = false;
        let segment = Segment::new(self.start, self.end);
        self.segments.push(segment);
        Some(segment)
    }

    /// Das laufende Segment, falls gerade gezeichnet wird.
    pub fn in_progress(&self) -> Option<Segment> {
        self.is_drawing.then(|| Segment::new(self.start, self.end))
    }

    /// Alle sichtbaren Segmente: übernommene plus das laufende.
    pub fn visible_segments(&self) -> Vec<Segment> {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.extend(self.in_progress());
        segments
    }

    /// Anzahl übernommener Segmente.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }
}
