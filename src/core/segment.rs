//! Liniensegment und Mittelpunkt-Hilfsfunktionen.

use glam::Vec2;

/// Standard-Anzahl der Mittelpunkt-Iterationen pro Kollaps-Frame.
pub const CONTRACTION_ITERATIONS: u32 = 5;

/// Berechnet den Mittelpunkt zwischen zwei Punkten.
pub fn find_midpoint(a: Vec2, b: Vec2) -> Vec2 {
    (a + b) / 2.0
}

/// Endliche Linie zwischen zwei Canvas-Positionen.
///
/// Einmal übernommene Segmente werden nicht verändert, der Kollaps ersetzt
/// sie komplett durch verkürzte Kopien.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Startpunkt (Pointer-Down-Position)
    pub start: Vec2,
    /// Endpunkt (letzte Pointer-Position)
    pub end: Vec2,
}

impl Segment {
    /// Erstellt ein Segment aus Start- und Endpunkt.
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Mittelpunkt des Segments.
    pub fn midpoint(&self) -> Vec2 {
        find_midpoint(self.start, self.end)
    }

    /// Länge des Segments in Pixeln.
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }

    /// Gibt `true` zurück wenn Start und Ende zusammenfallen.
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Liefert ein zur Mitte hin verkürztes Segment (ein Kollaps-Frame).
    ///
    /// Jeder Endpunkt startet im Segment-Mittelpunkt und wird `iterations`-mal
    /// mit seinem ursprünglichen Endpunkt gemittelt. Bei 5 Iterationen landet
    /// er 1/32 des Weges Richtung Mitte, die Länge schrumpft also um 31/32.
    pub fn contracted(&self, iterations: u32) -> Self {
        let mid = self.midpoint();
        let mut start = mid;
        let mut end = mid;

        for _ in 0..iterations {
            start = find_midpoint(self.start, start);
        }
        for _ in 0..iterations {
            end = find_midpoint(self.end, end);
        }

        Self { start, end }
    }
}
