//! Zeichenfläche als Display-Liste (Canvas-Ersatz).
//!
//! Die `Surface` ist der einzige Zeichenkontext der Anwendung. Sie gehört dem
//! `AppState` und wird pro egui-Frame vom Painter abgespielt.

use glam::Vec2;

/// Einzelnes Zeichen-Primitiv in Canvas-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawPrimitive {
    /// Linie von `from` nach `to`
    Line { from: Vec2, to: Vec2 },
    /// Gefüllter Kreis-Marker
    Marker { center: Vec2, radius: f32 },
}

/// Zeichenfläche mit fester Größe und aufgezeichneten Primitiven.
#[derive(Debug, Clone)]
pub struct Surface {
    width: f32,
    height: f32,
    primitives: Vec<DrawPrimitive>,
}

impl Surface {
    /// Erstellt eine leere Fläche. Größen unter 1 px werden auf 1 px angehoben.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
            primitives: Vec::new(),
        }
    }

    /// Größe in Pixeln `[Breite, Höhe]`.
    pub fn size(&self) -> [f32; 2] {
        [self.width, self.height]
    }

    /// Löscht die gesamte Fläche.
    pub fn clear(&mut self) {
        self.primitives.clear();
    }

    /// Zeichnet eine Linie.
    pub fn stroke_line(&mut self, from: Vec2, to: Vec2) {
        self.primitives.push(DrawPrimitive::Line { from, to });
    }

    /// Zeichnet einen gefüllten Kreis.
    pub fn fill_marker(&mut self, center: Vec2, radius: f32) {
        self.primitives.push(DrawPrimitive::Marker { center, radius });
    }

    /// Alle Primitive in Zeichenreihenfolge.
    pub fn primitives(&self) -> &[DrawPrimitive] {
        &self.primitives
    }

    /// Anzahl gezeichneter Linien.
    pub fn line_count(&self) -> usize {
        self.primitives
            .iter()
            .filter(|p| matches!(p, DrawPrimitive::Line { .. }))
            .count()
    }

    /// Anzahl gezeichneter Marker.
    pub fn marker_count(&self) -> usize {
        self.primitives
            .iter()
            .filter(|p| matches!(p, DrawPrimitive::Marker { .. }))
            .count()
    }

    /// Gibt `true` zurück wenn nichts gezeichnet ist.
    pub fn is_blank(&self) -> bool {
        self.primitives.is_empty()
    }
}
