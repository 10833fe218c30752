//! Spielt eine `Surface` über den egui-Painter ab.

use super::{DrawPrimitive, Surface};
use crate::shared::options::{
    CANVAS_BACKGROUND_COLOR, LINE_COLOR, LINE_WIDTH, MARKER_COLOR, MARKER_OUTLINE_COLOR,
};

/// Wandelt eine RGBA-Farbe (0.0–1.0) in eine egui-Farbe um.
fn to_color32(rgba: [f32; 4]) -> egui::Color32 {
    egui::Rgba::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3]).into()
}

/// Rechnet eine Canvas-Position in eine Bildschirmposition um.
fn to_screen(origin: egui::Pos2, point: glam::Vec2) -> egui::Pos2 {
    origin + egui::vec2(point.x, point.y)
}

/// Zeichnet Hintergrund, Linien und Marker der Fläche.
///
/// `painter` sollte auf das Canvas-Rechteck geclippt sein, Zeichnungen
/// außerhalb werden dann verworfen.
pub fn paint_surface(painter: &egui::Painter, origin: egui::Pos2, surface: &Surface) {
    let [width, height] = surface.size();
    let rect = egui::Rect::from_min_size(origin, egui::vec2(width, height));
    painter.rect_filled(rect, 0.0, to_color32(CANVAS_BACKGROUND_COLOR));

    let line_stroke = egui::Stroke::new(LINE_WIDTH, to_color32(LINE_COLOR));
    let marker_fill = to_color32(MARKER_COLOR);
    let marker_outline = egui::Stroke::new(LINE_WIDTH, to_color32(MARKER_OUTLINE_COLOR));

    for primitive in surface.primitives() {
        match *primitive {
            DrawPrimitive::Line { from, to } => {
                painter.line_segment([to_screen(origin, from), to_screen(origin, to)], line_stroke);
            }
            DrawPrimitive::Marker { center, radius } => {
                let center = to_screen(origin, center);
                painter.circle_filled(center, radius, marker_fill);
                painter.circle_stroke(center, radius, marker_outline);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_screen_offsets_by_origin() {
        let pos = to_screen(egui::pos2(10.0, 20.0), glam::Vec2::new(5.0, 5.0));
        assert_eq!(pos, egui::pos2(15.0, 25.0));
    }

    #[test]
    fn test_to_color32_opaque_white() {
        assert_eq!(to_color32([1.0, 1.0, 1.0, 1.0]), egui::Color32::WHITE);
    }
}
