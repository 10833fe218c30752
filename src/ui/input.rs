//! Canvas-Input-Handling: Pointer-Events → AppIntent.
//!
//! Drücken auf der Canvas startet ein Segment, Bewegung bei gedrückter
//! Taste verschiebt das Ende, Loslassen (auch außerhalb) übernimmt es.

use crate::app::AppIntent;
use glam::Vec2;

/// Verwaltet den Pointer-Zustand über der Canvas.
#[derive(Default)]
pub struct InputState {
    /// Primäre Taste wurde auf der Canvas gedrückt und ist noch unten
    pointer_down_on_canvas: bool,
    /// Zuletzt gemeldete Canvas-Position (unterdrückt doppelte Moves)
    last_canvas_pos: Option<Vec2>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Pointer-Events der Canvas und gibt AppIntents zurück.
    ///
    /// `response` muss die Canvas-Fläche sein; Positionen werden relativ zu
    /// `response.rect.min` gemeldet.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();
        let origin = response.rect.min;

        let (pressed, released, press_origin, latest_pos) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.press_origin(),
                i.pointer.latest_pos(),
            )
        });

        if pressed && response.hovered() {
            if let Some(pointer_pos) = press_origin {
                let pos = to_canvas_local(pointer_pos, origin);
                self.pointer_down_on_canvas = true;
                self.last_canvas_pos = Some(pos);
                events.push(AppIntent::PointerPressed { pos });
            }
        }

        if self.pointer_down_on_canvas {
            if let Some(pointer_pos) = latest_pos {
                let pos = to_canvas_local(pointer_pos, origin);
                if self.last_canvas_pos != Some(pos) {
                    self.last_canvas_pos = Some(pos);
                    events.push(AppIntent::PointerMoved { pos });
                }
            }
        }

        if released && self.pointer_down_on_canvas {
            self.pointer_down_on_canvas = false;
            self.last_canvas_pos = None;
            events.push(AppIntent::PointerReleased);
        }

        events
    }
}

/// Rechnet eine Bildschirmposition in Canvas-Koordinaten um.
pub(crate) fn to_canvas_local(pointer_pos: egui::Pos2, origin: egui::Pos2) -> Vec2 {
    let local = pointer_pos - origin;
    Vec2::new(local.x, local.y)
}
