use std::time::Instant;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Primäre Maustaste auf der Canvas gedrückt (Canvas-Koordinaten)
    PointerPressed { pos: glam::Vec2 },
    /// Pointer über der Canvas bewegt
    PointerMoved { pos: glam::Vec2 },
    /// Primäre Maustaste losgelassen
    PointerReleased,
    /// "Collapse lines" angeklickt oder Shortcut gedrückt
    CollapseRequested,
    /// Ein egui-Frame ist vergangen (treibt die Kollaps-Animation)
    FrameElapsed { now: Instant },
    /// Aktuelle Optionen neben der Binary speichern
    SaveOptionsRequested,
}
