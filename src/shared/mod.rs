//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Konfiguration, die `app`, `render` und `ui` gemeinsam nutzen.

pub mod options;

pub use options::EditorOptions;
pub use options::{CANVAS_HEIGHT, CANVAS_WIDTH, MARKER_RADIUS};
