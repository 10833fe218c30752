//! Zeichenfläche und egui-Darstellung.

mod painter;
pub mod scene;
mod surface;

pub use painter::paint_surface;
pub use scene::{redraw, render_lines, render_markers};
pub use surface::{DrawPrimitive, Surface};
