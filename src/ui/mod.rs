//! UI-Komponenten: Toolbar, Status-Bar, Canvas-Input, Keyboard-Shortcuts.

pub mod input;
mod keyboard;
/// UI-Layer mit egui
///
/// Panels erzeugen nur `AppIntent`s, mutiert wird zentral im Controller.
pub mod status;
pub mod toolbar;

pub use input::InputState;
pub use keyboard::collect_keyboard_intents;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
