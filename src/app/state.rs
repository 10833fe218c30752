//! Application State — zentrale Datenhaltung.
//!
//! Ein `AppState` existiert genau einmal pro Canvas-Lebensdauer und besitzt
//! die Zeichenfläche exklusiv.

use super::scheduler::FrameScheduler;
use super::CommandLog;
use crate::core::{CollapseAnimation, DrawingState};
use crate::render::Surface;
use crate::shared::EditorOptions;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Laufendes und übernommene Segmente
    pub drawing: DrawingState,
    /// Kollaps-Zustandsautomat
    pub collapse: CollapseAnimation,
    /// Plant die Kollaps-Frames
    pub scheduler: FrameScheduler,
    /// Die einzige Zeichenfläche (Canvas-Kontext)
    pub surface: Surface,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Canvas-Größe, Animation)
    pub options: EditorOptions,
    /// Pfad für `SaveOptions` (Standard: neben der Binary)
    pub options_path: std::path::PathBuf,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standardoptionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit den übergebenen (bereinigten) Optionen
    pub fn with_options(options: EditorOptions) -> Self {
        let options = options.sanitized();
        Self {
            drawing: DrawingState::new(),
            collapse: CollapseAnimation::new(
                options.collapse_frame_budget,
                options.contraction_iterations,
            ),
            scheduler: FrameScheduler::new(options.collapse_frame_interval()),
            surface: Surface::new(options.canvas_width, options.canvas_height),
            command_log: CommandLog::new(),
            options_path: EditorOptions::config_path(),
            options,
        }
    }

    /// Gibt die Anzahl übernommener Segmente zurück (für UI-Anzeige)
    pub fn segment_count(&self) -> usize {
        self.drawing.segment_count()
    }

    /// Gibt die Anzahl aktuell gezeichneter Schnittpunkt-Marker zurück
    pub fn marker_count(&self) -> usize {
        self.surface.marker_count()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
