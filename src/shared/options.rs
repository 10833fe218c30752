//! Zentrale Konfiguration für den Lines-Intersection-Editor.
//!
//! `EditorOptions` enthält die zur Laufzeit ladbaren Werte (Canvas-Größe,
//! Animations-Timing). Darstellung (Farben, Radien) bleibt fest als `const`.

use crate::core::{COLLAPSE_FRAME_BUDGET, CONTRACTION_ITERATIONS};
use serde::{Deserialize, Serialize};
use std::time::Duration;

// ── Canvas ──────────────────────────────────────────────────────────

/// Standard-Canvas-Breite in Pixeln.
pub const CANVAS_WIDTH: f32 = 900.0;
/// Standard-Canvas-Höhe in Pixeln.
pub const CANVAS_HEIGHT: f32 = 700.0;
/// Größte erlaubte Canvas-Kante in Pixeln.
pub const MAX_CANVAS_SIZE: f32 = 8192.0;
/// Hintergrundfarbe der Zeichenfläche (RGBA: Weiß).
pub const CANVAS_BACKGROUND_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// ── Linien ──────────────────────────────────────────────────────────

/// Linienstärke in Pixeln.
pub const LINE_WIDTH: f32 = 1.0;
/// Linienfarbe (RGBA: Hellgrau #bdbdbd).
pub const LINE_COLOR: [f32; 4] = [0.741, 0.741, 0.741, 1.0];

// ── Schnittpunkt-Marker ─────────────────────────────────────────────

/// Marker-Radius in Pixeln.
pub const MARKER_RADIUS: f32 = 5.0;
/// Füllfarbe der Marker (RGBA: Rot #ff5353).
pub const MARKER_COLOR: [f32; 4] = [1.0, 0.325, 0.325, 1.0];
/// Outline-Farbe der Marker (RGBA: Hellgrau, wie die Linien).
pub const MARKER_OUTLINE_COLOR: [f32; 4] = LINE_COLOR;

// ── Animation ───────────────────────────────────────────────────────

/// Abstand zwischen zwei Kollaps-Frames in Millisekunden (60 fps).
pub const COLLAPSE_FRAME_INTERVAL_MS: f64 = 16.666666;
/// Größter erlaubter Frame-Abstand in Millisekunden.
pub const MAX_COLLAPSE_FRAME_INTERVAL_MS: f64 = 1000.0;
/// Obergrenze der Mittelpunkt-Iterationen; darüber ändert sich in f32 nichts mehr.
pub const MAX_CONTRACTION_ITERATIONS: u32 = 24;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit ladbaren Editor-Optionen.
/// Wird als `lines_intersection.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    /// Canvas-Breite in Pixeln
    pub canvas_width: f32,
    /// Canvas-Höhe in Pixeln
    pub canvas_height: f32,
    /// Anzahl Frames einer Kollaps-Animation
    pub collapse_frame_budget: u32,
    /// Abstand zwischen Kollaps-Frames in Millisekunden
    pub collapse_frame_interval_ms: f64,
    /// Mittelpunkt-Iterationen pro Frame (5 → 1/32 Richtung Mitte)
    pub contraction_iterations: u32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            collapse_frame_budget: COLLAPSE_FRAME_BUDGET,
            collapse_frame_interval_ms: COLLAPSE_FRAME_INTERVAL_MS,
            contraction_iterations: CONTRACTION_ITERATIONS,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus TOML und bereinigt ungültige Werte.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let opts: Self = toml::from_str(content)?;
        Ok(opts.sanitized())
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("lines_intersection"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("lines_intersection.toml")
    }

    /// Ersetzt Werte außerhalb des gültigen Bereichs durch Standardwerte.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        let canvas_range = 1.0..=MAX_CANVAS_SIZE;
        if !(canvas_range.contains(&self.canvas_width) && canvas_range.contains(&self.canvas_height))
        {
            log::warn!(
                "Ungültige Canvas-Größe {}x{}, verwende {}x{}",
                self.canvas_width,
                self.canvas_height,
                defaults.canvas_width,
                defaults.canvas_height
            );
            self.canvas_width = defaults.canvas_width;
            self.canvas_height = defaults.canvas_height;
        }
        if self.collapse_frame_budget == 0 {
            log::warn!(
                "collapse_frame_budget = 0, verwende {}",
                defaults.collapse_frame_budget
            );
            self.collapse_frame_budget = defaults.collapse_frame_budget;
        }
        if !(self.collapse_frame_interval_ms > 0.0
            && self.collapse_frame_interval_ms <= MAX_COLLAPSE_FRAME_INTERVAL_MS)
        {
            log::warn!(
                "Ungültiges collapse_frame_interval_ms {}, verwende {}",
                self.collapse_frame_interval_ms,
                defaults.collapse_frame_interval_ms
            );
            self.collapse_frame_interval_ms = defaults.collapse_frame_interval_ms;
        }
        if self.contraction_iterations > MAX_CONTRACTION_ITERATIONS {
            log::warn!(
                "contraction_iterations {} zu groß, begrenze auf {}",
                self.contraction_iterations,
                MAX_CONTRACTION_ITERATIONS
            );
            self.contraction_iterations = MAX_CONTRACTION_ITERATIONS;
        }
        self
    }

    /// Abstand zwischen zwei Kollaps-Frames.
    ///
    /// Nicht darstellbare Werte (NaN, negativ, zu groß) fallen auf 60 fps zurück.
    pub fn collapse_frame_interval(&self) -> Duration {
        let ms = self.collapse_frame_interval_ms;
        let ms = if ms > 0.0 && ms <= MAX_COLLAPSE_FRAME_INTERVAL_MS {
            ms
        } else {
            COLLAPSE_FRAME_INTERVAL_MS
        };
        Duration::from_secs_f64(ms / 1000.0)
    }
}
