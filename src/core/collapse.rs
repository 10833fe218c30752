//! Kollaps-Animation als expliziter Zustandsautomat.
//!
//! `start()` wechselt nach `Animating`, jeder `tick()` verkürzt alle Segmente
//! um einen Frame. Nach Ablauf des Frame-Budgets wird die Liste geleert und
//! der Automat kehrt nach `Idle` zurück.

use super::segment::CONTRACTION_ITERATIONS;
use super::Segment;

/// Standard-Frame-Budget (≈ 3 s bei 60 fps).
pub const COLLAPSE_FRAME_BUDGET: u32 = 180;

/// Zustand der Kollaps-Animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollapseState {
    /// Keine Animation aktiv
    #[default]
    Idle,
    /// Animation läuft noch `frames_remaining` Ticks
    Animating { frames_remaining: u32 },
}

/// Ergebnis eines einzelnen Ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollapseStep {
    /// Keine Animation aktiv, nichts verändert
    Idle,
    /// Segmente verkürzt, weitere Ticks folgen
    Continue { frames_remaining: u32 },
    /// Letzter Tick: Segmentliste geleert
    Finished,
}

/// Kollaps-Animation mit festem Frame-Budget.
#[derive(Debug, Clone)]
pub struct CollapseAnimation {
    state: CollapseState,
    frame_budget: u32,
    contraction_iterations: u32,
}

impl Default for CollapseAnimation {
    fn default() -> Self {
        Self::new(COLLAPSE_FRAME_BUDGET, CONTRACTION_ITERATIONS)
    }
}

impl CollapseAnimation {
    /// Erstellt eine ruhende Animation. Ein Budget von 0 wird auf 1 angehoben.
    pub fn new(frame_budget: u32, contraction_iterations: u32) -> Self {
        Self {
            state: CollapseState::Idle,
            frame_budget: frame_budget.max(1),
            contraction_iterations,
        }
    }

    /// Aktueller Zustand.
    pub fn state(&self) -> CollapseState {
        self.state
    }

    /// Gibt zurück, ob die Animation läuft.
    pub fn is_animating(&self) -> bool {
        matches!(self.state, CollapseState::Animating { .. })
    }

    /// Frame-Budget pro Animation.
    pub fn frame_budget(&self) -> u32 {
        self.frame_budget
    }

    /// Startet die Animation mit vollem Budget.
    ///
    /// Läuft bereits eine Animation, wird sie abgebrochen und neu gestartet.
    /// Gibt `true` zurück bei einem Neustart.
    pub fn start(&mut self) -> bool {
        let restarted = self.is_animating();
        self.state = CollapseState::Animating {
            frames_remaining: self.frame_budget,
        };
        restarted
    }

    /// Führt einen Animations-Frame auf `segments` aus.
    ///
    /// Die Liste wird komplett durch verkürzte Segmente ersetzt. Beim letzten
    /// Frame wird sie geleert.
    pub fn tick(&mut self, segments: &mut Vec<Segment>) -> CollapseStep {
        let CollapseState::Animating { frames_remaining } = self.state else {
            return CollapseStep::Idle;
        };

        *segments = segments
            .iter()
            .map(|segment| segment.contracted(self.contraction_iterations))
            .collect();

        let frames_remaining = frames_remaining.saturating_sub(1);
        if frames_remaining == 0 {
            segments.clear();
            self.state = CollapseState::Idle;
            CollapseStep::Finished
        } else {
            self.state = CollapseState::Animating { frames_remaining };
            CollapseStep::Continue { frames_remaining }
        }
    }
}
