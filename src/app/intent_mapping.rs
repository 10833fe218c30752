//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use std::time::Instant;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed { pos } => vec![AppCommand::StartSegment { pos }],
        AppIntent::PointerMoved { pos } => {
            // Bewegung ohne gedrückte Taste erzeugt keinen Redraw
            if state.drawing.is_drawing() {
                vec![AppCommand::UpdateSegment { pos }]
            } else {
                Vec::new()
            }
        }
        AppIntent::PointerReleased => {
            if state.drawing.is_drawing() {
                vec![AppCommand::CommitSegment]
            } else {
                Vec::new()
            }
        }
        AppIntent::CollapseRequested => vec![AppCommand::StartCollapse {
            now: Instant::now(),
        }],
        AppIntent::FrameElapsed { now } => {
            if state.collapse.is_animating() && state.scheduler.is_due(now) {
                vec![AppCommand::CollapseTick { now }]
            } else {
                Vec::new()
            }
        }
        AppIntent::SaveOptionsRequested => vec![AppCommand::SaveOptions],
    }
}
