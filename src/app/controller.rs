//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Zeichnen ===
            AppCommand::StartSegment { pos } => handlers::drawing::start_segment(state, pos),
            AppCommand::UpdateSegment { pos } => handlers::drawing::update_segment(state, pos),
            AppCommand::CommitSegment => handlers::drawing::commit_segment(state),

            // === Kollaps-Animation ===
            AppCommand::StartCollapse { now } => handlers::collapse::start(state, now),
            AppCommand::CollapseTick { now } => handlers::collapse::tick(state, now),

            // === Optionen ===
            AppCommand::SaveOptions => handlers::options::save(state)?,
        }

        Ok(())
    }
}
