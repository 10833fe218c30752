//! Verlauf ausgeführter Commands (Ringpuffer) für die Status-Bar.

use super::AppCommand;
use std::collections::VecDeque;

/// Anzahl gehaltener Einträge.
const CAPACITY: usize = 256;

/// Hält die zuletzt ausgeführten Commands und zählt alle seit dem Start.
pub struct CommandLog {
    recent: VecDeque<AppCommand>,
    total: u64,
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandLog {
    /// Erstellt einen leeren Verlauf.
    pub fn new() -> Self {
        Self {
            recent: VecDeque::with_capacity(CAPACITY),
            total: 0,
        }
    }

    /// Hängt einen ausgeführten Command an; der älteste fällt bei vollem Puffer heraus.
    pub fn record(&mut self, command: &AppCommand) {
        if self.recent.len() == CAPACITY {
            self.recent.pop_front();
        }
        self.recent.push_back(command.clone());
        self.total += 1;
    }

    /// Zuletzt ausgeführter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.recent.back()
    }

    /// Anzahl aller ausgeführten Commands, auch der bereits verdrängten.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Gibt `true` zurück, solange noch nichts ausgeführt wurde.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Gehaltene Einträge, ältester zuerst.
    pub fn recent(&self) -> impl Iterator<Item = &AppCommand> {
        self.recent.iter()
    }

    /// Kurzfassung für die Status-Bar, z.B. `"42 Befehle, zuletzt: Kollaps-Frame"`.
    pub fn summary(&self) -> String {
        match self.last() {
            Some(command) => format!("{} Befehle, zuletzt: {}", self.total, command.label()),
            None => "Noch keine Befehle".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_oldest_entries_are_evicted_but_counted() {
        let mut log = CommandLog::new();
        log.record(&AppCommand::StartSegment { pos: Vec2::ZERO });
        for _ in 0..CAPACITY {
            log.record(&AppCommand::CommitSegment);
        }

        assert_eq!(log.recent().count(), CAPACITY);
        assert_eq!(log.total(), CAPACITY as u64 + 1);
        assert!(log
            .recent()
            .all(|command| matches!(command, AppCommand::CommitSegment)));
    }

    #[test]
    fn test_summary_names_last_command() {
        let mut log = CommandLog::new();
        assert!(log.is_empty());
        assert_eq!(log.summary(), "Noch keine Befehle");

        log.record(&AppCommand::CommitSegment);
        log.record(&AppCommand::SaveOptions);
        assert_eq!(log.summary(), "2 Befehle, zuletzt: Optionen speichern");
    }
}
