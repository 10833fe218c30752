use std::time::Instant;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Neues Segment an Position beginnen
    StartSegment { pos: glam::Vec2 },
    /// Ende des laufenden Segments setzen und neu zeichnen
    UpdateSegment { pos: glam::Vec2 },
    /// Laufendes Segment übernehmen
    CommitSegment,
    /// Kollaps-Animation (neu) starten, erster Frame sofort
    StartCollapse { now: Instant },
    /// Einen fälligen Kollaps-Frame ausführen
    CollapseTick { now: Instant },
    /// Optionen als TOML speichern
    SaveOptions,
}

impl AppCommand {
    /// Kurzer Anzeigename (Status-Bar).
    pub fn label(&self) -> &'static str {
        match self {
            AppCommand::StartSegment { .. } => "Linie beginnen",
            AppCommand::UpdateSegment { .. } => "Linie ziehen",
            AppCommand::CommitSegment => "Linie übernehmen",
            AppCommand::StartCollapse { .. } => "Kollaps starten",
            AppCommand::CollapseTick { .. } => "Kollaps-Frame",
            AppCommand::SaveOptions => "Optionen speichern",
        }
    }
}
