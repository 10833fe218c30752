//! Frame-Scheduler für die Kollaps-Animation.
//!
//! Hält genau eine Deadline. Erneutes Scharfschalten ersetzt die alte,
//! es gibt also nie mehrere parallele Tick-Ketten.

use std::time::{Duration, Instant};

/// Plant den nächsten Animations-Frame.
#[derive(Debug, Clone)]
pub struct FrameScheduler {
    interval: Duration,
    next_due: Option<Instant>,
}

impl FrameScheduler {
    /// Erstellt einen inaktiven Scheduler mit festem Frame-Abstand.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    /// Frame-Abstand.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Plant den nächsten Frame für `now + interval`.
    pub fn arm(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    /// Verwirft den geplanten Frame.
    pub fn disarm(&mut self) {
        self.next_due = None;
    }

    /// Gibt zurück, ob ein Frame geplant ist.
    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Gibt `true` zurück wenn der geplante Frame fällig ist.
    pub fn is_due(&self, now: Instant) -> bool {
        self.next_due.is_some_and(|due| now >= due)
    }

    /// Restwartezeit bis zum nächsten Frame (`None` wenn nichts geplant).
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}
