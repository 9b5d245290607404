use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A session that has been started but not yet submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSession {
    /// Correlates the start and stop log lines of one session
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
}

/// Timing state behind the two buttons; `None` means idle
#[derive(Debug, Clone, Default)]
pub struct RecorderState {
    active: Option<ActiveSession>,
}

impl RecorderState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking at `now`, returning any session this replaces
    pub fn begin(&mut self, now: DateTime<Utc>) -> Option<ActiveSession> {
        self.active.replace(ActiveSession {
            id: Uuid::new_v4(),
            started_at: now,
        })
    }

    pub fn active(&self) -> Option<ActiveSession> {
        self.active
    }

    pub fn is_tracking(&self) -> bool {
        self.active.is_some()
    }

    pub fn reset(&mut self) {
        self.active = None;
    }

    /// End of a session at `now`, never earlier than its start
    pub fn end_for(session: &ActiveSession, now: DateTime<Utc>) -> DateTime<Utc> {
        now.max(session.started_at)
    }
}
