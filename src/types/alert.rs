use std::time::{Duration, Instant};

/// Severity of a transient notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

/// Transient, auto-dismissing notice raised after a mutation attempt.
#[derive(Debug, Clone)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
    raised_at: Instant,
}

impl Alert {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Success,
            message: message.into(),
            raised_at: Instant::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Error,
            message: message.into(),
            raised_at: Instant::now(),
        }
    }

    /// How long the alert stays visible: successes dismiss after 3 s,
    /// errors after 5 s.
    pub fn ttl(&self) -> Duration {
        match self.kind {
            AlertKind::Success => Duration::from_secs(3),
            AlertKind::Error => Duration::from_secs(5),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.raised_at.elapsed() >= self.ttl()
    }
}
