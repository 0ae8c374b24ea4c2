use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub text: String,
    pub shown_at: Instant,
}

/// A single transient message slot; a new message replaces the current one.
#[derive(Debug)]
pub struct NotifyState {
    current: Option<Notification>,
    auto_hide: Duration,
}

impl Default for NotifyState {
    fn default() -> Self {
        Self::new(Duration::from_millis(6000))
    }
}

impl NotifyState {
    pub fn new(auto_hide: Duration) -> Self {
        Self {
            current: None,
            auto_hide,
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn show(&mut self, severity: Severity, text: impl Into<String>) -> bool {
        self.show_at(severity, text, Instant::now())
    }

    pub fn show_at(&mut self, severity: Severity, text: impl Into<String>, now: Instant) -> bool {
        let text = text.into();
        match severity {
            Severity::Success => tracing::info!(%text, "notification"),
            Severity::Error => tracing::warn!(%text, "notification"),
        }
        self.current = Some(Notification {
            severity,
            text,
            shown_at: now,
        });
        true
    }

    pub fn dismiss(&mut self) -> bool {
        self.current.take().is_some()
    }

    /// Hides the message once it has been visible for the auto-hide duration.
    pub fn tick(&mut self, now: Instant) -> bool {
        let expired = self
            .current
            .as_ref()
            .is_some_and(|n| now.saturating_duration_since(n.shown_at) >= self.auto_hide);
        if expired {
            self.current = None;
        }
        expired
    }
}
