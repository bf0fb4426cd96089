//! User-facing notifications.
//!
//! Failed requests and worker errors never propagate to the caller. They are
//! pushed here and shown on the notice line until dismissed or replaced.

use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// Number of notices kept; older ones are dropped.
const MAX_NOTICES: usize = 5;

/// Severity of a notice, used for colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// One message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub at: DateTime<Local>,
}

/// Bounded queue of notices, newest last.
#[derive(Debug, Clone, Default)]
pub struct Notices {
    queue: VecDeque<Notice>,
}

impl Notices {
    fn push(&mut self, level: NoticeLevel, message: String) {
        if self.queue.len() == MAX_NOTICES {
            self.queue.pop_front();
        }
        self.queue.push_back(Notice {
            level,
            message,
            at: Local::now(),
        });
    }

    pub fn info(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!(notice = %message, "notice");
        self.push(NoticeLevel::Info, message);
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(notice = %message, "notice");
        self.push(NoticeLevel::Warning, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::error!(notice = %message, "notice");
        self.push(NoticeLevel::Error, message);
    }

    /// Most recent notice still pending.
    #[must_use]
    pub fn latest(&self) -> Option<&Notice> {
        self.queue.back()
    }

    /// Drops the most recent notice, revealing the previous one.
    ///
    /// Returns `false` if there was nothing to dismiss.
    pub fn dismiss(&mut self) -> bool {
        self.queue.pop_back().is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
