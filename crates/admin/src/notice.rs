//! Transient success and error notices shown after an action.
//!
//! A notice expires a fixed time after it is posted. Expiry is evaluated when
//! the notice is read, so no timer task is needed.

use std::time::{Duration, Instant};

/// Default notice lifetime.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// One posted message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    posted_at: Instant,
    ttl: Duration,
}

impl Notice {
    /// Whether the notice is still visible at `now`.
    #[must_use]
    pub fn is_live_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.posted_at) < self.ttl
    }
}

/// The notice slot of one form or list view.
///
/// Posting a notice replaces whatever was shown before, of either kind.
#[derive(Debug, Clone)]
pub struct Notices {
    ttl: Duration,
    current: Option<Notice>,
}

impl Default for Notices {
    fn default() -> Self {
        Self::new(NOTICE_TTL)
    }
}

impl Notices {
    #[must_use]
    pub const fn new(ttl: Duration) -> Self {
        Self { ttl, current: None }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.post(NoticeKind::Success, message.into(), Instant::now());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.post(NoticeKind::Error, message.into(), Instant::now());
    }

    pub fn post(&mut self, kind: NoticeKind, message: String, now: Instant) {
        self.current = Some(Notice {
            kind,
            message,
            posted_at: now,
            ttl: self.ttl,
        });
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    /// The visible notice at `now`, if any.
    #[must_use]
    pub fn visible_at(&self, now: Instant) -> Option<&Notice> {
        self.current.as_ref().filter(|n| n.is_live_at(now))
    }

    /// The visible notice right now.
    #[must_use]
    pub fn visible(&self) -> Option<&Notice> {
        self.visible_at(Instant::now())
    }
}
