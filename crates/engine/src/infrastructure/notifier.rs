//! Notifier that hands user-facing messages to the log.

use crate::infrastructure::ports::{Notice, NoticeSeverity, NotifierPort};

/// Logs notices at a level matching their severity.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl NotifierPort for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match notice.severity {
            NoticeSeverity::Warning => tracing::warn!(message = %notice.message, "notice"),
            NoticeSeverity::Error => tracing::error!(message = %notice.message, "notice"),
        }
    }
}
