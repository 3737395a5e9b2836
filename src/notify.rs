use std::time::Duration;

/// Auto-dismiss window for a standard notice
pub const NOTICE_DURATION: Duration = Duration::from_millis(3000);
/// Shorter acknowledgment window for the "Copied!" confirmation
pub const COPY_ACK_DURATION: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// A transient user-facing notice with an auto-dismiss duration
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
    pub duration: Duration,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Notice {
            message: message.into(),
            severity: Severity::Info,
            duration: NOTICE_DURATION,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Notice {
            message: message.into(),
            severity: Severity::Success,
            duration: NOTICE_DURATION,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice {
            message: message.into(),
            severity: Severity::Error,
            duration: NOTICE_DURATION,
        }
    }

    /// The "Copied!" acknowledgment shown after a clipboard write. A UI
    /// acknowledgment, not a correctness signal.
    pub fn copy_ack() -> Self {
        Notice {
            message: "Copied!".to_string(),
            severity: Severity::Success,
            duration: COPY_ACK_DURATION,
        }
    }
}

/// Holds at most one live notice; emitting a new one replaces the previous.
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    current: Option<Notice>,
}

impl Notifier {
    pub fn emit(&mut self, notice: Notice) {
        self.current = Some(notice);
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_replaces_previous_notice() {
        let mut notifier = Notifier::default();
        notifier.emit(Notice::info("saved"));
        notifier.emit(Notice::error("failed to save"));
        let current = notifier.current().unwrap();
        assert_eq!(current.message, "failed to save");
        assert_eq!(current.severity, Severity::Error);
    }

    #[test]
    fn test_copy_ack_uses_short_window() {
        let ack = Notice::copy_ack();
        assert_eq!(ack.message, "Copied!");
        assert_eq!(ack.duration, COPY_ACK_DURATION);
        assert!(ack.duration < NOTICE_DURATION);
    }

    #[test]
    fn test_dismiss_clears_notice() {
        let mut notifier = Notifier::default();
        notifier.emit(Notice::success("saved"));
        notifier.dismiss();
        assert!(notifier.current().is_none());
    }
}
