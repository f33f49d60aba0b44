//! Notification channel for user-visible outcomes.
//!
//! Every terminal add, edit or delete produces exactly one notification;
//! validation failures produce none. Rendering (toasts) is up to the caller.

use std::fmt;

use tracing::info;

/// Severity of a notification; selects the toast icon and colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Something was created or resolved.
    Success,
    /// Neutral confirmation (updates, removals).
    Info,
    /// The action was refused.
    Error,
}

impl NotificationKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Error => "error",
        }
    }
}

/// A message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind.label(), self.message)
    }
}

/// Sink for notifications.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// Log `notification` as a structured event, then hand it to `notifier`.
pub fn emit(notifier: &mut dyn Notifier, notification: Notification) {
    info!(
        kind = notification.kind.label(),
        message = %notification.message,
        "notification"
    );
    notifier.notify(notification);
}

/// Notifier that keeps every notification in order.
#[derive(Debug, Clone, Default)]
pub struct NotificationLog {
    entries: Vec<Notification>,
}

impl NotificationLog {
    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    pub fn last(&self) -> Option<&Notification> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Take all pending notifications, leaving the log empty.
    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.entries)
    }
}

impl Notifier for NotificationLog {
    fn notify(&mut self, notification: Notification) {
        self.entries.push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn emit_logs_and_forwards() {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(captured.clone())
            .finish();
        let mut log = NotificationLog::default();

        tracing::subscriber::with_default(subscriber, || {
            emit(&mut log, Notification::error("This category has 2 item(s)."));
        });

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("notification"));
        assert!(output.contains("error"));
        assert!(output.contains("This category has 2 item(s)."));
        assert_eq!(log.len(), 1);
        assert_eq!(log.last().unwrap().kind, NotificationKind::Error);
    }

    #[test]
    fn drain_empties_the_log() {
        let mut log = NotificationLog::default();
        log.notify(Notification::info("one"));
        log.notify(Notification::success("two"));
        let drained = log.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].to_string(), "[info] one");
        assert!(log.is_empty());
    }
}
