//! Notifications
//!
//! Transient user-facing status messages and the sink controllers report to.

use crate::error::{AppError, StorageError, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Warning,
    Error,
    Info,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Warning => "warning",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, message)
    }
}

/// Where controllers send their notifications
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// Report rejected input and turn it into an `AppError`
pub fn reject(notifier: &impl Notifier, err: ValidationError) -> AppError {
    notifier.notify(Notification::new(err.kind(), err.to_string()));
    err.into()
}

/// Report a failed snapshot write. The in-memory change stays.
pub fn save_failed(notifier: &impl Notifier, err: StorageError) {
    log::error!("[storage] {}", err);
    notifier.notify(Notification::error("Não foi possível salvar"));
}

#[cfg(test)]
pub mod testing {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    /// Notifier that keeps everything it receives
    #[derive(Clone, Default)]
    pub struct RecordingNotifier {
        received: Rc<RefCell<Vec<Notification>>>,
    }

    impl RecordingNotifier {
        pub fn last(&self) -> Option<Notification> {
            self.received.borrow().last().cloned()
        }

        pub fn count(&self) -> usize {
            self.received.borrow().len()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notification: Notification) {
            self.received.borrow_mut().push(notification);
        }
    }
}
