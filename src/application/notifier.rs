//! Blocking user notifications.

/// Shows a message the user has to acknowledge before continuing.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}
