//! Desktop notification dispatch.
//!
//! Notifications are best-effort. The driver logs a failed dispatch and moves
//! on; the terminal prompt is what the user actually answers.

use notify_rust::Notification;

use crate::error::NotifyError;

const APP_NAME: &str = "pomodoro";

pub trait Notifier {
    fn notify(&self, title: &str, message: &str) -> Result<(), NotifyError>;
}

/// Sends through the OS notification service.
#[derive(Debug, Clone, Default)]
pub struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn notify(&self, title: &str, message: &str) -> Result<(), NotifyError> {
        Notification::new()
            .appname(APP_NAME)
            .summary(title)
            .body(message)
            .show()
            .map(|_| ())
            .map_err(|e| NotifyError::Dispatch(e.to_string()))
    }
}

/// Used for `--no-notify` and when notifications are disabled in config.
#[derive(Debug, Clone, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _title: &str, _message: &str) -> Result<(), NotifyError> {
        Ok(())
    }
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn notify(&self, title: &str, message: &str) -> Result<(), NotifyError> {
        (**self).notify(title, message)
    }
}
