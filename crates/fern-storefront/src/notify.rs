//! Toast-style notification seam.

/// How loudly to surface a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// Collaborator the UI layer uses to surface outcomes to the shopper.
///
/// Engines never notify on their own. The caller interprets a result, a
/// failed wishlist toggle say, and decides what to show.
pub trait Notifier {
    fn notify(&self, severity: Severity, title: &str, body: &str);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, severity: Severity, title: &str, body: &str) {
        (**self).notify(severity, title, body);
    }
}

/// Notifier that drops everything. For headless and test use.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _severity: Severity, _title: &str, _body: &str) {}
}

/// Notifier that forwards to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, severity: Severity, title: &str, body: &str) {
        match severity {
            Severity::Error => tracing::warn!(title, body, "toast"),
            Severity::Info | Severity::Success => tracing::info!(title, body, "toast"),
        }
    }
}
