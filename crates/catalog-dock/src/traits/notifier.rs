//! Trait for surfacing user feedback outside the dock.

/// Side-channel user feedback, decoupled from the dock's own open/closed
/// state. Command execution failures are reported here rather than thrown.
pub trait Notifier: Send + Sync {
    fn notify_success(&self, title: &str, detail: Option<&str>);
    fn notify_error(&self, title: &str, detail: Option<&str>);
}
