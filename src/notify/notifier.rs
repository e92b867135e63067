//! Transient notifications that remove themselves after a fixed lifetime

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::task::AbortHandle;
use tokio::time::{sleep_until, Instant};
use uuid::Uuid;

/// How long a notification stays on screen
pub const DISPLAY_LIFETIME: Duration = Duration::from_millis(5000);

/// Duration of the slide-in animation
pub const SLIDE_IN_DURATION: Duration = Duration::from_millis(300);

/// Visual and semantic category of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Success,
    Error,
    Warning,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

/// A notification currently on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Uuid,
    pub content: String,
    pub severity: Severity,
    pub created_at: Instant,
}

impl Notification {
    /// Slide-in progress in `0.0..=1.0`, eased (cubic ease-out)
    pub fn slide_in_progress(&self) -> f32 {
        let elapsed = self.created_at.elapsed().as_secs_f32();
        let progress = (elapsed / SLIDE_IN_DURATION.as_secs_f32()).clamp(0.0, 1.0);
        simple_easing::cubic_out(progress)
    }
}

/// Fire-and-forget presentation of a message
#[cfg_attr(test, mockall::automock)]
pub trait Notify: Send + Sync {
    fn notify(&self, content: &str, severity: Severity);
}

struct Entry {
    notification: Notification,
    removal: AbortHandle,
}

/// Stack of on-screen notifications, each with its own removal timer
#[derive(Clone, Default)]
pub struct Notifier {
    entries: Arc<Mutex<Vec<Entry>>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the notifications on screen, oldest first
    pub fn active(&self) -> Vec<Notification> {
        lock(&self.entries)
            .iter()
            .map(|e| e.notification.clone())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.entries).is_empty()
    }

    /// Remove a notification now and cancel its removal timer
    pub fn dismiss(&self, id: Uuid) -> bool {
        let mut entries = lock(&self.entries);
        let Some(pos) = entries.iter().position(|e| e.notification.id == id) else {
            return false;
        };
        let entry = entries.remove(pos);
        entry.removal.abort();
        true
    }
}

impl Notify for Notifier {
    fn notify(&self, content: &str, severity: Severity) {
        let notification = Notification {
            id: Uuid::new_v4(),
            content: content.to_string(),
            severity,
            created_at: Instant::now(),
        };
        let id = notification.id;
        let deadline = notification.created_at + DISPLAY_LIFETIME;
        tracing::debug!(%id, severity = severity.label(), "Showing notification: {content}");

        let mut entries = lock(&self.entries);
        let shared = Arc::clone(&self.entries);
        let removal = tokio::spawn(async move {
            sleep_until(deadline).await;
            lock(&shared).retain(|e| e.notification.id != id);
        })
        .abort_handle();

        entries.push(Entry {
            notification,
            removal,
        });
    }
}

fn lock(entries: &Mutex<Vec<Entry>>) -> MutexGuard<'_, Vec<Entry>> {
    entries.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::advance;

    async fn settle() {
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
    }

    #[test]
    fn test_severity_labels() {
        assert_eq!(Severity::Success.label(), "success");
        assert_eq!(Severity::Error.label(), "error");
        assert_eq!(Severity::Warning.label(), "warning");
    }

    #[tokio::test(start_paused = true)]
    async fn test_notification_removed_after_exactly_five_seconds() {
        let notifier = Notifier::new();
        notifier.notify("Saved", Severity::Success);
        settle().await;
        assert_eq!(notifier.active().len(), 1);

        advance(Duration::from_millis(4999)).await;
        settle().await;
        assert_eq!(notifier.active().len(), 1);

        advance(Duration::from_millis(1)).await;
        settle().await;
        assert!(notifier.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_notifications_stack_in_order() {
        let notifier = Notifier::new();
        notifier.notify("first", Severity::Success);
        notifier.notify("second", Severity::Error);
        notifier.notify("third", Severity::Warning);

        let active = notifier.active();
        let contents: Vec<_> = active.iter().map(|n| n.content.as_str()).collect();
        assert_eq!(contents, vec!["first", "second", "third"]);
        assert_eq!(active[1].severity, Severity::Error);
    }

    #[tokio::test(start_paused = true)]
    async fn test_lifetimes_are_independent() {
        let notifier = Notifier::new();
        notifier.notify("early", Severity::Success);
        advance(Duration::from_millis(2000)).await;
        notifier.notify("late", Severity::Warning);
        settle().await;

        advance(Duration::from_millis(3000)).await;
        settle().await;
        let active = notifier.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].content, "late");

        advance(Duration::from_millis(2000)).await;
        settle().await;
        assert!(notifier.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_cancels_timer() {
        let notifier = Notifier::new();
        notifier.notify("bye", Severity::Error);
        let id = notifier.active()[0].id;

        assert!(notifier.dismiss(id));
        assert!(notifier.is_empty());
        assert!(!notifier.dismiss(id));

        advance(DISPLAY_LIFETIME).await;
        settle().await;
        assert!(notifier.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_slide_in_progress() {
        let notifier = Notifier::new();
        notifier.notify("hello", Severity::Success);
        let notification = notifier.active().remove(0);
        assert_eq!(notification.slide_in_progress(), 0.0);

        advance(SLIDE_IN_DURATION).await;
        assert_eq!(notification.slide_in_progress(), 1.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clones_share_the_stack() {
        let notifier = Notifier::new();
        let handle = notifier.clone();
        handle.notify("shared", Severity::Success);
        assert_eq!(notifier.active().len(), 1);
    }
}
