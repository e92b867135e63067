//! On-screen notifications

mod notifier;

pub use notifier::{Notification, Notifier, Notify, Severity};

#[cfg(test)]
pub use notifier::MockNotify;
