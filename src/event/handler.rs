//! Notification queue.
//!
//! [`NotificationQueue`] buffers outbound [`Notification`]s between the root
//! container and whoever consumes them (the rendering layer, or a test pilot).

use std::collections::VecDeque;

use super::notification::Notification;

/// FIFO buffer of outbound notifications.
#[derive(Debug, Default)]
pub struct NotificationQueue {
    queue: VecDeque<Notification>,
}

impl NotificationQueue {
    /// Create a new, empty queue.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Enqueue one notification.
    pub fn push(&mut self, notification: Notification) {
        self.queue.push_back(notification);
    }

    /// Drain all pending notifications, oldest first.
    pub fn drain(&mut self) -> Vec<Notification> {
        self.queue.drain(..).collect()
    }

    /// The most recently queued notification.
    pub fn last(&self) -> Option<&Notification> {
        self.queue.back()
    }

    /// Number of pending notifications.
    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Extend<Notification> for NotificationQueue {
    fn extend<I: IntoIterator<Item = Notification>>(&mut self, iter: I) {
        self.queue.extend(iter);
    }
}
