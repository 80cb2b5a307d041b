//! Event system: inbound commands, outbound notifications, notification queue.

pub mod command;
pub mod handler;
pub mod notification;

pub use command::Command;
pub use handler::NotificationQueue;
pub use notification::{NodeInfo, Notification};
