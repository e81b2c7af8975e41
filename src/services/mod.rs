pub mod notification_service;
pub mod poll_service;

pub use notification_service::{ConsoleSink, MessageSink, NotificationService};
pub use poll_service::PollService;
