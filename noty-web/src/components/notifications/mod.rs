mod error_notification;

pub use error_notification::ErrorNotification;
