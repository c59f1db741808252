use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("notification failed: {0}")]
    Delivery(String),
}

pub trait Notifier: Send + Sync {
    fn notify(&self, address: &str) -> Result<(), NotifyError>;
}

/// Stand-in delivery channel: one line on stdout per notification.
#[derive(Debug, Default, Clone)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, address: &str) -> Result<(), NotifyError> {
        println!("Notification sent to {address}");
        Ok(())
    }
}
