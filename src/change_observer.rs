use tokio::sync::broadcast;

/// Source of "state changed" notifications.
pub trait ChangeObserver {
    /// Subscribes to changes. A message is sent after every reduce that left
    /// the state different from what it was before.
    fn observe(&self) -> broadcast::Receiver<()>;
}
