use crate::action_sender::ActionSender;
use crate::store_event::StoreEvent;

pub type EventSender<T> = tokio::sync::mpsc::UnboundedSender<T>;

pub struct EventSenderHolder<Action>
where
    Action: Send + 'static,
{
    event_sender: EventSender<StoreEvent<Action>>,
}

impl<Action> EventSenderHolder<Action>
where
    Action: Send + 'static,
{
    pub fn new(event_sender: EventSender<StoreEvent<Action>>) -> Self {
        Self { event_sender }
    }

    pub fn is_closed(&self) -> bool {
        self.event_sender.is_closed()
    }

    /// Resolves once the store loop stops accepting events.
    pub async fn closed(&self) {
        self.event_sender.closed().await
    }

    pub fn send_event(&self, evt: StoreEvent<Action>) {
        if self.event_sender.send(evt).is_err() {
            log::warn!("Store loop is not running, dropping event");
        }
    }
}

impl<Action> ActionSender for EventSenderHolder<Action>
where
    Action: Send + 'static,
{
    type SendableAction = Action;

    fn send(&self, action: Action) {
        self.send_event(StoreEvent::Action(action));
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_send_wraps_action() {
        let (sender, mut receiver) = tokio::sync::mpsc::unbounded_channel();
        let holder = EventSenderHolder::new(sender);

        holder.send(5);

        assert!(matches!(receiver.try_recv(), Ok(StoreEvent::Action(5))));
    }

    #[test]
    fn test_send_after_close_does_not_panic() {
        let (sender, receiver) = tokio::sync::mpsc::unbounded_channel::<StoreEvent<i32>>();
        drop(receiver);

        let holder = EventSenderHolder::new(sender);
        holder.send(1);
        assert!(holder.is_closed());
    }
}
