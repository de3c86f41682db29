use std::ops::Deref;
use std::sync::Arc;

/// Anything an action can be sent into: a store, a mapped sender, or the
/// sender handed to an async effect.
pub trait ActionSender: Send {
    type SendableAction;

    fn send(&self, action: Self::SendableAction);
}

pub struct AnyActionSender<Action: Send + 'static> {
    value: Box<dyn ActionSender<SendableAction = Action> + Sync>,
}

impl<Action: Send> AnyActionSender<Action> {
    pub fn new(value: Box<dyn ActionSender<SendableAction = Action> + Sync>) -> Self {
        Self { value }
    }
}

impl<Action: Send> ActionSender for AnyActionSender<Action> {
    type SendableAction = Action;

    fn send(&self, action: Action) {
        self.value.send(action)
    }
}

impl<T> ActionSender for Arc<T>
where
    T: ActionSender + Sync,
{
    type SendableAction = T::SendableAction;

    fn send(&self, action: Self::SendableAction) {
        self.deref().send(action);
    }
}
