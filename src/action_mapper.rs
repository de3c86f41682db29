use std::marker::PhantomData;

use crate::action_sender::ActionSender;

/// Sender that converts actions into `Parent`'s action type before forwarding
/// them. [`crate::Effect::map`] uses it to lift async jobs.
pub struct ActionMapper<Action, Parent, F> {
    parent: Parent,
    map: F,
    _action: PhantomData<fn(Action)>,
}

impl<Action, Parent, F> ActionMapper<Action, Parent, F> {
    pub fn new(parent: Parent, map: F) -> Self {
        Self {
            parent,
            map,
            _action: PhantomData,
        }
    }
}

impl<Action, Parent, F> ActionSender for ActionMapper<Action, Parent, F>
where
    Action: Send + 'static,
    Parent: ActionSender,
    F: Fn(Action) -> Parent::SendableAction + Send,
{
    type SendableAction = Action;

    fn send(&self, action: Action) {
        self.parent.send((self.map)(action));
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::*;

    #[derive(Default)]
    struct Parent {
        received: Mutex<Vec<String>>,
    }

    impl ActionSender for Parent {
        type SendableAction = String;

        fn send(&self, action: String) {
            self.received.lock().push(action);
        }
    }

    #[test]
    fn test_maps_before_forwarding() {
        let parent = Arc::new(Parent::default());
        let mapper = ActionMapper::new(parent.clone(), |value: u8| format!("child {value}"));

        mapper.send(7);

        assert_eq!(*parent.received.lock(), vec!["child 7".to_string()]);
    }
}
