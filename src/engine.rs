use crate::action_sender::AnyActionSender;
use crate::effect::Effect;
use crate::effect::EffectValue;
use crate::event_sender_holder::EventSenderHolder;
use crate::reducer::Reducer;
use crate::store_event::StoreEvent;
use futures::lock::Mutex;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::broadcast;
use tokio::task::JoinSet;

type EventReceiver<T> = tokio::sync::mpsc::UnboundedReceiver<T>;
type SharedReducer<State, Action, Environment> =
    Arc<dyn Reducer<State, Action, Environment> + Sync + Send + 'static>;

const CHANGES_CAPACITY: usize = 16;

pub struct StoreEngine<State, Action, Environment>
where
    Action: Send + 'static,
    State: PartialEq + Clone + Send + 'static,
    Environment: Send + Sync + 'static,
{
    state: Arc<parking_lot::Mutex<State>>,
    reducer: SharedReducer<State, Action, Environment>,
    environment: Arc<Environment>,
    event_sender: Arc<EventSenderHolder<Action>>,
    event_reciever: Arc<Mutex<EventReceiver<StoreEvent<Action>>>>,
    changes: broadcast::Sender<()>,
}

impl<State, Action, Environment> StoreEngine<State, Action, Environment>
where
    Action: std::fmt::Debug + Send + 'static,
    State: PartialEq + Clone + Send + 'static,
    Environment: Send + Sync + 'static,
{
    pub fn new(
        state: State,
        reducer: impl Reducer<State, Action, Environment> + Sync + Send + 'static,
        environment: Environment,
    ) -> Self {
        let (event_sender, event_reciever) =
            tokio::sync::mpsc::unbounded_channel::<StoreEvent<Action>>();
        let (changes, _) = broadcast::channel(CHANGES_CAPACITY);

        Self {
            state: Arc::new(parking_lot::Mutex::new(state)),
            reducer: Arc::new(reducer),
            environment: Arc::new(environment),
            event_sender: Arc::new(EventSenderHolder::new(event_sender)),
            event_reciever: Arc::new(Mutex::new(event_reciever)),
            changes,
        }
    }

    pub(crate) fn state(&self) -> parking_lot::MutexGuard<'_, State> {
        self.state.lock()
    }

    pub(crate) fn sender(&self) -> &Arc<EventSenderHolder<Action>> {
        &self.event_sender
    }

    pub(crate) fn subscribe(&self) -> broadcast::Receiver<()> {
        self.changes.subscribe()
    }

    pub fn run_loop(&self, runtime: &Handle) -> tokio::task::AbortHandle {
        let dispatcher = Dispatcher {
            state: self.state.clone(),
            reducer: self.reducer.clone(),
            environment: self.environment.clone(),
            event_sender: self.event_sender.clone(),
            changes: self.changes.clone(),
        };
        let receiver = self.event_reciever.clone();

        let handle = runtime.spawn(async move {
            let mut event_receiver = receiver.lock().await;
            let mut join_set: JoinSet<()> = JoinSet::new();

            loop {
                tokio::select! {
                    event = event_receiver.recv() => {
                        let effect = match event {
                            Some(StoreEvent::Action(action)) => dispatcher.process(action),
                            Some(StoreEvent::Quit) | None => break,
                        };
                        dispatcher.handle(effect, &mut join_set);
                    }
                    Some(result) = join_set.join_next(), if !join_set.is_empty() => {
                        if let Err(err) = result {
                            log::error!("Effect job failed: {}", err);
                        }
                    }
                }
            }
            // Reject anything sent from now on and drop what is still queued.
            event_receiver.close();
            while event_receiver.try_recv().is_ok() {}
            log::debug!("Store loop finished");
        });

        handle.abort_handle()
    }
}

/// Everything the loop task needs to reduce actions and interpret effects.
struct Dispatcher<State, Action, Environment>
where
    Action: Send + 'static,
{
    state: Arc<parking_lot::Mutex<State>>,
    reducer: SharedReducer<State, Action, Environment>,
    environment: Arc<Environment>,
    event_sender: Arc<EventSenderHolder<Action>>,
    changes: broadcast::Sender<()>,
}

impl<State, Action, Environment> Dispatcher<State, Action, Environment>
where
    Action: std::fmt::Debug + Send + 'static,
    State: PartialEq + Clone,
{
    fn process(&self, action: Action) -> Effect<Action> {
        let mut state = self.state.lock();
        let state_before = state.clone();
        let effect = self.reducer.reduce(&mut state, action, &self.environment);
        if state_before != *state {
            // No subscribers is fine.
            let _ = self.changes.send(());
        }
        effect
    }

    fn handle(&self, effect: Effect<Action>, join_set: &mut JoinSet<()>) {
        log::debug!("Handling {:#?}", effect.value);
        match effect.value {
            EffectValue::None => {}
            EffectValue::Send(action) => {
                self.event_sender.send_event(StoreEvent::Action(action));
            }
            EffectValue::Quit => {
                self.event_sender.send_event(StoreEvent::Quit);
            }
            EffectValue::Async(job) => {
                let any_sender = AnyActionSender::new(Box::new(self.event_sender.clone()));
                join_set.spawn(job(any_sender));
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ActionSender;

    #[derive(Default, Clone, PartialEq)]
    struct State {
        log: Vec<u32>,
    }

    #[derive(Debug)]
    enum Action {
        Push(u32),
        PushLater(u32),
    }

    struct Feature;

    impl Reducer<State, Action, u32> for Feature {
        fn reduce(&self, state: &mut State, action: Action, offset: &u32) -> Effect<Action> {
            match action {
                Action::Push(value) => {
                    state.log.push(value + offset);
                    Effect::none()
                }
                Action::PushLater(value) => Effect::run(move |sender| async move {
                    tokio::task::yield_now().await;
                    sender.send(Action::Push(value));
                }),
            }
        }
    }

    #[tokio::test]
    async fn test_actions_and_async_effects_are_reduced() {
        let engine = StoreEngine::new(State::default(), Feature, 100);
        let mut changes = engine.subscribe();
        let handle = engine.run_loop(&Handle::current());

        engine.sender().send(Action::Push(1));
        engine.sender().send(Action::PushLater(2));
        engine.sender().send(Action::Push(3));

        for _ in 0..3 {
            changes.recv().await.unwrap();
        }
        let log = engine.state().log.clone();
        let mut sorted = log.clone();
        sorted.sort();
        assert_eq!(sorted, vec![101, 102, 103]);
        assert!(log.iter().position(|v| *v == 101) < log.iter().position(|v| *v == 103));
        handle.abort();
    }
}
