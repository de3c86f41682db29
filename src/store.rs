use anyhow::Context;
use tokio::runtime::Handle;
use tokio::sync::broadcast;
use tokio::task::AbortHandle;

use crate::action_sender::ActionSender;
use crate::change_observer::ChangeObserver;
use crate::reducer::Reducer;

use super::engine::StoreEngine;

/// Locked view of the store's state. Hold it briefly: the store cannot reduce
/// while it is alive.
///
/// The lock is blocking. Never keep a guard across an `.await`: on a
/// current-thread runtime the store loop then blocks on the lock while the
/// guard's owner waits for the loop, and both deadlock.
pub type BorrowedState<'a, State> = lock_api::MutexGuard<'a, parking_lot::RawMutex, State>;

/// Owns state and environment and feeds actions, one at a time, into a
/// reducer running on a tokio task.
///
/// Dropping the store stops the loop and every effect still in flight.
pub struct Store<State, Action, Environment = ()>
where
    Action: std::fmt::Debug + Send + 'static,
    State: PartialEq + Clone + Send + 'static,
    Environment: Send + Sync + 'static,
{
    engine: StoreEngine<State, Action, Environment>,
    handle: AbortHandle,
}

impl<State, Action, Environment> Store<State, Action, Environment>
where
    Action: std::fmt::Debug + Send + 'static,
    State: PartialEq + Clone + Send + 'static,
    Environment: Send + Sync + 'static,
{
    /// Starts the store on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// When called outside of a tokio runtime. Use [`Store::try_new`] to get an
    /// error instead.
    pub fn new<R: Reducer<State, Action, Environment> + Sync + Send + 'static>(
        state: State,
        reducer: R,
        environment: Environment,
    ) -> Self {
        Self::start(&Handle::current(), state, reducer, environment)
    }

    pub fn try_new<R: Reducer<State, Action, Environment> + Sync + Send + 'static>(
        state: State,
        reducer: R,
        environment: Environment,
    ) -> anyhow::Result<Self> {
        let runtime = Handle::try_current().context("Store requires a running tokio runtime")?;
        Ok(Self::start(&runtime, state, reducer, environment))
    }

    fn start<R: Reducer<State, Action, Environment> + Sync + Send + 'static>(
        runtime: &Handle,
        state: State,
        reducer: R,
        environment: Environment,
    ) -> Self {
        let engine = StoreEngine::new(state, reducer, environment);
        let handle = engine.run_loop(runtime);
        Self { engine, handle }
    }

    pub fn state(&self) -> BorrowedState<'_, State> {
        self.engine.state()
    }

    /// Resolves once the loop has stopped after a quit effect. Actions sent
    /// afterwards are dropped.
    pub async fn stopped(&self) {
        self.engine.sender().closed().await
    }

    pub fn with_state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&State) -> T,
    {
        f(&*self.state())
    }
}

impl<State, Action, Environment> ActionSender for Store<State, Action, Environment>
where
    Action: std::fmt::Debug + Send + 'static,
    State: PartialEq + Clone + Send + 'static,
    Environment: Send + Sync + 'static,
{
    type SendableAction = Action;

    fn send(&self, action: Action) {
        self.engine.sender().send(action);
    }
}

impl<State, Action, Environment> ChangeObserver for Store<State, Action, Environment>
where
    Action: std::fmt::Debug + Send + 'static,
    State: PartialEq + Clone + Send + 'static,
    Environment: Send + Sync + 'static,
{
    fn observe(&self) -> broadcast::Receiver<()> {
        self.engine.subscribe()
    }
}

impl<State, Action, Environment> Drop for Store<State, Action, Environment>
where
    Action: std::fmt::Debug + Send + 'static,
    State: PartialEq + Clone + Send + 'static,
    Environment: Send + Sync + 'static,
{
    fn drop(&mut self) {
        self.handle.abort();
    }
}
