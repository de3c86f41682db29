use crate::action_mapper::ActionMapper;
use crate::action_sender::AnyActionSender;
use futures::future::BoxFuture;
use futures::FutureExt;
use std::fmt::Debug;
use std::future::Future;

/// Work a reducer asks the store to perform after it returns.
///
/// Reducers build effects, the store interprets them. Combinators such as
/// [`crate::BindingReducer`] only ever pass them along.
pub struct Effect<Action: Send + 'static> {
    pub value: EffectValue<Action>,
}

pub type AsyncActionJob<Action> =
    Box<dyn FnOnce(AnyActionSender<Action>) -> BoxFuture<'static, ()> + Send>;

pub enum EffectValue<Action: Send + 'static> {
    None,
    Send(Action),
    Async(AsyncActionJob<Action>),
    Quit,
}

impl<Action> Effect<Action>
where
    Action: Send + 'static,
{
    pub fn map<F, MappedAction>(self, map: F) -> Effect<MappedAction>
    where
        MappedAction: Send + 'static,
        F: Fn(Action) -> MappedAction + Send + Sync + 'static,
    {
        match self.value {
            EffectValue::None => Effect::none(),
            EffectValue::Quit => Effect::quit(),
            EffectValue::Send(a) => Effect::send(map(a)),
            EffectValue::Async(job) => Effect::<MappedAction>::run(|sender| async move {
                let mapper = ActionMapper::new(sender, map);
                job(AnyActionSender::new(Box::new(mapper))).await
            }),
        }
    }

    pub fn run<T, Fut>(job: T) -> Self
    where
        Fut: Future<Output = ()> + Send + 'static,
        T: FnOnce(AnyActionSender<Action>) -> Fut + Send + 'static,
    {
        let boxed_job: AsyncActionJob<Action> =
            Box::new(move |sender: AnyActionSender<Action>| job(sender).boxed());
        Self {
            value: EffectValue::Async(boxed_job),
        }
    }

    pub fn none() -> Self {
        Self {
            value: EffectValue::None,
        }
    }

    pub fn quit() -> Self {
        Self {
            value: EffectValue::Quit,
        }
    }

    pub fn send(action: Action) -> Self {
        Self {
            value: EffectValue::Send(action),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self.value, EffectValue::None)
    }
}

impl<Action: Send> Debug for EffectValue<Action>
where
    Action: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Send(action) => write!(f, "Send {:#?}", action),
            Self::Async(_) => f.write_str("Async"),
            Self::Quit => f.write_str("Quit"),
        }
    }
}

impl<Action: Send> Debug for Effect<Action>
where
    Action: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Effect").field("value", &self.value).finish()
    }
}
