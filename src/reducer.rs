use crate::binding_reducer::BindingReducer;
use crate::bindable_action::BindableAction;
use crate::Effect;

/// Computes the effect of one action, mutating state in place.
///
/// `Environment` carries whatever dependencies the reducer needs and is passed
/// through untouched by combinators. Reducers without dependencies use the
/// default `()`.
pub trait Reducer<State, Action: Send + 'static, Environment = ()> {
    fn reduce(&self, state: &mut State, action: Action, environment: &Environment)
        -> Effect<Action>;

    /// Wraps this reducer so binding actions are applied to state before it
    /// runs. See [`BindingReducer`].
    fn binding(self) -> BindingReducer<Self>
    where
        Self: Sized,
        Action: BindableAction<State = State>,
    {
        BindingReducer::new(self)
    }
}

/// Reducer that ignores every action.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyReducer;

impl<State, Action: Send + 'static, Environment> Reducer<State, Action, Environment>
    for EmptyReducer
{
    fn reduce(
        &self,
        _state: &mut State,
        _action: Action,
        _environment: &Environment,
    ) -> Effect<Action> {
        Effect::none()
    }
}

/// Turns a closure into a [`Reducer`].
///
/// ```
/// use tca_binding::{Effect, Reduce, Reducer};
///
/// let counter = Reduce::new(|count: &mut i32, delta: i32, _: &()| {
///     *count += delta;
///     Effect::none()
/// });
///
/// let mut count = 1;
/// assert!(counter.reduce(&mut count, 2, &()).is_none());
/// assert_eq!(count, 3);
/// ```
pub struct Reduce<F> {
    reduce: F,
}

impl<F> Reduce<F> {
    pub fn new<State, Action, Environment>(reduce: F) -> Self
    where
        Action: Send + 'static,
        F: Fn(&mut State, Action, &Environment) -> Effect<Action>,
    {
        Self { reduce }
    }
}

impl<F, State, Action, Environment> Reducer<State, Action, Environment> for Reduce<F>
where
    Action: Send + 'static,
    F: Fn(&mut State, Action, &Environment) -> Effect<Action>,
{
    fn reduce(
        &self,
        state: &mut State,
        action: Action,
        environment: &Environment,
    ) -> Effect<Action> {
        (self.reduce)(state, action, environment)
    }
}
