use crate::bindable_action::BindableAction;
use crate::effect::Effect;
use crate::reducer::{EmptyReducer, Reducer};

/// Applies binding actions to state, then hands every action to the wrapped
/// reducer.
///
/// For a binding action the wrapped reducer only ever observes the state after
/// the mutation. Any other action reaches it untouched. The returned effect is
/// always the wrapped reducer's effect.
///
/// Each layer applies the mutation once, so wrapping a `BindingReducer` in
/// another one applies it twice.
///
/// ```
/// use tca_binding::{
///     bindable_action, binding_key, BindableAction, BindingAction, Effect, Reduce, Reducer,
/// };
///
/// #[derive(Default)]
/// struct State {
///     text: String,
///     submitted: Vec<String>,
/// }
///
/// enum Action {
///     Binding(BindingAction<State>),
///     Submit,
/// }
///
/// bindable_action!(Action => State, Action::Binding);
///
/// let reducer = Reduce::new(|state: &mut State, action: Action, _: &()| {
///     if let Action::Submit = action {
///         state.submitted.push(std::mem::take(&mut state.text));
///     }
///     Effect::none()
/// })
/// .binding();
///
/// let mut state = State::default();
/// reducer.reduce(&mut state, Action::set(binding_key!(State, text), "hi".to_string()), &());
/// assert_eq!(state.text, "hi");
///
/// reducer.reduce(&mut state, Action::Submit, &());
/// assert_eq!(state.submitted, vec!["hi".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct BindingReducer<R> {
    reducer: R,
}

impl<R> BindingReducer<R> {
    pub fn new(reducer: R) -> Self {
        Self { reducer }
    }
}

impl Default for BindingReducer<EmptyReducer> {
    fn default() -> Self {
        Self::new(EmptyReducer)
    }
}

/// Shorthand for [`BindingReducer::new`].
pub fn binding<R>(reducer: R) -> BindingReducer<R> {
    BindingReducer::new(reducer)
}

impl<R, State, Action, Environment> Reducer<State, Action, Environment> for BindingReducer<R>
where
    R: Reducer<State, Action, Environment>,
    Action: BindableAction<State = State>,
{
    fn reduce(
        &self,
        state: &mut State,
        action: Action,
        environment: &Environment,
    ) -> Effect<Action> {
        if let Some(binding) = action.extract_binding() {
            log::trace!("Applying {:?}", binding);
            binding.apply(state);
        }
        self.reducer.reduce(state, action, environment)
    }
}
