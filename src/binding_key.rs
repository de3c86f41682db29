use std::fmt::Debug;

/// Names one field of `State` holding a `Value` and knows how to reach it.
///
/// Usually built with [`binding_key!`](crate::binding_key).
pub struct BindingKey<State, Value> {
    name: &'static str,
    project: fn(&mut State) -> &mut Value,
}

impl<State, Value> BindingKey<State, Value> {
    pub const fn new(name: &'static str, project: fn(&mut State) -> &mut Value) -> Self {
        Self { name, project }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn project<'a>(&self, state: &'a mut State) -> &'a mut Value {
        (self.project)(state)
    }
}

impl<State, Value> Clone for BindingKey<State, Value> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<State, Value> Copy for BindingKey<State, Value> {}

impl<State, Value> Debug for BindingKey<State, Value> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BindingKey({})", self.name)
    }
}

/// Builds a [`BindingKey`] from a state type and a field path.
///
/// ```
/// use tca_binding::binding_key;
///
/// #[derive(Default)]
/// struct Settings {
///     volume: u8,
/// }
///
/// #[derive(Default)]
/// struct State {
///     settings: Settings,
/// }
///
/// let key = binding_key!(State, settings.volume);
/// let mut state = State::default();
/// *key.project(&mut state) = 7;
///
/// assert_eq!(key.name(), "settings.volume");
/// assert_eq!(state.settings.volume, 7);
/// ```
#[macro_export]
macro_rules! binding_key {
    ($state:ty, $first:ident $(. $rest:ident)*) => {
        $crate::BindingKey::new(
            concat!(stringify!($first) $(, ".", stringify!($rest))*),
            |state: &mut $state| &mut state.$first $(.$rest)*,
        )
    };
}
