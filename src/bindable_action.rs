use std::fmt::Debug;

use crate::binding_action::BindingAction;
use crate::binding_key::BindingKey;

/// An action type with one variant reserved for [`BindingAction`]s.
///
/// Implement it by hand or with [`bindable_action!`](crate::bindable_action).
pub trait BindableAction: Sized + Send + 'static {
    type State;

    /// Embeds `action` into the binding variant.
    fn binding(action: BindingAction<Self::State>) -> Self;

    /// Returns the binding payload when `self` is the binding variant.
    fn extract_binding(&self) -> Option<&BindingAction<Self::State>>;

    fn set<Value>(key: BindingKey<Self::State, Value>, value: Value) -> Self
    where
        Self::State: 'static,
        Value: Clone + PartialEq + Debug + Send + Sync + 'static,
    {
        Self::binding(BindingAction::set(key, value))
    }
}

/// Implements [`BindableAction`] for an enum whose binding variant wraps a
/// [`BindingAction`].
///
/// ```
/// use tca_binding::{bindable_action, binding_key, BindableAction, BindingAction};
///
/// #[derive(Default)]
/// struct State {
///     query: String,
/// }
///
/// enum Action {
///     Binding(BindingAction<State>),
///     Search,
/// }
///
/// bindable_action!(Action => State, Action::Binding);
///
/// let action = Action::set(binding_key!(State, query), "rust".to_string());
/// assert!(action.extract_binding().is_some());
/// assert!(Action::Search.extract_binding().is_none());
/// ```
#[macro_export]
macro_rules! bindable_action {
    ($action:ty => $state:ty, $variant:path) => {
        impl $crate::BindableAction for $action {
            type State = $state;

            fn binding(action: $crate::BindingAction<$state>) -> Self {
                $variant(action)
            }

            #[allow(unreachable_patterns)]
            fn extract_binding(&self) -> Option<&$crate::BindingAction<$state>> {
                match self {
                    $variant(action) => Some(action),
                    _ => None,
                }
            }
        }
    };
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::binding_key;

    #[derive(Debug, Default, PartialEq)]
    struct State {
        count: i32,
    }

    #[derive(Debug, PartialEq)]
    enum Action {
        Binding(BindingAction<State>),
        Increment,
    }

    bindable_action!(Action => State, Action::Binding);

    #[derive(Debug, PartialEq)]
    enum HandWritten {
        Bound(BindingAction<State>),
        Other,
    }

    impl BindableAction for HandWritten {
        type State = State;

        fn binding(action: BindingAction<State>) -> Self {
            Self::Bound(action)
        }

        fn extract_binding(&self) -> Option<&BindingAction<State>> {
            match self {
                Self::Bound(action) => Some(action),
                Self::Other => None,
            }
        }
    }

    #[test]
    fn test_extract_from_binding_variant() {
        let key = binding_key!(State, count);
        let action = Action::set(key, 3);

        assert_eq!(action.extract_binding(), Some(&BindingAction::set(key, 3)));
        assert_eq!(action, Action::Binding(BindingAction::set(key, 3)));
    }

    #[test]
    fn test_extract_from_other_variant() {
        assert_eq!(Action::Increment.extract_binding(), None);
        assert_eq!(HandWritten::Other.extract_binding(), None);
    }

    #[test]
    fn test_hand_written_impl() {
        let action = HandWritten::set(binding_key!(State, count), 9);
        let mut state = State::default();

        if let Some(binding) = action.extract_binding() {
            binding.apply(&mut state);
        }

        assert_eq!(state, State { count: 9 });
    }
}
