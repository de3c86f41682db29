use std::any::{type_name, Any};
use std::borrow::Cow;
use std::fmt::Debug;
use std::sync::Arc;

use crate::binding_key::BindingKey;

type Setter<State> = Arc<dyn Fn(&mut State) + Send + Sync>;

/// Type-erased payload of a binding, kept around for equality and debugging.
trait BindingValue: Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn eq_value(&self, other: &dyn BindingValue) -> bool;
    fn fmt_value(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result;
}

impl<T> BindingValue for T
where
    T: Any + PartialEq + Debug + Send + Sync,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_value(&self, other: &dyn BindingValue) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    fn fmt_value(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A pending "set this field to that value" mutation on `State`.
///
/// Bindings are built once by whoever produces the action and consumed by
/// [`crate::BindingReducer`], which calls [`BindingAction::apply`] before the
/// feature's own reducer sees the action.
pub struct BindingAction<State> {
    key: Cow<'static, str>,
    value: Arc<dyn BindingValue>,
    set: Setter<State>,
}

impl<State: 'static> BindingAction<State> {
    pub fn set<Value>(key: BindingKey<State, Value>, value: Value) -> Self
    where
        Value: Clone + PartialEq + Debug + Send + Sync + 'static,
    {
        let value = Arc::new(value);
        let new_value = Arc::clone(&value);
        Self {
            key: Cow::Borrowed(key.name()),
            value,
            set: Arc::new(move |state: &mut State| {
                *key.project(state) = Value::clone(&new_value);
            }),
        }
    }

    /// Lifts a binding on a child state into one on `Parent`, reaching the
    /// child through `key`.
    pub fn pullback<Parent: 'static>(
        self,
        key: BindingKey<Parent, State>,
    ) -> BindingAction<Parent> {
        let set = self.set;
        BindingAction {
            key: Cow::Owned(format!("{}.{}", key.name(), self.key)),
            value: self.value,
            set: Arc::new(move |parent: &mut Parent| set(key.project(parent))),
        }
    }
}

impl<State> BindingAction<State> {
    /// Writes the bound value into `state`.
    pub fn apply(&self, state: &mut State) {
        (self.set)(state)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value<Value: 'static>(&self) -> Option<&Value> {
        self.value.as_any().downcast_ref()
    }

    /// Whether this binding targets the field named by `key`.
    pub fn is<Value: 'static>(&self, key: &BindingKey<State, Value>) -> bool {
        self.key == key.name() && self.value.as_any().is::<Value>()
    }
}

impl<State> Clone for BindingAction<State> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            value: Arc::clone(&self.value),
            set: Arc::clone(&self.set),
        }
    }
}

impl<State> PartialEq for BindingAction<State> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.value.eq_value(other.value.as_ref())
    }
}

impl<State> Debug for BindingAction<State> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = type_name::<State>().rsplit("::").next().unwrap_or_default();
        write!(f, "BindingAction::set({}.{}, ", state, self.key)?;
        self.value.fmt_value(f)?;
        f.write_str(")")
    }
}
