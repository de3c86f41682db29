//! Binding reducer for the Composable Architecture.
//!
//! Actions carry a dedicated binding variant describing "set this field to
//! that value". Wrapping a feature reducer with [`BindingReducer`] (or calling
//! [`Reducer::binding`]) applies those mutations to state before the feature
//! reducer runs, so features only handle what is specific to them.

mod action_mapper;
mod action_sender;
mod bindable_action;
mod binding_action;
mod binding_key;
mod binding_reducer;
mod change_observer;
mod effect;
mod engine;
mod event_sender_holder;
mod reducer;
mod store;
mod store_event;

pub use action_sender::{ActionSender, AnyActionSender};
pub use bindable_action::BindableAction;
pub use binding_action::BindingAction;
pub use binding_key::BindingKey;
pub use binding_reducer::{binding, BindingReducer};
pub use change_observer::ChangeObserver;
pub use effect::{Effect, EffectValue};
pub use reducer::{EmptyReducer, Reduce, Reducer};
pub use store::{BorrowedState, Store};
