pub enum StoreEvent<Action: Send + 'static> {
    Action(Action),
    Quit,
}
