use shortener_core::{update, AppState, Msg};

#[test]
fn actions_without_short_url_are_ignored() {
    let state = AppState::new();
    for msg in [Msg::RedirectClicked, Msg::CopyClicked] {
        let (next, effects) = update(state.clone(), msg);

        assert_eq!(state, next);
        assert!(effects.is_empty());
    }
}

#[test]
fn tick_while_idle_changes_nothing() {
    let mut state = AppState::new();
    let (mut next, effects) = update(state.clone(), Msg::Tick);

    assert_eq!(state, next);
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
    assert!(!next.consume_dirty());
}
