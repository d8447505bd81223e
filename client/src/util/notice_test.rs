use super::*;

#[test]
fn show_replaces_visible_notice() {
    let mut state = NoticeState::default();
    state.show("first");
    state.show("second");
    assert_eq!(state.text(), Some("second"));
}

#[test]
fn dismiss_only_clears_matching_id() {
    let mut state = NoticeState::default();
    let old = state.show("Failed to load orders");
    let new = state.show("Order ORD-1 created");
    assert!(!state.dismiss(old));
    assert_eq!(state.text(), Some("Order ORD-1 created"));
    assert!(state.dismiss(new));
    assert_eq!(state.text(), None);
}

#[test]
fn ids_increase() {
    let mut state = NoticeState::default();
    let a = state.show("a");
    let b = state.show("b");
    assert!(b > a);
}
