use super::*;

#[test]
fn boot_starts_resolving() {
    let boot = BootStatus::new();
    assert_eq!(boot.phase(), BootPhase::Resolving);
    assert!(!boot.is_ready());
}

#[test]
fn mark_ready_is_sticky_and_shared_across_clones() {
    let boot = BootStatus::new();
    let observer = boot.clone();
    boot.mark_ready();
    boot.mark_ready();
    assert!(observer.is_ready());
}
