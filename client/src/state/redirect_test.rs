use super::*;
use crate::util::storage::MemoryStore;

#[test]
fn record_then_take_returns_path_once() {
    let store = MemoryStore::new();
    let pending = PendingRedirect::new(&store);

    assert!(pending.record("/view-roadmap"));
    assert_eq!(pending.take().as_deref(), Some("/view-roadmap"));
    assert_eq!(pending.take(), None);
    assert!(store.is_empty());
}

#[test]
fn take_without_record_is_none() {
    let store = MemoryStore::new();
    assert_eq!(PendingRedirect::new(&store).take(), None);
}

#[test]
fn later_record_replaces_earlier() {
    let store = MemoryStore::new();
    let pending = PendingRedirect::new(&store);
    pending.record("/dashboard");
    pending.record("/profile?tab=goals");
    assert_eq!(pending.take().as_deref(), Some("/profile?tab=goals"));
}

#[test]
fn record_rejects_off_site_targets() {
    let store = MemoryStore::new();
    let pending = PendingRedirect::new(&store);
    assert!(!pending.record("https://evil.example/"));
    assert!(!pending.record("//evil.example"));
    assert!(!pending.record("dashboard"));
    assert!(!pending.record("/\\evil.example"));
    assert!(store.is_empty());
}

#[test]
fn take_drops_tampered_entry() {
    let store = MemoryStore::new();
    store.set(REDIRECT_AFTER_LOGIN_KEY, "https://evil.example");
    assert_eq!(PendingRedirect::new(&store).take(), None);
    assert!(store.is_empty());
}

#[test]
fn record_writes_under_the_shared_key() {
    let store = MemoryStore::new();
    PendingRedirect::new(&store).record("/dashboard");
    assert_eq!(store.get(REDIRECT_AFTER_LOGIN_KEY).as_deref(), Some("/dashboard"));
}
