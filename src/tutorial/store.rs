//! Durable "seen tutorial" flags.
//!
//! One boolean per game key, stored as the string `"true"` under
//! `tutorial_seen_<gameKey>`. The store never raises: a failing backend is
//! logged as a warning and the flag degrades to "unseen", so the tutorial
//! simply shows again.

use std::collections::HashSet;
use std::fmt;

/// Namespaced key the flag is persisted under.
pub fn storage_key(game_key: &str) -> String {
    format!("tutorial_seen_{}", game_key)
}

/// Capability interface the sequencer and shell talk to. Implementations
/// must not raise; failure means "flag unset" / "write dropped".
pub trait SeenStore {
    fn get(&self, game_key: &str) -> bool;
    fn set(&mut self, game_key: &str);
}

/// Plain in-memory flags. The test double, and the fallback inside
/// [`SoftFailStore`].
#[derive(Debug, Clone, Default)]
pub struct MemorySeenStore {
    seen: HashSet<String>,
}

impl MemorySeenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SeenStore for MemorySeenStore {
    fn get(&self, game_key: &str) -> bool {
        self.seen.contains(game_key)
    }

    fn set(&mut self, game_key: &str) {
        self.seen.insert(game_key.to_string());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreError(pub String);

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for StoreError {}

/// A fallible key-value backend (browser local storage, a file, ...).
/// Raw strings in and out; the flag convention lives in [`SoftFailStore`].
pub trait SeenBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Adapts a fallible backend into a [`SeenStore`] that cannot fail.
///
/// Backend errors are logged and answered from an in-memory fallback, so a
/// session with broken storage still behaves sanely within itself (the
/// tutorial just shows again next launch).
pub struct SoftFailStore<B: SeenBackend> {
    backend: B,
    fallback: MemorySeenStore,
}

impl<B: SeenBackend> SoftFailStore<B> {
    pub fn new(backend: B) -> Self {
        SoftFailStore {
            backend,
            fallback: MemorySeenStore::new(),
        }
    }
}

impl<B: SeenBackend> SeenStore for SoftFailStore<B> {
    fn get(&self, game_key: &str) -> bool {
        match self.backend.read(&storage_key(game_key)) {
            Ok(value) => value.as_deref() == Some("true"),
            Err(err) => {
                log::warn!("tutorial flag store unavailable: {}", err);
                self.fallback.get(game_key)
            }
        }
    }

    fn set(&mut self, game_key: &str) {
        self.fallback.set(game_key);
        if let Err(err) = self.backend.write(&storage_key(game_key), "true") {
            log::warn!("tutorial flag store unavailable: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenBackend;

    impl SeenBackend for BrokenBackend {
        fn read(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError("storage access denied".to_string()))
        }
        fn write(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError("storage access denied".to_string()))
        }
    }

    #[derive(Default)]
    struct MapBackend(std::collections::HashMap<String, String>);

    impl SeenBackend for MapBackend {
        fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
            Ok(self.0.get(key).cloned())
        }
        fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
            self.0.insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[test]
    fn keys_are_namespaced() {
        assert_eq!(storage_key("COUNTING"), "tutorial_seen_COUNTING");
    }

    #[test]
    fn get_on_an_unset_key_is_false_and_idempotent() {
        let store = MemorySeenStore::new();
        assert!(!store.get("ORDERING"));
        assert!(!store.get("ORDERING"));
    }

    #[test]
    fn round_trip_through_a_working_backend() {
        let mut store = SoftFailStore::new(MapBackend::default());
        assert!(!store.get("COMPARING"));
        store.set("COMPARING");
        assert!(store.get("COMPARING"));
        assert_eq!(
            store.backend.0.get("tutorial_seen_COMPARING").map(String::as_str),
            Some("true")
        );
    }

    #[test]
    fn broken_backend_degrades_to_unseen() {
        let mut store = SoftFailStore::new(BrokenBackend);
        assert!(!store.get("PLACE_VALUE"));
        // The write is dropped durably but remembered for this session.
        store.set("PLACE_VALUE");
        assert!(store.get("PLACE_VALUE"));
    }
}
