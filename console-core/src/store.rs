use std::cell::RefCell;

use shared_types::ConversationId;

/// Durable slot remembering the active conversation across reloads.
///
/// Implementations treat an unavailable backing store as empty and swallow
/// write failures after logging them.
pub trait SessionStore {
    fn get(&self) -> Option<ConversationId>;
    fn set(&self, id: &ConversationId);
    fn clear(&self);
}

/// Store kept in memory only. Used in tests and as the fallback when the
/// browser refuses `localStorage`.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slot: RefCell<Option<ConversationId>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            slot: RefCell::new(ConversationId::parse(id)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<ConversationId> {
        self.slot.borrow().clone()
    }

    fn set(&self, id: &ConversationId) {
        *self.slot.borrow_mut() = Some(id.clone());
    }

    fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_and_clears() {
        let store = MemorySessionStore::new();
        assert!(store.get().is_none());

        let id = ConversationId::parse("abc123").unwrap();
        store.set(&id);
        assert_eq!(store.get(), Some(id));

        store.clear();
        assert!(store.get().is_none());
    }

    #[test]
    fn blank_seed_reads_as_absent() {
        assert!(MemorySessionStore::with_id("").get().is_none());
    }
}
