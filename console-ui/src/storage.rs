use std::rc::Rc;

use console_core::{MemorySessionStore, SessionStore};
use shared_types::ConversationId;
use web_sys::Storage;

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

/// Conversation id slot in the browser's `localStorage`.
pub struct LocalSessionStore {
    key: String,
}

impl LocalSessionStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl SessionStore for LocalSessionStore {
    fn get(&self) -> Option<ConversationId> {
        local_storage()
            .and_then(|storage| storage.get_item(&self.key).ok().flatten())
            .and_then(ConversationId::parse)
    }

    fn set(&self, id: &ConversationId) {
        let Some(storage) = local_storage() else {
            dioxus_logger::tracing::warn!("localStorage unavailable; conversation id not persisted");
            return;
        };
        if let Err(e) = storage.set_item(&self.key, id.as_str()) {
            dioxus_logger::tracing::warn!("Failed to persist conversation id: {:?}", e);
        }
    }

    fn clear(&self) {
        if let Some(storage) = local_storage() {
            if let Err(e) = storage.remove_item(&self.key) {
                dioxus_logger::tracing::warn!("Failed to clear conversation id: {:?}", e);
            }
        }
    }
}

/// `localStorage` when the browser grants it, memory otherwise.
pub fn browser_session_store(key: &str) -> Rc<dyn SessionStore> {
    if local_storage().is_some() {
        Rc::new(LocalSessionStore::new(key))
    } else {
        dioxus_logger::tracing::warn!("localStorage unavailable; conversation will not survive reload");
        Rc::new(MemorySessionStore::new())
    }
}
