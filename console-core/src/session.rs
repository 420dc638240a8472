use std::cell::RefCell;
use std::rc::Rc;

use shared_types::ConversationId;
use tracing::{debug, warn};

use crate::store::SessionStore;

/// Lifecycle of the conversation identity for one page session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No id held.
    Unset,
    /// Id restored from the store, not yet confirmed by the backend.
    Bootstrapping(ConversationId),
    /// Id confirmed by a history fetch or issued by a send.
    Established(ConversationId),
    /// The restored id was unknown to the backend and has been dropped.
    Invalidated,
}

impl SessionState {
    pub fn conversation_id(&self) -> Option<&ConversationId> {
        match self {
            Self::Bootstrapping(id) | Self::Established(id) => Some(id),
            Self::Unset | Self::Invalidated => None,
        }
    }
}

/// Owns the conversation id and keeps the session store in step with it.
///
/// Cloning shares the same session.
#[derive(Clone)]
pub struct SessionController {
    store: Rc<dyn SessionStore>,
    state: Rc<RefCell<SessionState>>,
}

impl SessionController {
    pub fn new(store: Rc<dyn SessionStore>) -> Self {
        Self {
            store,
            state: Rc::new(RefCell::new(SessionState::Unset)),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn conversation_id(&self) -> Option<ConversationId> {
        self.state.borrow().conversation_id().cloned()
    }

    /// Reads the store at startup. Returns the id whose history should be
    /// fetched, if any.
    pub fn bootstrap(&self) -> Option<ConversationId> {
        let mut state = self.state.borrow_mut();
        if *state != SessionState::Unset {
            return None;
        }

        let id = self.store.get()?;
        debug!(conversation_id = %id, "restoring conversation from session store");
        *state = SessionState::Bootstrapping(id.clone());
        Some(id)
    }

    /// History for the restored id was fetched.
    pub fn confirm(&self) {
        let mut state = self.state.borrow_mut();
        if let SessionState::Bootstrapping(id) = &*state {
            let id = id.clone();
            debug!(conversation_id = %id, "conversation established");
            *state = SessionState::Established(id);
        }
    }

    /// The backend reported the restored id as unknown: forget it everywhere.
    pub fn invalidate(&self) {
        let mut state = self.state.borrow_mut();
        if let SessionState::Bootstrapping(id) = &*state {
            warn!(conversation_id = %id, "stored conversation unknown to backend; clearing");
            self.store.clear();
            *state = SessionState::Invalidated;
        }
    }

    /// Records the id returned by a successful send.
    ///
    /// A session without an id adopts it and persists it. A restored id is
    /// confirmed by the send. An established id is never replaced.
    pub fn adopt(&self, issued: &ConversationId) {
        let mut state = self.state.borrow_mut();
        let id = match &*state {
            SessionState::Unset | SessionState::Invalidated => {
                debug!(conversation_id = %issued, "adopting server-issued conversation id");
                self.store.set(issued);
                issued.clone()
            }
            SessionState::Bootstrapping(held) | SessionState::Established(held) => {
                if held != issued {
                    warn!(
                        held = %held,
                        issued = %issued,
                        "backend answered under a different conversation id; keeping held id"
                    );
                }
                held.clone()
            }
        };
        *state = SessionState::Established(id);
    }
}
