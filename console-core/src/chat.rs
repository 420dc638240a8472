use std::rc::Rc;

use shared_types::Message;
use tracing::{debug, warn};

use crate::cell::StateCell;
use crate::client::ConversationClient;
use crate::error::ClientError;
use crate::session::SessionController;

/// Shown in place of an assistant reply when a send fails.
pub const SEND_FAILURE_NOTICE: &str =
    "Error: Failed to send message. Please check backend connection.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatState {
    /// Chronological, append-only log.
    pub messages: Vec<Message>,
    /// True while a send is in flight.
    pub pending: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejected {
    EmptyQuery,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rejected(SubmitRejected),
    Answered,
    Failed(ClientError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// No stored conversation.
    Fresh,
    /// History loaded for the stored conversation.
    Restored { messages: usize },
    /// Stored conversation unknown to the backend; session reset.
    Invalidated,
    /// History could not be fetched; the stored id is kept.
    Unavailable(ClientError),
}

impl ChatState {
    /// Appends the optimistic user entry and marks the send as in flight.
    pub fn begin_send(&mut self, query: &str) -> Result<(), SubmitRejected> {
        if query.trim().is_empty() {
            return Err(SubmitRejected::EmptyQuery);
        }
        if self.pending {
            return Err(SubmitRejected::Pending);
        }

        self.messages.push(Message::user(query));
        self.pending = true;
        Ok(())
    }

    /// Appends the outcome entry and ends the in-flight span.
    pub fn finish_send(&mut self, reply: Message) {
        self.messages.push(reply);
        self.pending = false;
    }
}

/// Chat log bound to a conversation client and the session.
pub struct ChatViewModel<M> {
    state: M,
    client: Rc<dyn ConversationClient>,
    session: SessionController,
}

impl<M: Clone> Clone for ChatViewModel<M> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            client: self.client.clone(),
            session: self.session.clone(),
        }
    }
}

impl<M: StateCell<ChatState>> ChatViewModel<M> {
    pub fn new(state: M, client: Rc<dyn ConversationClient>, session: SessionController) -> Self {
        Self {
            state,
            client,
            session,
        }
    }

    pub fn state(&self) -> &M {
        &self.state
    }

    pub fn session(&self) -> &SessionController {
        &self.session
    }

    /// Startup path: bootstrap the session and load the stored
    /// conversation's history.
    pub async fn restore(&self) -> RestoreOutcome {
        let Some(id) = self.session.bootstrap() else {
            return RestoreOutcome::Fresh;
        };

        match self.client.fetch_history(&id).await {
            Ok(history) => {
                let count = history.len();
                self.state.update(|s| s.messages = history);
                self.session.confirm();
                RestoreOutcome::Restored { messages: count }
            }
            Err(ClientError::NotFound) => {
                self.session.invalidate();
                RestoreOutcome::Invalidated
            }
            Err(err) => {
                warn!(conversation_id = %id, "Failed to fetch history: {}", err);
                RestoreOutcome::Unavailable(err)
            }
        }
    }

    /// Sends `query` as the next user turn.
    ///
    /// The user entry is appended before the request goes out and is never
    /// removed; a failure is reported as an assistant entry instead.
    pub async fn submit(&self, query: &str) -> SubmitOutcome {
        if let Err(reason) = self.state.update(|s| s.begin_send(query)) {
            debug!(?reason, "submission ignored");
            return SubmitOutcome::Rejected(reason);
        }

        let id = self.session.conversation_id();
        match self.client.send(query, id.as_ref()).await {
            Ok(reply) => {
                self.session.adopt(&reply.conversation_id);
                self.state
                    .update(|s| s.finish_send(Message::assistant(reply.response)));
                SubmitOutcome::Answered
            }
            Err(err) => {
                warn!("Failed to send message: {}", err);
                self.state
                    .update(|s| s.finish_send(Message::assistant(SEND_FAILURE_NOTICE)));
                SubmitOutcome::Failed(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_send_rejects_blank_query() {
        let mut state = ChatState::default();
        assert_eq!(state.begin_send(""), Err(SubmitRejected::EmptyQuery));
        assert_eq!(state.begin_send(" \n\t"), Err(SubmitRejected::EmptyQuery));
        assert!(state.messages.is_empty());
        assert!(!state.pending);
    }

    #[test]
    fn begin_send_rejects_while_pending() {
        let mut state = ChatState::default();
        state.begin_send("first").unwrap();
        assert_eq!(state.begin_send("second"), Err(SubmitRejected::Pending));
        assert_eq!(state.messages, vec![Message::user("first")]);
    }

    #[test]
    fn begin_send_keeps_query_verbatim() {
        let mut state = ChatState::default();
        state.begin_send("  padded  ").unwrap();
        assert_eq!(state.messages[0].content, "  padded  ");
    }

    #[test]
    fn finish_send_appends_and_clears_pending() {
        let mut state = ChatState::default();
        state.begin_send("hi").unwrap();
        state.finish_send(Message::assistant(SEND_FAILURE_NOTICE));

        assert!(!state.pending);
        assert_eq!(
            state.messages,
            vec![Message::user("hi"), Message::assistant(SEND_FAILURE_NOTICE)]
        );
    }
}
