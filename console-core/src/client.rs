use std::time::Duration;

use async_trait::async_trait;
use shared_types::{ChatSendResponse, ConversationId, Message};

use crate::error::ClientResult;

/// Chat channel of the backend. No retries happen at this layer.
#[async_trait(?Send)]
pub trait ConversationClient {
    /// `NotFound` when the backend does not recognise `id`.
    async fn fetch_history(&self, id: &ConversationId) -> ClientResult<Vec<Message>>;

    /// Sends `query`; an absent `id` asks the backend to open a new
    /// conversation and return its id.
    async fn send(
        &self,
        query: &str,
        id: Option<&ConversationId>,
    ) -> ClientResult<ChatSendResponse>;
}

/// DSL document channel of the backend.
#[async_trait(?Send)]
pub trait DocumentClient {
    async fn fetch_content(&self) -> ClientResult<String>;

    /// Overwrites the remote document; the backend reloads it on success.
    async fn save_content(&self, content: &str) -> ClientResult<()>;
}

/// Timer used for delayed status changes.
#[async_trait(?Send)]
pub trait Delay {
    async fn sleep(&self, duration: Duration);
}
