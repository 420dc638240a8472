use async_trait::async_trait;
use console_core::{
    ClientConfig, ClientError, ClientResult, ConversationClient, DocumentClient,
};
use gloo_net::http::{Request, Response};
use shared_types::{
    BackendHealth, ChatSendRequest, ChatSendResponse, ConversationId, DslContent, DslSaveAck,
    ErrorDetail, Message,
};

/// Maps a non-2xx response to a client error, preferring the backend's
/// `detail` text when it sent one.
fn http_failure(status: u16, detail: Option<String>) -> ClientError {
    match detail {
        Some(detail) if !detail.trim().is_empty() => {
            ClientError::Unavailable(format!("HTTP error: {status}: {detail}"))
        }
        _ => ClientError::Unavailable(format!("HTTP error: {status}")),
    }
}

/// History lookups are the one call where 404 carries meaning.
fn history_failure(status: u16, detail: Option<String>) -> ClientError {
    if status == 404 {
        ClientError::NotFound
    } else {
        http_failure(status, detail)
    }
}

/// Path of the history endpoint; the id is one opaque path segment.
fn history_path(id: &ConversationId) -> String {
    format!("chat/history/{}", urlencoding::encode(id.as_str()))
}

async fn error_detail(response: Response) -> Option<String> {
    response
        .json::<ErrorDetail>()
        .await
        .ok()
        .map(|body| body.detail)
}

fn request_failed(e: gloo_net::Error) -> ClientError {
    ClientError::Unavailable(format!("Request failed: {e}"))
}

fn parse_failed(e: gloo_net::Error) -> ClientError {
    ClientError::Unavailable(format!("Failed to parse JSON: {e}"))
}

// ============================================================================
// Conversation API
// ============================================================================

pub struct HttpConversationClient {
    config: ClientConfig,
}

impl HttpConversationClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl ConversationClient for HttpConversationClient {
    async fn fetch_history(&self, id: &ConversationId) -> ClientResult<Vec<Message>> {
        let url = self.config.endpoint(&history_path(id));

        let response = Request::get(&url).send().await.map_err(request_failed)?;

        if !response.ok() {
            let status = response.status();
            return Err(history_failure(status, error_detail(response).await));
        }

        response.json().await.map_err(parse_failed)
    }

    async fn send(
        &self,
        query: &str,
        id: Option<&ConversationId>,
    ) -> ClientResult<ChatSendResponse> {
        let url = self.config.endpoint("chat/send");

        let request = ChatSendRequest {
            query: query.to_string(),
            conversation_id: id.cloned(),
        };

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| ClientError::Unavailable(format!("Failed to serialize request: {e}")))?
            .send()
            .await
            .map_err(request_failed)?;

        if !response.ok() {
            let status = response.status();
            return Err(http_failure(status, error_detail(response).await));
        }

        response.json().await.map_err(parse_failed)
    }
}

// ============================================================================
// DSL Document API
// ============================================================================

pub struct HttpDocumentClient {
    config: ClientConfig,
}

impl HttpDocumentClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl DocumentClient for HttpDocumentClient {
    async fn fetch_content(&self) -> ClientResult<String> {
        let url = self.config.endpoint("dsl/content");

        let response = Request::get(&url).send().await.map_err(request_failed)?;

        if !response.ok() {
            let status = response.status();
            return Err(http_failure(status, error_detail(response).await));
        }

        let data: DslContent = response.json().await.map_err(parse_failed)?;
        Ok(data.content)
    }

    async fn save_content(&self, content: &str) -> ClientResult<()> {
        let url = self.config.endpoint("dsl/content");

        let request = DslContent {
            content: content.to_string(),
        };

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| ClientError::Unavailable(format!("Failed to serialize request: {e}")))?
            .send()
            .await
            .map_err(request_failed)?;

        if !response.ok() {
            let status = response.status();
            return Err(http_failure(status, error_detail(response).await));
        }

        let ack: DslSaveAck = response.json().await.map_err(parse_failed)?;
        dioxus_logger::tracing::info!(
            "DSL saved: {} {}",
            ack.status,
            ack.message.unwrap_or_default()
        );
        Ok(())
    }
}

// ============================================================================
// Health API
// ============================================================================

pub async fn fetch_health(config: &ClientConfig) -> ClientResult<BackendHealth> {
    let url = config.endpoint("health");

    let response = Request::get(&url).send().await.map_err(request_failed)?;

    if !response.ok() {
        return Err(http_failure(response.status(), None));
    }

    response.json().await.map_err(parse_failed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_404_means_unknown_conversation() {
        assert_eq!(history_failure(404, None), ClientError::NotFound);
        assert_eq!(
            history_failure(500, None),
            ClientError::Unavailable("HTTP error: 500".to_string())
        );
    }

    #[test]
    fn history_path_escapes_stored_id() {
        let plain = ConversationId::parse("abc123").unwrap();
        assert_eq!(history_path(&plain), "chat/history/abc123");

        let odd = ConversationId::parse("a/b?c d").unwrap();
        assert_eq!(history_path(&odd), "chat/history/a%2Fb%3Fc%20d");
    }

    #[test]
    fn send_404_is_not_special() {
        assert!(matches!(
            http_failure(404, None),
            ClientError::Unavailable(_)
        ));
    }

    #[test]
    fn backend_detail_is_kept_in_reason() {
        let err = http_failure(400, Some("Invalid DSL: bad indent".to_string()));
        assert_eq!(
            err.reason(),
            "HTTP error: 400: Invalid DSL: bad indent"
        );
        assert_eq!(
            http_failure(502, Some("  ".to_string())).reason(),
            "HTTP error: 502"
        );
    }
}
