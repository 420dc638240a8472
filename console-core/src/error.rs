/// Failures reported at the client boundary.
///
/// View models never hand these to the presentation layer; they turn them
/// into a session reset, a chat bubble or a status banner.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The backend does not know the conversation id (HTTP 404).
    #[error("Conversation not found")]
    NotFound,
    /// Transport, server or decoding failure.
    #[error("Backend unavailable: {0}")]
    Unavailable(String),
}

impl ClientError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable(reason.into())
    }

    pub fn reason(&self) -> String {
        match self {
            Self::NotFound => "conversation not found".to_string(),
            Self::Unavailable(reason) => reason.clone(),
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
