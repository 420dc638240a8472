use std::rc::Rc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::cell::StateCell;
use crate::client::{Delay, DocumentClient};
use crate::error::ClientError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveStatus {
    Saving,
    Saved,
    Failed { reason: String },
}

impl SaveStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Saving => "Saving...",
            Self::Saved => "Saved & Reloaded!",
            Self::Failed { .. } => "Error saving DSL",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Identifies the status set by one save, so that only that status is
/// cleared by its timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTicket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentState {
    pub content: String,
    pub saving: bool,
    pub status: Option<SaveStatus>,
    status_generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Failed(ClientError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// A save was already in flight.
    Rejected,
    Saved(StatusTicket),
    Failed(ClientError),
}

impl DocumentState {
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    fn set_status(&mut self, status: SaveStatus) -> StatusTicket {
        self.status_generation += 1;
        self.status = Some(status);
        StatusTicket(self.status_generation)
    }

    /// Starts a save. Returns the buffer to upload.
    pub fn begin_save(&mut self) -> Option<String> {
        if self.saving {
            return None;
        }
        self.saving = true;
        self.set_status(SaveStatus::Saving);
        Some(self.content.clone())
    }

    pub fn finish_save(&mut self, result: Result<(), &ClientError>) -> StatusTicket {
        self.saving = false;
        match result {
            Ok(()) => self.set_status(SaveStatus::Saved),
            Err(err) => self.set_status(SaveStatus::Failed {
                reason: err.reason(),
            }),
        }
    }

    /// Clears the status if it is still the one `ticket` was issued for.
    pub fn expire_status(&mut self, ticket: StatusTicket) -> bool {
        if self.status_generation != ticket.0 {
            return false;
        }
        self.status.take().is_some()
    }
}

/// Editable DSL buffer bound to the document client.
pub struct DocumentViewModel<M> {
    state: M,
    client: Rc<dyn DocumentClient>,
    delay: Rc<dyn Delay>,
    status_clear_delay: Duration,
}

impl<M: Clone> Clone for DocumentViewModel<M> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            client: self.client.clone(),
            delay: self.delay.clone(),
            status_clear_delay: self.status_clear_delay,
        }
    }
}

impl<M: StateCell<DocumentState>> DocumentViewModel<M> {
    pub fn new(
        state: M,
        client: Rc<dyn DocumentClient>,
        delay: Rc<dyn Delay>,
        status_clear_delay: Duration,
    ) -> Self {
        Self {
            state,
            client,
            delay,
            status_clear_delay,
        }
    }

    pub fn state(&self) -> &M {
        &self.state
    }

    /// Replaces the buffer with the remote document. Failures leave the
    /// buffer and status untouched and are only logged.
    pub async fn load(&self) -> LoadOutcome {
        match self.client.fetch_content().await {
            Ok(content) => {
                self.state.update(|s| s.content = content);
                LoadOutcome::Loaded
            }
            Err(err) => {
                warn!("Failed to fetch DSL: {}", err);
                LoadOutcome::Failed(err)
            }
        }
    }

    pub fn edit(&self, text: impl Into<String>) {
        let text = text.into();
        self.state.update(|s| s.content = text);
    }

    /// Uploads the buffer as it stands when the save starts.
    pub async fn save(&self) -> SaveOutcome {
        let Some(content) = self.state.update(DocumentState::begin_save) else {
            debug!("save ignored; another save is in flight");
            return SaveOutcome::Rejected;
        };

        match self.client.save_content(&content).await {
            Ok(()) => {
                let ticket = self.state.update(|s| s.finish_save(Ok(())));
                SaveOutcome::Saved(ticket)
            }
            Err(err) => {
                warn!("Failed to save DSL: {}", err);
                self.state.update(|s| s.finish_save(Err(&err)));
                SaveOutcome::Failed(err)
            }
        }
    }

    /// Waits out the status delay, then clears the status of that save.
    pub async fn clear_status_later(&self, ticket: StatusTicket) {
        self.delay.sleep(self.status_clear_delay).await;
        self.state.update(|s| s.expire_status(ticket));
    }

    /// Save followed by the delayed status clear on success.
    pub async fn save_and_settle(&self) -> SaveOutcome {
        let outcome = self.save().await;
        if let SaveOutcome::Saved(ticket) = outcome {
            self.clear_status_later(ticket).await;
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels_match_editor_banner() {
        assert_eq!(SaveStatus::Saving.label(), "Saving...");
        assert_eq!(SaveStatus::Saved.label(), "Saved & Reloaded!");
        let failed = SaveStatus::Failed {
            reason: "HTTP error: 400".to_string(),
        };
        assert_eq!(failed.label(), "Error saving DSL");
        assert!(failed.is_error());
        assert!(!SaveStatus::Saved.is_error());
    }

    #[test]
    fn begin_save_snapshots_buffer_once() {
        let mut state = DocumentState::with_content("a: 1");
        assert_eq!(state.begin_save(), Some("a: 1".to_string()));
        assert!(state.saving);
        assert_eq!(state.status, Some(SaveStatus::Saving));
        assert_eq!(state.begin_save(), None);
    }

    #[test]
    fn stale_ticket_does_not_clear_newer_status() {
        let mut state = DocumentState::default();
        state.begin_save();
        let first = state.finish_save(Ok(()));

        state.begin_save();
        let err = ClientError::unavailable("HTTP error: 500");
        let second = state.finish_save(Err(&err));

        assert!(!state.expire_status(first));
        assert!(state.status.as_ref().is_some_and(SaveStatus::is_error));
        assert!(state.expire_status(second));
        assert!(state.status.is_none());
    }

    #[test]
    fn failed_save_keeps_reason() {
        let mut state = DocumentState::default();
        state.begin_save();
        let err = ClientError::unavailable("Invalid DSL: missing nodes");
        state.finish_save(Err(&err));
        assert_eq!(
            state.status,
            Some(SaveStatus::Failed {
                reason: "Invalid DSL: missing nodes".to_string()
            })
        );
        assert!(!state.saving);
    }
}
