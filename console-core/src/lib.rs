//! Client-side session and synchronization state for the DSL console.
//!
//! Everything here is platform neutral: the browser UI supplies the HTTP
//! clients, the `localStorage` store, the timer and the reactive state cells.

pub mod cell;
pub mod chat;
pub mod client;
pub mod config;
pub mod document;
pub mod error;
pub mod session;
pub mod store;

pub use cell::StateCell;
pub use chat::{
    ChatState, ChatViewModel, RestoreOutcome, SubmitOutcome, SubmitRejected, SEND_FAILURE_NOTICE,
};
pub use client::{ConversationClient, Delay, DocumentClient};
pub use config::{client_config, ClientConfig};
pub use document::{
    DocumentState, DocumentViewModel, LoadOutcome, SaveOutcome, SaveStatus, StatusTicket,
};
pub use error::{ClientError, ClientResult};
pub use session::{SessionController, SessionState};
pub use store::{MemorySessionStore, SessionStore};
