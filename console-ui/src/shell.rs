use std::rc::Rc;

use console_core::{
    client_config, ChatState, ChatViewModel, ClientResult, DocumentState, DocumentViewModel,
    SessionController,
};
use dioxus::prelude::*;
use shared_types::BackendHealth;

use crate::api::{fetch_health, HttpConversationClient, HttpDocumentClient};
use crate::components::ChatView;
use crate::editor::DslEditor;
use crate::interop::BrowserDelay;
use crate::state::SignalCell;
use crate::storage::browser_session_store;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveTab {
    Chat,
    Editor,
}

impl ActiveTab {
    pub fn label(self) -> &'static str {
        match self {
            Self::Chat => "💬 Chat",
            Self::Editor => "</> DSL Editor",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendStatus {
    Checking,
    Online,
    WorkflowNotLoaded,
    Offline,
}

impl BackendStatus {
    pub fn from_probe(probe: &ClientResult<BackendHealth>) -> Self {
        match probe {
            Ok(health) if health.workflow_loaded => Self::Online,
            Ok(_) => Self::WorkflowNotLoaded,
            Err(_) => Self::Offline,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Checking => "Connecting",
            Self::Online => "Online",
            Self::WorkflowNotLoaded => "Workflow not loaded",
            Self::Offline => "Offline",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Checking => "#94a3b8",
            Self::Online => "#10b981",
            Self::WorkflowNotLoaded => "#f59e0b",
            Self::Offline => "#ef4444",
        }
    }
}

type ChatModel = ChatViewModel<SignalCell<ChatState>>;
type DocumentModel = DocumentViewModel<SignalCell<DocumentState>>;

/// Page root: owns both view models and routes user actions into them.
#[component]
pub fn ConsoleShell() -> Element {
    let chat_state = use_signal(ChatState::default);
    let document_state = use_signal(DocumentState::default);
    let mut active_tab = use_signal(|| ActiveTab::Chat);
    let mut backend_status = use_signal(|| BackendStatus::Checking);

    let chat: ChatModel = use_hook(move || {
        let config = client_config();
        ChatViewModel::new(
            SignalCell(chat_state),
            Rc::new(HttpConversationClient::new(config.clone())),
            SessionController::new(browser_session_store(&config.storage_key)),
        )
    });

    let document: DocumentModel = use_hook(move || {
        let config = client_config();
        DocumentViewModel::new(
            SignalCell(document_state),
            Rc::new(HttpDocumentClient::new(config.clone())),
            Rc::new(BrowserDelay),
            config.status_clear_delay,
        )
    });

    // Startup fetches run once, independently of the visible tab
    let chat_for_restore = chat.clone();
    let document_for_load = document.clone();
    use_hook(move || {
        spawn(async move {
            let outcome = chat_for_restore.restore().await;
            dioxus_logger::tracing::info!("Conversation restore: {:?}", outcome);
        });
        spawn(async move {
            document_for_load.load().await;
        });
        spawn(async move {
            let probe = fetch_health(client_config()).await;
            backend_status.set(BackendStatus::from_probe(&probe));
        });
    });

    let chat_for_submit = chat.clone();
    let on_submit = move |query: String| {
        let chat = chat_for_submit.clone();
        spawn(async move {
            chat.submit(&query).await;
        });
    };

    let document_for_edit = document.clone();
    let on_edit = move |text: String| document_for_edit.edit(text);

    let document_for_save = document.clone();
    let on_save = move |_: ()| {
        let document = document_for_save.clone();
        spawn(async move {
            document.save_and_settle().await;
        });
    };

    let status = backend_status();
    let status_label = status.label();
    let status_color = status.color();

    rsx! {
        div {
            class: "console",
            style: "height: 100vh; display: flex; flex-direction: column; background: #0f172a; color: #f8fafc;",

            header {
                style: "display: flex; align-items: center; gap: 12px; padding: 0.75rem 1rem; background: #1e293b; border-bottom: 1px solid #334155;",
                h1 { style: "font-size: 1.1rem; margin: 0;", "Dify Runtime Demo" }
                span {
                    style: "display: flex; align-items: center; gap: 4px; font-size: 0.75rem; color: #94a3b8;",
                    span { style: "color: {status_color}; font-size: 0.5rem;", "●" }
                    "{status_label}"
                }
                div { style: "flex: 1;" }
                for tab in [ActiveTab::Chat, ActiveTab::Editor] {
                    TabButton {
                        key: "{tab:?}",
                        tab: tab,
                        active: active_tab() == tab,
                        on_select: move |tab: ActiveTab| active_tab.set(tab),
                    }
                }
            }

            match active_tab() {
                ActiveTab::Chat => rsx! {
                    ChatView { state: chat_state, on_submit }
                },
                ActiveTab::Editor => rsx! {
                    DslEditor { state: document_state, on_edit, on_save }
                },
            }
        }
    }
}

#[component]
fn TabButton(tab: ActiveTab, active: bool, on_select: EventHandler<ActiveTab>) -> Element {
    let style = if active {
        "padding: 6px 12px; background: #3b82f6; color: white; border: none; border-radius: 6px; cursor: pointer;"
    } else {
        "padding: 6px 12px; background: transparent; color: #cbd5e1; border: 1px solid #334155; border-radius: 6px; cursor: pointer;"
    };

    let label = tab.label();

    rsx! {
        button {
            style: "{style}",
            onclick: move |_| on_select.call(tab),
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use console_core::ClientError;

    #[test]
    fn health_probe_maps_to_indicator() {
        let loaded = Ok(BackendHealth {
            status: "ok".to_string(),
            workflow_loaded: true,
        });
        let missing = Ok(BackendHealth {
            status: "ok".to_string(),
            workflow_loaded: false,
        });
        let down = Err(ClientError::unavailable("Request failed"));

        assert_eq!(BackendStatus::from_probe(&loaded), BackendStatus::Online);
        assert_eq!(
            BackendStatus::from_probe(&missing),
            BackendStatus::WorkflowNotLoaded
        );
        assert_eq!(BackendStatus::from_probe(&down), BackendStatus::Offline);
        assert_eq!(BackendStatus::Offline.label(), "Offline");
    }

    #[test]
    fn tab_labels_are_distinct() {
        assert_ne!(ActiveTab::Chat.label(), ActiveTab::Editor.label());
    }
}
