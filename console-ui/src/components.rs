use console_core::ChatState;
use dioxus::prelude::*;
use shared_types::Message;

use crate::interop::scroll_into_view;

const CHAT_LOG_END_ID: &str = "chat-log-end";

/// Conversation log and input box. Reads chat state, hands accepted
/// queries to `on_submit`.
#[component]
pub fn ChatView(state: Signal<ChatState>, on_submit: EventHandler<String>) -> Element {
    let mut input_text = use_signal(String::new);

    // Keep the newest entry in view
    use_effect(move || {
        let _ = state.read().messages.len();
        scroll_into_view(CHAT_LOG_END_ID);
    });

    let pending = state.read().pending;
    let messages = state.read().messages.clone();

    let send_message = use_callback(move |_| {
        let text = input_text.to_string();
        if text.trim().is_empty() || state.read().pending {
            return;
        }
        input_text.set(String::new());
        on_submit.call(text);
    });

    let onkeydown = use_callback(move |e: KeyboardEvent| {
        if e.key() == Key::Enter && !e.modifiers().shift() {
            e.prevent_default();
            send_message.call(());
        }
    });

    rsx! {
        style { {CHAT_STYLES} }

        div {
            class: "chat-container",

            div {
                class: "messages-scroll-area",
                div {
                    class: "messages-list",
                    if messages.is_empty() {
                        div {
                            class: "empty-state",
                            p { "Welcome to the Dify vNext Runtime Demo." }
                            span { "Try asking: \"My EC2 instance is down\"" }
                        }
                    } else {
                        for (idx, msg) in messages.into_iter().enumerate() {
                            MessageBubble { key: "{idx}", message: msg }
                        }
                    }
                    if pending {
                        LoadingIndicator {}
                    }
                    div { id: CHAT_LOG_END_ID }
                }
            }

            div {
                class: "chat-input-area",
                div {
                    class: "input-wrapper",
                    input {
                        class: "chat-input",
                        r#type: "text",
                        placeholder: "Type a message...",
                        value: "{input_text}",
                        disabled: pending,
                        oninput: move |e| input_text.set(e.value()),
                        onkeydown,
                    }
                    button {
                        class: "send-button",
                        disabled: pending || input_text.read().trim().is_empty(),
                        onclick: move |_| send_message.call(()),
                        if pending {
                            span { class: "spinner", "◐" }
                        } else {
                            span { "➤" }
                        }
                        " Send"
                    }
                }
            }
        }
    }
}

#[component]
pub fn MessageBubble(message: Message) -> Element {
    let is_user = message.is_user();
    let sender_initial = if is_user { "Y" } else { "A" };

    rsx! {
        div {
            class: if is_user { "message-row user-row" } else { "message-row assistant-row" },

            div {
                class: if is_user { "avatar user-avatar" } else { "avatar assistant-avatar" },
                "{sender_initial}"
            }

            div {
                class: if is_user { "message-bubble user-bubble" } else { "message-bubble assistant-bubble" },
                "{message.content}"
            }
        }
    }
}

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            class: "message-row assistant-row",
            div {
                class: "avatar assistant-avatar",
                "A"
            }
            div {
                class: "typing-indicator",
                span {}
                span {}
                span {}
            }
        }
    }
}

const CHAT_STYLES: &str = r#"
.chat-container { display: flex; flex-direction: column; flex: 1; min-height: 0; }
.messages-scroll-area { flex: 1; overflow-y: auto; padding: 1.25rem; }
.messages-list { display: flex; flex-direction: column; gap: 0.875rem; }

.empty-state { margin: auto; padding: 4rem 1rem; text-align: center; color: #71717a; }
.empty-state p { margin: 0 0 0.5rem; color: #d4d4d8; font-weight: 600; }

.message-row { display: flex; align-items: flex-end; gap: 0.5rem; }
.user-row { flex-direction: row-reverse; }

.avatar {
    width: 1.75rem; height: 1.75rem; border-radius: 0.5rem;
    display: grid; place-items: center; flex-shrink: 0;
    font-size: 0.7rem; font-weight: 700;
}
.user-avatar { background: #059669; color: #ecfdf5; }
.assistant-avatar { background: #27272a; color: #a1a1aa; }

.message-bubble {
    max-width: 70%; padding: 0.6rem 0.9rem; border-radius: 0.75rem;
    line-height: 1.45; white-space: pre-wrap; overflow-wrap: anywhere;
}
.user-bubble { background: #047857; color: #f0fdf4; }
.assistant-bubble { background: #18181b; color: #e4e4e7; border: 1px solid #3f3f46; }

.typing-indicator { display: flex; gap: 0.3rem; padding: 0.8rem; border-radius: 0.75rem; background: #18181b; }
.typing-indicator span { width: 0.4rem; height: 0.4rem; border-radius: 50%; background: #a1a1aa; animation: pulse-dot 1.2s infinite; }
.typing-indicator span:nth-child(2) { animation-delay: 0.2s; }
.typing-indicator span:nth-child(3) { animation-delay: 0.4s; }
@keyframes pulse-dot { 0%, 100% { opacity: 0.25; } 50% { opacity: 1; } }

.chat-input-area { padding: 0.75rem 1.25rem; border-top: 1px solid #27272a; }
.input-wrapper { display: flex; gap: 0.5rem; }
.chat-input {
    flex: 1; padding: 0.65rem 0.9rem; border-radius: 0.5rem; outline: none;
    background: #09090b; color: #fafafa; border: 1px solid #3f3f46;
}
.chat-input:focus { border-color: #10b981; }
.send-button { padding: 0 1rem; border: none; border-radius: 0.5rem; background: #10b981; color: #022c22; font-weight: 600; cursor: pointer; }
.send-button:disabled { background: #27272a; color: #71717a; cursor: not-allowed; }
.spinner { display: inline-block; animation: spin 0.9s linear infinite; }
@keyframes spin { to { transform: rotate(360deg); } }
"#;
